//! Breadth-first traversal and reachability ranking.
//!
//! Reachability questions are answered by plain BFS. Which question gets answered depends on the
//! adjacency handed in:
//!
//! - over a **reverse** adjacency ([`build_reverse_adjacency`](crate::graph::build_reverse_adjacency)),
//!   [`count_reachable`] counts the *ancestors* of a node, i.e. how many nodes depend on it
//!   directly or transitively;
//! - over a **forward** adjacency it counts the *descendants*.
//!
//! # Ranking
//!
//! [`rank_by_reachability`] runs one BFS per node of the dense range `1..=n` and keeps the `top_k`
//! nodes with the highest counts. Ties are broken by enumeration order: the sort is stable over
//! the natural order of the range (or of the [`NodeUniverse`] for
//! [`rank_by_reachability_in`]). The total cost is O(n x (V + E)); [`par_rank_by_reachability`]
//! spreads the independent searches over the rayon pool and returns the identical result.

use std::collections::{HashSet, VecDeque};

use rayon::prelude::*;

use crate::graph::{NodeUniverse, Successors};

/// Number of entries returned by the default ranking.
pub const DEFAULT_TOP_K: usize = 2;

/// A node paired with the number of other nodes it is reachable from (or reaches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reachability<N> {
    /// The ranked node
    pub node: N,
    /// Distinct nodes reached by the search, the node itself excluded
    pub count: usize,
}

/// Breadth-first search iterator over graph nodes.
///
/// The iterator yields the start node first and then every node reachable from it exactly once,
/// exploring all nodes at distance `d` before any node at distance `d + 1`. Cycles are handled
/// through a visited set that is populated when a node is enqueued, so no node is queued twice.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<G::Node>,
    visited: HashSet<G::Node>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: G::Node) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);

        let mut queue = VecDeque::new();
        queue.push_back(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if self.visited.insert(succ) {
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from `start`.
///
/// The start node does not need to own an adjacency entry; in that case the iterator yields it
/// and stops.
///
/// # Complexity
///
/// - Time: O(V + E) where V is the number of vertices and E is the number of edges
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{algorithms::bfs, build_forward_adjacency, Edge};
///
/// let graph = build_forward_adjacency(&[
///     Edge::new(1, 2),
///     Edge::new(1, 3),
///     Edge::new(2, 4),
///     Edge::new(3, 4),
/// ]);
///
/// let order: Vec<u32> = bfs(&graph, 1).collect();
/// assert_eq!(order, vec![1, 2, 3, 4]);
/// ```
pub fn bfs<G: Successors>(graph: &G, start: G::Node) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Counts the distinct nodes reachable from `start`, excluding `start` itself.
///
/// Over a reverse adjacency this is the number of ancestors of `start`. A start node without
/// adjacency entries yields 0, and a cycle leading back to `start` does not count it.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{algorithms::count_reachable, build_reverse_adjacency, Edge};
///
/// let reverse = build_reverse_adjacency(&[Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)]);
/// assert_eq!(count_reachable(&reverse, 3), 2);
/// assert_eq!(count_reachable(&reverse, 1), 0);
/// ```
pub fn count_reachable<G: Successors>(graph: &G, start: G::Node) -> usize {
    // The iterator always yields the start node first.
    bfs(graph, start).count() - 1
}

/// Computes the reachability count of every node in `universe`, in universe order.
pub fn reachability_counts<G: Successors>(
    graph: &G,
    universe: &NodeUniverse<G::Node>,
) -> Vec<Reachability<G::Node>> {
    universe
        .iter()
        .map(|node| Reachability {
            node,
            count: count_reachable(graph, node),
        })
        .collect()
}

/// Ranks the nodes `1..=total_nodes` by reachability count and returns the best `top_k`.
///
/// Entries are ordered by descending count; equal counts keep ascending node order. Fewer than
/// `top_k` entries are returned when the range is smaller, and none when `total_nodes` is 0.
/// Nodes of the graph outside the range are never ranked, but still take part in the searches.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{
///     algorithms::{rank_by_reachability, Reachability, DEFAULT_TOP_K},
///     build_reverse_adjacency, Edge,
/// };
///
/// let reverse = build_reverse_adjacency(&[Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)]);
/// let ranking = rank_by_reachability(&reverse, 3, DEFAULT_TOP_K);
///
/// assert_eq!(
///     ranking,
///     vec![
///         Reachability { node: 3, count: 2 },
///         Reachability { node: 2, count: 1 },
///     ]
/// );
/// ```
pub fn rank_by_reachability<G>(graph: &G, total_nodes: u32, top_k: usize) -> Vec<Reachability<u32>>
where
    G: Successors<Node = u32>,
{
    rank_by_reachability_in(graph, &NodeUniverse::dense(total_nodes), top_k)
}

/// Ranks the nodes of `universe` by reachability count and returns the best `top_k`.
///
/// The enumeration order of `universe` breaks ties.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{
///     algorithms::rank_by_reachability_in, build_reverse_adjacency, Edge, NodeUniverse,
/// };
///
/// let edges = vec![Edge::new("intro", "calculus"), Edge::new("calculus", "analysis")];
/// let reverse = build_reverse_adjacency(&edges);
/// let universe = NodeUniverse::from_edges(&edges);
///
/// let ranking = rank_by_reachability_in(&reverse, &universe, 1);
/// assert_eq!(ranking[0].node, "analysis");
/// assert_eq!(ranking[0].count, 2);
/// ```
pub fn rank_by_reachability_in<G: Successors>(
    graph: &G,
    universe: &NodeUniverse<G::Node>,
    top_k: usize,
) -> Vec<Reachability<G::Node>> {
    let ranking = select_top(reachability_counts(graph, universe), top_k);
    log::debug!(
        "ranked {} nodes by reachability, kept {}",
        universe.len(),
        ranking.len()
    );
    ranking
}

/// Parallel version of [`rank_by_reachability_in`].
///
/// Every per-node search runs on the rayon pool with its own visited set and queue. The counts
/// are collected back in universe order before the stable sort, so the output is identical to
/// the sequential ranking.
pub fn par_rank_by_reachability<G>(
    graph: &G,
    universe: &NodeUniverse<G::Node>,
    top_k: usize,
) -> Vec<Reachability<G::Node>>
where
    G: Successors + Sync,
{
    let counts: Vec<Reachability<G::Node>> = universe
        .as_slice()
        .par_iter()
        .map(|&node| Reachability {
            node,
            count: count_reachable(graph, node),
        })
        .collect();

    let ranking = select_top(counts, top_k);
    log::debug!(
        "ranked {} nodes by reachability in parallel, kept {}",
        universe.len(),
        ranking.len()
    );
    ranking
}

fn select_top<N>(mut counts: Vec<Reachability<N>>, top_k: usize) -> Vec<Reachability<N>> {
    // sort_by is stable: equal counts stay in enumeration order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_k);
    counts
}
