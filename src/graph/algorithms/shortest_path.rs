//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! [`dijkstra`] computes the cheapest cumulative weight from a source node to every node of a
//! weighted graph. Edge weights must be non-negative; this is a precondition that is not
//! checked here (the strict loader rejects negative weights at the input boundary).
//!
//! # Frontier
//!
//! The frontier is a [`BinaryHeap`] of `(distance, node)` entries with the ordering reversed,
//! which turns the standard max-heap into a min-heap. Distances are compared through
//! [`OrderedFloat`] so `f64` gets a total order. Instead of a decrease-key operation, an
//! improved distance pushes a fresh entry and leaves the old one in the heap; when an entry is
//! popped whose distance exceeds the best one recorded for its node, it is stale and dropped
//! (lazy deletion).
//!
//! # Result
//!
//! The returned [`ShortestPaths`] contains every node that owns an adjacency entry, every node
//! reached through relaxation and the source itself. Nodes that could not be reached are kept
//! and reported as [`Distance::Unreachable`] rather than omitted or given a finite sentinel.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap, HashMap},
    fmt,
};

use ordered_float::OrderedFloat;

use crate::graph::{NodeKey, WeightedSuccessors};

/// The shortest known distance to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Cheapest cumulative weight of any path from the source
    Finite(f64),
    /// No path from the source exists
    Unreachable,
}

impl Distance {
    fn from_raw(value: f64) -> Self {
        if value.is_finite() {
            Distance::Finite(value)
        } else {
            Distance::Unreachable
        }
    }

    /// Returns the finite distance, or `None` when unreachable.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    /// Returns `true` for a finite distance.
    #[must_use]
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the distance as an `f64`, using positive infinity for unreachable nodes.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.value().unwrap_or(f64::INFINITY)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value:?}"),
            Distance::Unreachable => f.write_str("Infinity"),
        }
    }
}

/// Distances (and shortest-path predecessors) from a single source node.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N: NodeKey> {
    source: N,
    distances: BTreeMap<N, f64>,
    predecessors: HashMap<N, N>,
}

impl<N: NodeKey> ShortestPaths<N> {
    /// Returns the source node of the search.
    #[must_use]
    pub fn source(&self) -> N {
        self.source
    }

    /// Returns the distance recorded for `node`, or `None` if the node is not part of the
    /// result at all.
    #[must_use]
    pub fn distance(&self, node: N) -> Option<Distance> {
        self.distances.get(&node).map(|&raw| Distance::from_raw(raw))
    }

    /// Returns every `(node, distance)` pair in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (N, Distance)> + '_ {
        self.distances
            .iter()
            .map(|(&node, &raw)| (node, Distance::from_raw(raw)))
    }

    /// Returns the `(node, distance)` pairs with a finite distance, in ascending node order.
    pub fn reachable(&self) -> impl Iterator<Item = (N, f64)> + '_ {
        self.distances
            .iter()
            .filter(|(_, raw)| raw.is_finite())
            .map(|(&node, &raw)| (node, raw))
    }

    /// Returns the number of nodes in the result, unreachable ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if the result holds no nodes.
    ///
    /// A result produced by [`dijkstra`] always contains at least its source.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Reconstructs a cheapest path from the source to `target`, both ends included.
    ///
    /// Returns `None` if `target` is unreachable or unknown. The path to the source is the
    /// source alone.
    #[must_use]
    pub fn path_to(&self, target: N) -> Option<Vec<N>> {
        if !self.distance(target)?.is_reachable() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.predecessors.get(&current)?;
            path.push(current);
            if path.len() > self.predecessors.len() + 1 {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first.
struct FrontierEntry<N> {
    distance: f64,
    node: N,
}

impl<N: Ord> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for FrontierEntry<N> {}

impl<N: Ord> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: smaller distance = higher priority, then smaller node
        OrderedFloat(other.distance)
            .cmp(&OrderedFloat(self.distance))
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Computes shortest distances from `source` to every node of `graph`.
///
/// Every node owning an adjacency entry starts at infinity and the source at zero, even when
/// the source has no adjacency entry of its own. Relaxation only happens on a strictly smaller
/// distance, so duplicate edges and zero-weight cycles never loop.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E) for the distance map and the frontier
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{
///     algorithms::{dijkstra, Distance},
///     build_weighted_adjacency, WeightedEdge,
/// };
///
/// let graph = build_weighted_adjacency(&[
///     WeightedEdge::new(1, 2, 5.0),
///     WeightedEdge::new(2, 3, 2.0),
///     WeightedEdge::new(1, 3, 10.0),
///     WeightedEdge::new(4, 1, 1.0),
/// ]);
/// let paths = dijkstra(&graph, 1);
///
/// assert_eq!(paths.distance(1), Some(Distance::Finite(0.0)));
/// assert_eq!(paths.distance(2), Some(Distance::Finite(5.0)));
/// assert_eq!(paths.distance(3), Some(Distance::Finite(7.0)));
/// assert_eq!(paths.distance(4), Some(Distance::Unreachable));
/// assert_eq!(paths.distance(9), None);
/// ```
pub fn dijkstra<G: WeightedSuccessors>(graph: &G, source: G::Node) -> ShortestPaths<G::Node> {
    let mut distances: BTreeMap<G::Node, f64> =
        graph.node_ids().map(|node| (node, f64::INFINITY)).collect();
    distances.insert(source, 0.0);

    let mut predecessors = HashMap::new();
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        distance: 0.0,
        node: source,
    });

    let mut stale = 0usize;
    while let Some(FrontierEntry { distance, node }) = frontier.pop() {
        let best = distances.get(&node).copied().unwrap_or(f64::INFINITY);
        if distance > best {
            stale += 1;
            continue;
        }

        for (next, weight) in graph.weighted_successors(node) {
            let candidate = distance + weight;
            let current = distances.get(&next).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                distances.insert(next, candidate);
                predecessors.insert(next, node);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    log::debug!(
        "dijkstra from {:?}: {} nodes, {} stale frontier entries skipped",
        source,
        distances.len(),
        stale
    );

    ShortestPaths {
        source,
        distances,
        predecessors,
    }
}
