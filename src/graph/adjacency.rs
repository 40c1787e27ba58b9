//! Adjacency mappings and their builders.
//!
//! This module turns edge lists into the read-only adjacency mappings consumed by the
//! traversal and shortest-path engines:
//!
//! - [`build_reverse_adjacency`] - `destination -> [origins]`, the transposed graph. A forward
//!   traversal over it answers "who can reach me".
//! - [`build_forward_adjacency`] - `origin -> [destinations]`, the graph as written.
//! - [`build_weighted_adjacency`] - `origin -> [(destination, weight)]`, Dijkstra's input.
//!
//! # Construction Model
//!
//! Accumulation happens inside an [`AdjacencyBuilder`] / [`WeightedAdjacencyBuilder`] that owns
//! its map exclusively. [`AdjacencyBuilder::build`] consumes the builder and hands back an
//! immutable [`Adjacency`], so two mappings can never alias each other's lists.
//!
//! Only nodes that receive at least one entry become keys. For the reverse mapping this means a
//! node with no incoming edges has no key at all; lookups for it return an empty slice.
//!
//! Mappings are backed by a `BTreeMap`, so key iteration is in ascending order and fully
//! deterministic. Each list preserves edge-list insertion order, duplicates included.
//!
//! # Examples
//!
//! ```rust
//! use depscope::graph::{build_reverse_adjacency, Edge};
//!
//! let edges = vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)];
//! let reverse = build_reverse_adjacency(&edges);
//!
//! assert_eq!(reverse.neighbors(3), &[2, 1]);
//! assert_eq!(reverse.neighbors(2), &[1]);
//! assert!(!reverse.contains(1)); // node 1 has no incoming edges
//! ```

use std::collections::BTreeMap;

use crate::graph::{
    Edge, GraphBase, NodeKey, NodeUniverse, Successors, WeightedEdge, WeightedSuccessors,
};

/// An immutable unweighted adjacency mapping: node -> ordered list of neighbor nodes.
///
/// Produced by [`AdjacencyBuilder::build`], [`build_reverse_adjacency`] or
/// [`build_forward_adjacency`]. Whether neighbors are successors or predecessors in the
/// original graph depends on which builder produced the mapping; traversal always follows the
/// lists as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency<N: NodeKey = u32> {
    /// Neighbor lists keyed by node
    lists: BTreeMap<N, Vec<N>>,
    /// Total number of stored entries across all lists
    edge_count: usize,
}

impl<N: NodeKey> Default for Adjacency<N> {
    fn default() -> Self {
        Adjacency {
            lists: BTreeMap::new(),
            edge_count: 0,
        }
    }
}

impl<N: NodeKey> Adjacency<N> {
    /// Returns the neighbor list of `node`, or an empty slice if it has no entry.
    #[must_use]
    pub fn neighbors(&self, node: N) -> &[N] {
        self.lists.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `node` owns a neighbor list.
    #[must_use]
    pub fn contains(&self, node: N) -> bool {
        self.lists.contains_key(&node)
    }

    /// Returns the number of nodes that own a neighbor list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the total number of stored entries, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over `(node, neighbors)` in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (N, &[N])> + '_ {
        self.lists.iter().map(|(&node, list)| (node, list.as_slice()))
    }

    /// Returns every node mentioned by the mapping, keys and neighbors alike, in ascending
    /// order.
    #[must_use]
    pub fn universe(&self) -> NodeUniverse<N> {
        let mut nodes: Vec<N> = self
            .lists
            .iter()
            .flat_map(|(&node, list)| std::iter::once(node).chain(list.iter().copied()))
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        NodeUniverse::from_keys(nodes)
    }
}

impl<N: NodeKey> GraphBase for Adjacency<N> {
    type Node = N;

    fn node_count(&self) -> usize {
        self.lists.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = N> {
        self.lists.keys().copied()
    }
}

impl<N: NodeKey> Successors for Adjacency<N> {
    fn successors(&self, node: N) -> impl Iterator<Item = N> {
        self.neighbors(node).iter().copied()
    }
}

/// Accumulates an [`Adjacency`] one entry at a time.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::AdjacencyBuilder;
///
/// let mut builder = AdjacencyBuilder::new();
/// builder.push(1, 2);
/// builder.push(1, 3);
/// let adjacency = builder.build();
///
/// assert_eq!(adjacency.neighbors(1), &[2, 3]);
/// ```
#[derive(Debug)]
pub struct AdjacencyBuilder<N: NodeKey = u32> {
    lists: BTreeMap<N, Vec<N>>,
    edge_count: usize,
}

impl<N: NodeKey> Default for AdjacencyBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> AdjacencyBuilder<N> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        AdjacencyBuilder {
            lists: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Appends `neighbor` to the list keyed by `node`, creating the list on first use.
    pub fn push(&mut self, node: N, neighbor: N) -> &mut Self {
        self.lists.entry(node).or_default().push(neighbor);
        self.edge_count += 1;
        self
    }

    /// Finishes construction and returns the immutable mapping.
    #[must_use]
    pub fn build(self) -> Adjacency<N> {
        Adjacency {
            lists: self.lists,
            edge_count: self.edge_count,
        }
    }
}

/// An immutable weighted adjacency mapping: node -> ordered list of `(neighbor, weight)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedAdjacency<N: NodeKey = u32> {
    /// Weighted neighbor lists keyed by origin
    lists: BTreeMap<N, Vec<(N, f64)>>,
    /// Total number of stored entries across all lists
    edge_count: usize,
}

impl<N: NodeKey> Default for WeightedAdjacency<N> {
    fn default() -> Self {
        WeightedAdjacency {
            lists: BTreeMap::new(),
            edge_count: 0,
        }
    }
}

impl<N: NodeKey> WeightedAdjacency<N> {
    /// Returns the weighted neighbor list of `node`, or an empty slice if it has no entry.
    #[must_use]
    pub fn neighbors(&self, node: N) -> &[(N, f64)] {
        self.lists.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `node` owns a neighbor list.
    #[must_use]
    pub fn contains(&self, node: N) -> bool {
        self.lists.contains_key(&node)
    }

    /// Returns the number of nodes that own a neighbor list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the total number of stored entries, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over `(node, weighted neighbors)` in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (N, &[(N, f64)])> + '_ {
        self.lists.iter().map(|(&node, list)| (node, list.as_slice()))
    }

    /// Returns every node mentioned by the mapping in ascending order.
    #[must_use]
    pub fn universe(&self) -> NodeUniverse<N> {
        let mut nodes: Vec<N> = self
            .lists
            .iter()
            .flat_map(|(&node, list)| std::iter::once(node).chain(list.iter().map(|&(n, _)| n)))
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        NodeUniverse::from_keys(nodes)
    }
}

impl<N: NodeKey> GraphBase for WeightedAdjacency<N> {
    type Node = N;

    fn node_count(&self) -> usize {
        self.lists.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = N> {
        self.lists.keys().copied()
    }
}

impl<N: NodeKey> WeightedSuccessors for WeightedAdjacency<N> {
    fn weighted_successors(&self, node: N) -> impl Iterator<Item = (N, f64)> {
        self.neighbors(node).iter().copied()
    }
}

/// Accumulates a [`WeightedAdjacency`] one entry at a time.
#[derive(Debug)]
pub struct WeightedAdjacencyBuilder<N: NodeKey = u32> {
    lists: BTreeMap<N, Vec<(N, f64)>>,
    edge_count: usize,
}

impl<N: NodeKey> Default for WeightedAdjacencyBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> WeightedAdjacencyBuilder<N> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        WeightedAdjacencyBuilder {
            lists: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Appends `(neighbor, weight)` to the list keyed by `node`.
    pub fn push(&mut self, node: N, neighbor: N, weight: f64) -> &mut Self {
        self.lists.entry(node).or_default().push((neighbor, weight));
        self.edge_count += 1;
        self
    }

    /// Finishes construction and returns the immutable mapping.
    #[must_use]
    pub fn build(self) -> WeightedAdjacency<N> {
        WeightedAdjacency {
            lists: self.lists,
            edge_count: self.edge_count,
        }
    }
}

/// Builds the transposed adjacency: for every edge `(u, v)`, `u` is appended to the list of `v`.
///
/// A BFS over the result starting at `v` visits exactly the ancestors of `v` in the original
/// graph. Never fails; identifiers are taken as they come.
#[must_use]
pub fn build_reverse_adjacency<N: NodeKey>(edges: &[Edge<N>]) -> Adjacency<N> {
    let mut builder = AdjacencyBuilder::new();
    for edge in edges {
        builder.push(edge.destination, edge.origin);
    }
    let adjacency = builder.build();
    log::debug!(
        "built reverse adjacency: {} keyed nodes, {} entries",
        adjacency.len(),
        adjacency.edge_count()
    );
    adjacency
}

/// Builds the forward adjacency: for every edge `(u, v)`, `v` is appended to the list of `u`.
///
/// A BFS over the result starting at `u` visits exactly the descendants of `u`.
#[must_use]
pub fn build_forward_adjacency<N: NodeKey>(edges: &[Edge<N>]) -> Adjacency<N> {
    let mut builder = AdjacencyBuilder::new();
    for edge in edges {
        builder.push(edge.origin, edge.destination);
    }
    builder.build()
}

/// Builds the weighted forward adjacency: for every edge `(u, v, w)`, `(v, w)` is appended to
/// the list of `u`.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{build_weighted_adjacency, WeightedEdge};
///
/// let graph = build_weighted_adjacency(&[
///     WeightedEdge::new(1, 2, 5.0),
///     WeightedEdge::new(1, 3, 10.0),
/// ]);
/// assert_eq!(graph.neighbors(1), &[(2, 5.0), (3, 10.0)]);
/// assert!(graph.neighbors(2).is_empty());
/// ```
#[must_use]
pub fn build_weighted_adjacency<N: NodeKey>(edges: &[WeightedEdge<N>]) -> WeightedAdjacency<N> {
    let mut builder = WeightedAdjacencyBuilder::new();
    for edge in edges {
        builder.push(edge.origin, edge.destination, edge.weight);
    }
    let adjacency = builder.build();
    log::debug!(
        "built weighted adjacency: {} keyed nodes, {} entries",
        adjacency.len(),
        adjacency.edge_count()
    );
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{diamond_edges, triangle_edges, triangle_weighted_edges};

    #[test]
    fn test_reverse_adjacency_keys_by_destination() {
        let reverse = build_reverse_adjacency(&triangle_edges());

        assert_eq!(reverse.len(), 2);
        assert_eq!(reverse.neighbors(2), &[1]);
        assert_eq!(reverse.neighbors(3), &[2, 1]);
        assert!(!reverse.contains(1));
        assert!(reverse.neighbors(1).is_empty());
        assert_eq!(reverse.edge_count(), 3);
    }

    #[test]
    fn test_forward_adjacency_keys_by_origin() {
        let forward = build_forward_adjacency(&diamond_edges());

        assert_eq!(forward.neighbors(1), &[2, 3]);
        assert_eq!(forward.neighbors(2), &[4]);
        assert_eq!(forward.neighbors(3), &[4]);
        assert!(!forward.contains(4));
    }

    #[test]
    fn test_adjacency_keeps_duplicates_in_order() {
        let edges = vec![Edge::new(1, 2), Edge::new(3, 2), Edge::new(1, 2)];
        let reverse = build_reverse_adjacency(&edges);
        assert_eq!(reverse.neighbors(2), &[1, 3, 1]);
        assert_eq!(reverse.edge_count(), 3);
    }

    #[test]
    fn test_adjacency_iteration_is_ascending() {
        let edges = vec![Edge::new(1, 9), Edge::new(1, 4), Edge::new(1, 6)];
        let reverse = build_reverse_adjacency(&edges);
        let keys: Vec<u32> = reverse.iter().map(|(node, _)| node).collect();
        assert_eq!(keys, vec![4, 6, 9]);
    }

    #[test]
    fn test_adjacency_empty_input() {
        let reverse = build_reverse_adjacency::<u32>(&[]);
        assert!(reverse.is_empty());
        assert_eq!(reverse.edge_count(), 0);
        assert!(reverse.universe().is_empty());

        let weighted = build_weighted_adjacency::<u32>(&[]);
        assert!(weighted.is_empty());
    }

    #[test]
    fn test_adjacency_out_of_range_ids_are_kept() {
        let reverse = build_reverse_adjacency(&[Edge::new(0, 1000)]);
        assert_eq!(reverse.neighbors(1000), &[0]);
    }

    #[test]
    fn test_adjacency_universe_includes_neighbors() {
        let reverse = build_reverse_adjacency(&diamond_edges());
        assert_eq!(reverse.universe().as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_weighted_adjacency() {
        let weighted = build_weighted_adjacency(&triangle_weighted_edges());

        assert_eq!(weighted.len(), 2);
        assert_eq!(weighted.neighbors(1), &[(2, 5.0), (3, 10.0)]);
        assert_eq!(weighted.neighbors(2), &[(3, 2.0)]);
        assert!(weighted.neighbors(3).is_empty());
        assert_eq!(weighted.edge_count(), 3);
        assert_eq!(weighted.universe().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_builders_are_independent() {
        let mut first = AdjacencyBuilder::new();
        first.push(1, 2);
        let mut second = AdjacencyBuilder::new();
        second.push(1, 3).push(1, 4);

        let first = first.build();
        let second = second.build();
        assert_eq!(first.neighbors(1), &[2]);
        assert_eq!(second.neighbors(1), &[3, 4]);
    }

    #[test]
    fn test_weighted_builder_chaining() {
        let mut builder = WeightedAdjacencyBuilder::new();
        builder.push("a", "b", 1.5).push("a", "c", 0.5);
        let graph = builder.build();
        assert_eq!(graph.neighbors("a"), &[("b", 1.5), ("c", 0.5)]);
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec!["a"]);
    }
}
