//! Trait definitions for graph abstractions.
//!
//! The traversal and shortest-path engines are written against these traits rather than
//! against concrete adjacency types, so the same BFS runs over a reverse adjacency (ancestor
//! queries), a forward adjacency (descendant queries) or any caller-provided graph.
//!
//! # Architecture
//!
//! - [`GraphBase`] - the node type and the set of nodes that own adjacency entries
//! - [`Successors`] - unweighted forward edge traversal
//! - [`WeightedSuccessors`] - weighted forward edge traversal
//!
//! All adjacency queries return iterators rather than collections, and querying a node the
//! graph knows nothing about yields an empty iterator instead of panicking. Identifiers are
//! open-ended, so "not in the graph" is an ordinary answer.

use crate::graph::NodeKey;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{build_weighted_adjacency, GraphBase, WeightedEdge};
///
/// let graph = build_weighted_adjacency(&[WeightedEdge::new(1, 2, 1.0)]);
/// assert_eq!(graph.node_count(), 1);
/// assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![1]);
/// ```
pub trait GraphBase {
    /// The node identifier type.
    type Node: NodeKey;

    /// Returns the number of nodes that own an adjacency entry.
    fn node_count(&self) -> usize;

    /// Returns an iterator over the nodes that own an adjacency entry, in ascending order.
    ///
    /// Nodes that only ever appear as neighbors are not included.
    fn node_ids(&self) -> impl Iterator<Item = Self::Node>;
}

/// Trait for graphs that support unweighted forward traversal.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{build_forward_adjacency, Edge, Successors};
///
/// let graph = build_forward_adjacency(&[Edge::new(1, 2), Edge::new(1, 3)]);
/// assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![2, 3]);
/// assert_eq!(graph.successors(9).count(), 0);
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the neighbors reached by leaving `node`.
    ///
    /// Neighbors are yielded in insertion order and may repeat if the edge list contained
    /// duplicates. Unknown nodes have no successors.
    fn successors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node>;
}

/// Trait for graphs that support weighted forward traversal.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{build_weighted_adjacency, WeightedEdge, WeightedSuccessors};
///
/// let graph = build_weighted_adjacency(&[WeightedEdge::new(1, 2, 5.0)]);
/// assert_eq!(graph.weighted_successors(1).collect::<Vec<_>>(), vec![(2, 5.0)]);
/// ```
pub trait WeightedSuccessors: GraphBase {
    /// Returns an iterator over `(neighbor, weight)` pairs for the edges leaving `node`.
    ///
    /// Unknown nodes have no successors.
    fn weighted_successors(&self, node: Self::Node) -> impl Iterator<Item = (Self::Node, f64)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal test graph implementation for trait testing
    struct TestGraph {
        edges: Vec<(char, char, f64)>,
    }

    impl GraphBase for TestGraph {
        type Node = char;

        fn node_count(&self) -> usize {
            self.node_ids().count()
        }

        fn node_ids(&self) -> impl Iterator<Item = char> {
            let mut ids: Vec<char> = self.edges.iter().map(|(src, _, _)| *src).collect();
            ids.sort_unstable();
            ids.dedup();
            ids.into_iter()
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: char) -> impl Iterator<Item = char> {
            self.weighted_successors(node).map(|(dst, _)| dst)
        }
    }

    impl WeightedSuccessors for TestGraph {
        fn weighted_successors(&self, node: char) -> impl Iterator<Item = (char, f64)> {
            self.edges
                .iter()
                .filter(move |(src, _, _)| *src == node)
                .map(|(_, dst, w)| (*dst, *w))
        }
    }

    fn graph() -> TestGraph {
        TestGraph {
            edges: vec![('b', 'c', 1.0), ('a', 'b', 2.0), ('a', 'c', 4.0)],
        }
    }

    #[test]
    fn test_graph_base() {
        let graph = graph();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec!['a', 'b']);
    }

    #[test]
    fn test_successors() {
        let graph = graph();
        assert_eq!(graph.successors('a').collect::<Vec<_>>(), vec!['b', 'c']);
        assert!(graph.successors('c').next().is_none());
    }

    #[test]
    fn test_weighted_successors() {
        let graph = graph();
        assert_eq!(
            graph.weighted_successors('a').collect::<Vec<_>>(),
            vec![('b', 2.0), ('c', 4.0)]
        );
    }

    #[test]
    fn test_custom_graph_drives_algorithms() {
        use crate::graph::algorithms::{count_reachable, dijkstra, Distance};

        let graph = graph();
        assert_eq!(count_reachable(&graph, 'a'), 2);

        let paths = dijkstra(&graph, 'a');
        assert_eq!(paths.distance('c'), Some(Distance::Finite(3.0)));
    }
}
