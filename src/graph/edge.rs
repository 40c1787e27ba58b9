//! Edge value types.
//!
//! An [`Edge`] is an ordered pair `(origin, destination)` read as "origin depends on / points
//! to destination". A [`WeightedEdge`] adds a non-negative `f64` weight. Neither type imposes
//! any restriction on self-loops or duplicates; how duplicates behave is decided by the
//! consumer (adjacency lists keep them, BFS and Dijkstra are unaffected by them).

use std::fmt;

/// A directed, unweighted edge.
///
/// The node type defaults to `u32`, the canonical identifier of the dense `1..=n` datasets.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::Edge;
///
/// let edge = Edge::new(1, 2);
/// assert_eq!(edge.origin, 1);
/// assert_eq!(edge.destination, 2);
/// assert_eq!(edge.reversed(), Edge::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N = u32> {
    /// The node the edge leaves
    pub origin: N,
    /// The node the edge enters
    pub destination: N,
}

impl<N> Edge<N> {
    /// Creates a new edge from `origin` to `destination`.
    #[must_use]
    pub const fn new(origin: N, destination: N) -> Self {
        Edge {
            origin,
            destination,
        }
    }

    /// Returns the same edge with its direction flipped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Edge {
            origin: self.destination,
            destination: self.origin,
        }
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from((origin, destination): (N, N)) -> Self {
        Edge::new(origin, destination)
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// A directed edge carrying a weight.
///
/// Weights are expected to be non-negative. This is a precondition of
/// [`dijkstra`](crate::graph::algorithms::dijkstra) that the type itself does not enforce; the
/// strict loader mode rejects negative and non-finite weights at the input boundary.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{Edge, WeightedEdge};
///
/// let edge = WeightedEdge::new(1, 3, 10.0);
/// assert_eq!(edge.weight, 10.0);
/// assert_eq!(edge.edge(), Edge::new(1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge<N = u32> {
    /// The node the edge leaves
    pub origin: N,
    /// The node the edge enters
    pub destination: N,
    /// The cost of traversing the edge
    pub weight: f64,
}

impl<N> WeightedEdge<N> {
    /// Creates a new weighted edge.
    #[must_use]
    pub const fn new(origin: N, destination: N, weight: f64) -> Self {
        WeightedEdge {
            origin,
            destination,
            weight,
        }
    }
}

impl<N: Copy> WeightedEdge<N> {
    /// Returns the unweighted edge with the same endpoints.
    #[must_use]
    pub fn edge(&self) -> Edge<N> {
        Edge::new(self.origin, self.destination)
    }
}

impl<N> From<(N, N, f64)> for WeightedEdge<N> {
    fn from((origin, destination, weight): (N, N, f64)) -> Self {
        WeightedEdge::new(origin, destination, weight)
    }
}

impl<N: fmt::Display> fmt::Display for WeightedEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_from_tuple() {
        let edge: Edge = (4, 9).into();
        assert_eq!(edge, Edge::new(4, 9));
    }

    #[test]
    fn test_edge_reversed() {
        assert_eq!(Edge::new(1, 2).reversed(), Edge::new(2, 1));
        assert_eq!(Edge::new(5, 5).reversed(), Edge::new(5, 5));
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(1, 2).to_string(), "1 -> 2");
        assert_eq!(WeightedEdge::new(1, 2, 2.5).to_string(), "1 -> 2 (2.5)");
    }

    #[test]
    fn test_edge_generic_keys() {
        let edge = Edge::new("calculus", "algebra");
        assert_eq!(edge.reversed().origin, "algebra");
    }

    #[test]
    fn test_weighted_edge_projection() {
        let weighted: WeightedEdge = (2, 3, 0.0).into();
        assert_eq!(weighted.edge(), Edge::new(2, 3));
        assert_eq!(weighted.weight, 0.0);
    }
}
