//! Graph algorithms over the adjacency mappings in [`crate::graph`].
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] - Breadth-first search iterator
//! - [`count_reachable`] - Number of nodes reached from a start, excluding the start
//! - [`rank_by_reachability`] - Top-K nodes of the dense range `1..=n` by reachability
//! - [`rank_by_reachability_in`] / [`par_rank_by_reachability`] - Ranking over a [`NodeUniverse`](crate::graph::NodeUniverse)
//! - [`reachability_counts`] - Unsorted per-node counts
//!
//! ## Transitive Closure
//!
//! - [`compute_closure`] - Warshall's algorithm over the dense range `1..=n`
//! - [`compute_closure_in`] - The same over an explicit node universe
//! - [`ClosureMatrix`] - Bit-packed result matrix
//!
//! ## Shortest Paths
//!
//! - [`dijkstra`] - Single-source shortest paths with lazy deletion
//! - [`ShortestPaths`] / [`Distance`] - Distance map with path reconstruction
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS | O(V + E) | Ancestor or descendant counts for one node |
//! | Ranking | O(V x (V + E)) | Most depended-upon nodes |
//! | Warshall | O(V^3 / 64) | All-pairs reachability for small dense graphs |
//! | Dijkstra | O((V + E) log V) | Cheapest routes from one source |
//!
//! # Examples
//!
//! ```rust
//! use depscope::graph::{
//!     algorithms::{compute_closure, dijkstra, Distance},
//!     build_weighted_adjacency, Edge, WeightedEdge,
//! };
//!
//! let closure = compute_closure(3, &[Edge::new(1, 2), Edge::new(2, 3)])?;
//! assert!(closure.reaches(0, 2));
//! assert!(!closure.reaches(2, 0));
//!
//! let graph = build_weighted_adjacency(&[
//!     WeightedEdge::new(1, 2, 5.0),
//!     WeightedEdge::new(2, 3, 2.0),
//!     WeightedEdge::new(1, 3, 10.0),
//! ]);
//! let paths = dijkstra(&graph, 1);
//! assert_eq!(paths.distance(3), Some(Distance::Finite(7.0)));
//! assert_eq!(paths.path_to(3), Some(vec![1, 2, 3]));
//! # Ok::<(), depscope::Error>(())
//! ```

mod closure;
mod shortest_path;
mod traversal;

pub use closure::{compute_closure, compute_closure_in, ClosureMatrix};
pub use shortest_path::{dijkstra, Distance, ShortestPaths};
pub use traversal::{
    bfs, count_reachable, par_rank_by_reachability, rank_by_reachability,
    rank_by_reachability_in, reachability_counts, BfsIterator, Reachability, DEFAULT_TOP_K,
};
