//! Directed graph model and analyses.
//!
//! This module holds everything needed to go from an edge list to structural answers about a
//! directed graph. Graphs here are small, immutable and built once per query: the caller
//! supplies edges, a builder turns them into an adjacency mapping, and an algorithm returns a
//! fresh result value.
//!
//! # Architecture
//!
//! - [`Edge`] / [`WeightedEdge`] - edge value types, generic over the node key
//! - [`NodeKey`] - blanket trait describing acceptable node identifiers
//! - [`NodeUniverse`] / [`NodeIndex`] - an explicit node set with dense indices
//! - [`Adjacency`] / [`WeightedAdjacency`] - read-only adjacency mappings and their builders
//! - [`GraphBase`], [`Successors`], [`WeightedSuccessors`] - the traits algorithms consume
//! - [`algorithms`] - reachability, transitive closure and shortest paths
//!
//! # Examples
//!
//! ```rust
//! use depscope::graph::{
//!     algorithms::{count_reachable, rank_by_reachability},
//!     build_forward_adjacency, build_reverse_adjacency, Edge,
//! };
//!
//! let edges = vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)];
//!
//! // Ancestors: who reaches node 3?
//! let reverse = build_reverse_adjacency(&edges);
//! assert_eq!(count_reachable(&reverse, 3), 2);
//!
//! // Descendants: whom does node 1 reach?
//! let forward = build_forward_adjacency(&edges);
//! assert_eq!(count_reachable(&forward, 1), 2);
//!
//! let ranking = rank_by_reachability(&reverse, 3, 2);
//! assert_eq!(ranking[0].node, 3);
//! assert_eq!(ranking[1].node, 2);
//! ```

mod adjacency;
mod edge;
mod node;
mod traits;
mod universe;

pub mod algorithms;

pub use adjacency::{
    build_forward_adjacency, build_reverse_adjacency, build_weighted_adjacency, Adjacency,
    AdjacencyBuilder, WeightedAdjacency, WeightedAdjacencyBuilder,
};
pub use edge::{Edge, WeightedEdge};
pub use node::{NodeIndex, NodeKey};
pub use traits::{GraphBase, Successors, WeightedSuccessors};
pub use universe::NodeUniverse;
