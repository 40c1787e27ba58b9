//! # depscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the depscope library. Import this module to get quick access to edge types, adjacency
//! builders and the three analysis engines.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all depscope operations
pub use crate::Error;

/// The result type used throughout depscope
pub use crate::Result;

// ================================================================================================
// Loading
// ================================================================================================

/// Edge-list file backed by a memory map or an in-memory buffer
pub use crate::EdgeFile;

/// Loader strictness settings
pub use crate::LoaderConfig;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Edge value types
pub use crate::graph::{Edge, WeightedEdge};

/// Adjacency mappings and their builders
pub use crate::graph::{
    build_forward_adjacency, build_reverse_adjacency, build_weighted_adjacency, Adjacency,
    AdjacencyBuilder, WeightedAdjacency, WeightedAdjacencyBuilder,
};

/// Node identifiers and explicit node sets
pub use crate::graph::{NodeIndex, NodeKey, NodeUniverse};

/// Traits the algorithms are generic over
pub use crate::graph::{GraphBase, Successors, WeightedSuccessors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Reachability counting and ranking
pub use crate::graph::algorithms::{
    bfs, count_reachable, par_rank_by_reachability, rank_by_reachability,
    rank_by_reachability_in, reachability_counts, Reachability, DEFAULT_TOP_K,
};

/// Transitive closure
pub use crate::graph::algorithms::{compute_closure, compute_closure_in, ClosureMatrix};

/// Shortest paths
pub use crate::graph::algorithms::{dijkstra, Distance, ShortestPaths};
