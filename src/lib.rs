// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # depscope
//!
//! Structural analysis of directed dependency graphs: who can reach whom, the full
//! transitive closure, and weighted shortest paths.
//!
//! `depscope` takes an edge list, where an edge `(u, v)` means "`u` depends on / points to `v`",
//! and answers three families of questions:
//!
//! - **Reachability** - how many distinct nodes can reach a given node, computed by
//!   breadth-first search over the transposed graph, and which nodes are reached by the most
//!   others.
//! - **Transitive closure** - the complete "is there any path from `i` to `j`" relation,
//!   computed with Warshall's algorithm over a dense bit matrix.
//! - **Shortest paths** - minimum cumulative weight from a source to every known node,
//!   computed with Dijkstra's algorithm using a lazily-pruned priority frontier.
//!
//! ## Quick Start
//!
//! ```rust
//! use depscope::prelude::*;
//!
//! let edges = vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)];
//!
//! // Who reaches node 3?
//! let reverse = build_reverse_adjacency(&edges);
//! assert_eq!(count_reachable(&reverse, 3), 2);
//!
//! // Top two nodes by number of ancestors.
//! let ranking = rank_by_reachability(&reverse, 3, DEFAULT_TOP_K);
//! assert_eq!(ranking[0].node, 3);
//! assert_eq!(ranking[0].count, 2);
//!
//! // Full transitive closure.
//! let closure = compute_closure(3, &edges)?;
//! assert_eq!(closure.row(0), vec![false, true, true]);
//!
//! // Weighted shortest paths.
//! let weighted = vec![
//!     WeightedEdge::new(1, 2, 5.0),
//!     WeightedEdge::new(2, 3, 2.0),
//!     WeightedEdge::new(1, 3, 10.0),
//! ];
//! let paths = dijkstra(&build_weighted_adjacency(&weighted), 1);
//! assert_eq!(paths.distance(3), Some(Distance::Finite(7.0)));
//! # Ok::<(), depscope::Error>(())
//! ```
//!
//! ## Loading Edge Lists
//!
//! The [`loader`] module reads the two whitespace-separated text formats (`origin destination`
//! and `origin destination weight`) from memory-mapped files or in-memory buffers:
//!
//! ```rust,no_run
//! use depscope::{EdgeFile, LoaderConfig};
//!
//! let file = EdgeFile::from_path("tests/samples/enrollment.txt")?;
//! let edges = file.edges(&LoaderConfig::default())?;
//! let weighted = file.weighted_edges(&LoaderConfig::strict())?;
//! # Ok::<(), depscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - edge model, adjacency builders, node universes and graph traits
//! - [`graph::algorithms`] - traversal, closure and shortest-path engines
//! - [`loader`] - text edge-list parsing
//! - [`utils`] - supporting data structures
//!
//! The algorithm modules never perform I/O. Every call allocates its own working state, so
//! independent analyses over the same immutable adjacency can run concurrently without
//! locking.

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use depscope::prelude::*;
///
/// let reverse = build_reverse_adjacency(&[Edge::new(1, 2)]);
/// assert_eq!(count_reachable(&reverse, 2), 1);
/// ```
pub mod prelude;

/// Graph model, adjacency construction and graph algorithms.
///
/// # Key Types
///
/// - [`graph::Edge`] / [`graph::WeightedEdge`] - edge value types
/// - [`graph::Adjacency`] / [`graph::WeightedAdjacency`] - immutable adjacency mappings
/// - [`graph::NodeUniverse`] - explicit ordered set of node identifiers
///
/// # Main Functions
///
/// - [`graph::build_reverse_adjacency`] - transposed adjacency for ancestor queries
/// - [`graph::algorithms::count_reachable`] - BFS reachability count
/// - [`graph::algorithms::rank_by_reachability`] - top-K ranking by ancestor count
/// - [`graph::algorithms::compute_closure`] - Warshall transitive closure
/// - [`graph::algorithms::dijkstra`] - single-source shortest paths
pub mod graph;

/// Parsing of whitespace-separated edge lists.
pub mod loader;

/// Supporting data structures.
pub mod utils;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `depscope` Error type
///
/// # Examples
///
/// ```rust,no_run
/// use depscope::{EdgeFile, Error};
///
/// match EdgeFile::from_path("missing.txt") {
///     Ok(file) => println!("Loaded {} bytes", file.len()),
///     Err(Error::DataUnavailable(path)) => println!("No dataset at {}", path.display()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// Edge list source backed by a memory-mapped file or an in-memory buffer.
pub use file::EdgeFile;

/// Loader configuration.
pub use loader::LoaderConfig;
