use std::path::PathBuf;

use thiserror::Error;

macro_rules! malformed_line {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::MalformedLine {
            line: $line,
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::MalformedLine {
            line: $line,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The graph algorithms themselves are infallible except for the closure computation, which
/// requires every edge endpoint to map onto a row of its matrix. Everything else in this enum
/// belongs to the loading layer that turns files or buffers into edge lists.
///
/// # Error Categories
///
/// ## Structural Errors
/// - [`Error::NodeOutOfRange`] - An edge endpoint lies outside `1..=total_nodes`
/// - [`Error::UnknownNode`] - An edge endpoint is not part of the supplied node universe
///
/// ## Input Errors
/// - [`Error::MalformedLine`] - A line of an edge list could not be parsed
/// - [`Error::InvalidEncoding`] - The edge list is not valid UTF-8
///
/// ## I/O and External Errors
/// - [`Error::DataUnavailable`] - The edge list file does not exist
/// - [`Error::FileError`] - Any other filesystem I/O error
/// - [`Error::Error`] - Backend failures such as a failed memory mapping
///
/// Unreachable nodes are never reported as errors. Shortest-path results carry them as
/// [`crate::graph::algorithms::Distance::Unreachable`] and traversals simply do not visit them.
///
/// # Examples
///
/// ```rust
/// use depscope::{graph::{algorithms::compute_closure, Edge}, Error};
///
/// let edges = vec![Edge::new(1, 2), Edge::new(2, 7)];
/// match compute_closure(3, &edges) {
///     Err(Error::NodeOutOfRange { node, total_nodes }) => {
///         assert_eq!(node, 7);
///         assert_eq!(total_nodes, 3);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An edge endpoint does not fit the dense `1..=total_nodes` identifier space.
    ///
    /// The closure matrix maps node `id` to row `id - 1`, so identifier `0` and anything
    /// above `total_nodes` have no row to land in. The computation stops at the first
    /// offending endpoint instead of silently dropping the edge.
    #[error("Node {node} is outside the valid range 1..={total_nodes}")]
    NodeOutOfRange {
        /// The offending node identifier
        node: u32,
        /// The size of the identifier space the matrix was built for
        total_nodes: usize,
    },

    /// An edge endpoint is not a member of the node universe used for indexing.
    ///
    /// Carries the `Debug` rendering of the offending identifier.
    #[error("Node {0} is not part of the node universe")]
    UnknownNode(String),

    /// A line of an edge list could not be parsed.
    ///
    /// Produced for tokens that are not valid identifiers or weights and, when the loader
    /// runs in strict mode, for lines with the wrong number of tokens or invalid weights.
    ///
    /// # Fields
    ///
    /// * `line` - 1-based line number within the input
    /// * `message` - Description of what was wrong with the line
    #[error("Malformed line {line}: {message}")]
    MalformedLine {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// The edge list is not valid UTF-8.
    #[error("Edge list is not valid UTF-8 - {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// The edge list could not be found.
    ///
    /// Reported before any analysis runs so callers can tell a missing dataset apart from
    /// an unreadable one.
    #[error("Edge list not found: {}", .0.display())]
    DataUnavailable(PathBuf),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations
    /// such as reading from disk or permission issues.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories or for
    /// wrapping external library errors with additional context.
    #[error("{0}")]
    Error(String),
}
