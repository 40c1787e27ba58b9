//! Byte sources for edge-list files.
//!
//! This module provides [`EdgeFile`], the entry point for loading edge lists, together with the
//! [`Backend`] abstraction over where the bytes come from. Nothing in [`crate::graph`] depends on
//! this module; it only turns files and buffers into the edge vectors the algorithms consume.
//!
//! # Architecture
//!
//! - [`Backend`] - read-only access to a complete byte buffer
//! - [`physical::Physical`] - memory-mapped file on disk (via `memmap2`)
//! - [`memory::Memory`] - owned in-memory buffer
//! - [`EdgeFile`] - a backend plus UTF-8 decoding and the two edge formats
//!
//! # Examples
//!
//! ```rust
//! use depscope::{EdgeFile, LoaderConfig};
//!
//! let file = EdgeFile::from_mem(b"1 2 5.0\n2 3 2.0\n".to_vec());
//! let edges = file.edges(&LoaderConfig::default())?;
//! let weighted = file.weighted_edges(&LoaderConfig::strict())?;
//!
//! assert_eq!(edges.len(), 2);
//! assert_eq!(weighted[1].weight, 2.0);
//! # Ok::<(), depscope::Error>(())
//! ```

pub mod memory;
pub mod physical;

use std::path::Path;

use crate::{
    graph::{Edge, WeightedEdge},
    loader::{self, LoaderConfig},
    Result,
};
use memory::Memory;
use physical::Physical;

/// Backend for reading file data from different sources.
///
/// Implementations hand out the complete buffer; the loader decodes and scans it in one pass.
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize;
}

/// An edge-list file, loaded from disk or from memory.
#[derive(Debug)]
pub struct EdgeFile {
    backend: Box<dyn Backend>,
}

impl EdgeFile {
    /// Opens and memory-maps the edge list at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DataUnavailable`] if the file does not exist,
    /// [`crate::Error::FileError`] for other I/O failures and [`crate::Error::Error`] if the
    /// mapping fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use depscope::EdgeFile;
    ///
    /// let file = EdgeFile::from_path("tests/samples/enrollment.txt")?;
    /// println!("Loaded {} bytes", file.len());
    /// # Ok::<(), depscope::Error>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<EdgeFile> {
        let backend = Physical::new(path)?;
        Ok(EdgeFile {
            backend: Box::new(backend),
        })
    }

    /// Wraps an in-memory buffer.
    #[must_use]
    pub fn from_mem(data: Vec<u8>) -> EdgeFile {
        EdgeFile {
            backend: Box::new(Memory::new(data)),
        }
    }

    /// Returns the total size of the file in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Returns `true` if the file has a length of zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backend.len() == 0
    }

    /// Returns the raw bytes of the file.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.backend.data()
    }

    /// Returns the file content as text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEncoding`] if the content is not valid UTF-8.
    pub fn text(&self) -> Result<&str> {
        Ok(std::str::from_utf8(self.backend.data())?)
    }

    /// Parses the file as an unweighted edge list.
    ///
    /// See [`loader::parse_edges`] for the accepted format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEncoding`] for non-UTF-8 content and
    /// [`crate::Error::MalformedLine`] for lines the loader rejects.
    pub fn edges(&self, config: &LoaderConfig) -> Result<Vec<Edge<u32>>> {
        loader::parse_edges(self.text()?, config)
    }

    /// Parses the file as a weighted edge list.
    ///
    /// See [`loader::parse_weighted_edges`] for the accepted format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEncoding`] for non-UTF-8 content and
    /// [`crate::Error::MalformedLine`] for lines the loader rejects.
    pub fn weighted_edges(&self, config: &LoaderConfig) -> Result<Vec<WeightedEdge<u32>>> {
        loader::parse_weighted_edges(self.text()?, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_edge_file_from_mem() {
        let file = EdgeFile::from_mem(b"1 2 5.0\n2 3 2.0\n1 3 10.0\n".to_vec());

        assert_eq!(file.len(), 25);
        assert!(!file.is_empty());
        assert_eq!(
            file.edges(&LoaderConfig::default()).unwrap(),
            vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)]
        );
        assert_eq!(
            file.weighted_edges(&LoaderConfig::default()).unwrap()[2],
            WeightedEdge::new(1, 3, 10.0)
        );
    }

    #[test]
    fn test_edge_file_empty() {
        let file = EdgeFile::from_mem(Vec::new());
        assert!(file.is_empty());
        assert!(file.edges(&LoaderConfig::strict()).unwrap().is_empty());
    }

    #[test]
    fn test_edge_file_invalid_utf8() {
        let file = EdgeFile::from_mem(vec![b'1', b' ', 0xFF, 0xFE, b'\n']);
        assert!(matches!(file.text(), Err(Error::InvalidEncoding(_))));
        assert!(matches!(
            file.edges(&LoaderConfig::default()),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_edge_file_missing_path() {
        let result = EdgeFile::from_path("definitely/not/here/edges.txt");
        assert!(matches!(result, Err(Error::DataUnavailable(_))));
    }
}
