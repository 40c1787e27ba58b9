//! Physical file backend for memory-mapped I/O.
//!
//! This module provides the [`Physical`] backend that implements the [`crate::file::Backend`]
//! trait for edge lists stored on disk. The file is mapped read-only into the process's address
//! space, so the loader can scan it line by line without copying it into a buffer first.

use super::Backend;
use crate::{
    Error::{DataUnavailable, Error, FileError},
    Result,
};

use memmap2::Mmap;
use std::{fs, io, path::Path};

/// A file backend that uses memory-mapped I/O.
///
/// Empty files cannot be mapped on every platform, so they are represented without a mapping
/// and expose an empty slice.
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data; `None` for an empty file
    data: Option<Mmap>,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DataUnavailable`] if the file does not exist,
    /// [`crate::Error::FileError`] if it cannot be opened for another reason, or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let path = path.as_ref();
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(DataUnavailable(path.to_path_buf()))
            }
            Err(error) => return Err(FileError(error)),
        };

        if file.metadata()?.len() == 0 {
            return Ok(Physical { data: None });
        }

        let mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(error) => return Err(Error(error.to_string())),
        };

        Ok(Physical { data: Some(mmap) })
    }
}

impl Backend for Physical {
    fn data(&self) -> &[u8] {
        self.data.as_deref().unwrap_or(&[])
    }

    fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |mmap| mmap.len())
    }
}
