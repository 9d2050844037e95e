//! Error types for the skuid toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! missing directories, archive decoding, filesystem and input validation
//! errors.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The unified error type for skuid operations.
///
/// Malformed manifest files are not represented here: the reader absorbs
/// them per record and yields a zero-valued [`Record`](crate::Record).
#[derive(Debug, Error)]
pub enum Error {
    /// The target directory of a filtered read does not exist.
    #[error("not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// An archive payload is corrupt or one of its entries is unreadable.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// A write or create failure from the filesystem.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input validation errors (bad glob, unknown category).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A concurrent extraction worker died without reporting a result.
    #[error("extraction worker failed: {message}")]
    Worker { message: String },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Archive decoding errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The payload could not be opened as an archive.
    #[error("invalid or corrupt archive #{index}: {message}")]
    Corrupt { index: usize, message: String },

    /// An entry's content could not be read.
    #[error("failed to read entry '{name}': {message}")]
    Entry { name: String, message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid glob pattern.
    #[error("invalid pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// A directory name outside the category set.
    #[error("unknown category '{value}'")]
    Category { value: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = Error::io(
            "pages/app1_Home.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error at pages/app1_Home.json: denied");
    }

    #[test]
    fn not_found_is_detected() {
        let err = Error::NotFound {
            path: PathBuf::from("missing"),
        };
        assert!(err.is_not_found());
        assert!(!Error::from(InvalidInputError::Category { value: "x".into() }).is_not_found());
    }
}
