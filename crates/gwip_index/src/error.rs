//! Error types for the index engine.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors that can occur while building or loading an index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Source-file access error.
    #[error("source error: {0}")]
    Reader(#[from] gwip_reader::ReaderError),

    /// Sidecar format error.
    #[error("index file error: {0}")]
    Sidecar(#[from] gwip_sidecar::SidecarError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested column selection violates the caller contract.
    #[error("invalid column selection: {message}")]
    InvalidSelection {
        /// Why the selection was rejected.
        message: String,
    },

    /// A source line does not have the expected column shape.
    #[error("{}: line {line}: {message}", path.display())]
    Malformed {
        /// The source file being indexed.
        path: PathBuf,
        /// The offending line, 1-based.
        line: u64,
        /// What was wrong with the line.
        message: String,
    },

    /// An existing sidecar does not satisfy the request.
    #[error("{}: {message}; reindex the file", path.display())]
    Stale {
        /// The source file whose sidecar fell short.
        path: PathBuf,
        /// What the sidecar was missing.
        message: String,
    },
}

impl IndexError {
    /// Creates an invalid-selection error.
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection {
            message: message.into(),
        }
    }

    /// Creates a malformed-source error for a specific line.
    pub fn malformed(path: &Path, line: u64, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    /// Creates a stale-index error for missing requested columns.
    pub fn stale_columns(path: &Path) -> Self {
        Self::Stale {
            path: path.to_path_buf(),
            message: "the existing index does not cover the requested columns".to_string(),
        }
    }

    /// Creates a stale-index error for a sidecar without offsets.
    pub fn stale_missing_seek(path: &Path) -> Self {
        Self::Stale {
            path: path.to_path_buf(),
            message: "the existing index has no seek column".to_string(),
        }
    }
}
