//! Error types for source-file access.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for reader operations.
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors that can occur while resolving or reading a source file.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is block-compressed but support was not compiled in.
    #[error("{}: block-compressed input requires the `bgzf` feature", path.display())]
    BgzfDisabled {
        /// The file that could not be opened.
        path: PathBuf,
    },

    /// The file is gzip-compressed but not in the seekable bgzip form.
    #[error("{}: gzip stream is not bgzip block-compressed; recompress with bgzip", path.display())]
    NotBgzf {
        /// The file that failed the block check.
        path: PathBuf,
    },

    /// A compressed reader was asked to move backward.
    #[error("cannot skip backward in a compressed stream: at {at}, requested {requested}")]
    BackwardSkip {
        /// Current position in the logical stream.
        at: u64,
        /// The requested (earlier) position.
        requested: u64,
    },
}

impl ReaderError {
    /// Creates a missing-capability error for a block-compressed file.
    pub fn bgzf_disabled(path: &Path) -> Self {
        Self::BgzfDisabled {
            path: path.to_path_buf(),
        }
    }

    /// Creates an unsupported-compression error.
    pub fn not_bgzf(path: &Path) -> Self {
        Self::NotBgzf {
            path: path.to_path_buf(),
        }
    }
}
