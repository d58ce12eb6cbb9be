//! Error types for the sidecar format.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for sidecar operations.
pub type SidecarResult<T> = Result<T, SidecarError>;

/// Errors that can occur while reading or writing a sidecar index.
#[derive(Debug, Error)]
pub enum SidecarError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with the index magic.
    #[error("{}: not a valid index file", path.display())]
    BadMagic {
        /// The file that failed the magic check.
        path: PathBuf,
    },

    /// The payload failed to decompress or parse.
    #[error("{}: corrupt index file ({message}); reindex the source file", path.display())]
    Corrupt {
        /// The file with the unusable payload.
        path: PathBuf,
        /// What went wrong while decoding.
        message: String,
    },

    /// The payload could not be rendered.
    #[error("index encoding failed: {message}")]
    Encode {
        /// What went wrong while encoding.
        message: String,
    },
}

impl SidecarError {
    /// Creates a bad-magic error.
    pub fn bad_magic(path: &Path) -> Self {
        Self::BadMagic {
            path: path.to_path_buf(),
        }
    }

    /// Creates a corrupt-payload error.
    pub fn corrupt(path: &Path, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Creates an encoding error.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }
}
