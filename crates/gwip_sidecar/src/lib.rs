//! # gwip Sidecar
//!
//! The persisted index format for gwip.
//!
//! A sidecar index file lives next to the source file it describes, at
//! the source's absolute path with `.idx` appended. Its layout is:
//!
//! ```text
//! [15-byte ASCII magic "GWIP INDEX FILE"][zlib-deflated UTF-8 payload]
//! ```
//!
//! The payload is comma-separated text with a header row: the indexed
//! column names in order, then the reserved `seek` column holding the
//! byte offset of each source line. There is no checksum beyond the
//! magic and zlib's own integrity check; a corrupt payload that still
//! inflates and parses as a differently-shaped table goes undetected.
//!
//! ## Usage
//!
//! ```no_run
//! use gwip_sidecar::{read_frame, sidecar_path, write_frame, Frame};
//! use std::path::Path;
//!
//! # fn main() -> gwip_sidecar::SidecarResult<()> {
//! let path = sidecar_path(Path::new("study.impute2"))?;
//! let frame = Frame {
//!     columns: vec!["name".into(), "seek".into()],
//!     rows: vec![vec!["rs123".into(), "0".into()]],
//! };
//! write_frame(&path, &frame)?;
//! assert_eq!(read_frame(&path)?, frame);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod frame;

pub use decoder::{decode_frame, read_frame};
pub use encoder::{encode_frame, write_frame};
pub use error::{SidecarError, SidecarResult};
pub use frame::Frame;

use std::io;
use std::path::{Path, PathBuf};

/// Leading magic identifying a sidecar index file.
pub const INDEX_MAGIC: &[u8; 15] = b"GWIP INDEX FILE";

/// Derives the sidecar path for a source file.
///
/// A pure function of the input: the absolute source path with `.idx`
/// appended. No filesystem state is consulted beyond resolving the
/// current directory for relative input.
///
/// # Errors
///
/// Returns an error if the path cannot be made absolute.
pub fn sidecar_path(path: &Path) -> io::Result<PathBuf> {
    let mut name = std::path::absolute(path)?.into_os_string();
    name.push(".idx");
    Ok(PathBuf::from(name))
}
