//! # gwip Index
//!
//! Byte-offset indexing for delimited genomic text files.
//!
//! Large imputation outputs are read row-by-row at arbitrary positions;
//! rescanning gigabytes of text for every lookup is not an option. This
//! crate builds a one-time index: selected columns from every line plus
//! the byte offset at which the line starts, persisted as a sidecar file
//! next to the source. Later requests load the sidecar instead of
//! rescanning, and the recorded offsets let callers seek straight to any
//! row.
//!
//! ## Entry points
//!
//! - [`get_index`] - load the existing index for a file, or build and
//!   persist one if none exists
//! - [`build_index`] - rebuild unconditionally, replacing any sidecar
//!
//! ```no_run
//! use gwip_index::get_index;
//! use std::path::Path;
//!
//! # fn main() -> gwip_index::IndexResult<()> {
//! let index = get_index(Path::new("study.impute2"), &[1], &["name"], ' ')?;
//! for row in index.rows() {
//!     println!("{} starts at byte {}", row.fields[0], row.seek);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Limitations
//!
//! A sidecar is never invalidated automatically when its source file
//! changes; rebuilding after a source update is the caller's
//! responsibility. Concurrent builders for the same file race benignly:
//! writes are atomic, the last one wins.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod error;
mod project;
mod scan;
mod table;

pub use builder::{build_index, get_index};
pub use error::{IndexError, IndexResult};
pub use project::Selection;
pub use scan::{offsets, Offsets};
pub use table::{IndexRow, IndexTable, SEEK_COLUMN};

/// Crate version, surfaced by the command-line tools.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
