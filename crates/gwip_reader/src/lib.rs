//! # gwip Reader
//!
//! Source-file access for gwip.
//!
//! Indexed source files come in two physical encodings: plain delimited
//! text, and bgzip block-compressed gzip (the seekable variant used for
//! large genomic text files). This crate sniffs the encoding from the
//! leading magic bytes and hands out line-oriented readers behind one
//! trait, so the indexing layer never branches on the encoding itself.
//!
//! ## Design Principles
//!
//! - Readers expose exactly two capabilities: sequential line reads and
//!   the current byte position in the logical (decompressed) stream
//! - The encoding is resolved once per call through [`resolve`]; the
//!   returned [`Opener`] opens fresh handles on demand
//! - Block-compressed support is a compile-time capability (the `bgzf`
//!   feature); without it, compressed input fails at resolve time
//!
//! ## Example
//!
//! ```no_run
//! use gwip_reader::resolve;
//! use std::path::Path;
//!
//! # fn main() -> gwip_reader::ReaderResult<()> {
//! let opener = resolve(Path::new("study.impute2"))?;
//! let mut reader = opener.open()?;
//! let mut line = String::new();
//! while reader.read_line(&mut line)? > 0 {
//!     line.clear();
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "bgzf")]
mod bgzf;
mod error;
mod plain;
mod reader;
mod sniff;

#[cfg(feature = "bgzf")]
pub use bgzf::BgzfReader;
pub use error::{ReaderError, ReaderResult};
pub use plain::PlainReader;
pub use reader::LineReader;
pub use sniff::{resolve, sniff, Encoding, Opener, GZIP_MAGIC};
