//! Line reader trait definition.

use crate::error::ReaderResult;

/// A line-oriented reader over an indexed source file.
///
/// Implementations expose the two capabilities the indexing layer needs:
/// sequential line reads and the current byte position in the logical
/// stream. For plain files the logical stream is the file itself; for
/// block-compressed files it is the decompressed stream.
///
/// # Invariants
///
/// - `position` starts at 0 and advances by exactly the number of bytes
///   each `read_line` consumes, terminator included
/// - Plain readers may reposition anywhere with `skip_to`; readers backed
///   by a compressed stream are forward-only
///
/// # Implementors
///
/// - [`super::PlainReader`] - plain text files
/// - [`super::BgzfReader`] - bgzip block-compressed files (feature `bgzf`)
pub trait LineReader {
    /// Reads the next line, terminator included, appending to `buf`.
    ///
    /// Returns the number of bytes consumed, or 0 at end of stream.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decompression fails.
    fn read_line(&mut self, buf: &mut String) -> ReaderResult<usize>;

    /// Returns the current byte position in the logical stream.
    ///
    /// This is the offset at which the next `read_line` will start.
    fn position(&self) -> u64;

    /// Repositions the reader so the next read starts at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seek fails, or if a compressed reader is
    /// asked to move backward.
    fn skip_to(&mut self, offset: u64) -> ReaderResult<()>;
}
