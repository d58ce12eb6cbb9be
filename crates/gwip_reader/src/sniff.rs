//! Source encoding detection.

use crate::error::ReaderResult;
use crate::plain::PlainReader;
use crate::reader::LineReader;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Leading bytes shared by every gzip member, bgzip included.
pub const GZIP_MAGIC: [u8; 3] = [0x1f, 0x8b, 0x08];

/// FLG bit indicating a gzip member carries an extra field.
#[cfg(feature = "bgzf")]
const FEXTRA: u8 = 0x04;

/// Offset of the extra-field length within a gzip member header.
#[cfg(feature = "bgzf")]
const XLEN_OFFSET: usize = 10;

/// Physical encoding of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Uncompressed delimited text.
    Plain,
    /// bgzip block-compressed gzip.
    Bgzf,
}

impl Encoding {
    /// Returns `true` for the block-compressed encoding.
    #[must_use]
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::Bgzf)
    }
}

/// Opens fresh line readers for a resolved source file.
///
/// The opener is the "open function" handed out by [`resolve`]: it binds
/// the path to the detected encoding so callers can open as many
/// independent handles as they need without re-sniffing.
#[derive(Debug, Clone)]
pub struct Opener {
    path: PathBuf,
    encoding: Encoding,
}

impl Opener {
    /// Opens a fresh reader positioned at the start of the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, or if the file is
    /// block-compressed and the `bgzf` feature is disabled.
    pub fn open(&self) -> ReaderResult<Box<dyn LineReader>> {
        match self.encoding {
            Encoding::Plain => Ok(Box::new(PlainReader::open(&self.path)?)),
            Encoding::Bgzf => open_bgzf(&self.path),
        }
    }

    /// Returns the detected encoding.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns the path this opener is bound to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolves the encoding of a source file and returns its opener.
///
/// The file is opened once for sniffing: the first three bytes decide
/// between plain text and gzip. A gzip file is then required to be in
/// the seekable bgzip block form; generic gzip streams share the same
/// leading bytes but cannot support random access and are rejected.
///
/// # Errors
///
/// - `BgzfDisabled` if the file is block-compressed and the `bgzf`
///   feature was not compiled in
/// - `NotBgzf` if the file is gzip but not block-compressed
pub fn resolve(path: &Path) -> ReaderResult<Opener> {
    let encoding = sniff(path)?;
    if encoding.is_compressed() {
        ensure_bgzf(path)?;
    }
    Ok(Opener {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Detects the encoding of a file from its first three bytes.
///
/// Files shorter than the magic are plain text; sniffing never fails on
/// short input.
///
/// # Errors
///
/// Returns an error only if the file cannot be opened or read.
pub fn sniff(path: &Path) -> ReaderResult<Encoding> {
    let mut file = File::open(path)?;
    let mut head = [0u8; GZIP_MAGIC.len()];
    let n = read_head(&mut file, &mut head)?;

    if n == head.len() && head == GZIP_MAGIC {
        Ok(Encoding::Bgzf)
    } else {
        Ok(Encoding::Plain)
    }
}

/// Reads up to `head.len()` bytes, tolerating short files.
fn read_head(file: &mut File, head: &mut [u8]) -> ReaderResult<usize> {
    let mut n = 0;
    while n < head.len() {
        let read = file.read(&mut head[n..])?;
        if read == 0 {
            break;
        }
        n += read;
    }
    Ok(n)
}

#[cfg(feature = "bgzf")]
fn open_bgzf(path: &Path) -> ReaderResult<Box<dyn LineReader>> {
    Ok(Box::new(crate::bgzf::BgzfReader::open(path)?))
}

#[cfg(not(feature = "bgzf"))]
fn open_bgzf(path: &Path) -> ReaderResult<Box<dyn LineReader>> {
    Err(crate::error::ReaderError::bgzf_disabled(path))
}

/// Checks that the leading gzip member is a bgzip block.
///
/// bgzip sets FEXTRA and records the block size in a `BC` subfield; a
/// generic gzip stream has neither, so this doubles as the seekability
/// predicate for the compressed encoding.
#[cfg(feature = "bgzf")]
fn ensure_bgzf(path: &Path) -> ReaderResult<()> {
    let mut file = File::open(path)?;
    let mut head = [0u8; 512];
    let n = read_head(&mut file, &mut head)?;

    if is_bgzf_block(&head[..n]) {
        Ok(())
    } else {
        Err(crate::error::ReaderError::not_bgzf(path))
    }
}

#[cfg(not(feature = "bgzf"))]
fn ensure_bgzf(path: &Path) -> ReaderResult<()> {
    Err(crate::error::ReaderError::bgzf_disabled(path))
}

#[cfg(feature = "bgzf")]
fn is_bgzf_block(header: &[u8]) -> bool {
    if header.len() < XLEN_OFFSET + 2 {
        return false;
    }
    if header[..GZIP_MAGIC.len()] != GZIP_MAGIC || header[3] & FEXTRA == 0 {
        return false;
    }

    let xlen = u16::from_le_bytes([header[XLEN_OFFSET], header[XLEN_OFFSET + 1]]) as usize;
    let extra = &header[XLEN_OFFSET + 2..];
    if extra.len() < xlen {
        return false;
    }

    // Walk the subfields looking for BC, the bgzip block-size marker.
    let mut i = 0;
    while i + 4 <= xlen {
        let slen = u16::from_le_bytes([extra[i + 2], extra[i + 3]]) as usize;
        if extra[i] == b'B' && extra[i + 1] == b'C' && slen == 2 {
            return true;
        }
        i += 4 + slen;
    }
    false
}
