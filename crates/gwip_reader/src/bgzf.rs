//! bgzip block-compressed reader.

use crate::error::{ReaderError, ReaderResult};
use crate::reader::LineReader;
use std::fs::File;
use std::io::{BufRead, Read};
use std::path::Path;

/// A line reader over a bgzip block-compressed file.
///
/// Positions are offsets into the decompressed logical stream, not the
/// compressed file. The reader is forward-only: `skip_to` decompresses
/// and discards up to the requested offset and refuses to move backward.
pub struct BgzfReader {
    inner: noodles_bgzf::Reader<File>,
    pos: u64,
}

impl BgzfReader {
    /// Opens a block-compressed file positioned at the start of the
    /// logical stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> ReaderResult<Self> {
        Ok(Self {
            inner: noodles_bgzf::Reader::new(File::open(path)?),
            pos: 0,
        })
    }
}

impl LineReader for BgzfReader {
    fn read_line(&mut self, buf: &mut String) -> ReaderResult<usize> {
        let n = self.inner.read_line(buf)?;
        self.pos += n as u64;
        Ok(n)
    }

    fn position(&self) -> u64 {
        self.pos
    }

    fn skip_to(&mut self, offset: u64) -> ReaderResult<()> {
        if offset < self.pos {
            return Err(ReaderError::BackwardSkip {
                at: self.pos,
                requested: offset,
            });
        }

        let mut chunk = [0u8; 8192];
        while self.pos < offset {
            let want = usize::try_from(offset - self.pos)
                .unwrap_or(chunk.len())
                .min(chunk.len());
            let n = self.inner.read(&mut chunk[..want])?;
            if n == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("stream ended at {} while skipping to {offset}", self.pos),
                )
                .into());
            }
            self.pos += n as u64;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_bgzf(contents: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt.gz");
        let mut writer = noodles_bgzf::Writer::new(File::create(&path).unwrap());
        writer.write_all(contents).unwrap();
        writer.finish().unwrap();
        (dir, path)
    }

    #[test]
    fn positions_are_logical_offsets() {
        let (_dir, path) = write_bgzf(b"1 A\n2 B\n3 C\n");
        let mut reader = BgzfReader::open(&path).unwrap();

        let mut line = String::new();
        assert_eq!(reader.read_line(&mut line).unwrap(), 4);
        assert_eq!(line, "1 A\n");
        assert_eq!(reader.position(), 4);

        line.clear();
        reader.read_line(&mut line).unwrap();
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn skip_to_is_forward_only() {
        let (_dir, path) = write_bgzf(b"1 A\n2 B\n3 C\n");
        let mut reader = BgzfReader::open(&path).unwrap();

        reader.skip_to(8).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "3 C\n");

        let err = reader.skip_to(4).unwrap_err();
        assert!(matches!(
            err,
            ReaderError::BackwardSkip {
                at: 12,
                requested: 4
            }
        ));
    }

    #[test]
    fn skip_past_end_fails() {
        let (_dir, path) = write_bgzf(b"1 A\n");
        let mut reader = BgzfReader::open(&path).unwrap();
        assert!(reader.skip_to(100).is_err());
    }
}
