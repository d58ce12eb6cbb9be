//! Plain text reader.

use crate::error::ReaderResult;
use crate::reader::LineReader;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// A line reader over an uncompressed text file.
///
/// Positions are raw file offsets, so every line start recorded while
/// scanning can later be handed straight to `skip_to`.
#[derive(Debug)]
pub struct PlainReader {
    inner: BufReader<File>,
    pos: u64,
}

impl PlainReader {
    /// Opens a plain text file positioned at its start.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> ReaderResult<Self> {
        Ok(Self {
            inner: BufReader::new(File::open(path)?),
            pos: 0,
        })
    }
}

impl LineReader for PlainReader {
    fn read_line(&mut self, buf: &mut String) -> ReaderResult<usize> {
        let n = self.inner.read_line(buf)?;
        self.pos += n as u64;
        Ok(n)
    }

    fn position(&self) -> u64 {
        self.pos
    }

    fn skip_to(&mut self, offset: u64) -> ReaderResult<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        self.pos = offset;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(contents: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_lines_and_positions() {
        let (_dir, path) = write_file(b"1 A\n2 B\n3 C\n");
        let mut reader = PlainReader::open(&path).unwrap();

        assert_eq!(reader.position(), 0);

        let mut line = String::new();
        assert_eq!(reader.read_line(&mut line).unwrap(), 4);
        assert_eq!(line, "1 A\n");
        assert_eq!(reader.position(), 4);

        line.clear();
        assert_eq!(reader.read_line(&mut line).unwrap(), 4);
        assert_eq!(reader.position(), 8);

        line.clear();
        assert_eq!(reader.read_line(&mut line).unwrap(), 4);
        assert_eq!(reader.position(), 12);

        line.clear();
        assert_eq!(reader.read_line(&mut line).unwrap(), 0);
    }

    #[test]
    fn missing_final_terminator_still_counts() {
        let (_dir, path) = write_file(b"1 A\n2 B");
        let mut reader = PlainReader::open(&path).unwrap();

        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        line.clear();
        assert_eq!(reader.read_line(&mut line).unwrap(), 3);
        assert_eq!(line, "2 B");
        assert_eq!(reader.position(), 7);
    }

    #[test]
    fn skip_to_rereads_a_line() {
        let (_dir, path) = write_file(b"1 A\n2 B\n3 C\n");
        let mut reader = PlainReader::open(&path).unwrap();

        reader.skip_to(8).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "3 C\n");

        // Backward seeks are fine on plain files.
        reader.skip_to(4).unwrap();
        line.clear();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "2 B\n");
    }
}
