//! Temporary source-file fixtures.
//!
//! Each fixture is a delimited text file inside its own temporary
//! directory, so any sidecar index written next to it is cleaned up with
//! the fixture.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A delimited source file in a temporary directory.
///
/// The directory lives as long as the fixture; dropping it removes the
/// file and any sidecar written beside it.
pub struct SourceFile {
    dir: TempDir,
    path: PathBuf,
}

impl SourceFile {
    /// Writes `lines` as a plain text file, one terminator per line.
    pub fn plain(lines: &[&str]) -> Self {
        let mut contents = Vec::new();
        for line in lines {
            contents.extend_from_slice(line.as_bytes());
            contents.push(b'\n');
        }
        Self::plain_raw(&contents)
    }

    /// Writes raw bytes as a plain file, exactly as given.
    ///
    /// Useful for edge cases such as a missing final terminator or
    /// short files that look like a truncated gzip header.
    pub fn plain_raw(contents: &[u8]) -> Self {
        let dir = TempDir::new().expect("failed to create temp directory");
        let path = dir.path().join("source.txt");
        let mut file = File::create(&path).expect("failed to create source file");
        file.write_all(contents).expect("failed to write source file");
        Self { dir, path }
    }

    /// Writes `lines` as a bgzip block-compressed file.
    #[cfg(feature = "bgzf")]
    pub fn bgzf(lines: &[&str]) -> Self {
        let dir = TempDir::new().expect("failed to create temp directory");
        let path = dir.path().join("source.txt.gz");
        let file = File::create(&path).expect("failed to create source file");
        let mut writer = noodles_bgzf::Writer::new(file);
        for line in lines {
            writer
                .write_all(line.as_bytes())
                .expect("failed to write source line");
            writer.write_all(b"\n").expect("failed to write terminator");
        }
        writer.finish().expect("failed to finish bgzf stream");
        Self { dir, path }
    }

    /// Returns the path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the directory holding the fixture.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fixture_has_terminators() {
        let source = SourceFile::plain(&["1 A", "2 B"]);
        let contents = std::fs::read(source.path()).unwrap();
        assert_eq!(contents, b"1 A\n2 B\n");
    }

    #[cfg(feature = "bgzf")]
    #[test]
    fn bgzf_fixture_starts_with_gzip_magic() {
        let source = SourceFile::bgzf(&["1 A"]);
        let contents = std::fs::read(source.path()).unwrap();
        assert_eq!(&contents[..3], &[0x1f, 0x8b, 0x08]);
    }
}
