//! Byte-offset scanning.

use gwip_reader::{LineReader, ReaderResult};

/// Lazy sequence of line-start offsets over a consumed reader.
///
/// Yields 0 first, then the reader's position after each consumed line:
/// exactly one more offset than the stream has lines. The trailing
/// offset is the end-of-stream position; callers pairing offsets with
/// lines drop it. The sequence is finite, tied to the handle's forward
/// progress, and cannot be restarted.
pub struct Offsets {
    reader: Box<dyn LineReader>,
    buf: String,
    started: bool,
    done: bool,
}

/// Starts scanning line-start offsets from a fresh reader.
///
/// The reader must be positioned at the start of the stream.
pub fn offsets(reader: Box<dyn LineReader>) -> Offsets {
    Offsets {
        reader,
        buf: String::new(),
        started: false,
        done: false,
    }
}

impl Iterator for Offsets {
    type Item = ReaderResult<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(Ok(0));
        }
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(self.reader.position())),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwip_reader::PlainReader;
    use gwip_testkit::SourceFile;

    fn scan(source: &SourceFile) -> Vec<u64> {
        let reader = PlainReader::open(source.path()).unwrap();
        offsets(Box::new(reader)).map(|o| o.unwrap()).collect()
    }

    #[test]
    fn yields_line_count_plus_one() {
        let source = SourceFile::plain(&["1 A", "2 B", "3 C"]);
        assert_eq!(scan(&source), [0, 4, 8, 12]);
    }

    #[test]
    fn empty_stream_yields_only_zero() {
        let source = SourceFile::plain_raw(b"");
        assert_eq!(scan(&source), [0]);
    }

    #[test]
    fn missing_final_terminator_still_ends_at_stream_end() {
        let source = SourceFile::plain_raw(b"1 A\n2 B");
        assert_eq!(scan(&source), [0, 4, 7]);
    }

    #[test]
    fn dropping_the_tail_gives_line_starts() {
        let source = SourceFile::plain(&["first", "second", "third"]);
        let mut offs = scan(&source);
        offs.pop();

        let contents = std::fs::read_to_string(source.path()).unwrap();
        for (offset, line) in offs.iter().zip(contents.lines()) {
            assert!(contents[*offset as usize..].starts_with(line));
        }
    }
}
