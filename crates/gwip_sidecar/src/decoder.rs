//! Sidecar decoding.

use crate::error::{SidecarError, SidecarResult};
use crate::frame::Frame;
use crate::INDEX_MAGIC;
use flate2::read::ZlibDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads and decodes a sidecar index file.
///
/// # Errors
///
/// - `BadMagic` if the file does not start with the index magic,
///   including files shorter than the magic itself
/// - `Corrupt` if the payload fails to decompress, is not UTF-8, or
///   does not parse as headered comma-separated text
pub fn read_frame(path: &Path) -> SidecarResult<Frame> {
    let bytes = fs::read(path)?;
    decode_frame(path, &bytes)
}

/// Decodes complete sidecar file contents.
///
/// `path` is used only to name the file in errors.
///
/// # Errors
///
/// Same conditions as [`read_frame`].
pub fn decode_frame(path: &Path, bytes: &[u8]) -> SidecarResult<Frame> {
    let Some(blob) = bytes.strip_prefix(INDEX_MAGIC.as_slice()) else {
        return Err(SidecarError::bad_magic(path));
    };

    let mut inflated = Vec::new();
    ZlibDecoder::new(blob)
        .read_to_end(&mut inflated)
        .map_err(|e| SidecarError::corrupt(path, format!("payload does not decompress: {e}")))?;

    let text = String::from_utf8(inflated)
        .map_err(|_| SidecarError::corrupt(path, "payload is not UTF-8"))?;

    parse_payload(path, &text)
}

fn parse_payload(path: &Path, text: &str) -> SidecarResult<Frame> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| SidecarError::corrupt(path, format!("bad header row: {e}")))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| SidecarError::corrupt(path, format!("bad record: {e}")))?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Frame { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode_frame, write_frame};
    use gwip_testkit::generators::lines_strategy;
    use proptest::prelude::*;
    use std::io::Write;

    fn sample_frame() -> Frame {
        Frame {
            columns: vec!["name".to_string(), "pos".to_string(), "seek".to_string()],
            rows: vec![
                vec!["rs123".to_string(), "742429".to_string(), "0".to_string()],
                vec!["rs456".to_string(), "767376".to_string(), "29".to_string()],
            ],
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let frame = sample_frame();
        let bytes = encode_frame(&frame).unwrap();
        let decoded = decode_frame(Path::new("x.idx"), &bytes).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study.impute2.idx");

        let frame = sample_frame();
        write_frame(&path, &frame).unwrap();
        assert_eq!(read_frame(&path).unwrap(), frame);
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.idx");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"GWIP INDEX WRONG and then some").unwrap();
        drop(file);

        let err = read_frame(&path).unwrap_err();
        assert!(matches!(err, SidecarError::BadMagic { .. }));
    }

    #[test]
    fn short_file_is_rejected_as_bad_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.idx");
        fs::write(&path, b"GWIP").unwrap();

        let err = read_frame(&path).unwrap_err();
        assert!(matches!(err, SidecarError::BadMagic { .. }));
    }

    #[test]
    fn magic_with_garbage_payload_is_corrupt() {
        let mut bytes = INDEX_MAGIC.to_vec();
        bytes.extend_from_slice(b"this is not a zlib stream");

        let err = decode_frame(Path::new("x.idx"), &bytes).unwrap_err();
        assert!(matches!(err, SidecarError::Corrupt { .. }));
    }

    #[test]
    fn truncated_payload_is_corrupt() {
        let bytes = encode_frame(&sample_frame()).unwrap();
        let cut = &bytes[..bytes.len() - 4];

        let err = decode_frame(Path::new("x.idx"), cut).unwrap_err();
        assert!(matches!(err, SidecarError::Corrupt { .. }));
    }

    #[test]
    fn empty_table_roundtrips() {
        let frame = Frame::new(vec!["name".to_string(), "seek".to_string()]);
        let bytes = encode_frame(&frame).unwrap();
        let decoded = decode_frame(Path::new("x.idx"), &bytes).unwrap();
        assert_eq!(decoded, frame);
        assert!(decoded.is_empty());
    }

    proptest! {
        #[test]
        fn arbitrary_rows_roundtrip(rows in lines_strategy(3)) {
            let frame = Frame {
                columns: vec!["chrom".to_string(), "name".to_string(), "seek".to_string()],
                rows,
            };
            let bytes = encode_frame(&frame).unwrap();
            let decoded = decode_frame(Path::new("x.idx"), &bytes).unwrap();
            prop_assert_eq!(decoded, frame);
        }
    }
}
