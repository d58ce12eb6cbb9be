//! Column selection over delimited source lines.

use crate::error::{IndexError, IndexResult};
use crate::table::SEEK_COLUMN;
use gwip_reader::Opener;
use std::path::Path;

/// Columns to keep while indexing: zero-based positions in the source
/// file and the names they are published under.
///
/// A selection is validated on construction, before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based column positions to keep.
    pub cols: Vec<usize>,
    /// Output name for each kept column, parallel to `cols`.
    pub names: Vec<String>,
}

impl Selection {
    /// Creates a validated selection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelection` if the lists differ in length, the
    /// selection is empty, a name is empty or duplicated, or a name
    /// collides with the reserved `seek` column.
    pub fn new(cols: Vec<usize>, names: Vec<String>) -> IndexResult<Self> {
        if cols.len() != names.len() {
            return Err(IndexError::invalid_selection(format!(
                "{} columns but {} names",
                cols.len(),
                names.len()
            )));
        }
        if cols.is_empty() {
            return Err(IndexError::invalid_selection("no columns requested"));
        }
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(IndexError::invalid_selection(format!(
                    "name {i} is empty"
                )));
            }
            if name == SEEK_COLUMN {
                return Err(IndexError::invalid_selection(format!(
                    "{SEEK_COLUMN:?} is reserved for the offset column"
                )));
            }
            if names[..i].contains(name) {
                return Err(IndexError::invalid_selection(format!(
                    "duplicate name {name:?}"
                )));
            }
        }
        Ok(Self { cols, names })
    }
}

/// Parses the selected columns out of every line of a source file.
///
/// Opens a fresh handle through `opener`, splits each line on `sep`,
/// and keeps the requested columns as text, in selection order. The
/// first line fixes the file's field arity.
///
/// # Errors
///
/// Returns `Malformed` naming the file and 1-based line if a line's
/// arity differs from the first line's, or is too small for the
/// selection.
pub fn project(
    path: &Path,
    opener: &Opener,
    sep: char,
    selection: &Selection,
) -> IndexResult<Vec<Vec<String>>> {
    let mut reader = opener.open()?;
    let mut rows = Vec::new();
    let mut buf = String::new();
    let mut arity: Option<usize> = None;
    let mut line_no: u64 = 0;

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = trim_terminator(&buf);
        let fields: Vec<&str> = line.split(sep).collect();

        let width = *arity.get_or_insert(fields.len());
        if fields.len() != width {
            return Err(IndexError::malformed(
                path,
                line_no,
                format!("expected {width} fields, found {}", fields.len()),
            ));
        }

        let mut values = Vec::with_capacity(selection.cols.len());
        for &col in &selection.cols {
            match fields.get(col) {
                Some(value) => values.push((*value).to_string()),
                None => {
                    return Err(IndexError::malformed(
                        path,
                        line_no,
                        format!("column {col} is out of range for a {width}-field line"),
                    ))
                }
            }
        }
        rows.push(values);
    }

    Ok(rows)
}

fn trim_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwip_reader::resolve;
    use gwip_testkit::SourceFile;

    fn selection(cols: &[usize], names: &[&str]) -> Selection {
        Selection::new(cols.to_vec(), names.iter().map(|n| n.to_string()).collect()).unwrap()
    }

    #[test]
    fn keeps_requested_columns_in_order() {
        let source = SourceFile::plain(&["1 rs123 742429", "1 rs456 767376"]);
        let opener = resolve(source.path()).unwrap();

        let rows = project(
            source.path(),
            &opener,
            ' ',
            &selection(&[2, 1], &["pos", "name"]),
        )
        .unwrap();

        assert_eq!(rows, [["742429", "rs123"], ["767376", "rs456"]]);
    }

    #[test]
    fn arity_change_is_malformed() {
        let source = SourceFile::plain(&["1 rs123 742429", "1 rs456"]);
        let opener = resolve(source.path()).unwrap();

        let err = project(source.path(), &opener, ' ', &selection(&[0], &["chrom"])).unwrap_err();
        assert!(matches!(err, IndexError::Malformed { line: 2, .. }));
    }

    #[test]
    fn out_of_range_column_is_malformed() {
        let source = SourceFile::plain(&["1 rs123"]);
        let opener = resolve(source.path()).unwrap();

        let err = project(source.path(), &opener, ' ', &selection(&[5], &["x"])).unwrap_err();
        assert!(matches!(err, IndexError::Malformed { line: 1, .. }));
    }

    #[test]
    fn windows_terminators_are_trimmed() {
        let source = SourceFile::plain_raw(b"1 rs123\r\n2 rs456\r\n");
        let opener = resolve(source.path()).unwrap();

        let rows = project(source.path(), &opener, ' ', &selection(&[1], &["name"])).unwrap();
        assert_eq!(rows, [["rs123"], ["rs456"]]);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = Selection::new(vec![0, 1], vec!["a".to_string()]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidSelection { .. }));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = Selection::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidSelection { .. }));
    }

    #[test]
    fn reserved_name_is_rejected() {
        let err = Selection::new(vec![0], vec!["seek".to_string()]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidSelection { .. }));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err =
            Selection::new(vec![0, 1], vec!["a".to_string(), "a".to_string()]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidSelection { .. }));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Selection::new(vec![0], vec![String::new()]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidSelection { .. }));
    }
}
