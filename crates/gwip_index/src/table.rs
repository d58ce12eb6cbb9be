//! In-memory index table.

use crate::error::{IndexError, IndexResult};
use gwip_sidecar::{Frame, SidecarError};
use std::path::Path;

/// Name of the reserved offset column appended to every index.
pub const SEEK_COLUMN: &str = "seek";

/// One indexed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    /// Selected column values, in header order.
    pub fields: Vec<String>,
    /// Byte offset of the line start in the logical stream.
    pub seek: u64,
}

/// An ordered index over one source file: the selected columns of every
/// line plus the reserved `seek` column.
///
/// # Invariants
///
/// - One row per source line, in file order
/// - `seek` values are strictly increasing
/// - The selected columns never include the reserved `seek` name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTable {
    columns: Vec<String>,
    rows: Vec<IndexRow>,
}

impl IndexTable {
    /// Creates an empty table for the given selected columns.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row. `fields` must match the selected columns.
    pub fn push(&mut self, fields: Vec<String>, seek: u64) {
        debug_assert_eq!(fields.len(), self.columns.len());
        self.rows.push(IndexRow { fields, seek });
    }

    /// Returns the selected column names, without `seek`.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the on-disk header: selected columns plus trailing `seek`.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        let mut header = self.columns.clone();
        header.push(SEEK_COLUMN.to_string());
        header
    }

    /// Returns the rows, in file order.
    #[must_use]
    pub fn rows(&self) -> &[IndexRow] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Projects the table to `names`, in the requested order.
    ///
    /// Returns `None` if any requested column is missing; `seek` is
    /// carried over untouched.
    #[must_use]
    pub fn select(&self, names: &[String]) -> Option<IndexTable> {
        let positions: Vec<usize> = names
            .iter()
            .map(|n| self.columns.iter().position(|c| c == n))
            .collect::<Option<_>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| IndexRow {
                fields: positions.iter().map(|&p| row.fields[p].clone()).collect(),
                seek: row.seek,
            })
            .collect();

        Some(IndexTable {
            columns: names.to_vec(),
            rows,
        })
    }

    /// Renders the table as a sidecar payload.
    #[must_use]
    pub fn to_frame(&self) -> Frame {
        let mut frame = Frame::new(self.header());
        for row in &self.rows {
            let mut values = row.fields.clone();
            values.push(row.seek.to_string());
            frame.rows.push(values);
        }
        frame
    }

    /// Interprets a decoded sidecar payload as an index table.
    ///
    /// `path` is the source file, used to name errors.
    ///
    /// # Errors
    ///
    /// - `Stale` if the payload has no `seek` column
    /// - `Sidecar(Corrupt)` if a `seek` value is not a non-negative
    ///   base-10 integer
    pub fn from_frame(path: &Path, frame: Frame) -> IndexResult<Self> {
        let Some(seek_at) = frame.column_position(SEEK_COLUMN) else {
            return Err(IndexError::stale_missing_seek(path));
        };

        let columns: Vec<String> = frame
            .columns
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != seek_at)
            .map(|(_, c)| c.clone())
            .collect();

        let width = frame.width();
        let mut rows = Vec::with_capacity(frame.len());
        for values in frame.rows {
            if values.len() != width {
                return Err(SidecarError::corrupt(
                    path,
                    format!("expected {width} values per row, found {}", values.len()),
                )
                .into());
            }
            let seek: u64 = values[seek_at].parse().map_err(|_| {
                SidecarError::corrupt(
                    path,
                    format!("seek value {:?} is not a non-negative integer", values[seek_at]),
                )
            })?;
            let fields = values
                .into_iter()
                .enumerate()
                .filter(|&(i, _)| i != seek_at)
                .map(|(_, v)| v)
                .collect();
            rows.push(IndexRow { fields, seek });
        }

        Ok(Self { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> IndexTable {
        let mut table = IndexTable::new(vec!["name".to_string(), "pos".to_string()]);
        table.push(vec!["rs123".to_string(), "742429".to_string()], 0);
        table.push(vec!["rs456".to_string(), "767376".to_string()], 29);
        table
    }

    #[test]
    fn header_appends_seek_last() {
        assert_eq!(sample_table().header(), ["name", "pos", "seek"]);
    }

    #[test]
    fn select_reorders_columns() {
        let table = sample_table();
        let selected = table
            .select(&["pos".to_string(), "name".to_string()])
            .unwrap();

        assert_eq!(selected.columns(), ["pos", "name"]);
        assert_eq!(selected.rows()[0].fields, ["742429", "rs123"]);
        assert_eq!(selected.rows()[0].seek, 0);
        assert_eq!(selected.rows()[1].seek, 29);
    }

    #[test]
    fn select_missing_column_is_none() {
        assert!(sample_table().select(&["chrom".to_string()]).is_none());
    }

    #[test]
    fn frame_roundtrip() {
        let table = sample_table();
        let frame = table.to_frame();
        assert_eq!(frame.columns, ["name", "pos", "seek"]);
        assert_eq!(frame.rows[1], ["rs456", "767376", "29"]);

        let back = IndexTable::from_frame(Path::new("study.impute2"), frame).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn frame_without_seek_is_stale() {
        let frame = Frame {
            columns: vec!["name".to_string()],
            rows: vec![vec!["rs123".to_string()]],
        };
        let err = IndexTable::from_frame(Path::new("study.impute2"), frame).unwrap_err();
        assert!(matches!(err, IndexError::Stale { .. }));
    }

    #[test]
    fn non_numeric_seek_is_corrupt() {
        let frame = Frame {
            columns: vec!["name".to_string(), "seek".to_string()],
            rows: vec![vec!["rs123".to_string(), "minus one".to_string()]],
        };
        let err = IndexTable::from_frame(Path::new("study.impute2"), frame).unwrap_err();
        assert!(matches!(
            err,
            IndexError::Sidecar(SidecarError::Corrupt { .. })
        ));
    }
}
