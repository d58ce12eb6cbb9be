//! Index construction and retrieval.

use crate::error::{IndexError, IndexResult};
use crate::project::{project, Selection};
use crate::scan::offsets;
use crate::table::IndexTable;
use gwip_reader::resolve;
use gwip_sidecar::{read_frame, sidecar_path, write_frame};
use std::path::Path;
use tracing::{debug, info};

/// Returns the index for a source file, building it on first request.
///
/// If a sidecar exists it is loaded and checked against the request: the
/// requested names must all be covered and the offsets present,
/// otherwise the call fails and the caller must rebuild explicitly (a
/// sidecar that no longer matches is never overwritten behind the
/// caller's back). On a hit the result is projected to exactly the
/// requested columns, in the requested order. If no sidecar exists the
/// index is built, persisted, and returned.
///
/// A sidecar is never checked for freshness against the source file;
/// rebuilding after the source changes is the caller's responsibility.
///
/// # Errors
///
/// - `InvalidSelection` for a malformed request
/// - `Stale` if an existing sidecar does not cover the request
/// - any build error from [`build_index`] on a miss
pub fn get_index(path: &Path, cols: &[usize], names: &[&str], sep: char) -> IndexResult<IndexTable> {
    let selection = Selection::new(
        cols.to_vec(),
        names.iter().map(|n| n.to_string()).collect(),
    )?;
    let sidecar = sidecar_path(path)?;

    if !sidecar.exists() {
        return build(path, &sidecar, &selection, sep);
    }

    info!("retrieving the index for {:?}", path);
    let table = IndexTable::from_frame(path, read_frame(&sidecar)?)?;
    table
        .select(&selection.names)
        .ok_or_else(|| IndexError::stale_columns(path))
}

/// Builds the index for a source file unconditionally.
///
/// Any existing sidecar is replaced. This is the explicit rebuild path
/// the stale-index errors point at.
///
/// # Errors
///
/// - `InvalidSelection` for a malformed request
/// - `BgzfDisabled` / `NotBgzf` if the source encoding is unusable
/// - `Malformed` if a source line does not parse
/// - any I/O or encoding error from persisting the sidecar
pub fn build_index(
    path: &Path,
    cols: &[usize],
    names: &[&str],
    sep: char,
) -> IndexResult<IndexTable> {
    let selection = Selection::new(
        cols.to_vec(),
        names.iter().map(|n| n.to_string()).collect(),
    )?;
    let sidecar = sidecar_path(path)?;
    build(path, &sidecar, &selection, sep)
}

fn build(path: &Path, sidecar: &Path, selection: &Selection, sep: char) -> IndexResult<IndexTable> {
    info!("generating index for {:?}", path);

    let opener = resolve(path)?;
    debug!(encoding = ?opener.encoding(), "resolved source encoding");

    // First pass: the selected columns, one row per line.
    let rows = project(path, &opener, sep, selection)?;

    // Second pass: line-start offsets over a fresh handle. The scanner
    // yields one offset past the last line; drop it before zipping.
    let mut seeks = Vec::with_capacity(rows.len() + 1);
    for offset in offsets(opener.open()?) {
        seeks.push(offset?);
    }
    seeks.pop();

    if seeks.len() != rows.len() {
        return Err(IndexError::malformed(
            path,
            seeks.len().min(rows.len()) as u64,
            "line and offset counts disagree; the file changed while it was being indexed",
        ));
    }

    let mut table = IndexTable::new(selection.names.clone());
    for (fields, seek) in rows.into_iter().zip(seeks) {
        table.push(fields, seek);
    }

    write_frame(sidecar, &table.to_frame())?;
    debug!("index with {} rows written to {:?}", table.len(), sidecar);
    Ok(table)
}
