//! Sidecar encoding and atomic persistence.

use crate::error::{SidecarError, SidecarResult};
use crate::frame::Frame;
use crate::INDEX_MAGIC;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Renders a frame to complete sidecar file contents.
///
/// The result is the magic header followed by the zlib-deflated
/// comma-separated payload, ready to be written as one blob.
///
/// # Errors
///
/// Returns an error if a row cannot be rendered (unequal row lengths)
/// or compression fails.
pub fn encode_frame(frame: &Frame) -> SidecarResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&frame.columns)
        .map_err(|e| SidecarError::encode(e.to_string()))?;
    for row in &frame.rows {
        writer
            .write_record(row)
            .map_err(|e| SidecarError::encode(e.to_string()))?;
    }
    let payload = writer
        .into_inner()
        .map_err(|e| SidecarError::encode(e.to_string()))?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&payload)?;
    let blob = encoder.finish()?;

    let mut out = Vec::with_capacity(INDEX_MAGIC.len() + blob.len());
    out.extend_from_slice(INDEX_MAGIC);
    out.extend_from_slice(&blob);
    Ok(out)
}

/// Writes a frame to a sidecar file atomically.
///
/// The contents go to a temporary sibling first, are flushed to disk,
/// and are renamed into place only once complete. A crash mid-write
/// never leaves a file at `path` that passes the magic check with a
/// truncated payload.
///
/// # Errors
///
/// Returns an error if encoding or any filesystem step fails.
pub fn write_frame(path: &Path, frame: &Frame) -> SidecarResult<()> {
    let bytes = encode_frame(frame)?;
    let tmp = tmp_path(path);

    let mut file = File::create(&tmp)?;
    file.write_all(&bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp, path)?;
    sync_parent(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Fsyncs the directory entry so the rename survives a crash.
#[cfg(unix)]
fn sync_parent(path: &Path) -> SidecarResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            File::open(parent)?.sync_all()?;
        }
    }
    Ok(())
}

/// Windows NTFS journaling covers metadata durability for renames.
#[cfg(not(unix))]
fn sync_parent(_path: &Path) -> SidecarResult<()> {
    Ok(())
}
