//! Verify command implementation.

use gwip_index::SEEK_COLUMN;
use gwip_sidecar::{read_frame, sidecar_path};
use std::path::Path;

/// Verification result.
#[derive(Debug)]
pub struct VerifyResult {
    /// Number of rows checked.
    pub rows_checked: usize,
    /// Problems found, in row order.
    pub errors: Vec<String>,
}

impl VerifyResult {
    fn new() -> Self {
        Self {
            rows_checked: 0,
            errors: Vec::new(),
        }
    }

    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs the verify command.
pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let sidecar = sidecar_path(file)?;
    if !sidecar.exists() {
        return Err(format!("no index found for {file:?}; run `gwip build` first").into());
    }

    println!("Verifying index for {file:?}");
    println!();

    // The magic check and decompression happen here; structural checks
    // on the decoded rows follow.
    let frame = read_frame(&sidecar)?;
    let result = verify_frame(&frame);

    println!(
        "  rows checked: {}, problems: {}",
        result.rows_checked,
        result.errors.len()
    );
    for error in &result.errors {
        println!("    ERROR: {error}");
    }
    println!();

    if result.is_ok() {
        println!("✓ Index verification passed");
        Ok(())
    } else {
        println!("✗ Index verification failed");
        Err("verification failed".into())
    }
}

fn verify_frame(frame: &gwip_sidecar::Frame) -> VerifyResult {
    let mut result = VerifyResult::new();

    let Some(seek_at) = frame.column_position(SEEK_COLUMN) else {
        result
            .errors
            .push(format!("no {SEEK_COLUMN:?} column in [{}]", frame.columns.join(", ")));
        return result;
    };

    let mut previous: Option<u64> = None;
    for (row_no, values) in frame.rows.iter().enumerate() {
        result.rows_checked += 1;

        if values.len() != frame.width() {
            result.errors.push(format!(
                "row {row_no}: expected {} values, found {}",
                frame.width(),
                values.len()
            ));
            continue;
        }

        let seek: u64 = match values[seek_at].parse() {
            Ok(v) => v,
            Err(_) => {
                result.errors.push(format!(
                    "row {row_no}: seek value {:?} is not a non-negative integer",
                    values[seek_at]
                ));
                continue;
            }
        };

        if let Some(prev) = previous {
            if seek <= prev {
                result.errors.push(format!(
                    "row {row_no}: seek {seek} does not increase past {prev}"
                ));
            }
        }
        previous = Some(seek);
    }

    result
}
