//! Inspect command implementation.

use gwip_index::IndexTable;
use gwip_sidecar::{read_frame, sidecar_path};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Index inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Source file path.
    pub source: String,
    /// Sidecar index path.
    pub sidecar: String,
    /// Sidecar size in bytes, magic and compressed payload included.
    pub sidecar_size: u64,
    /// Indexed column names, `seek` included.
    pub columns: Vec<String>,
    /// Number of indexed rows.
    pub rows: usize,
    /// Offset of the first row, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seek: Option<u64>,
    /// Offset of the last row, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seek: Option<u64>,
}

/// Runs the inspect command.
pub fn run(file: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let sidecar = sidecar_path(file)?;
    if !sidecar.exists() {
        return Err(format!("no index found for {file:?}; run `gwip build` first").into());
    }

    let sidecar_size = fs::metadata(&sidecar)?.len();
    let table = IndexTable::from_frame(file, read_frame(&sidecar)?)?;

    let result = InspectResult {
        source: file.display().to_string(),
        sidecar: sidecar.display().to_string(),
        sidecar_size,
        columns: table.header(),
        rows: table.len(),
        first_seek: table.rows().first().map(|r| r.seek),
        last_seek: table.rows().last().map(|r| r.seek),
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

fn print_text_output(result: &InspectResult) {
    println!("gwip Index Inspection");
    println!("=====================");
    println!();
    println!("Source:  {}", result.source);
    println!("Sidecar: {} ({} bytes)", result.sidecar, result.sidecar_size);
    println!();
    println!("Columns: [{}]", result.columns.join(", "));
    println!("Rows:    {}", result.rows);
    if let (Some(first), Some(last)) = (result.first_seek, result.last_seek) {
        println!("Seeks:   {first} .. {last}");
    }
}
