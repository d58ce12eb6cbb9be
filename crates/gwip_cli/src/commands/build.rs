//! Build command implementation.

use gwip_sidecar::sidecar_path;
use std::path::Path;
use tracing::info;

/// Runs the build command.
pub fn run(
    file: &Path,
    cols: &[usize],
    names: &[String],
    sep: char,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("rebuilding index for {:?}", file);
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let index = gwip_index::build_index(file, cols, &names, sep)?;

    println!(
        "Indexed {:?}: {} rows, columns [{}]",
        file,
        index.len(),
        index.header().join(", ")
    );
    println!("Index written to {:?}", sidecar_path(file)?);
    Ok(())
}
