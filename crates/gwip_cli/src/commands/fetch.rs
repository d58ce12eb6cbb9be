//! Fetch command implementation.

use std::path::Path;

/// Runs the fetch command: index lookup, then a direct seek.
pub fn run(
    file: &Path,
    row: usize,
    cols: &[usize],
    names: &[String],
    sep: char,
) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let index = gwip_index::get_index(file, cols, &names, sep)?;

    let Some(entry) = index.rows().get(row) else {
        return Err(format!("row {row} is out of range ({} rows indexed)", index.len()).into());
    };

    let opener = gwip_reader::resolve(file)?;
    let mut reader = opener.open()?;
    reader.skip_to(entry.seek)?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    print!("{line}");
    if !line.ends_with('\n') {
        println!();
    }
    Ok(())
}
