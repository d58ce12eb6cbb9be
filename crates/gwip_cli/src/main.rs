//! gwip CLI
//!
//! Command-line tools for gwip index management.
//!
//! # Commands
//!
//! - `build` - Build (or rebuild) the index for a source file
//! - `inspect` - Summarize an existing index
//! - `verify` - Check an existing index for structural problems
//! - `fetch` - Print the source line a given index row points at
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// gwip command-line index tools.
#[derive(Parser)]
#[command(name = "gwip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build (or rebuild) the index for a source file
    Build {
        /// Source file to index
        file: PathBuf,

        /// Zero-based columns to keep, comma-separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        cols: Vec<usize>,

        /// Names for the kept columns, comma-separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        names: Vec<String>,

        /// Field separator
        #[arg(short, long, default_value = " ")]
        sep: char,
    },

    /// Summarize an existing index
    Inspect {
        /// Source file whose index to inspect
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check an existing index for structural problems
    Verify {
        /// Source file whose index to verify
        file: PathBuf,
    },

    /// Print the source line a given index row points at
    Fetch {
        /// Source file to read from
        file: PathBuf,

        /// Zero-based row number in the index
        #[arg(short, long)]
        row: usize,

        /// Zero-based columns the index was built with, comma-separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        cols: Vec<usize>,

        /// Names for the indexed columns, comma-separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        names: Vec<String>,

        /// Field separator
        #[arg(short, long, default_value = " ")]
        sep: char,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Build {
            file,
            cols,
            names,
            sep,
        } => {
            commands::build::run(&file, &cols, &names, sep)?;
        }
        Commands::Inspect { file, format } => {
            commands::inspect::run(&file, &format)?;
        }
        Commands::Verify { file } => {
            commands::verify::run(&file)?;
        }
        Commands::Fetch {
            file,
            row,
            cols,
            names,
            sep,
        } => {
            commands::fetch::run(&file, row, &cols, &names, sep)?;
        }
        Commands::Version => {
            println!("gwip CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("gwip index engine v{}", gwip_index::VERSION);
        }
    }

    Ok(())
}
