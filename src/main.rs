//! docketcsv binary entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docketcsv::convert::{self, RunOptions};

/// Convert fixed-width court docket reports to a single CSV dataset.
///
/// With no arguments, processes Court1.txt through Court8.txt in the
/// current directory and writes Court_Case_Data.csv.
#[derive(Debug, Parser)]
#[command(name = "docketcsv", version, about)]
struct Cli {
    /// Directory containing the court report files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = convert::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Explicit input files (overrides the fixed Court1-Court8 list)
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let options = RunOptions::new(&cli.dir, cli.files, cli.output);
    let summary = convert::run(&options)?;

    tracing::debug!(
        rows = summary.rows_written,
        processed = summary.files_processed,
        failed = summary.files_failed,
        "run finished"
    );
    Ok(())
}
