//! CLI tool that cleans `metro.csv` into `output/metro.csv`.
//!
//! Usage:
//!   metro-clean
//!   metro-clean --verbose
//!
//! Paths and the date threshold are fixed. `output/` must already exist.

use clap::Parser;
use metro_pipeline::{PipelineConfig, RecordPipeline};
use std::io;
use std::process;
use tracing::Level;

/// Keep ridership rows from 2020-08-01 on, key them by coordinates and sort
/// them by date.
#[derive(Parser)]
#[command(name = "metro-clean", version)]
struct Cli {
    /// Show paths and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    let config = PipelineConfig::default();
    if cli.verbose {
        eprintln!("Source:      {}", config.source.display());
        eprintln!("Destination: {}", config.destination.display());
        eprintln!("Threshold:   {}", config.threshold);
    }

    match RecordPipeline::new(config).run() {
        Ok(summary) => {
            if cli.verbose {
                eprintln!(
                    "Records:     {} in -> {} out ({} dropped)",
                    summary.rows_read, summary.rows_kept, summary.rows_dropped
                );
            }
        }
        Err(e) => {
            eprintln!("Pipeline error: {e}");
            process::exit(1);
        }
    }
}
