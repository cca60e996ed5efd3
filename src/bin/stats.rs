use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use modmap::stats;

/// Recursive line-count and disk-usage reports for a directory.
#[derive(Debug, Parser)]
#[command(
    name = "modmap-stats",
    version = "0.1.0",
    about = "Write recursive line-count and disk-usage listings for a directory"
)]
struct Cli {
    /// Directory to measure
    target_dir: PathBuf,

    /// Output file for the per-file line-count listing
    line_count_file: PathBuf,

    /// Output file for the per-entry disk-usage listing
    file_size_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    stats::write_directory_stats(&cli.target_dir, &cli.line_count_file, &cli.file_size_file)
}
