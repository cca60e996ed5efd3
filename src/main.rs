use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use modmap::core::ProjectAnalyzer;
use modmap::formatters::{JsonFormatter, TextFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "modmap",
    version = "0.1.0",
    author = "modmap developers",
    about = "Python module coupling and call-structure analyzer"
)]
struct Cli {
    /// Root directory to analyze
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// File extension to analyze
    #[arg(short, long, value_name = "EXT", default_value = "py")]
    extension: String,

    /// Report format: text, json
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Record per-file failures as diagnostics instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Parse files on a worker pool
    #[arg(long)]
    parallel: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let start_time = Instant::now();

    eprintln!("modmap - module relationship analysis");
    eprintln!("Input: {}", cli.input.display());

    let analyzer = ProjectAnalyzer::new()
        .with_keep_going(cli.keep_going)
        .with_parallel(cli.parallel);
    let model = analyzer.analyze(&cli.input, &cli.extension)?;

    // The report owns stdout; status and diagnostics go to stderr.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => TextFormatter::new().format_to_writer(&model, &mut out)?,
        OutputFormat::Json => JsonFormatter::new().format_to_writer(&model, &mut out)?,
    }
    out.flush()?;

    for diagnostic in model.diagnostics() {
        eprintln!("Failed: {}: {}", diagnostic.path, diagnostic.message);
    }
    eprintln!(
        "Analyzed {} modules in {:.2}s",
        model.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
