use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mallflow_core::prelude::*;

/// Batch crossing and stop-rate analysis for recorded corridor trajectories.
#[derive(Parser)]
#[command(name = "mallflow", version, about)]
struct Args {
    /// Directory containing .gpx trajectory files
    directory: PathBuf,

    /// Corridor configuration file (TOML); the built-in deployment is used
    /// when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scan trajectories across worker threads
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for --parallel; all cores by default
    #[arg(long)]
    jobs: Option<usize>,

    /// Report destination; "-" writes to stdout
    #[arg(short, long, default_value = "corridor_analysis.txt")]
    output: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
    Geojson,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if !args.directory.is_dir() {
        return Err(format!("{} is not a valid directory", args.directory.display()).into());
    }

    let config = match &args.config {
        Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
        None => CorridorConfig::default(),
    };
    let corridor = Corridor::new(config)?;

    let mode = if args.parallel {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    };

    let totals = match (args.parallel, args.jobs) {
        (true, Some(jobs)) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()?
            .install(|| analyze_directory(&args.directory, &corridor, mode))?,
        _ => analyze_directory(&args.directory, &corridor, mode)?,
    };

    let report = CorridorReport::from_totals(&corridor, &totals);
    let rendered = match args.format {
        Format::Text => report.render_text(),
        Format::Json => serde_json::to_string_pretty(&report)?,
        Format::Csv => report.to_csv()?,
        Format::Geojson => report.to_geojson_string(&corridor)?,
    };

    if args.output == "-" {
        print!("{rendered}");
    } else {
        std::fs::write(&args.output, &rendered)?;
        info!("Report written to {}", args.output);
    }

    Ok(())
}
