use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use runtime::ActivityThresholds;
use tools::{Trace, build_report, render_json, render_text};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize recorded per-layer frame intervals")]
struct Args {
    /// Trace file: {"layers": [{"name": ..., "intervals_ns": [...]}]}
    #[arg(long)]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Thresholds file; falls back to SCHED_*_EPSILON_MS env overrides
    #[arg(long)]
    thresholds: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let thresholds = match &args.thresholds {
        Some(path) => ActivityThresholds::load_from_file(path)?,
        None => ActivityThresholds::from_env()?,
    };

    let trace = Trace::load(&args.input)?;
    info!(
        layers = trace.layers.len(),
        input = %args.input.display(),
        "loaded trace"
    );

    let rows = build_report(&trace, &thresholds);
    match args.format {
        Format::Text => print!("{}", render_text(&rows)),
        Format::Json => println!("{}", render_json(&rows)?),
    }
    Ok(())
}
