use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use osm_ports::config::Config;
use osm_ports::input::load_feature_collection;
use osm_ports::storage::{JsonFileSink, PortSink};
use osm_ports::{idempotency, logging, report, Pipeline};

#[derive(Parser)]
#[command(name = "osm-ports")]
#[command(about = "Extract port, marina and ferry facilities from OSM GeoJSON")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input GeoJSON feature collection
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON file for the cleaned port records
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of ports to print after the run
    #[arg(long)]
    preview: Option<usize>,

    /// Suppress console logging
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(input) = cli.input {
        config.io.input = input;
    }
    if let Some(output) = cli.output {
        config.io.output = output;
    }
    if let Some(preview) = cli.preview {
        config.report.preview = preview;
    }

    println!("Processing OSM GeoJSON data...");
    let collection = load_feature_collection(&config.io.input)
        .with_context(|| format!("Failed to load {}", config.io.input.display()))?;
    println!("Total features: {}", collection.features.len());

    let result = Pipeline::run(&collection);
    println!("\n✅ {}", report::format_summary(&result));

    let mut sink = JsonFileSink::new(&config.io.output);
    sink.write(&result.records)
        .with_context(|| format!("Failed to write {}", sink.describe()))?;
    let digest = idempotency::output_digest(&result.records)?;
    info!(output = %sink.describe(), %digest, "💾 Saved port records");
    println!("✅ Saved to {}", sink.describe());

    let preview = report::format_preview(&result.records, config.report.preview);
    if !preview.is_empty() {
        println!("\n{}", preview);
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let _guard = logging::init_logging(cli.quiet);
    osm_ports::metrics::describe();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run failed: {:#}", e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
