#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the traffic map pipeline.
//!
//! Loads a configured source (or an ad-hoc URL/file override), runs the
//! normalization pipeline, and emits either a load report (`sync`),
//! aggregate statistics JSON (`stats`), or a `GeoJSON` feature collection
//! (`geojson`) for the map front end.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use traffic_map_analytics::compute_statistics;
use traffic_map_cli_utils::IndicatifProgress;
use traffic_map_geography_models::named_areas;
use traffic_map_ingest::{DatasetSnapshot, load_snapshot};
use traffic_map_source::{FetchOptions, registry};
use traffic_map_source_models::Locator;
use traffic_map_spatial::{ColorScheme, to_feature_collection};

#[derive(Parser)]
#[command(name = "traffic-map", about = "Traffic incident data pipeline")]
struct Cli {
    /// Source ID from the registry.
    #[arg(long, default_value = "dubai")]
    source: String,

    /// Override the source with an ad-hoc CSV URL.
    #[arg(long, conflicts_with = "path")]
    url: Option<String>,

    /// Override the source with a local CSV file.
    #[arg(long, conflicts_with = "url")]
    path: Option<PathBuf>,

    /// Cap the number of raw rows processed.
    #[arg(long)]
    limit: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the source and report valid/dropped counts.
    Sync,
    /// Compute aggregate statistics and emit them as JSON.
    Stats {
        /// Write to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Project the incidents into a GeoJSON feature collection.
    Geojson {
        /// Write to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Display color for severe incidents.
        #[arg(long)]
        severe_color: Option<String>,
        /// Display color for minor incidents.
        #[arg(long)]
        minor_color: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = traffic_map_cli_utils::init_logger();
    let cli = Cli::parse();

    let mut source = registry::find_source(&cli.source).ok_or_else(|| {
        let known: Vec<String> = registry::all_sources().into_iter().map(|s| s.id).collect();
        format!(
            "unknown source '{}'. Available: {}",
            cli.source,
            known.join(", ")
        )
    })?;

    if let Some(url) = cli.url {
        source.locator = Locator::CsvUrl { url };
    } else if let Some(path) = cli.path {
        source.locator = Locator::CsvFile { path };
    }

    let client = reqwest::Client::builder()
        .user_agent("traffic-map/0.1")
        .build()?;

    let options = FetchOptions { limit: cli.limit };
    let progress = IndicatifProgress::records_bar(&multi, "Normalizing records...");
    let snapshot = load_snapshot(&client, &source, &options, Some(progress)).await?;

    match cli.command {
        Command::Sync => report_sync(&snapshot),
        Command::Stats { output } => {
            let stats = compute_statistics(&snapshot.incidents, &named_areas());
            emit_json(&serde_json::to_string_pretty(&stats)?, output.as_deref())?;
        }
        Command::Geojson {
            output,
            severe_color,
            minor_color,
        } => {
            let mut colors = ColorScheme::default();
            if let Some(severe) = severe_color {
                colors.severe = severe;
            }
            if let Some(minor) = minor_color {
                colors.minor = minor;
            }

            let collection = to_feature_collection(&snapshot.incidents, &colors);
            emit_json(&serde_json::to_string_pretty(&collection)?, output.as_deref())?;
        }
    }

    Ok(())
}

fn report_sync(snapshot: &DatasetSnapshot) {
    println!(
        "Loaded {} of {} records ({} dropped by validation)",
        snapshot.summary.valid,
        snapshot.summary.total,
        snapshot.summary.dropped()
    );

    let stats = compute_statistics(&snapshot.incidents, &named_areas());
    println!("Severe incidents: {}", stats.severe_incidents);
    if let Some(hour) = stats.peak_hour() {
        println!("Peak hour: {hour:02}:00");
    }
}

fn emit_json(json: &str, output: Option<&std::path::Path>) -> std::io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
