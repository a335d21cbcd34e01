//! CLI entry point for the meteorite/UFO detection bias merge.
//!
//! Loads the meteorite falls and both UFO summaries, builds the merged
//! dataset, writes it to disk and prints headline findings.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use meteor_ufo_merge::{
    analyzers::merge::build_dataset,
    config::PipelineConfig,
    loader::load_inputs,
    output::{
        log_findings, print_counts, print_findings, print_inputs, print_saved, write_csv_tables,
        write_dataset,
    },
    stats::Findings,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "meteor_ufo_merge")]
#[command(about = "Merge witnessed meteorite falls with UFO sighting reports", long_about = None)]
struct Cli {
    /// Witnessed meteorite falls JSON
    #[arg(long, env = "METEORITES_PATH")]
    meteorites: Option<PathBuf>,

    /// UFO sightings by year JSON
    #[arg(long, env = "UFO_BY_YEAR_PATH")]
    ufo_by_year: Option<PathBuf>,

    /// UFO sightings by state JSON
    #[arg(long, env = "UFO_BY_STATE_PATH")]
    ufo_by_state: Option<PathBuf>,

    /// Directory the merged dataset is written to
    #[arg(short, long, env = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Optional: also export the timeline and state tables as CSV here
    #[arg(long, env = "CSV_DIR")]
    csv_dir: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig {
            meteorites: self.meteorites.unwrap_or(defaults.meteorites),
            ufo_by_year: self.ufo_by_year.unwrap_or(defaults.ufo_by_year),
            ufo_by_state: self.ufo_by_state.unwrap_or(defaults.ufo_by_state),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            csv_dir: self.csv_dir,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/meteor_ufo_merge.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("meteor_ufo_merge.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let config = Cli::parse().into_config();
    run(&config)
}

#[tracing::instrument(skip_all, fields(output_dir = %config.output_dir.display()))]
fn run(config: &PipelineConfig) -> Result<()> {
    let inputs = load_inputs(config)?;
    print_inputs(&inputs);

    let merged = build_dataset(&inputs, Local::now().date_naive());
    let findings = Findings::from_dataset(&merged.dataset);
    print_counts(&merged.dataset, merged.us_meteorites, &findings);

    let path = write_dataset(&config.output_dir, &merged.dataset)?;
    print_saved(&path)?;

    if let Some(csv_dir) = &config.csv_dir {
        let written = write_csv_tables(csv_dir, &merged.dataset)?;
        info!(files = written.len(), dir = %csv_dir.display(), "CSV tables exported");
    }

    log_findings(&findings)?;
    print_findings(&findings);
    Ok(())
}
