//! Persistence and console reporting for the merged dataset.
//!
//! The dataset is written as pretty-printed JSON; the timeline and state
//! tables can also be exported as flat CSV. Human-readable findings go to
//! stdout, separate from the tracing log.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::types::Dataset;
use crate::analyzers::utility::thousands;
use crate::config::OUTPUT_FILE_NAME;
use crate::loader::Inputs;
use crate::stats::Findings;

const RULE_WIDTH: usize = 60;

/// Writes `dataset` to `dir/meteorites_ufos_detection_bias.json`, creating
/// `dir` if needed, and returns the file path.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_dataset(dir: &Path, dataset: &Dataset) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(OUTPUT_FILE_NAME);

    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dataset)
        .with_context(|| format!("writing {}", path.display()))?;
    writer.flush()?;

    info!(path = %path.display(), "Dataset written");
    Ok(path)
}

/// Exports the timeline and state tables as CSV files in `dir`.
///
/// A missing ratio is written as an empty field.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_csv_tables(dir: &Path, dataset: &Dataset) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let temporal = dir.join("temporal_comparison.csv");
    write_csv(&temporal, &dataset.temporal_comparison)?;
    let states = dir.join("state_comparison.csv");
    write_csv(&states, &dataset.state_comparison)?;

    Ok(vec![temporal, states])
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "CSV table written");
    Ok(())
}

/// Logs the findings as pretty-printed JSON at debug level.
pub fn log_findings(findings: &Findings) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(findings)?);
    Ok(())
}

fn banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Prints the run header and input sizes.
pub fn print_inputs(inputs: &Inputs) {
    banner("METEORITES & UFOs: DETECTION BIAS STUDY");
    println!("Meteorite falls: {}", thousands(inputs.meteorites.len() as u64));
    println!("UFO year entries: {}", inputs.ufo_by_year.len());
    println!("UFO state entries: {}", inputs.ufo_by_state.len());
}

/// Prints the derived record counts.
pub fn print_counts(dataset: &Dataset, us_meteorites: usize, findings: &Findings) {
    println!();
    println!("Temporal records (1900-2025): {}", dataset.temporal_comparison.len());
    println!("State records: {}", dataset.state_comparison.len());
    println!("US meteorite falls: {us_meteorites}");
    println!(
        "Meteorite detail records: {} ({} US)",
        findings.detail_records, findings.us_detail_records
    );
}

/// Prints where the dataset landed and its size in MB.
pub fn print_saved(path: &Path) -> Result<()> {
    let size_mb = fs::metadata(path)
        .with_context(|| format!("reading metadata of {}", path.display()))?
        .len() as f64
        / 1024.0
        / 1024.0;
    println!();
    println!("Saved to: {}", path.display());
    println!("File size: {size_mb:.2} MB");
    Ok(())
}

/// Prints peak years and the highest UFO-to-meteorite ratios.
pub fn print_findings(findings: &Findings) {
    println!();
    banner("INTERESTING FINDINGS:");

    if let (Some(met), Some(ufo)) = (&findings.peak_meteorite_year, &findings.peak_ufo_year) {
        println!("Peak meteorite year: {} ({} falls)", met.year, met.meteorite_falls);
        println!(
            "Peak UFO year: {} ({} sightings)",
            ufo.year,
            thousands(ufo.ufo_sightings)
        );
    }

    if !findings.top_ratio_states.is_empty() {
        println!();
        println!("Highest UFO-to-meteorite ratios:");
        for s in &findings.top_ratio_states {
            let ratio = s.ufo_per_meteorite.unwrap_or(0.0).round_ties_even() as u64;
            println!("  {}: {} UFOs per meteorite fall", s.state, thousands(ratio));
        }
    }
}
