//! Reads the three source documents into memory.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::records::{MeteoriteRecord, UfoStateEntry, UfoYearEntry};

/// All inputs, fully loaded before any aggregation starts.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub meteorites: Vec<MeteoriteRecord>,
    pub ufo_by_year: Vec<UfoYearEntry>,
    pub ufo_by_state: Vec<UfoStateEntry>,
}

/// Deserializes a top-level JSON array of records from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not contain a
/// JSON array of `T`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let records: Vec<T> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    debug!(records = records.len(), "Loaded records");
    Ok(records)
}

/// Loads the meteorite and both UFO documents named by `config`.
pub fn load_inputs(config: &PipelineConfig) -> Result<Inputs> {
    let meteorites = load_records(&config.meteorites)?;
    let ufo_by_year = load_records(&config.ufo_by_year)?;
    let ufo_by_state = load_records(&config.ufo_by_state)?;

    let inputs = Inputs {
        meteorites,
        ufo_by_year,
        ufo_by_state,
    };
    info!(
        meteorites = inputs.meteorites.len(),
        ufo_years = inputs.ufo_by_year.len(),
        ufo_states = inputs.ufo_by_state.len(),
        "Inputs loaded"
    );
    Ok(inputs)
}
