//! Data types produced by the merge pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Meteorite falls and UFO reports for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: i32,
    pub meteorite_falls: u64,
    pub ufo_sightings: u64,
}

/// Meteorite falls and UFO reports for one US state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateComparisonEntry {
    pub state: String,
    pub meteorite_falls: u64,
    pub ufo_sightings: u64,
    /// `None` when no meteorite fell in the state.
    pub ufo_per_meteorite: Option<f64>,
}

/// A cleaned meteorite record with derived year and state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteoriteDetailRecord {
    pub name: Option<String>,
    pub latitude: Option<Number>,
    pub longitude: Option<Number>,
    pub date: Option<String>,
    pub year: Option<i32>,
    pub mass_g: Option<Number>,
    pub meteorite_class: Option<String>,
    pub fall_type: Option<String>,
    pub us_state: Option<String>,
    pub is_us: bool,
}

/// Provenance of one source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub source: String,
    pub url: String,
    pub records: u64,
    pub license: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sources {
    pub meteorite_falls: SourceInfo,
    pub ufo_sightings: SourceInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub temporal_comparison: usize,
    pub state_comparison: usize,
    pub meteorite_detail: usize,
}

/// Header block of the merged dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    /// Generation date, `YYYY-MM-DD`.
    pub created: String,
    pub sources: Sources,
    pub record_counts: RecordCounts,
}

/// The complete merged artifact written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub metadata: Metadata,
    pub temporal_comparison: Vec<TimelineEntry>,
    pub state_comparison: Vec<StateComparisonEntry>,
    pub meteorite_detail: Vec<MeteoriteDetailRecord>,
}
