use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::analyzers::types::TimelineEntry;
use crate::analyzers::utility::{in_year_range, parse_year};
use crate::records::{MeteoriteRecord, UfoYearEntry};

/// Builds the year-by-year comparison, ascending by year.
///
/// Meteorites are counted by the year prefix of their `date`; records with a
/// missing or malformed date are skipped. UFO counts are taken as given, and
/// a repeated year overwrites the earlier entry. Both sides are restricted to
/// 1900..=2025 and then outer-joined, so a year present in only one source
/// reports 0 for the other.
pub fn build_temporal(
    meteorites: &[MeteoriteRecord],
    ufo_by_year: &[UfoYearEntry],
) -> Vec<TimelineEntry> {
    let mut met_by_year: BTreeMap<i32, u64> = BTreeMap::new();
    for m in meteorites {
        let Some(year) = m.date.as_deref().and_then(parse_year) else {
            continue;
        };
        if in_year_range(year) {
            *met_by_year.entry(year).or_default() += 1;
        }
    }

    let mut ufo_years: BTreeMap<i32, u64> = BTreeMap::new();
    for entry in ufo_by_year {
        let Some(year) = entry.year.filter(|y| in_year_range(*y)) else {
            continue;
        };
        if let Some(previous) = ufo_years.insert(year, entry.count) {
            warn!(year, previous, count = entry.count, "Duplicate UFO year, keeping last");
        }
    }

    let mut timeline: BTreeMap<i32, TimelineEntry> = BTreeMap::new();
    for (&year, &count) in &met_by_year {
        timeline.entry(year).or_insert_with(|| empty(year)).meteorite_falls = count;
    }
    for (&year, &count) in &ufo_years {
        timeline.entry(year).or_insert_with(|| empty(year)).ufo_sightings = count;
    }

    debug!(
        meteorite_years = met_by_year.len(),
        ufo_years = ufo_years.len(),
        years = timeline.len(),
        "Temporal comparison built"
    );
    timeline.into_values().collect()
}

fn empty(year: i32) -> TimelineEntry {
    TimelineEntry {
        year,
        meteorite_falls: 0,
        ufo_sightings: 0,
    }
}
