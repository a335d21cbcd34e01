use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

use crate::analyzers::types::StateComparisonEntry;
use crate::analyzers::utility::round1;
use crate::geo::classify;
use crate::records::{MeteoriteRecord, UfoStateEntry};

/// Builds the state-level comparison, ascending by state code.
///
/// Returns the table together with the number of meteorites that were
/// classified into any state.
pub fn build_geographic(
    meteorites: &[MeteoriteRecord],
    ufo_by_state: &[UfoStateEntry],
) -> (Vec<StateComparisonEntry>, usize) {
    let mut met_by_state: BTreeMap<&str, u64> = BTreeMap::new();
    let mut us_meteorites = 0;
    for m in meteorites {
        let (lat, lng) = m.coordinates();
        if let Some(state) = classify(lat, lng) {
            *met_by_state.entry(state).or_default() += 1;
            us_meteorites += 1;
        }
    }

    let mut ufo_states: BTreeMap<&str, u64> = BTreeMap::new();
    for entry in ufo_by_state {
        let Some(state) = entry.state.as_deref().filter(|s| s.chars().count() == 2) else {
            continue;
        };
        if let Some(previous) = ufo_states.insert(state, entry.count) {
            warn!(state, previous, count = entry.count, "Duplicate UFO state, keeping last");
        }
    }

    let states: BTreeSet<&str> = met_by_state.keys().chain(ufo_states.keys()).copied().collect();

    let table: Vec<StateComparisonEntry> = states
        .into_iter()
        .map(|state| {
            let met = met_by_state.get(state).copied().unwrap_or(0);
            let ufo = ufo_states.get(state).copied().unwrap_or(0);
            StateComparisonEntry {
                state: state.to_string(),
                meteorite_falls: met,
                ufo_sightings: ufo,
                ufo_per_meteorite: ufo_per_meteorite(ufo, met),
            }
        })
        .collect();

    debug!(states = table.len(), us_meteorites, "State comparison built");
    (table, us_meteorites)
}

/// UFO reports per meteorite fall, one decimal; `None` when there are no falls.
pub fn ufo_per_meteorite(ufo: u64, meteorites: u64) -> Option<f64> {
    if meteorites == 0 {
        return None;
    }
    Some(round1(ufo as f64 / meteorites as f64))
}
