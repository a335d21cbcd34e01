use serde::Serialize;

use crate::analyzers::types::{Dataset, StateComparisonEntry, TimelineEntry};

/// Number of states listed in the ratio ranking.
pub const TOP_RATIO_STATES: usize = 5;

/// Headline numbers derived from a built [`Dataset`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Findings {
    pub meteorite_records: usize,
    pub detail_records: usize,
    pub us_detail_records: usize,
    pub peak_meteorite_year: Option<TimelineEntry>,
    pub peak_ufo_year: Option<TimelineEntry>,
    pub top_ratio_states: Vec<StateComparisonEntry>,
}

impl Findings {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let timeline = &dataset.temporal_comparison;

        Findings {
            meteorite_records: dataset.metadata.sources.meteorite_falls.records as usize,
            detail_records: dataset.meteorite_detail.len(),
            us_detail_records: dataset.meteorite_detail.iter().filter(|m| m.is_us).count(),
            peak_meteorite_year: peak_by(timeline, |e| e.meteorite_falls).cloned(),
            peak_ufo_year: peak_by(timeline, |e| e.ufo_sightings).cloned(),
            top_ratio_states: top_ratios(&dataset.state_comparison, TOP_RATIO_STATES),
        }
    }
}

/// Entry with the largest key; the first one wins on ties.
pub fn peak_by<F>(timeline: &[TimelineEntry], key: F) -> Option<&TimelineEntry>
where
    F: Fn(&TimelineEntry) -> u64,
{
    timeline
        .iter()
        .reduce(|best, e| if key(e) > key(best) { e } else { best })
}

/// States ranked by `ufo_per_meteorite`, highest first, nulls excluded.
///
/// The sort is stable, so equal ratios keep their alphabetical order.
pub fn top_ratios(states: &[StateComparisonEntry], n: usize) -> Vec<StateComparisonEntry> {
    let mut ranked: Vec<_> = states
        .iter()
        .filter(|s| s.ufo_per_meteorite.is_some())
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        let (a, b) = (a.ufo_per_meteorite.unwrap_or(0.0), b.ufo_per_meteorite.unwrap_or(0.0));
        b.total_cmp(&a)
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(year: i32, meteorite_falls: u64, ufo_sightings: u64) -> TimelineEntry {
        TimelineEntry {
            year,
            meteorite_falls,
            ufo_sightings,
        }
    }

    fn state(code: &str, ratio: Option<f64>) -> StateComparisonEntry {
        StateComparisonEntry {
            state: code.to_string(),
            meteorite_falls: 1,
            ufo_sightings: 1,
            ufo_per_meteorite: ratio,
        }
    }

    #[test]
    fn test_peak_empty_timeline() {
        assert!(peak_by(&[], |e| e.ufo_sightings).is_none());
    }

    #[test]
    fn test_peak_first_wins_on_tie() {
        let timeline = vec![year(1930, 1, 0), year(1933, 4, 10), year(1950, 4, 2), year(1999, 0, 10)];

        assert_eq!(peak_by(&timeline, |e| e.meteorite_falls).unwrap().year, 1933);
        assert_eq!(peak_by(&timeline, |e| e.ufo_sightings).unwrap().year, 1933);
    }

    #[test]
    fn test_peak_all_zero_is_first() {
        let timeline = vec![year(1901, 0, 0), year(1902, 0, 0)];
        assert_eq!(peak_by(&timeline, |e| e.meteorite_falls).unwrap().year, 1901);
    }

    #[test]
    fn test_top_ratios_excludes_null_and_truncates() {
        let states = vec![
            state("AL", Some(10.0)),
            state("AZ", None),
            state("CA", Some(400.0)),
            state("CO", Some(55.5)),
            state("FL", Some(900.0)),
            state("NY", Some(10.0)),
            state("TX", Some(1.0)),
            state("WA", None),
        ];

        let top = top_ratios(&states, 5);
        let codes: Vec<_> = top.iter().map(|s| s.state.as_str()).collect();

        assert_eq!(codes, vec!["FL", "CA", "CO", "AL", "NY"]);
    }

    #[test]
    fn test_top_ratios_fewer_than_n() {
        let top = top_ratios(&[state("OH", None), state("PA", Some(2.0))], 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].state, "PA");
    }
}
