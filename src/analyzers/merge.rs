use chrono::NaiveDate;
use tracing::info;

use crate::analyzers::detail::build_detail;
use crate::analyzers::geographic::build_geographic;
use crate::analyzers::temporal::build_temporal;
use crate::analyzers::types::{Dataset, Metadata, RecordCounts, SourceInfo, Sources};
use crate::loader::Inputs;

pub const TITLE: &str = "Meteorites & UFOs: Detection Bias Study";
pub const DESCRIPTION: &str = "Comparing witnessed meteorite falls with UFO sighting reports to explore detection bias patterns. Both phenomena involve sky-watching, revealing how location, population density, and cultural factors affect what gets reported.";

/// A built dataset plus the US meteorite total reported alongside it.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub dataset: Dataset,
    pub us_meteorites: usize,
}

/// Runs the three reducers over `inputs` and assembles the merged dataset.
///
/// Deterministic for a given `created` date: identical inputs serialize to
/// identical bytes.
pub fn build_dataset(inputs: &Inputs, created: NaiveDate) -> MergeResult {
    let timeline = build_temporal(&inputs.meteorites, &inputs.ufo_by_year);
    info!(records = timeline.len(), "Temporal records (1900-2025)");

    let (state_data, us_meteorites) = build_geographic(&inputs.meteorites, &inputs.ufo_by_state);
    info!(records = state_data.len(), us_meteorites, "State records");

    let detail = build_detail(&inputs.meteorites);
    info!(records = detail.len(), "Meteorite detail records");

    let metadata = Metadata {
        title: TITLE.to_string(),
        description: DESCRIPTION.to_string(),
        created: created.format("%Y-%m-%d").to_string(),
        sources: Sources {
            meteorite_falls: SourceInfo {
                source: "Meteoritical Bulletin (via NASA)".to_string(),
                url: "https://www.lpi.usra.edu/meteor/".to_string(),
                records: inputs.meteorites.len() as u64,
                license: "Public Domain".to_string(),
            },
            ufo_sightings: SourceInfo {
                source: "National UFO Reporting Center (NUFORC)".to_string(),
                url: "https://nuforc.org/".to_string(),
                records: inputs.ufo_by_state.iter().map(|e| e.count).sum(),
                license: "Public Domain".to_string(),
            },
        },
        record_counts: RecordCounts {
            temporal_comparison: timeline.len(),
            state_comparison: state_data.len(),
            meteorite_detail: detail.len(),
        },
    };

    MergeResult {
        dataset: Dataset {
            metadata,
            temporal_comparison: timeline,
            state_comparison: state_data,
            meteorite_detail: detail,
        },
        us_meteorites,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{MeteoriteRecord, UfoStateEntry, UfoYearEntry};
    use serde_json::Number;

    fn sample_inputs() -> Inputs {
        Inputs {
            meteorites: vec![
                MeteoriteRecord {
                    name: Some("Fresno".into()),
                    date: Some("1969-03-15".into()),
                    latitude: Number::from_f64(36.78),
                    longitude: Number::from_f64(-119.42),
                    ..Default::default()
                },
                MeteoriteRecord {
                    name: Some("Nowhere".into()),
                    date: Some(String::new()),
                    ..Default::default()
                },
            ],
            ufo_by_year: vec![UfoYearEntry { year: Some(1969), count: 40 }],
            ufo_by_state: vec![
                UfoStateEntry { state: Some("CA".into()), count: 4000 },
                UfoStateEntry { state: Some("WA".into()), count: 1500 },
                UfoStateEntry { state: Some("Unknown".into()), count: 7 },
            ],
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    }

    #[test]
    fn test_metadata() {
        let result = build_dataset(&sample_inputs(), date());
        let meta = &result.dataset.metadata;

        assert_eq!(meta.title, TITLE);
        assert_eq!(meta.created, "2026-01-02");
        assert_eq!(meta.sources.meteorite_falls.records, 2);
        // sums every state entry, including ones the table drops
        assert_eq!(meta.sources.ufo_sightings.records, 5507);
        assert_eq!(
            meta.record_counts,
            RecordCounts {
                temporal_comparison: 1,
                state_comparison: 2,
                meteorite_detail: 2,
            }
        );
    }

    #[test]
    fn test_us_meteorites() {
        assert_eq!(build_dataset(&sample_inputs(), date()).us_meteorites, 1);
    }

    #[test]
    fn test_deterministic() {
        let a = serde_json::to_string_pretty(&build_dataset(&sample_inputs(), date()).dataset).unwrap();
        let b = serde_json::to_string_pretty(&build_dataset(&sample_inputs(), date()).dataset).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_top_level_keys_in_order() {
        let json = serde_json::to_string(&build_dataset(&sample_inputs(), date()).dataset).unwrap();
        let meta = json.find("\"metadata\"").unwrap();
        let temporal = json.find("\"temporal_comparison\":[").unwrap();
        let state = json.find("\"state_comparison\":[").unwrap();
        let detail = json.find("\"meteorite_detail\":[").unwrap();
        assert!(meta < temporal && temporal < state && state < detail);
    }
}
