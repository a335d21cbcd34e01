//! Input record types for the three source documents.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// One witnessed meteorite fall as published in the source dump.
///
/// Every field is optional; absent keys deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeteoriteRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    // numbers are kept raw so integers stay integers in the output
    #[serde(default)]
    pub latitude: Option<Number>,
    #[serde(default)]
    pub longitude: Option<Number>,
    #[serde(default)]
    pub mass_g: Option<Number>,
    #[serde(default)]
    pub meteorite_class: Option<String>,
    #[serde(default)]
    pub fall_type: Option<String>,
}

impl MeteoriteRecord {
    /// Latitude and longitude as floats, for classification.
    pub fn coordinates(&self) -> (Option<f64>, Option<f64>) {
        (
            self.latitude.as_ref().and_then(Number::as_f64),
            self.longitude.as_ref().and_then(Number::as_f64),
        )
    }
}

/// Yearly UFO report count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UfoYearEntry {
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub count: u64,
}

/// Per-state UFO report count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UfoStateEntry {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub count: u64,
}

fn zero_if_null<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Accepts a year given as an integer, a numeric string, or null.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|y| i32::try_from(y).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("year is not an integer: {n}"))),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i32>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("year is not numeric: {s:?}")))
        }
        Some(other) => Err(D::Error::custom(format!("unexpected year value: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meteorite_missing_fields_default_to_none() {
        let m: MeteoriteRecord = serde_json::from_str(r#"{"name": "Ensisheim"}"#).unwrap();
        assert_eq!(m.name.as_deref(), Some("Ensisheim"));
        assert!(m.date.is_none());
        assert!(m.latitude.is_none());
        assert!(m.mass_g.is_none());
    }

    #[test]
    fn test_meteorite_ignores_extra_fields() {
        let m: MeteoriteRecord =
            serde_json::from_str(r#"{"name": "x", "recclass": "L6", "id": 12}"#).unwrap();
        assert_eq!(m.name.as_deref(), Some("x"));
    }

    #[test]
    fn test_mass_keeps_integer_form() {
        let m: MeteoriteRecord = serde_json::from_str(r#"{"mass_g": 1200}"#).unwrap();
        assert_eq!(serde_json::to_string(&m.mass_g).unwrap(), "1200");
    }

    #[test]
    fn test_coordinates_keep_integer_form() {
        let m: MeteoriteRecord =
            serde_json::from_str(r#"{"latitude": 36, "longitude": -119.42}"#).unwrap();
        assert_eq!(serde_json::to_string(&m.latitude).unwrap(), "36");
        assert_eq!(m.coordinates(), (Some(36.0), Some(-119.42)));
    }

    #[test]
    fn test_coordinates_missing() {
        assert_eq!(MeteoriteRecord::default().coordinates(), (None, None));
    }

    #[test]
    fn test_year_accepts_integer_and_string() {
        let a: UfoYearEntry = serde_json::from_str(r#"{"year": 1997, "count": 5}"#).unwrap();
        let b: UfoYearEntry = serde_json::from_str(r#"{"year": "1997", "count": 5}"#).unwrap();
        assert_eq!(a.year, Some(1997));
        assert_eq!(b.year, Some(1997));
    }

    #[test]
    fn test_year_null_or_missing() {
        let a: UfoYearEntry = serde_json::from_str(r#"{"year": null, "count": 5}"#).unwrap();
        let b: UfoYearEntry = serde_json::from_str(r#"{"count": 5}"#).unwrap();
        let c: UfoYearEntry = serde_json::from_str(r#"{"year": ""}"#).unwrap();
        assert_eq!(a.year, None);
        assert_eq!(b.year, None);
        assert_eq!(c.year, None);
        assert_eq!(c.count, 0);
    }

    #[test]
    fn test_year_rejects_garbage() {
        assert!(serde_json::from_str::<UfoYearEntry>(r#"{"year": "nineteen"}"#).is_err());
        assert!(serde_json::from_str::<UfoYearEntry>(r#"{"year": [1]}"#).is_err());
    }

    #[test]
    fn test_null_count_is_zero() {
        let s: UfoStateEntry = serde_json::from_str(r#"{"state": "TX", "count": null}"#).unwrap();
        assert_eq!(s.count, 0);
    }

    #[test]
    fn test_state_entry() {
        let s: UfoStateEntry = serde_json::from_str(r#"{"state": "CA", "count": 4000}"#).unwrap();
        assert_eq!(s.state.as_deref(), Some("CA"));
        assert_eq!(s.count, 4000);
    }
}
