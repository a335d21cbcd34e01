use crate::analyzers::types::MeteoriteDetailRecord;
use crate::analyzers::utility::parse_year;
use crate::geo::classify;
use crate::records::MeteoriteRecord;

/// Produces one cleaned record per input meteorite, in input order.
///
/// Unlike the timeline, the year is not range-limited here, so historical
/// falls keep their year. An empty `date` becomes `None`.
pub fn build_detail(meteorites: &[MeteoriteRecord]) -> Vec<MeteoriteDetailRecord> {
    meteorites.iter().map(detail_record).collect()
}

fn detail_record(m: &MeteoriteRecord) -> MeteoriteDetailRecord {
    let date = m.date.clone().filter(|d| !d.is_empty());
    let year = date.as_deref().and_then(parse_year);
    let (lat, lng) = m.coordinates();
    let us_state = classify(lat, lng).map(str::to_string);

    MeteoriteDetailRecord {
        name: m.name.clone(),
        latitude: m.latitude.clone(),
        longitude: m.longitude.clone(),
        date,
        year,
        mass_g: m.mass_g.clone(),
        meteorite_class: m.meteorite_class.clone(),
        fall_type: m.fall_type.clone(),
        is_us: us_state.is_some(),
        us_state,
    }
}
