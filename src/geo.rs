//! Nearest-centroid US state lookup.
//!
//! Coordinates are matched against a fixed table of approximate state
//! centers for the 48 contiguous states. Distances are squared Euclidean in
//! degree space, so results near borders are approximate.

/// Coarse CONUS rectangle, exclusive on every edge.
pub const MIN_LAT: f64 = 24.0;
pub const MAX_LAT: f64 = 50.0;
pub const MIN_LNG: f64 = -125.0;
pub const MAX_LNG: f64 = -66.0;

/// `(code, latitude, longitude)` for each contiguous state.
///
/// Iteration order is significant: on equal distance the earlier entry wins.
pub static STATE_CENTROIDS: [(&str, f64, f64); 48] = [
    ("CA", 36.78, -119.42),
    ("TX", 31.97, -99.90),
    ("FL", 27.66, -81.52),
    ("NY", 42.17, -74.95),
    ("PA", 41.20, -77.19),
    ("IL", 40.63, -89.40),
    ("OH", 40.42, -82.91),
    ("GA", 32.16, -82.90),
    ("NC", 35.76, -79.02),
    ("MI", 44.31, -85.60),
    ("NJ", 40.06, -74.41),
    ("VA", 37.43, -78.66),
    ("WA", 47.75, -120.74),
    ("AZ", 34.05, -111.09),
    ("MA", 42.41, -71.38),
    ("TN", 35.52, -86.58),
    ("IN", 40.27, -86.13),
    ("MO", 38.57, -92.60),
    ("MD", 39.05, -76.64),
    ("WI", 43.78, -88.79),
    ("CO", 39.55, -105.78),
    ("MN", 46.73, -94.69),
    ("SC", 34.00, -81.03),
    ("AL", 32.32, -86.90),
    ("LA", 30.98, -91.96),
    ("KY", 37.84, -84.27),
    ("OR", 43.80, -120.55),
    ("OK", 35.47, -97.52),
    ("CT", 41.60, -72.76),
    ("UT", 39.32, -111.09),
    ("IA", 41.88, -93.10),
    ("NV", 38.80, -116.42),
    ("AR", 35.20, -91.83),
    ("MS", 32.35, -89.40),
    ("KS", 38.53, -98.77),
    ("NM", 34.52, -105.87),
    ("NE", 41.49, -99.90),
    ("ID", 44.07, -114.74),
    ("WV", 38.60, -80.45),
    ("ME", 45.25, -69.45),
    ("MT", 46.88, -110.36),
    ("ND", 47.55, -101.00),
    ("SD", 43.97, -99.90),
    ("WY", 43.08, -107.29),
    ("VT", 44.56, -72.58),
    ("NH", 43.19, -71.57),
    ("DE", 38.91, -75.53),
    ("RI", 41.58, -71.48),
];

/// Returns `true` when the point lies strictly inside the CONUS rectangle.
///
/// NaN coordinates are never inside.
pub fn in_conus(lat: f64, lng: f64) -> bool {
    lat > MIN_LAT && lat < MAX_LAT && lng > MIN_LNG && lng < MAX_LNG
}

/// Maps a coordinate to the two-letter code of the nearest state centroid.
///
/// Returns `None` when either coordinate is missing or the point is outside
/// the CONUS rectangle. Points inside the rectangle always resolve to some
/// state, even over water or across the Canadian/Mexican border.
pub fn classify(lat: Option<f64>, lng: Option<f64>) -> Option<&'static str> {
    let (lat, lng) = (lat?, lng?);
    if !in_conus(lat, lng) {
        return None;
    }

    let mut closest = None;
    let mut min_dist = f64::INFINITY;
    for &(code, slat, slng) in &STATE_CENTROIDS {
        let d = (lat - slat).powi(2) + (lng - slng).powi(2);
        if d < min_dist {
            min_dist = d;
            closest = Some(code);
        }
    }
    closest
}

/// Looks up the reference centroid for a state code.
pub fn centroid(code: &str) -> Option<(f64, f64)> {
    STATE_CENTROIDS
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(_, lat, lng)| (lat, lng))
}
