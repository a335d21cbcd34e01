/// Inclusive year range kept in the bounded timeline.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2025;

/// Extracts the year from the first four characters of a date string.
///
/// Returns `None` unless the string starts with four ASCII digits. No range
/// check is applied here.
pub fn parse_year(date: &str) -> Option<i32> {
    let prefix = date.as_bytes().get(..4)?;
    if !prefix.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(prefix).ok()?.parse().ok()
}

/// Returns `true` when `year` falls inside the bounded timeline.
pub fn in_year_range(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Rounds to one decimal place.
///
/// Goes through exact decimal formatting so the stored binary value is
/// rounded, ties to even. Scaling by 10 first can manufacture a tie
/// (0.35 is really 0.34999...).
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Formats an integer with comma thousands separators.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
