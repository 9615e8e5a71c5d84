use chrono::Timelike;

use crate::types::Instant;

/// Four-digit year as a date input shows it; negative years keep a leading minus
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}

/// ISO-8601 year: four digits inside 0..=9999, otherwise the signed six-digit expanded form
pub fn format_iso_year(year: i32) -> String {
    if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else if year < 0 {
        format!("-{:06}", year.unsigned_abs())
    } else {
        format!("+{year:06}")
    }
}

/// Milliseconds within the current second, truncated
pub fn whole_millis(instant: &Instant) -> u32 {
    // Leap seconds carry nanos past 1e9
    (instant.nanosecond() / 1_000_000).min(999)
}
