use chrono::DateTime;

use crate::types::{Instant, MAX_TIMESTAMP_MS};

/// Helper function to convert a widget timestamp (milliseconds since the epoch) to an instant
///
/// Fractional milliseconds are truncated toward zero. Returns `None` for NaN, infinities and
/// anything further than 8.64e15 ms from the epoch.
pub fn convert_timestamp_ms_to_instant(value: f64) -> Option<Instant> {
    if !value.is_finite() || value.abs() > MAX_TIMESTAMP_MS {
        return None;
    }

    // |value| <= 8.64e15 fits an i64 exactly after truncation
    let millis = value.trunc() as i64;
    DateTime::from_timestamp_millis(millis)
}

/// Milliseconds since the epoch, as a widget would report them
pub fn instant_to_timestamp_ms(instant: &Instant) -> f64 {
    instant.timestamp_millis() as f64
}
