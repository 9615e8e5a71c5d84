//! Input value formatting module
//!
//! Turns an instant into the exact string a native date, time or datetime-local input accepts.
//! The main entry point is the `format_value_for_input` function.

pub mod datetime;

use crate::types::{FormatKind, Instant};

pub use datetime::{convert_timestamp_ms_to_instant, instant_to_timestamp_ms};

/// Format an instant for the input variant selected by `kind`
///
/// All fields are read at UTC, so the three variants always agree with each other.
///
/// # Arguments
/// * `kind` - The input variant the string is destined for
/// * `instant` - The value to render
///
/// # Returns
/// * `String` - `YYYY-MM-DD`, `HH:mm:ss.SSS` or `YYYY-MM-DDTHH:mm:ss.SSS`
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use date_picker_cell::formatter::format_value_for_input;
/// use date_picker_cell::types::FormatKind;
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
/// assert_eq!(format_value_for_input(FormatKind::Date, &instant), "2024-01-01");
/// assert_eq!(format_value_for_input(FormatKind::Time, &instant), "09:30:00.000");
/// ```
pub fn format_value_for_input(kind: FormatKind, instant: &Instant) -> String {
    match kind {
        FormatKind::Date => datetime::format_date(instant),
        FormatKind::Time => datetime::format_time(instant),
        FormatKind::DatetimeLocal => datetime::format_iso_local(instant),
    }
}
