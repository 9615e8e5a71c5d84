use std::fmt::Write;

use chrono::{Datelike, Timelike};

use crate::types::Instant;

use super::utils::{format_iso_year, format_year, whole_millis};

/// `YYYY-MM-DD` at UTC
pub fn format_date(instant: &Instant) -> String {
    let mut result = format_year(instant.year());
    let _ = write!(result, "-{:02}-{:02}", instant.month(), instant.day());
    result
}

/// `HH:mm:ss.SSS` at UTC
pub fn format_time(instant: &Instant) -> String {
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        instant.hour(),
        instant.minute(),
        instant.second(),
        whole_millis(instant)
    )
}

/// ISO-8601 extended form at UTC with the zone designator left off
pub fn format_iso_local(instant: &Instant) -> String {
    let mut result = format_iso_year(instant.year());
    let _ = write!(
        result,
        "-{:02}-{:02}T{}",
        instant.month(),
        instant.day(),
        format_time(instant)
    );
    result
}
