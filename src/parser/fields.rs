use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ParseError;
use crate::types::{Instant, MAX_TIMESTAMP_MS};

/// Where a parsed wall-clock reading is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Explicitly UTC, or an ISO date without a time
    Utc,
    /// Explicit offset, seconds east of UTC
    Fixed(i32),
    /// No zone given; the caller's local offset applies
    Local,
}

/// Clock reading extracted from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millis: u32,
}

/// Calendar and clock fields as written, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub time: TimeOfDay,
    pub zone: Zone,
}

impl DateTimeFields {
    /// Validate the fields and anchor them at their zone
    ///
    /// `input` is only used to describe failures.
    pub fn resolve(&self, local_offset: FixedOffset, input: &str) -> Result<Instant, ParseError> {
        let out_of_range = |field: &'static str| ParseError::FieldOutOfRange {
            field,
            input: input.to_string(),
        };

        if !(1..=12).contains(&self.month) {
            return Err(out_of_range("month"));
        }
        if !(1..=31).contains(&self.day) {
            return Err(out_of_range("day"));
        }
        // Day past the end of its month, or a year chrono cannot hold
        let date =
            NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(out_of_range("date"))?;

        let TimeOfDay {
            hour,
            minute,
            second,
            millis,
        } = self.time;
        // 24:00 closes the day and reads as midnight of the next one
        let end_of_day = hour == 24 && minute == 0 && second == 0 && millis == 0;
        if hour > 23 && !end_of_day {
            return Err(out_of_range("hour"));
        }
        if minute > 59 {
            return Err(out_of_range("minute"));
        }
        if second > 59 {
            return Err(out_of_range("second"));
        }
        let hour = if end_of_day { 0 } else { hour };
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)
            .ok_or(out_of_range("millisecond"))?;
        let days = if end_of_day { 1 } else { 0 };

        let offset_seconds = match self.zone {
            Zone::Utc => 0,
            Zone::Fixed(seconds) => seconds,
            Zone::Local => local_offset.local_minus_utc(),
        };

        let utc = NaiveDateTime::new(date, time)
            .checked_add_signed(Duration::days(days))
            .and_then(|local| local.checked_sub_signed(Duration::seconds(i64::from(offset_seconds))))
            .ok_or_else(|| ParseError::OutOfRange(input.to_string()))?
            .and_utc();

        if (utc.timestamp_millis() as f64).abs() > MAX_TIMESTAMP_MS {
            return Err(ParseError::OutOfRange(input.to_string()));
        }
        Ok(utc)
    }
}
