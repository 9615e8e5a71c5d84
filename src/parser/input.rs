//! Native input value grammar
//!
//! Reproduces the numeric value (`valueAsNumber`) a date, time or datetime-local input reports
//! for the string it currently holds.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use winnow::combinator::preceded;
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::formatter::instant_to_timestamp_ms;
use crate::parser::combinators::parse_iso_time;
use crate::parser::fields::TimeOfDay;
use crate::parser::tokens::parse_fixed_digits;
use crate::types::FormatKind;

/// `YYYY-MM-DD` with a year of at least four digits
fn parse_input_date(input: &mut &str) -> ModalResult<(i32, u32, u32)> {
    (
        take_while(4.., '0'..='9').parse_to::<i32>(),
        preceded('-', parse_fixed_digits(2)),
        preceded('-', parse_fixed_digits(2)),
    )
        .parse_next(input)
}

fn to_naive_date((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    if year == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn to_naive_time(time: TimeOfDay) -> Option<NaiveTime> {
    if time.hour > 23 || time.minute > 59 || time.second > 59 {
        return None;
    }
    NaiveTime::from_hms_milli_opt(time.hour, time.minute, time.second, time.millis)
}

fn date_value(value: &str) -> Option<f64> {
    let mut input = value;
    let date = to_naive_date(parse_input_date(&mut input).ok()?)?;
    if !input.is_empty() {
        return None;
    }
    let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(instant_to_timestamp_ms(&midnight))
}

fn time_value(value: &str) -> Option<f64> {
    let mut input = value;
    let time = to_naive_time(parse_iso_time(&mut input).ok()?)?;
    if !input.is_empty() {
        return None;
    }
    let millis = time.num_seconds_from_midnight() as f64 * 1000.0
        + f64::from(time.nanosecond() / 1_000_000);
    Some(millis)
}

fn datetime_local_value(value: &str) -> Option<f64> {
    let mut input = value;
    let (date, _, time) = (parse_input_date, one_of(['T', ' ']), parse_iso_time)
        .parse_next(&mut input)
        .ok()?;
    if !input.is_empty() {
        return None;
    }
    let naive = NaiveDateTime::new(to_naive_date(date)?, to_naive_time(time)?);
    Some(instant_to_timestamp_ms(&naive.and_utc()))
}

/// The widget's numeric value for `value`, or NaN when the string is not valid for `kind`
///
/// Dates count milliseconds to UTC midnight, times count milliseconds since midnight and
/// datetime-local readings are taken as if they were UTC.
pub fn value_as_number(kind: FormatKind, value: &str) -> f64 {
    let number = match kind {
        FormatKind::Date => date_value(value),
        FormatKind::Time => time_value(value),
        FormatKind::DatetimeLocal => datetime_local_value(value),
    };
    number.unwrap_or(f64::NAN)
}
