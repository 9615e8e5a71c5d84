use chrono::{FixedOffset, TimeZone, Utc};

use crate::error::ParseError;
use crate::parser::*;
use crate::types::*;

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn east(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

// --- ISO forms ---
#[test]
fn test_iso_date_only_is_utc() {
    // The local offset must not shift a bare date
    assert_eq!(
        parse_instant("2022-07-04", east(5)).unwrap(),
        at(2022, 7, 4, 0, 0, 0)
    );
}

#[test]
fn test_iso_partial_dates() {
    assert_eq!(parse_instant("2023", utc()).unwrap(), at(2023, 1, 1, 0, 0, 0));
    assert_eq!(parse_instant("2023-06", utc()).unwrap(), at(2023, 6, 1, 0, 0, 0));
}

#[test]
fn test_iso_datetime_without_zone_is_local() {
    assert_eq!(
        parse_instant("2023-03-03T10:00", east(2)).unwrap(),
        at(2023, 3, 3, 8, 0, 0)
    );
    assert_eq!(
        parse_instant("2023-03-03 10:00:30", utc()).unwrap(),
        at(2023, 3, 3, 10, 0, 30)
    );
}

#[test]
fn test_iso_datetime_with_zone() {
    let expected = at(2023, 3, 3, 10, 0, 0) + chrono::Duration::milliseconds(250);
    assert_eq!(
        parse_instant("2023-03-03T10:00:00.250Z", east(9)).unwrap(),
        expected
    );
    assert_eq!(
        parse_instant("2023-03-03T10:00:00-05:00", utc()).unwrap(),
        at(2023, 3, 3, 15, 0, 0)
    );
    assert_eq!(
        parse_instant("2023-03-03T10:00:00+0530", utc()).unwrap(),
        at(2023, 3, 3, 4, 30, 0)
    );
}

#[test]
fn test_iso_fraction_is_truncated_to_millis() {
    let parsed = parse_instant("2023-03-03T00:00:00.123999Z", utc()).unwrap();
    assert_eq!(parsed.timestamp_subsec_millis(), 123);
}

#[test]
fn test_iso_expanded_year() {
    let parsed = parse_instant("+012345-01-01", utc()).unwrap();
    assert_eq!(parsed, at(12345, 1, 1, 0, 0, 0));
    assert!(parse_instant("-000000-01-01", utc()).is_err());
}

// --- Free-form ---
#[test]
fn test_month_name_first() {
    assert_eq!(
        parse_instant("March 3, 2023", utc()).unwrap(),
        at(2023, 3, 3, 0, 0, 0)
    );
    assert_eq!(
        parse_instant("Mar 3 2023", utc()).unwrap(),
        at(2023, 3, 3, 0, 0, 0)
    );
    assert_eq!(
        parse_instant("sept 9, 2021", utc()).unwrap(),
        at(2021, 9, 9, 0, 0, 0)
    );
}

#[test]
fn test_free_form_uses_local_offset() {
    assert_eq!(
        parse_instant("March 3, 2023", east(1)).unwrap(),
        at(2023, 3, 2, 23, 0, 0)
    );
}

#[test]
fn test_weekday_day_month_and_zone() {
    assert_eq!(
        parse_instant("Fri, 3 Mar 2023 10:30:00 GMT", east(4)).unwrap(),
        at(2023, 3, 3, 10, 30, 0)
    );
    assert_eq!(
        parse_instant("March 3, 2023 9:05 am UTC+0130", utc()).unwrap(),
        at(2023, 3, 3, 7, 35, 0)
    );
}

#[test]
fn test_slashed_dates() {
    assert_eq!(
        parse_instant("03/15/2023 10:30 PM", utc()).unwrap(),
        at(2023, 3, 15, 22, 30, 0)
    );
    assert_eq!(
        parse_instant("2023/3/5", utc()).unwrap(),
        at(2023, 3, 5, 0, 0, 0)
    );
    assert_eq!(
        parse_instant("2023-3-5", utc()).unwrap(),
        at(2023, 3, 5, 0, 0, 0)
    );
    assert_eq!(
        parse_instant("12/31/99", utc()).unwrap(),
        at(1999, 12, 31, 0, 0, 0)
    );
    assert_eq!(
        parse_instant("1/2/07", utc()).unwrap(),
        at(2007, 1, 2, 0, 0, 0)
    );
}

#[test]
fn test_twelve_oclock() {
    assert_eq!(
        parse_instant("1/1/2020 12:15 AM", utc()).unwrap(),
        at(2020, 1, 1, 0, 15, 0)
    );
    assert_eq!(
        parse_instant("1/1/2020 12:15 PM", utc()).unwrap(),
        at(2020, 1, 1, 12, 15, 0)
    );
    assert!(parse_instant("1/1/2020 13:15 PM", utc()).is_err());
}

#[test]
fn test_browser_to_string_form() {
    let printed = "Fri Mar 03 2023 00:00:00 GMT+0100 (Central European Standard Time)";
    assert_eq!(parse_instant(printed, utc()).unwrap(), at(2023, 3, 2, 23, 0, 0));
    assert_eq!(
        parse_instant("Mar 3 2023 08:15 (local)", east(2)).unwrap(),
        at(2023, 3, 3, 6, 15, 0)
    );
    assert!(parse_instant("Fri Mar 03 2023 00:00:00 GMT+0100 (unclosed", utc()).is_err());
}

#[test]
fn test_end_of_day_is_next_midnight() {
    assert_eq!(
        parse_instant("2023-03-03T24:00", utc()).unwrap(),
        at(2023, 3, 4, 0, 0, 0)
    );
    assert_eq!(
        parse_instant("2023-12-31T24:00:00.000Z", east(3)).unwrap(),
        at(2024, 1, 1, 0, 0, 0)
    );
    assert!(matches!(
        parse_instant("2023-03-03T24:00:01", utc()),
        Err(ParseError::FieldOutOfRange { field: "hour", .. })
    ));
}

// --- Failures ---
#[test]
fn test_empty_input() {
    assert_eq!(parse_instant("", utc()), Err(ParseError::Empty));
    assert_eq!(parse_instant("   ", utc()), Err(ParseError::Empty));
}

#[test]
fn test_unrecognized_input() {
    assert_eq!(
        parse_instant("not a date", utc()),
        Err(ParseError::Unrecognized("not a date".to_string()))
    );
    assert!(matches!(
        parse_instant("garbage", utc()),
        Err(ParseError::Unrecognized(_))
    ));
    assert!(matches!(
        parse_instant("2023-03-03 trailing", utc()),
        Err(ParseError::Unrecognized(_))
    ));
}

#[test]
fn test_fields_out_of_range() {
    assert_eq!(
        parse_instant("February 30, 2023", utc()),
        Err(ParseError::FieldOutOfRange {
            field: "date",
            input: "February 30, 2023".to_string(),
        })
    );
    assert!(matches!(
        parse_instant("2023-13-01", utc()),
        Err(ParseError::FieldOutOfRange { field: "month", .. })
    ));
    assert!(matches!(
        parse_instant("2023-01-01T25:00", utc()),
        Err(ParseError::FieldOutOfRange { field: "hour", .. })
    ));
    assert!(parse_instant("+275761-01-01", utc()).is_err());
}

#[test]
fn test_error_description_is_readable() {
    let err = parse_instant("not a date", utc()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid Date: unrecognized date/time string 'not a date'"
    );
}

// --- Native input values ---
#[test]
fn test_value_as_number_per_kind() {
    assert_eq!(
        value_as_number(FormatKind::Date, "2024-01-01"),
        1_704_067_200_000.0
    );
    assert_eq!(value_as_number(FormatKind::Time, "01:02:03.004"), 3_723_004.0);
    assert_eq!(value_as_number(FormatKind::Time, "01:02"), 3_720_000.0);
    assert_eq!(
        value_as_number(FormatKind::DatetimeLocal, "2024-01-01T00:00:00.500"),
        1_704_067_200_500.0
    );
}

#[test]
fn test_value_as_number_rejects_foreign_grammar() {
    assert!(value_as_number(FormatKind::Date, "2024-02-30").is_nan());
    assert!(value_as_number(FormatKind::Date, "March 3, 2023").is_nan());
    assert!(value_as_number(FormatKind::Time, "24:00").is_nan());
    assert!(value_as_number(FormatKind::Time, "2024-01-01").is_nan());
    assert!(value_as_number(FormatKind::DatetimeLocal, "2024-01-01").is_nan());
}

// --- Format discriminator ---
#[test]
fn test_format_kind_names() {
    assert_eq!("datetime-local".parse::<FormatKind>(), Ok(FormatKind::DatetimeLocal));
    assert_eq!(FormatKind::Time.to_string(), "time");
    assert_eq!(
        "week".parse::<FormatKind>(),
        Err(ParseError::UnknownFormat("week".to_string()))
    );
}
