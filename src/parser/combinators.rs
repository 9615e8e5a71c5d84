use winnow::ascii::space0;
use winnow::combinator::{alt, delimited, opt, preceded, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::token::{one_of, take_till};
use winnow::{ModalResult, Parser};

use crate::parser::fields::{DateTimeFields, TimeOfDay, Zone};
use crate::parser::tokens::*;

/// `HH:mm[:ss[.f+]]` with exactly two hour digits
pub fn parse_iso_time(input: &mut &str) -> ModalResult<TimeOfDay> {
    parse_time_with_hour(parse_fixed_digits(2)).parse_next(input)
}

/// `H:mm[:ss[.f+]] [AM|PM]`
pub fn parse_clock_time(input: &mut &str) -> ModalResult<TimeOfDay> {
    (
        parse_time_with_hour(parse_one_or_two_digits),
        opt(preceded(space0, parse_meridiem)),
    )
        .verify_map(|(time, meridiem)| match meridiem {
            None => Some(time),
            Some(_) if !(1..=12).contains(&time.hour) => None,
            Some(Meridiem::Am) => Some(TimeOfDay {
                hour: time.hour % 12,
                ..time
            }),
            Some(Meridiem::Pm) => Some(TimeOfDay {
                hour: time.hour % 12 + 12,
                ..time
            }),
        })
        .parse_next(input)
}

fn parse_time_with_hour<'s, H>(hour: H) -> impl FnMut(&mut &'s str) -> ModalResult<TimeOfDay>
where
    H: Parser<&'s str, u32, ErrMode<ContextError>>,
{
    let mut fields = (
        hour,
        preceded(':', parse_fixed_digits(2)),
        opt((
            preceded(':', parse_fixed_digits(2)),
            opt(preceded('.', parse_fraction_millis)),
        )),
    );
    move |input: &mut &'s str| {
        let (hour, minute, rest) = fields.parse_next(input)?;
        let (second, millis) = rest.map_or((0, 0), |(second, millis)| (second, millis.unwrap_or(0)));
        Ok(TimeOfDay {
            hour,
            minute,
            second,
            millis,
        })
    }
}

/// `YYYY[-MM[-DD]]` or the expanded `±YYYYYY` form; missing parts default to the first
fn parse_iso_date(input: &mut &str) -> ModalResult<(i32, u32, u32)> {
    (
        alt((parse_year_expanded, parse_year_four_digit)),
        opt((
            preceded('-', parse_fixed_digits(2)),
            opt(preceded('-', parse_fixed_digits(2))),
        )),
    )
        .map(|(year, rest)| match rest {
            None => (year, 1, 1),
            Some((month, day)) => (year, month, day.unwrap_or(1)),
        })
        .parse_next(input)
}

fn parse_iso_zone(input: &mut &str) -> ModalResult<Zone> {
    alt((parse_utc_designator, parse_numeric_offset.map(Zone::Fixed))).parse_next(input)
}

/// ISO-8601 date with optional time and zone
///
/// A bare date is UTC; a date-time without a zone is local.
pub fn parse_iso_datetime(input: &mut &str) -> ModalResult<DateTimeFields> {
    let (year, month, day) = parse_iso_date.parse_next(input)?;
    let time = opt(preceded(
        one_of(['T', 't', ' ']),
        (parse_iso_time, opt(parse_iso_zone)),
    ))
    .parse_next(input)?;

    let (time, zone) = match time {
        None => (TimeOfDay::default(), Zone::Utc),
        Some((time, zone)) => (time, zone.unwrap_or(Zone::Local)),
    };
    Ok(DateTimeFields {
        year,
        month,
        day,
        time,
        zone,
    })
}

// Free-form date orders
fn parse_month_day_year(input: &mut &str) -> ModalResult<(i32, u32, u32)> {
    (
        parse_month_name,
        parse_gap,
        parse_one_or_two_digits,
        parse_gap,
        parse_year_loose,
    )
        .map(|(month, _, day, _, year)| (year, month, day))
        .parse_next(input)
}

fn parse_day_month_year(input: &mut &str) -> ModalResult<(i32, u32, u32)> {
    (
        parse_one_or_two_digits,
        parse_gap,
        parse_month_name,
        parse_gap,
        parse_year_loose,
    )
        .map(|(day, _, month, _, year)| (year, month, day))
        .parse_next(input)
}

fn parse_slashed_year_first(input: &mut &str) -> ModalResult<(i32, u32, u32)> {
    (
        parse_year_four_digit,
        one_of(['/', '-']),
        parse_one_or_two_digits,
        one_of(['/', '-']),
        parse_one_or_two_digits,
    )
        .map(|(year, _, month, _, day)| (year, month, day))
        .parse_next(input)
}

fn parse_slashed_month_first(input: &mut &str) -> ModalResult<(i32, u32, u32)> {
    (
        parse_one_or_two_digits,
        '/',
        parse_one_or_two_digits,
        '/',
        parse_year_loose,
    )
        .map(|(month, _, day, _, year)| (year, month, day))
        .parse_next(input)
}

fn parse_free_form_zone(input: &mut &str) -> ModalResult<Zone> {
    alt((
        parse_named_zone,
        parse_utc_designator,
        parse_numeric_offset.map(Zone::Fixed),
    ))
    .parse_next(input)
}

/// Parenthesised zone name, as in `(Central European Standard Time)`; informational only
fn parse_zone_comment(input: &mut &str) -> ModalResult<()> {
    delimited('(', take_till(0.., ')'), ')').void().parse_next(input)
}

/// Human-written dates such as `Fri, March 3, 2023 10:30 PM GMT+0100` or the
/// `Fri Mar 03 2023 00:00:00 GMT+0100 (Central European Standard Time)` form browsers print
///
/// Without a zone the reading is local.
pub fn parse_free_form(input: &mut &str) -> ModalResult<DateTimeFields> {
    opt(terminated(parse_weekday_name, parse_gap)).parse_next(input)?;

    let (year, month, day) = alt((
        parse_month_day_year,
        parse_day_month_year,
        parse_slashed_year_first,
        parse_slashed_month_first,
    ))
    .parse_next(input)?;

    let time = opt(preceded(parse_gap, parse_clock_time)).parse_next(input)?;
    let zone = opt(preceded(space0, parse_free_form_zone)).parse_next(input)?;
    opt(preceded(space0, parse_zone_comment)).parse_next(input)?;

    Ok(DateTimeFields {
        year,
        month,
        day,
        time: time.unwrap_or_default(),
        zone: zone.unwrap_or(Zone::Local),
    })
}
