use winnow::ascii::Caseless;
use winnow::combinator::{alt, opt};
use winnow::token::{literal, one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::parser::fields::Zone;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// 12-hour clock marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

// Digit parsers
pub fn parse_fixed_digits<'s>(count: usize) -> impl FnMut(&mut &'s str) -> ModalResult<u32> {
    move |input: &mut &'s str| {
        take_while(count, '0'..='9')
            .parse_to::<u32>()
            .parse_next(input)
    }
}

pub fn parse_one_or_two_digits(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=2, '0'..='9')
        .parse_to::<u32>()
        .parse_next(input)
}

/// Leading fraction digits as milliseconds; digits past the third are dropped
pub fn parse_fraction_millis(input: &mut &str) -> ModalResult<u32> {
    take_while(1.., '0'..='9')
        .map(|digits: &str| {
            digits
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(3)
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        })
        .parse_next(input)
}

// Year related parsers
pub fn parse_year_four_digit(input: &mut &str) -> ModalResult<i32> {
    take_while(4, '0'..='9').parse_to::<i32>().parse_next(input)
}

/// `+YYYYYY` or `-YYYYYY`; minus zero is not a year
pub fn parse_year_expanded(input: &mut &str) -> ModalResult<i32> {
    (one_of(['+', '-']), take_while(6, '0'..='9').parse_to::<i32>())
        .verify_map(|(sign, year): (char, i32)| match sign {
            '-' if year == 0 => None,
            '-' => Some(-year),
            _ => Some(year),
        })
        .parse_next(input)
}

/// Year of one to six digits; one- and two-digit years are read as 1950..=2049
pub fn parse_year_loose(input: &mut &str) -> ModalResult<i32> {
    take_while(1..=6, '0'..='9')
        .try_map(|digits: &str| {
            digits.parse::<i32>().map(|year| match (digits.len(), year) {
                (1..=2, 0..=49) => 2000 + year,
                (1..=2, _) => 1900 + year,
                _ => year,
            })
        })
        .parse_next(input)
}

// Name related parsers
fn alphabetic_word<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(3.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

fn position_by_prefix(names: &[&str], word: &str) -> Option<usize> {
    let lower = word.to_ascii_lowercase();
    names.iter().position(|name| name.starts_with(&lower))
}

/// English month name or any prefix of at least three letters, case-insensitive
pub fn parse_month_name(input: &mut &str) -> ModalResult<u32> {
    alphabetic_word
        .verify_map(|word| position_by_prefix(&MONTH_NAMES, word).map(|i| i as u32 + 1))
        .parse_next(input)
}

pub fn parse_weekday_name(input: &mut &str) -> ModalResult<()> {
    alphabetic_word
        .verify(|word: &str| position_by_prefix(&DAY_NAMES, word).is_some())
        .void()
        .parse_next(input)
}

pub fn parse_meridiem(input: &mut &str) -> ModalResult<Meridiem> {
    alt((
        literal(Caseless("am")).value(Meridiem::Am),
        literal(Caseless("pm")).value(Meridiem::Pm),
    ))
    .parse_next(input)
}

// Zone related parsers
/// `±HH:mm` or `±HHmm`, as seconds east of UTC
pub fn parse_numeric_offset(input: &mut &str) -> ModalResult<i32> {
    (
        one_of(['+', '-']),
        parse_fixed_digits(2),
        opt(':'),
        parse_fixed_digits(2),
    )
        .verify_map(|(sign, hours, _, minutes)| {
            if hours > 23 || minutes > 59 {
                return None;
            }
            let seconds = (hours * 3600 + minutes * 60) as i32;
            Some(if sign == '-' { -seconds } else { seconds })
        })
        .parse_next(input)
}

pub fn parse_utc_designator(input: &mut &str) -> ModalResult<Zone> {
    one_of(['Z', 'z']).value(Zone::Utc).parse_next(input)
}

/// `UTC` or `GMT`, optionally followed by a numeric offset
pub fn parse_named_zone(input: &mut &str) -> ModalResult<Zone> {
    (
        alt((literal(Caseless("utc")), literal(Caseless("gmt")))),
        opt(parse_numeric_offset),
    )
        .map(|(_, offset)| offset.map_or(Zone::Utc, Zone::Fixed))
        .parse_next(input)
}

/// Separator between free-form date parts: spaces, commas and dots
pub fn parse_gap(input: &mut &str) -> ModalResult<()> {
    take_while(0.., [' ', '\t', ',', '.']).void().parse_next(input)
}
