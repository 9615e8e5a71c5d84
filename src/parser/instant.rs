use chrono::FixedOffset;
use winnow::ModalResult;

use crate::error::ParseError;
use crate::parser::combinators::{parse_free_form, parse_iso_datetime};
use crate::parser::fields::DateTimeFields;
use crate::types::Instant;

/// Parse a date/time string into an instant
///
/// This is the main public API entry point of this module. ISO-8601 strings are tried first,
/// then human-written forms such as `March 3, 2023` or `03/03/2023 10:30 PM`. Readings without
/// a zone are anchored at `local_offset`, except bare ISO dates which are UTC.
///
/// # Arguments
/// * `input_str` - The text to parse; surrounding whitespace is ignored
/// * `local_offset` - The viewer's UTC offset
///
/// # Returns
/// * `Result<Instant, ParseError>` - The instant, or why the text is not one
///
/// # Examples
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use date_picker_cell::parser::parse_instant;
///
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let instant = parse_instant("2022-07-04", utc).unwrap();
/// assert_eq!(instant, Utc.with_ymd_and_hms(2022, 7, 4, 0, 0, 0).unwrap());
/// ```
pub fn parse_instant(input_str: &str, local_offset: FixedOffset) -> Result<Instant, ParseError> {
    let trimmed = input_str.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let fields = parse_complete(trimmed, parse_iso_datetime)
        .or_else(|| parse_complete(trimmed, parse_free_form))
        .ok_or_else(|| ParseError::Unrecognized(trimmed.to_string()))?;

    fields.resolve(local_offset, trimmed)
}

/// Run `parser` over the whole of `text`; trailing input counts as a mismatch
fn parse_complete<P>(text: &str, mut parser: P) -> Option<DateTimeFields>
where
    P: for<'s> FnMut(&mut &'s str) -> ModalResult<DateTimeFields>,
{
    let mut input = text;
    let fields = parser(&mut input).ok()?;
    input.is_empty().then_some(fields)
}
