//! Error types for date picker cells

use thiserror::Error;

/// Failure to turn a string into an instant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Nothing but whitespace was supplied
    #[error("Invalid Date: empty input")]
    Empty,

    /// No supported date/time grammar matched
    #[error("Invalid Date: unrecognized date/time string '{0}'")]
    Unrecognized(String),

    /// The grammar matched but a calendar or clock field is impossible
    #[error("Invalid Date: {field} out of range in '{input}'")]
    FieldOutOfRange { field: &'static str, input: String },

    /// The resulting instant lies outside the representable time range
    #[error("Invalid Date: '{0}' is outside the representable time range")]
    OutOfRange(String),

    /// A format discriminator other than `date`, `time` or `datetime-local`
    #[error("Unknown date picker format: '{0}'")]
    UnknownFormat(String),
}

/// Conditions the cell controller recovers from locally
///
/// None of these reach the host grid as failures; they are reported alongside the record that
/// replaced the failed value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    /// The field was cleared, no instant was cached and the display text is not a date
    #[error("cannot restore cleared value: {0}")]
    UnparseableClearedValue(#[source] ParseError),

    /// The widget reported a non-finite or out-of-range timestamp
    #[error("invalid timestamp from input widget: {0}")]
    InvalidTimestamp(f64),

    /// Pasted text could not be read as a date
    #[error("pasted text is not a date: {0}")]
    UnparseablePaste(#[source] ParseError),
}

/// Failure to load picker settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Error parsing picker settings: {0}")]
    Parse(String),
}
