//! Type definitions shared by the formatter, parser and cell controller
//!
//! Instants are always UTC; a cell's format discriminator decides which input grammar is used.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// An absolute point in time, observed at reference offset zero
pub type Instant = DateTime<Utc>;

/// Discriminator tag identifying date picker payloads in the host grid
pub const DATE_PICKER_CELL_KIND: &str = "date-picker-cell";

/// Largest distance from the epoch, in milliseconds, that a widget timestamp may have
pub const MAX_TIMESTAMP_MS: f64 = 8.64e15;

/// Which native input variant a cell is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// Clock time, `HH:mm:ss.SSS`
    Time,
    /// Combined date and time without a zone suffix
    DatetimeLocal,
}

impl FormatKind {
    /// The input `type` attribute for this variant
    pub fn input_type(self) -> &'static str {
        match self {
            FormatKind::Date => "date",
            FormatKind::Time => "time",
            FormatKind::DatetimeLocal => "datetime-local",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_type())
    }
}

impl FromStr for FormatKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(FormatKind::Date),
            "time" => Ok(FormatKind::Time),
            "datetime-local" => Ok(FormatKind::DatetimeLocal),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// Horizontal alignment of text drawn inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAlign {
    #[default]
    Left,
    Right,
    Center,
}
