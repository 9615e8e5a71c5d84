use serde::{Deserialize, Serialize};

use crate::formatter::format_value_for_input;
use crate::types::{FormatKind, Instant};

/// The persisted value of one date picker cell
///
/// Records are immutable; every edit builds a new one through [`CellRecord::apply`]. The format
/// chosen at construction can never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    #[serde(rename = "date", default)]
    instant: Option<Instant>,
    display_date: String,
    format: FormatKind,
}

impl CellRecord {
    pub fn new(format: FormatKind, instant: Option<Instant>, display_date: impl Into<String>) -> Self {
        Self {
            instant,
            display_date: display_date.into(),
            format,
        }
    }

    /// A record with no instant yet, showing `display_date`
    pub fn unset(format: FormatKind, display_date: impl Into<String>) -> Self {
        Self::new(format, None, display_date)
    }

    /// A record whose display text is the input rendering of `instant`
    pub fn from_instant(format: FormatKind, instant: Instant) -> Self {
        let display_date = format_value_for_input(format, &instant);
        Self::new(format, Some(instant), display_date)
    }

    pub fn instant(&self) -> Option<Instant> {
        self.instant
    }

    pub fn display_date(&self) -> &str {
        &self.display_date
    }

    pub fn format(&self) -> FormatKind {
        self.format
    }

    /// Build the next version of this record
    pub fn apply(&self, delta: RecordDelta) -> Self {
        let RecordDelta {
            instant,
            display_date,
        } = delta;
        Self {
            instant: instant.unwrap_or(self.instant),
            display_date: display_date.unwrap_or_else(|| self.display_date.clone()),
            format: self.format,
        }
    }
}

/// Fields to replace when deriving a new [`CellRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDelta {
    instant: Option<Option<Instant>>,
    display_date: Option<String>,
}

impl RecordDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the instant, including clearing it with `None`
    pub fn instant(mut self, instant: Option<Instant>) -> Self {
        self.instant = Some(instant);
        self
    }

    pub fn display_date(mut self, display_date: impl Into<String>) -> Self {
        self.display_date = Some(display_date.into());
        self
    }
}
