//! Overlay editor for date picker cells
//!
//! The editor is seeded from a record, described to the host as a native input, and folds each
//! change event from that input back into a new record.

use chrono::FixedOffset;
use log::{debug, trace, warn};

use crate::cell::record::{CellRecord, RecordDelta};
use crate::clock::{Clock, wall_clock_instant};
use crate::error::CellError;
use crate::formatter::{convert_timestamp_ms_to_instant, format_value_for_input};
use crate::parser::{parse_instant, value_as_number};
use crate::settings::EditorSettings;
use crate::types::{FormatKind, Instant};

/// A change event reported by the native input
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    /// The input's string value; empty when the user cleared it
    pub value: String,
    /// The input's numeric value in milliseconds, NaN when it has none
    pub value_as_number: f64,
}

impl InputEvent {
    pub fn new(value: impl Into<String>, value_as_number: f64) -> Self {
        Self {
            value: value.into(),
            value_as_number,
        }
    }

    /// The event an input of type `kind` fires when it holds `value`
    pub fn from_value(kind: FormatKind, value: impl Into<String>) -> Self {
        let value = value.into();
        let value_as_number = value_as_number(kind, &value);
        Self {
            value,
            value_as_number,
        }
    }

    /// The event fired when the input's clear control wipes the value
    pub fn cleared() -> Self {
        Self::new("", f64::NAN)
    }

    pub fn is_cleared(&self) -> bool {
        self.value.is_empty()
    }
}

/// How the host should render the editor input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    pub input_type: FormatKind,
    pub value: String,
    pub required: bool,
    pub auto_focus: bool,
    pub min_height: u32,
}

/// The record produced by an edit, and what had to be recovered from on the way
#[derive(Debug, Clone, PartialEq)]
pub struct CellUpdate {
    pub record: CellRecord,
    pub recovered: Option<CellError>,
}

impl CellUpdate {
    fn clean(record: CellRecord) -> Self {
        Self {
            record,
            recovered: None,
        }
    }

    fn recovered(record: CellRecord, error: CellError) -> Self {
        Self {
            record,
            recovered: Some(error),
        }
    }
}

/// The instant an editor opens on
///
/// Without a stored instant this is the local wall-clock time expressed at UTC, so the seeded
/// input shows what the viewer's clock shows.
pub fn seed_instant(record: &CellRecord, clock: &impl Clock) -> Instant {
    record
        .instant()
        .unwrap_or_else(|| wall_clock_instant(clock.now(), clock.local_offset()))
}

/// An open editor bound to one cell
#[derive(Debug, Clone)]
pub struct DatePickerEditor {
    record: CellRecord,
    seed: Instant,
    value: String,
    local_offset: FixedOffset,
    settings: EditorSettings,
}

impl DatePickerEditor {
    pub fn open(record: CellRecord, clock: &impl Clock, settings: &EditorSettings) -> Self {
        let seed = seed_instant(&record, clock);
        let value = format_value_for_input(record.format(), &seed);
        trace!("Opening {} editor seeded with {value}", record.format());
        Self {
            record,
            seed,
            value,
            local_offset: clock.local_offset(),
            settings: settings.clone(),
        }
    }

    /// The record as of the latest commit
    pub fn record(&self) -> &CellRecord {
        &self.record
    }

    pub fn seed(&self) -> Instant {
        self.seed
    }

    /// The string the input currently shows
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn props(&self) -> InputProps {
        InputProps {
            input_type: self.record.format(),
            value: self.value.clone(),
            required: self.settings.required,
            auto_focus: self.settings.auto_focus,
            min_height: self.settings.min_height,
        }
    }

    /// Fold a change event into a new record
    ///
    /// The returned record becomes the base for the next event.
    pub fn on_change(&mut self, event: &InputEvent) -> CellUpdate {
        let update = if event.is_cleared() {
            reconcile_cleared(&self.record, self.local_offset)
        } else {
            reconcile_value(&self.record, self.seed, &self.value, event)
        };

        self.record = update.record.clone();
        if let Some(instant) = self.record.instant() {
            self.seed = instant;
        }
        self.value = format_value_for_input(self.record.format(), &self.seed);
        update
    }
}

/// The input was cleared: fall back to the stored instant, else to the display text
fn reconcile_cleared(record: &CellRecord, local_offset: FixedOffset) -> CellUpdate {
    if record.instant().is_some() {
        return CellUpdate::clean(record.apply(RecordDelta::new()));
    }

    match parse_instant(record.display_date(), local_offset) {
        Ok(instant) => CellUpdate::clean(record.apply(RecordDelta::new().instant(Some(instant)))),
        Err(err) => {
            warn!(
                "Cannot restore cleared date picker value from '{}': {err}",
                record.display_date()
            );
            let record = record.apply(RecordDelta::new().display_date(err.to_string()));
            CellUpdate::recovered(record, CellError::UnparseableClearedValue(err))
        }
    }
}

/// The input holds a value: take its numeric timestamp, or keep the seed
fn reconcile_value(
    record: &CellRecord,
    seed: Instant,
    seed_value: &str,
    event: &InputEvent,
) -> CellUpdate {
    if event.value == seed_value {
        return CellUpdate::clean(record.apply(RecordDelta::new().instant(Some(seed))));
    }

    match convert_timestamp_ms_to_instant(event.value_as_number) {
        Some(instant) => CellUpdate::clean(record.apply(RecordDelta::new().instant(Some(instant)))),
        None => {
            debug!(
                "Input '{}' reported timestamp {}, keeping seed {seed}",
                event.value, event.value_as_number
            );
            let record = record.apply(RecordDelta::new().instant(Some(seed)));
            CellUpdate::recovered(record, CellError::InvalidTimestamp(event.value_as_number))
        }
    }
}
