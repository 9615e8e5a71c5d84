//! Date picker cell controller
//!
//! Draws the cached display text, opens a native date/time editor seeded from the record and
//! applies pasted text.

pub mod editor;
pub mod paste;
mod record;

pub use editor::{CellUpdate, DatePickerEditor, InputEvent, InputProps, seed_instant};
pub use paste::paste;
pub use record::{CellRecord, RecordDelta};

use crate::clock::{Clock, SystemClock};
use crate::grid::{CellPayload, CustomCell, CustomRenderer, DrawContext};
use crate::settings::PickerSettings;
use crate::types::DATE_PICKER_CELL_KIND;

/// Renderer for `date-picker-cell` payloads
#[derive(Debug, Clone)]
pub struct DatePickerRenderer<C = SystemClock> {
    clock: C,
    settings: PickerSettings,
}

impl DatePickerRenderer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DatePickerRenderer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DatePickerRenderer<C> {
    /// A renderer using the embedded settings and the given clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            settings: PickerSettings::global().clone(),
        }
    }

    pub fn with_settings(mut self, settings: PickerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> CustomRenderer for DatePickerRenderer<C> {
    type Data = CellRecord;
    type Editor = DatePickerEditor;

    fn kind(&self) -> &'static str {
        DATE_PICKER_CELL_KIND
    }

    fn is_match<'a>(&self, payload: &'a CellPayload) -> Option<&'a CellRecord> {
        match payload {
            CellPayload::DatePicker(record) => Some(record),
            CellPayload::Other => None,
        }
    }

    fn draw(&self, ctx: &mut dyn DrawContext, cell: &CustomCell<CellRecord>) -> bool {
        let align = cell
            .content_align
            .unwrap_or(self.settings.draw.default_align);
        ctx.draw_text(cell.data.display_date(), align);
        true
    }

    fn provide_editor(&self, cell: &CustomCell<CellRecord>) -> DatePickerEditor {
        DatePickerEditor::open(cell.data.clone(), &self.clock, &self.settings.editor)
    }

    fn on_paste(&self, value: &str, data: &CellRecord) -> CellRecord {
        paste(value, data, self.clock.local_offset(), &self.settings.paste).record
    }
}
