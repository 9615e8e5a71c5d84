use chrono::FixedOffset;
use log::debug;

use crate::cell::editor::CellUpdate;
use crate::cell::record::{CellRecord, RecordDelta};
use crate::error::CellError;
use crate::formatter::format_value_for_input;
use crate::parser::parse_instant;
use crate::settings::PasteSettings;

/// Apply clipboard text to a record
///
/// Only the instant is replaced: text that is not a date leaves it unset. The display text is
/// kept as is unless `settings.refresh_display` asks for it to follow a successful paste.
pub fn paste(
    raw_text: &str,
    record: &CellRecord,
    local_offset: FixedOffset,
    settings: &PasteSettings,
) -> CellUpdate {
    match parse_instant(raw_text, local_offset) {
        Ok(instant) => {
            let mut delta = RecordDelta::new().instant(Some(instant));
            if settings.refresh_display {
                delta = delta.display_date(format_value_for_input(record.format(), &instant));
            }
            CellUpdate {
                record: record.apply(delta),
                recovered: None,
            }
        }
        Err(err) => {
            debug!("Ignoring pasted text '{raw_text}': {err}");
            CellUpdate {
                record: record.apply(RecordDelta::new().instant(None)),
                recovered: Some(CellError::UnparseablePaste(err)),
            }
        }
    }
}
