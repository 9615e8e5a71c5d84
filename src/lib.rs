pub mod cell;
pub mod clock;
pub mod error;
pub mod formatter;
pub mod grid;
pub mod parser;
pub mod settings;
pub mod types;

// Main API
pub use cell::{CellRecord, DatePickerEditor, DatePickerRenderer, InputEvent};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CellError, ParseError, SettingsError};
pub use formatter::format_value_for_input;
pub use grid::{CellPayload, CustomCell, CustomRenderer, DrawContext};
pub use parser::parse_instant;
pub use settings::PickerSettings;
pub use types::*;

#[cfg(test)]
mod tests;
