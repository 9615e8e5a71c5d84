//! DateTime formatting module
//!
//! This module renders instants in the lexical forms used by native date and time inputs.

mod conversion;
mod point_in_time;
mod utils;

// Re-export the public interface
pub use conversion::{convert_timestamp_ms_to_instant, instant_to_timestamp_ms};
pub use point_in_time::{format_date, format_iso_local, format_time};
