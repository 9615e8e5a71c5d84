//! Date/time string parsing module
//!
//! This module is responsible for turning free text (cached display strings, clipboard contents)
//! and native input values into instants. The main entry point is the `parse_instant` function.

mod combinators;
mod fields;
pub mod input;
mod instant;
mod tokens;

pub use fields::{DateTimeFields, TimeOfDay, Zone};
pub use input::value_as_number;
pub use instant::parse_instant;
