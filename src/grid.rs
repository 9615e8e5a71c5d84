//! Host grid interface
//!
//! The grid hands cells to renderers by payload tag, supplies a text drawing primitive, hosts
//! whatever editor a renderer provides and forwards clipboard pastes.

use serde::{Deserialize, Serialize};

use crate::cell::CellRecord;
use crate::types::ContentAlign;

/// Custom cell payloads, dispatched on their `kind` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CellPayload {
    /// Tagged with `DATE_PICKER_CELL_KIND`
    #[serde(rename = "date-picker-cell")]
    DatePicker(CellRecord),
    /// Any payload handled by some other renderer
    #[serde(other)]
    Other,
}

/// A custom cell as the grid stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCell<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_align: Option<ContentAlign>,
    #[serde(default)]
    pub copy_data: String,
}

impl<T> CustomCell<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_align: None,
            copy_data: String::new(),
        }
    }

    pub fn with_content_align(mut self, align: ContentAlign) -> Self {
        self.content_align = Some(align);
        self
    }

    /// Swap the payload, keeping the cell's presentation fields
    pub fn map_data<U>(self, f: impl FnOnce(T) -> U) -> CustomCell<U> {
        CustomCell {
            data: f(self.data),
            content_align: self.content_align,
            copy_data: self.copy_data,
        }
    }
}

/// Drawing surface offered by the grid for one cell
pub trait DrawContext {
    fn draw_text(&mut self, text: &str, align: ContentAlign);
}

/// A renderer for one kind of custom cell
pub trait CustomRenderer {
    type Data;
    type Editor;

    /// The payload tag this renderer handles
    fn kind(&self) -> &'static str;

    /// The renderer's data if `payload` belongs to it
    fn is_match<'a>(&self, payload: &'a CellPayload) -> Option<&'a Self::Data>;

    /// Paint the cell; `true` when the cell was handled
    fn draw(&self, ctx: &mut dyn DrawContext, cell: &CustomCell<Self::Data>) -> bool;

    fn provide_editor(&self, cell: &CustomCell<Self::Data>) -> Self::Editor;

    /// The data to store after `value` is pasted over `data`
    fn on_paste(&self, value: &str, data: &Self::Data) -> Self::Data;
}
