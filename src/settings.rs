//! Picker settings
//!
//! This module loads the editor, draw and paste settings shared by every date picker cell.
//! The built-in values live in an embedded TOML file; callers may parse their own overrides.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::SettingsError;
use crate::types::ContentAlign;

type Result<T> = std::result::Result<T, SettingsError>;

/// How the editor input is presented
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Minimum input height in pixels
    pub min_height: u32,
    /// Whether the input refuses an empty value
    pub required: bool,
    /// Whether the input takes focus when opened
    pub auto_focus: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            min_height: 26,
            required: true,
            auto_focus: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// Alignment for cells that do not carry their own
    pub default_align: ContentAlign,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PasteSettings {
    /// Rewrite the display text with the formatted instant after a successful paste
    pub refresh_display: bool,
}

/// All settings for date picker cells
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub editor: EditorSettings,
    pub draw: DrawSettings,
    pub paste: PasteSettings,
}

// Global singleton for the embedded settings
static PICKER_SETTINGS: OnceLock<PickerSettings> = OnceLock::new();

impl PickerSettings {
    /// Parse settings from TOML; absent keys keep their built-in values
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    fn load_embedded() -> Self {
        let defaults_toml = include_str!("settings/defaults.toml");
        Self::from_toml_str(defaults_toml).unwrap_or_else(|e| {
            // Keep going with compiled-in values
            log::error!("Failed to load embedded picker settings: {e}");
            Self::default()
        })
    }

    /// The embedded settings, loaded on first use
    pub fn global() -> &'static PickerSettings {
        PICKER_SETTINGS.get_or_init(Self::load_embedded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_settings_match_defaults() {
        assert_eq!(PickerSettings::global(), &PickerSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = PickerSettings::from_toml_str(
            r#"
            [draw]
            default_align = "center"

            [paste]
            refresh_display = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.draw.default_align, ContentAlign::Center);
        assert!(settings.paste.refresh_display);
        assert_eq!(settings.editor, EditorSettings::default());
    }

    #[test]
    fn test_malformed_settings() {
        let err = PickerSettings::from_toml_str("[editor]\nmin_height = \"tall\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
