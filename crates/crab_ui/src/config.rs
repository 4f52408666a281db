//! # Widget Configuration
//!
//! Widget defaults, loaded once at startup from TOML. Every field is
//! optional in the file.
//!
//! ```toml
//! panel_icon_size = 32
//! button_icon_size = 48
//! icon_flash_delay = 0.1
//! left_click = "pressed"
//! right_click = "released"
//! disabled_modulate = 0x606060FF
//! ```

use crate::error::{UiError, UiResult};
use crate::input::ClickPolicy;
use crate::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied to newly created widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Icon edge length inside display panels.
    pub panel_icon_size: u32,
    /// Icon edge length inside resource buttons.
    pub button_icon_size: u32,
    /// Icon edge length inside icon labels.
    pub label_icon_size: u32,
    /// Seconds an icon menu panel keeps its pressed border.
    pub icon_flash_delay: f32,
    /// When a left click fires `button_pressed`.
    pub left_click: ClickPolicy,
    /// When a right click fires `button_right_clicked`.
    pub right_click: ClickPolicy,
    /// Modulate of enabled buttons (0xRRGGBBAA).
    pub enabled_modulate: u32,
    /// Modulate of disabled buttons (0xRRGGBBAA).
    pub disabled_modulate: u32,
    /// Font size of scroll text.
    pub scroll_text_font_size: u32,
    /// Font size of section headers.
    pub header_font_size: u32,
}

impl WidgetConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] if the text is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|err| UiError::InvalidConfig(err.to_string()))?;
        tracing::debug!(?config, "loaded widget config");
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            UiError::InvalidConfig(format!("{}: {err}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Modulate color of enabled buttons.
    #[must_use]
    pub fn enabled_color(&self) -> Color {
        Color::hex(self.enabled_modulate)
    }

    /// Modulate color of disabled buttons.
    #[must_use]
    pub fn disabled_color(&self) -> Color {
        Color::hex(self.disabled_modulate)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            panel_icon_size: 24,
            button_icon_size: 64,
            label_icon_size: 24,
            icon_flash_delay: 0.25,
            left_click: ClickPolicy::Released,
            right_click: ClickPolicy::Both,
            enabled_modulate: 0xFFFF_FFFF,
            disabled_modulate: 0x8484_84FF,
            scroll_text_font_size: 12,
            header_font_size: 24,
        }
    }
}
