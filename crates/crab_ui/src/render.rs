//! Render commands.
//!
//! Widgets describe what to draw; the host toolkit does the drawing.

use crate::style::{Color, StyleBox};
use crate::widget::WidgetId;
use crab_resources::IconHandle;
use std::sync::Arc;

/// A draw request emitted by a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Styled panel background.
    Panel {
        /// Widget that owns the panel.
        widget: WidgetId,
        /// Resolved style. `None` leaves the host theme default.
        style: Option<Arc<StyleBox>>,
        /// Color multiplied over the panel and its content.
        modulate: Color,
    },
    /// Line of text.
    Text {
        /// Widget that owns the text.
        widget: WidgetId,
        /// Text content.
        text: String,
        /// Font size.
        font_size: u32,
        /// Text color.
        color: Color,
    },
    /// Square icon.
    Icon {
        /// Widget that owns the icon.
        widget: WidgetId,
        /// Icon texture.
        icon: IconHandle,
        /// Edge length.
        size: u32,
        /// Tint.
        modulate: Color,
    },
    /// Horizontal separator line.
    Separator {
        /// Widget that owns the separator.
        widget: WidgetId,
    },
}

impl RenderCommand {
    /// Returns the widget that emitted this command.
    #[must_use]
    pub fn widget(&self) -> WidgetId {
        match self {
            Self::Panel { widget, .. }
            | Self::Text { widget, .. }
            | Self::Icon { widget, .. }
            | Self::Separator { widget } => *widget,
        }
    }
}
