//! Scrollable block of text.

use super::{Widget, WidgetResponse, WidgetState};
use crate::input::PointerEvent;
use crate::render::RenderCommand;
use crate::style::Color;

/// A text block that fills its scroll viewport.
#[derive(Debug, Clone)]
pub struct ScrollText {
    state: WidgetState,
    text: String,
    font_size: u32,
    font_color: Color,
    viewport: (f32, f32),
}

impl ScrollText {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: u32 = 12;

    /// Creates an empty text block.
    #[must_use]
    pub fn new() -> Self {
        Self::with_font_size(Self::DEFAULT_FONT_SIZE)
    }

    /// Creates an empty text block with a font size.
    #[must_use]
    pub fn with_font_size(font_size: u32) -> Self {
        Self {
            state: WidgetState::new(),
            text: String::new(),
            font_size,
            font_color: Color::WHITE,
            viewport: (0.0, 0.0),
        }
    }

    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.state.mark_dirty();
    }

    /// Returns the font size.
    #[must_use]
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Sets the font size.
    pub fn set_font_size(&mut self, font_size: u32) {
        self.font_size = font_size;
        self.state.mark_dirty();
    }

    /// Sets the text color.
    pub fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
        self.state.mark_dirty();
    }

    /// Minimum size of the text, kept equal to the viewport.
    #[must_use]
    pub fn text_min_size(&self) -> (f32, f32) {
        self.viewport
    }

    /// Called by the host when the scroll viewport changes size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.state.mark_dirty();
    }
}

impl Default for ScrollText {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ScrollText {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle_input(&mut self, _event: &PointerEvent) -> WidgetResponse {
        WidgetResponse::default()
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        commands.push(RenderCommand::Text {
            widget: self.state.id,
            text: self.text.clone(),
            font_size: self.font_size,
            color: self.font_color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let text = ScrollText::new();
        assert_eq!(text.font_size(), 12);
        assert_eq!(text.text(), "");
    }

    #[test]
    fn test_resize_fills_viewport() {
        let mut text = ScrollText::new();
        text.apply();

        text.resize(320.0, 90.0);
        assert_eq!(text.text_min_size(), (320.0, 90.0));
        assert!(text.apply());
    }

    #[test]
    fn test_render_uses_font() {
        let mut text = ScrollText::with_font_size(16);
        text.set_text("Lore");
        text.set_font_color(Color::DIMMED);

        let mut commands = Vec::new();
        text.render(&mut commands);

        assert_eq!(
            commands,
            [RenderCommand::Text {
                widget: text.id(),
                text: "Lore".to_owned(),
                font_size: 16,
                color: Color::DIMMED,
            }]
        );
    }
}
