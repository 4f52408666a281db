//! Section header.

use super::{Widget, WidgetResponse, WidgetState};
use crate::input::PointerEvent;
use crate::render::RenderCommand;
use crate::style::Color;

/// Large header text above a separator line.
#[derive(Debug, Clone)]
pub struct HeaderSection {
    state: WidgetState,
    text: String,
    font_size: u32,
}

impl HeaderSection {
    /// Default header font size.
    pub const DEFAULT_FONT_SIZE: u32 = 24;

    /// Creates a header.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            state: WidgetState::new(),
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
        }
    }

    /// Overrides the font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns the header text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the header text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.state.mark_dirty();
    }
}

impl Widget for HeaderSection {
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
            color: Color::WHITE,
        });
        commands.push(RenderCommand::Separator { widget: self.state.id });
    }
}
