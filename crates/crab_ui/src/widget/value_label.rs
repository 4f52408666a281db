//! Icon label with a numeric value.

use super::icon_label::IconLabel;
use super::{Widget, WidgetResponse, WidgetState};
use crate::input::PointerEvent;
use crate::render::RenderCommand;
use crate::style::Color;
use crab_resources::{IconHandle, ValueDisplayResource};

/// An [`IconLabel`] followed by the value of a [`ValueDisplayResource`].
///
/// Text, icon and value all write back to the bound resource when they
/// differ from it.
#[derive(Debug)]
pub struct ValueLabel {
    state: WidgetState,
    label: IconLabel,
    value: f32,
    resource: Option<ValueDisplayResource>,
}

impl ValueLabel {
    /// Creates an unbound label showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WidgetState::new(),
            label: IconLabel::new(),
            value: 0.0,
            resource: None,
        }
    }

    /// Creates a label bound to `resource`.
    #[must_use]
    pub fn with_resource(resource: ValueDisplayResource) -> Self {
        let mut label = Self::new();
        label.set_resource(Some(resource));
        label
    }

    /// Returns the inner icon label.
    #[must_use]
    pub fn label(&self) -> &IconLabel {
        &self.label
    }

    /// Returns the label text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Sets the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    /// Sets the icon.
    pub fn set_icon(&mut self, icon: Option<IconHandle>) {
        self.label.set_icon(icon);
    }

    /// Sets the icon edge length.
    pub fn set_icon_size(&mut self, size: u32) {
        self.label.set_icon_size(size);
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the value as displayed.
    #[must_use]
    pub fn value_text(&self) -> String {
        format!("{}", self.value)
    }

    /// Sets the value, writing it back to the bound resource.
    #[allow(clippy::float_cmp)]
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        if let Some(resource) = &self.resource {
            if resource.value() != value {
                resource.set_value(value);
            }
        }
        self.state.mark_dirty();
    }

    /// Returns the bound resource.
    #[must_use]
    pub fn resource(&self) -> Option<&ValueDisplayResource> {
        self.resource.as_ref()
    }

    /// Binds to `resource`, or resets text, icon and value for `None`.
    pub fn set_resource(&mut self, resource: Option<ValueDisplayResource>) {
        self.resource = resource;
        match &self.resource {
            Some(resource) => {
                self.label.set_resource(Some(resource.as_display().clone()));
                self.value = resource.value();
            }
            None => {
                self.label.set_resource(None);
                self.value = 0.0;
            }
        }
        self.state.mark_dirty();
    }
}

impl Default for ValueLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ValueLabel {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle_input(&mut self, event: &PointerEvent) -> WidgetResponse {
        self.label.handle_input(event)
    }

    #[allow(clippy::float_cmp)]
    fn apply(&mut self) -> bool {
        let label_dirty = self.label.apply();
        if let Some(value) = self.resource.as_ref().map(ValueDisplayResource::value) {
            if value != self.value {
                self.value = value;
                self.state.mark_dirty();
            }
        }
        self.state.take_dirty() || label_dirty
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        self.label.render(commands);
        commands.push(RenderCommand::Text {
            widget: self.state.id,
            text: self.value_text(),
            font_size: 0,
            color: Color::WHITE,
        });
    }
}
