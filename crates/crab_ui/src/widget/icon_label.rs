//! Icon followed by a line of text.

use super::binding::ResourceBinding;
use super::{Widget, WidgetResponse, WidgetState};
use crate::input::PointerEvent;
use crate::render::RenderCommand;
use crate::style::Color;
use crab_resources::{DisplayResource, IconHandle};

/// An icon and a label, optionally bound to a resource.
///
/// When bound, edits flow both ways: setting text or icon on the label writes
/// the resource (only if the value differs), and resource changes are picked
/// up on the next [`Widget::apply`].
#[derive(Debug)]
pub struct IconLabel {
    state: WidgetState,
    text: String,
    icon: Option<IconHandle>,
    icon_size: u32,
    icon_visible: bool,
    tooltip: String,
    binding: ResourceBinding,
}

impl IconLabel {
    /// Default icon edge length.
    pub const DEFAULT_ICON_SIZE: u32 = 24;

    /// Creates an empty label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WidgetState::new(),
            text: String::new(),
            icon: None,
            icon_size: Self::DEFAULT_ICON_SIZE,
            icon_visible: false,
            tooltip: String::new(),
            binding: ResourceBinding::default(),
        }
    }

    /// Creates a label bound to `resource`.
    #[must_use]
    pub fn with_resource(resource: DisplayResource) -> Self {
        let mut label = Self::new();
        label.set_resource(Some(resource));
        label
    }

    /// Returns the label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the label text, writing it back to the bound resource.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Some(resource) = self.binding.resource() {
            if resource.display_name() != self.text {
                resource.set_display_name(self.text.clone());
            }
        }
        self.state.mark_dirty();
    }

    /// Returns the icon.
    #[must_use]
    pub fn icon(&self) -> Option<IconHandle> {
        self.icon
    }

    /// Sets the icon, writing it back to the bound resource.
    ///
    /// The icon is shown only while one is set.
    pub fn set_icon(&mut self, icon: Option<IconHandle>) {
        self.icon = icon;
        self.icon_visible = icon.is_some();
        if let Some(resource) = self.binding.resource() {
            if resource.icon() != icon {
                resource.set_icon(icon);
            }
        }
        self.state.mark_dirty();
    }

    /// Returns true if the icon is drawn.
    #[must_use]
    pub fn is_icon_visible(&self) -> bool {
        self.icon_visible
    }

    /// Shows or hides the icon.
    pub fn set_icon_visible(&mut self, visible: bool) {
        self.icon_visible = visible;
        self.state.mark_dirty();
    }

    /// Returns the icon edge length.
    #[must_use]
    pub fn icon_size(&self) -> u32 {
        self.icon_size
    }

    /// Sets the icon edge length.
    pub fn set_icon_size(&mut self, size: u32) {
        self.icon_size = size;
        self.state.mark_dirty();
    }

    /// Returns the icon tooltip (the resource description).
    #[must_use]
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Returns the bound resource.
    #[must_use]
    pub fn resource(&self) -> Option<&DisplayResource> {
        self.binding.resource()
    }

    /// Binds to `resource`, or clears text and icon for `None`.
    pub fn set_resource(&mut self, resource: Option<DisplayResource>) {
        self.binding.bind(resource);
        match self.binding.resource().cloned() {
            Some(resource) => {
                self.apply_resource(&resource);
                self.tooltip = resource.description();
            }
            None => {
                self.set_text(String::new());
                self.set_icon(None);
                self.tooltip.clear();
            }
        }
    }

    /// Copies name and icon from `resource` into the label.
    pub fn apply_resource(&mut self, resource: &DisplayResource) {
        let data = resource.snapshot();
        self.set_text(data.display_name);
        self.set_icon(data.icon);
    }
}

impl Default for IconLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for IconLabel {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle_input(&mut self, event: &PointerEvent) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        match event {
            PointerEvent::Entered => response.hovered = true,
            PointerEvent::Exited => response.unhovered = true,
            PointerEvent::Button { .. } => {}
        }
        response
    }

    fn apply(&mut self) -> bool {
        if self.binding.take_stale() {
            if let Some(resource) = self.binding.resource().cloned() {
                self.apply_resource(&resource);
                self.tooltip = resource.description();
            }
        }
        self.state.take_dirty()
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if let (true, Some(icon)) = (self.icon_visible, self.icon) {
            commands.push(RenderCommand::Icon {
                widget: self.state.id,
                icon,
                size: self.icon_size,
                modulate: Color::WHITE,
            });
        }
        commands.push(RenderCommand::Text {
            widget: self.state.id,
            text: self.text.clone(),
            font_size: 0,
            color: Color::WHITE,
        });
    }
}
