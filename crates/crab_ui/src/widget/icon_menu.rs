//! Flow of bordered icon buttons.
//!
//! Each icon sits in its own outlined panel. Hovering a panel switches it to
//! the hover border; pressing it flashes the pressed border, emits
//! `icon_pressed(index)` and schedules a restore. Restores are deferred tasks
//! keyed by panel id, so replacing the icons or dropping the menu cancels
//! them before they can touch a panel that no longer exists.

use super::{Widget, WidgetId, WidgetResponse, WidgetState};
use crate::config::WidgetConfig;
use crate::deferred::DeferredQueue;
use crate::error::{UiError, UiResult};
use crate::input::{MouseButton, PointerEvent};
use crate::render::RenderCommand;
use crate::signal::{ConnectionId, Signal};
use crate::style::{Color, StyleBox, StyleSlot};
use crab_resources::IconHandle;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IconPanel {
    id: WidgetId,
    icon: IconHandle,
    hovered: bool,
    border: StyleSlot,
}

/// A wrapping row of icon buttons with flashing borders.
#[derive(Debug)]
pub struct IconMenu {
    state: WidgetState,
    panels: Vec<IconPanel>,
    icon_size: u32,
    icon_spacing: u32,
    normal_border: Color,
    hover_border: Color,
    pressed_border: Color,
    border_width: u32,
    corner_radius: u32,
    border_blend: bool,
    flash_delay: f32,
    restores: DeferredQueue<WidgetId, ()>,
    icon_pressed: Signal<usize>,
}

impl IconMenu {
    /// Creates an empty menu with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    /// Creates an empty menu using `config` for icon size and flash delay.
    #[must_use]
    pub fn with_config(config: &WidgetConfig) -> Self {
        Self {
            state: WidgetState::new(),
            panels: Vec::new(),
            icon_size: config.button_icon_size,
            icon_spacing: 0,
            normal_border: Color::TRANSPARENT,
            hover_border: Color::BORDER,
            pressed_border: Color::WHITE,
            border_width: 2,
            corner_radius: 0,
            border_blend: false,
            flash_delay: config.icon_flash_delay,
            restores: DeferredQueue::new(),
            icon_pressed: Signal::new(),
        }
    }

    /// Replaces every icon panel. Pending restores of the old panels are
    /// cancelled.
    pub fn set_icons(&mut self, icons: impl IntoIterator<Item = IconHandle>) {
        let cancelled = self.restores.pending();
        self.restores.clear();
        if cancelled > 0 {
            tracing::debug!(cancelled, "cancelled icon flash restores");
        }
        self.panels = icons
            .into_iter()
            .map(|icon| IconPanel {
                id: WidgetId::next(),
                icon,
                hovered: false,
                border: StyleSlot::Normal,
            })
            .collect();
        self.state.mark_dirty();
    }

    /// Returns the number of icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns true if the menu has no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Returns the widget id of panel `index`.
    #[must_use]
    pub fn panel_id(&self, index: usize) -> Option<WidgetId> {
        self.panels.get(index).map(|p| p.id)
    }

    /// Returns the border slot panel `index` is showing.
    #[must_use]
    pub fn panel_border(&self, index: usize) -> Option<StyleSlot> {
        self.panels.get(index).map(|p| p.border)
    }

    /// Returns the outline style of panel `index`.
    #[must_use]
    pub fn panel_style(&self, index: usize) -> Option<StyleBox> {
        self.panels.get(index).map(|p| self.outline(p.border))
    }

    /// Returns true if a restore is pending for panel `index`.
    #[must_use]
    pub fn is_flashing(&self, index: usize) -> bool {
        self.panels
            .get(index)
            .is_some_and(|p| self.restores.is_scheduled(p.id))
    }

    /// Sets the icon edge length of every panel.
    pub fn set_icon_size(&mut self, size: u32) {
        self.icon_size = size;
        self.state.mark_dirty();
    }

    /// Sets the gap between panels.
    pub fn set_icon_spacing(&mut self, spacing: u32) {
        self.icon_spacing = spacing;
        self.state.mark_dirty();
    }

    /// Returns the gap between panels.
    #[must_use]
    pub fn icon_spacing(&self) -> u32 {
        self.icon_spacing
    }

    /// Sets the border color of one slot.
    ///
    /// Panels showing that slot pick it up immediately.
    pub fn set_border_color(&mut self, slot: StyleSlot, color: Color) {
        match slot {
            StyleSlot::Normal => self.normal_border = color,
            StyleSlot::Hover => self.hover_border = color,
            StyleSlot::Pressed => self.pressed_border = color,
        }
        self.state.mark_dirty();
    }

    /// Sets the border width of every panel.
    pub fn set_border_width(&mut self, width: u32) {
        self.border_width = width;
        self.state.mark_dirty();
    }

    /// Sets the corner radius of every panel.
    pub fn set_corner_radius(&mut self, radius: u32) {
        self.corner_radius = radius;
        self.state.mark_dirty();
    }

    /// Sets border blending on every panel.
    pub fn set_border_blend(&mut self, blend: bool) {
        self.border_blend = blend;
        self.state.mark_dirty();
    }

    /// Sets how long the pressed border stays up, in seconds.
    pub fn set_flash_delay(&mut self, seconds: f32) {
        self.flash_delay = seconds;
    }

    /// Delivers a pointer event to panel `index`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::IndexOutOfRange`] if there is no such panel.
    pub fn dispatch(&mut self, index: usize, event: &PointerEvent) -> UiResult<WidgetResponse> {
        let len = self.panels.len();
        let panel = self
            .panels
            .get_mut(index)
            .ok_or(UiError::IndexOutOfRange { index, len })?;

        let mut response = WidgetResponse::default();
        match *event {
            PointerEvent::Entered => {
                panel.hovered = true;
                panel.border = StyleSlot::Hover;
                response.hovered = true;
            }
            PointerEvent::Exited => {
                panel.hovered = false;
                panel.border = StyleSlot::Normal;
                response.unhovered = true;
            }
            PointerEvent::Button { button: MouseButton::Left, pressed: false } => {
                panel.border = StyleSlot::Pressed;
                let id = panel.id;
                self.restores.schedule(id, self.flash_delay, ());
                self.icon_pressed.emit(&index);
                response.pressed = true;
            }
            PointerEvent::Button { .. } => {}
        }
        self.state.mark_dirty();
        Ok(response)
    }

    /// Advances flash timers by `dt` seconds.
    ///
    /// A due panel returns to the hover border if the pointer is still over
    /// it, otherwise to the normal border.
    pub fn advance(&mut self, dt: f32) {
        for (id, ()) in self.restores.advance(dt) {
            if let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) {
                panel.border = if panel.hovered {
                    StyleSlot::Hover
                } else {
                    StyleSlot::Normal
                };
                self.state.mark_dirty();
            }
        }
    }

    /// Connects a slot to `icon_pressed`.
    pub fn on_icon_pressed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&usize) + 'static,
    {
        self.icon_pressed.connect(slot)
    }

    fn outline(&self, slot: StyleSlot) -> StyleBox {
        let color = match slot {
            StyleSlot::Normal => self.normal_border,
            StyleSlot::Hover => self.hover_border,
            StyleSlot::Pressed => self.pressed_border,
        };
        StyleBox {
            border_blend: self.border_blend,
            ..StyleBox::outline(color, self.border_width, self.corner_radius)
        }
    }
}

impl Default for IconMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for IconMenu {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// Menu-level events carry no panel; see [`IconMenu::dispatch`].
    fn handle_input(&mut self, _event: &PointerEvent) -> WidgetResponse {
        WidgetResponse::default()
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        for panel in &self.panels {
            commands.push(RenderCommand::Panel {
                widget: panel.id,
                style: Some(Arc::new(self.outline(panel.border))),
                modulate: Color::WHITE,
            });
            commands.push(RenderCommand::Icon {
                widget: panel.id,
                icon: panel.icon,
                size: self.icon_size,
                modulate: Color::WHITE,
            });
        }
    }
}
