//! Icon button bound to a resource.

use super::binding::ResourceBinding;
use super::{Widget, WidgetFlags, WidgetResponse, WidgetState};
use crate::config::WidgetConfig;
use crate::input::{ClickPolicy, MouseButton, PointerEvent};
use crate::render::RenderCommand;
use crate::signal::{ConnectionId, Signal};
use crate::style::{Color, StyleBox};
use crab_resources::{DisplayResource, IconHandle};
use std::sync::Arc;

#[derive(Debug, Default)]
struct ButtonSignals {
    pressed: Signal<Option<DisplayResource>>,
    right_clicked: Signal<Option<DisplayResource>>,
    moused_over: Signal<Option<DisplayResource>>,
    moused_away: Signal<()>,
}

/// A bordered icon button showing one resource.
///
/// Clicks are filtered by the per-button [`ClickPolicy`] and suppressed while
/// the button is disabled. Hover events fire regardless. The pressed state is
/// purely visual: it swaps the border color and never emits.
#[derive(Debug)]
pub struct ResourceButton {
    state: WidgetState,
    binding: ResourceBinding,
    icon: Option<IconHandle>,
    tooltip: String,
    icon_size: u32,
    border_color: Color,
    pressed_border_color: Color,
    left_click: ClickPolicy,
    right_click: ClickPolicy,
    enabled_modulate: Color,
    disabled_modulate: Color,
    signals: ButtonSignals,
}

impl ResourceButton {
    /// Creates an unbound button with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    /// Creates an unbound button using `config` for icon size, click
    /// policies and modulate colors.
    #[must_use]
    pub fn with_config(config: &WidgetConfig) -> Self {
        Self {
            state: WidgetState::new(),
            binding: ResourceBinding::default(),
            icon: None,
            tooltip: String::new(),
            icon_size: config.button_icon_size,
            border_color: Color::TRANSPARENT,
            pressed_border_color: Color::WHITE,
            left_click: config.left_click,
            right_click: config.right_click,
            enabled_modulate: config.enabled_color(),
            disabled_modulate: config.disabled_color(),
            signals: ButtonSignals::default(),
        }
    }

    /// Returns the bound resource.
    #[must_use]
    pub fn resource(&self) -> Option<&DisplayResource> {
        self.binding.resource()
    }

    pub(crate) fn is_bound_to(&self, resource: &DisplayResource) -> bool {
        self.binding.is_bound_to(resource)
    }

    /// Binds the button to `resource`. `None` clears the icon.
    pub fn set_resource(&mut self, resource: Option<DisplayResource>) {
        self.binding.bind(resource);
        match self.binding.resource().cloned() {
            Some(resource) => self.show(&resource),
            None => self.icon = None,
        }
        self.state.mark_dirty();
    }

    /// Returns the icon.
    #[must_use]
    pub fn icon(&self) -> Option<IconHandle> {
        self.icon
    }

    /// Returns the tooltip (the resource's display name).
    #[must_use]
    pub fn tooltip(&self) -> &str {
        &self.tooltip
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

    /// Sets the border color. Transparent restores the theme border.
    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        self.state.mark_dirty();
    }

    /// Sets the border color used while pressed.
    pub fn set_pressed_border_color(&mut self, color: Color) {
        self.pressed_border_color = color;
        self.state.mark_dirty();
    }

    /// Returns true if clicks are dispatched.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Enables or disables click dispatch. Disabled buttons are dimmed.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.flags.assign(WidgetFlags::ENABLED, enabled);
        self.state.mark_dirty();
    }

    /// Returns the color multiplied over the button.
    #[must_use]
    pub fn modulate(&self) -> Color {
        if self.is_enabled() {
            self.enabled_modulate
        } else {
            self.disabled_modulate
        }
    }

    /// Returns true if the button shows its pressed border.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Shows or hides the pressed border.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.state.flags.assign(WidgetFlags::PRESSED, pressed);
        self.state.mark_dirty();
    }

    /// Toggles the pressed border.
    pub fn swap_pressed(&mut self) {
        let pressed = self.is_pressed();
        self.set_pressed(!pressed);
    }

    /// Sets when a left click fires `button_pressed`.
    pub fn set_left_click(&mut self, policy: ClickPolicy) {
        self.left_click = policy;
    }

    /// Sets when a right click fires `button_right_clicked`.
    pub fn set_right_click(&mut self, policy: ClickPolicy) {
        self.right_click = policy;
    }

    /// Returns the panel style for the current state.
    #[must_use]
    pub fn style(&self) -> StyleBox {
        let mut style = StyleBox {
            border_width: 8,
            corner_radius: 16,
            content_margin: 8.0,
            border_blend: true,
            ..StyleBox::default()
        };
        if !self.border_color.is_transparent() {
            style.border_color = self.border_color;
        }
        if self.is_pressed() {
            style.border_color = self.pressed_border_color;
        }
        style
    }

    /// Connects a slot to `button_pressed`.
    pub fn on_pressed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.pressed.connect(slot)
    }

    /// Connects a slot to `button_right_clicked`.
    pub fn on_right_clicked<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.right_clicked.connect(slot)
    }

    /// Connects a slot to `button_moused_over`.
    pub fn on_moused_over<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.moused_over.connect(slot)
    }

    /// Connects a slot to `button_moused_away`.
    pub fn on_moused_away<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&()) + 'static,
    {
        self.signals.moused_away.connect(slot)
    }

    /// Disconnects a slot from whichever signal holds it.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        self.signals.pressed.disconnect(id)
            || self.signals.right_clicked.disconnect(id)
            || self.signals.moused_over.disconnect(id)
            || self.signals.moused_away.disconnect(id)
    }

    /// Returns true if `id` is connected to any signal.
    #[must_use]
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.signals.pressed.is_connected(id)
            || self.signals.right_clicked.is_connected(id)
            || self.signals.moused_over.is_connected(id)
            || self.signals.moused_away.is_connected(id)
    }

    /// Returns the number of connected slots across all signals.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.signals.pressed.connection_count()
            + self.signals.right_clicked.connection_count()
            + self.signals.moused_over.connection_count()
            + self.signals.moused_away.connection_count()
    }

    fn show(&mut self, resource: &DisplayResource) {
        let data = resource.snapshot();
        self.tooltip = data.display_name;
        if data.icon.is_some() {
            self.icon = data.icon;
        }
    }
}

impl Default for ResourceButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ResourceButton {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle_input(&mut self, event: &PointerEvent) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        match *event {
            PointerEvent::Entered => {
                self.state.flags.set(WidgetFlags::HOVERED);
                let resource = self.binding.resource().cloned();
                self.signals.moused_over.emit(&resource);
                response.hovered = true;
            }
            PointerEvent::Exited => {
                self.state.flags.clear(WidgetFlags::HOVERED);
                self.signals.moused_away.emit(&());
                response.unhovered = true;
            }
            PointerEvent::Button { button, pressed } => {
                if !self.is_enabled() {
                    return response;
                }
                let resource = self.binding.resource().cloned();
                match button {
                    MouseButton::Left if self.left_click.fires(pressed) => {
                        self.signals.pressed.emit(&resource);
                        response.pressed = true;
                    }
                    MouseButton::Right if self.right_click.fires(pressed) => {
                        self.signals.right_clicked.emit(&resource);
                        response.right_clicked = true;
                    }
                    _ => {}
                }
            }
        }
        response
    }

    fn apply(&mut self) -> bool {
        if self.binding.take_stale() {
            if let Some(resource) = self.binding.resource().cloned() {
                self.show(&resource);
                self.state.mark_dirty();
            }
        }
        self.state.take_dirty()
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let modulate = self.modulate();
        commands.push(RenderCommand::Panel {
            widget: self.state.id,
            style: Some(Arc::new(self.style())),
            modulate,
        });
        if let Some(icon) = self.icon {
            commands.push(RenderCommand::Icon {
                widget: self.state.id,
                icon,
                size: self.icon_size,
                modulate,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting(button: &mut ResourceButton) -> (Rc<RefCell<u32>>, Rc<RefCell<u32>>) {
        let left = Rc::new(RefCell::new(0));
        let right = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&left);
        button.on_pressed(move |_| *sink.borrow_mut() += 1);
        let sink = Rc::clone(&right);
        button.on_right_clicked(move |_| *sink.borrow_mut() += 1);
        (left, right)
    }

    fn click(button: &mut ResourceButton, which: MouseButton) {
        button.handle_input(&PointerEvent::press(which));
        button.handle_input(&PointerEvent::release(which));
    }

    #[test]
    fn test_default_policies() {
        let mut button = ResourceButton::with_config(&WidgetConfig::default());
        let (left, right) = counting(&mut button);

        click(&mut button, MouseButton::Left);
        click(&mut button, MouseButton::Right);

        assert_eq!(*left.borrow(), 1);
        assert_eq!(*right.borrow(), 2);
    }

    #[test]
    fn test_press_policy_fires_on_down() {
        let mut button = ResourceButton::new();
        button.set_left_click(ClickPolicy::Pressed);
        button.set_right_click(ClickPolicy::Released);
        let (left, right) = counting(&mut button);

        button.handle_input(&PointerEvent::press(MouseButton::Left));
        assert_eq!(*left.borrow(), 1);
        button.handle_input(&PointerEvent::release(MouseButton::Left));
        assert_eq!(*left.borrow(), 1);

        click(&mut button, MouseButton::Right);
        assert_eq!(*right.borrow(), 1);
    }

    #[test]
    fn test_disabled_suppresses_clicks_not_hover() {
        let mut button = ResourceButton::new();
        let (left, right) = counting(&mut button);
        let hovered = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&hovered);
        button.on_moused_over(move |_| *sink.borrow_mut() = true);

        button.set_enabled(false);
        click(&mut button, MouseButton::Left);
        click(&mut button, MouseButton::Right);
        button.handle_input(&PointerEvent::Entered);

        assert_eq!(*left.borrow(), 0);
        assert_eq!(*right.borrow(), 0);
        assert!(*hovered.borrow());
        assert_eq!(button.modulate(), Color::hex(0x8484_84FF));

        button.set_enabled(true);
        assert_eq!(button.modulate(), Color::WHITE);
    }

    #[test]
    fn test_pressed_state_is_visual_only() {
        let mut button = ResourceButton::new();
        let (left, _) = counting(&mut button);
        button.set_border_color(Color::BLACK);
        button.set_pressed_border_color(Color::DIMMED);

        assert_eq!(button.style().border_color, Color::BLACK);
        button.swap_pressed();
        assert!(button.is_pressed());
        assert_eq!(button.style().border_color, Color::DIMMED);
        button.swap_pressed();
        assert_eq!(button.style().border_color, Color::BLACK);
        assert_eq!(*left.borrow(), 0);
    }

    #[test]
    fn test_default_style() {
        let mut button = ResourceButton::new();
        let style = button.style();
        assert_eq!(style.border_width, 8);
        assert_eq!(style.corner_radius, 16);
        assert!(style.border_blend);
        assert_eq!(style.border_color, Color::BORDER);

        button.set_border_color(Color::BLACK);
        button.set_border_color(Color::TRANSPARENT);
        assert_eq!(button.style().border_color, Color::BORDER);
    }

    #[test]
    fn test_binding_sets_tooltip_and_icon() {
        let gem = DisplayResource::new("Gem").with_icon(IconHandle::new(8));
        let mut button = ResourceButton::new();
        button.set_resource(Some(gem.clone()));

        assert_eq!(button.tooltip(), "Gem");
        assert_eq!(button.icon(), Some(IconHandle::new(8)));
        assert_eq!(button.icon_size(), 64);

        button.set_resource(None);
        assert_eq!(button.icon(), None);
        assert_eq!(gem.observer_count(), 0);
    }
}
