//! Selectable panel bound to a resource.
//!
//! A [`DisplayPanel`] shows a resource's icon and name inside a styled panel
//! and reports presses, unpresses and hover transitions through its signals.
//! On its own it does not coordinate with siblings; a
//! [`DisplayList`](crate::container::DisplayList) adds single selection.

use super::binding::ResourceBinding;
use super::icon_label::IconLabel;
use super::{Widget, WidgetFlags, WidgetResponse, WidgetState};
use crate::input::{MouseButton, PointerEvent};
use crate::render::RenderCommand;
use crate::signal::{ConnectionId, Signal};
use crate::style::{Color, StyleBox, StyleSet, StyleSlot};
use crab_resources::DisplayResource;
use std::sync::Arc;

#[derive(Debug, Default)]
struct PanelSignals {
    pressed: Signal<Option<DisplayResource>>,
    unpressed: Signal<Option<DisplayResource>>,
    moused_over: Signal<Option<DisplayResource>>,
    moused_away: Signal<()>,
}

/// A panel showing one resource, with pressed and hover styling.
#[derive(Debug)]
pub struct DisplayPanel {
    state: WidgetState,
    label: IconLabel,
    binding: ResourceBinding,
    styles: StyleSet,
    signals: PanelSignals,
}

impl DisplayPanel {
    /// Creates an unbound panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WidgetState::new(),
            label: IconLabel::new(),
            binding: ResourceBinding::default(),
            styles: StyleSet::default(),
            signals: PanelSignals::default(),
        }
    }

    /// Creates a panel bound to `resource`.
    #[must_use]
    pub fn with_resource(resource: DisplayResource) -> Self {
        let mut panel = Self::new();
        panel.set_resource(Some(resource));
        panel
    }

    /// Returns the bound resource.
    #[must_use]
    pub fn resource(&self) -> Option<&DisplayResource> {
        self.binding.resource()
    }

    pub(crate) fn is_bound_to(&self, resource: &DisplayResource) -> bool {
        self.binding.is_bound_to(resource)
    }

    /// Binds the panel to `resource`. The resource is never written.
    ///
    /// `None` clears the text and icon.
    pub fn set_resource(&mut self, resource: Option<DisplayResource>) {
        self.binding.bind(resource);
        match self.binding.resource().cloned() {
            Some(resource) => self.show(&resource),
            None => {
                self.label.set_text(String::new());
                self.label.set_icon(None);
            }
        }
        self.state.mark_dirty();
    }

    /// Returns the inner label.
    #[must_use]
    pub fn label(&self) -> &IconLabel {
        &self.label
    }

    /// Returns the icon edge length.
    #[must_use]
    pub fn icon_size(&self) -> u32 {
        self.label.icon_size()
    }

    /// Sets the icon edge length.
    pub fn set_icon_size(&mut self, size: u32) {
        self.label.set_icon_size(size);
    }

    /// Returns true if the panel is pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Returns true if the pointer is over the panel.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }

    /// Presses or releases the panel and emits the matching event.
    ///
    /// Repeating the current state emits again; duplicate presses are not
    /// suppressed. Releasing returns the panel to the normal style even with
    /// the pointer still over it; hover styling resumes on the next enter.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.state.flags.assign(WidgetFlags::PRESSED, pressed);
        if !pressed {
            self.state.flags.clear(WidgetFlags::HOVERED);
        }
        self.state.mark_dirty();
        let resource = self.binding.resource().cloned();
        if pressed {
            self.signals.pressed.emit(&resource);
        } else {
            self.signals.unpressed.emit(&resource);
        }
    }

    /// Pointer entered the panel.
    pub fn hover_enter(&mut self) {
        self.state.flags.set(WidgetFlags::HOVERED);
        self.state.mark_dirty();
        let resource = self.binding.resource().cloned();
        self.signals.moused_over.emit(&resource);
    }

    /// Pointer left the panel.
    pub fn hover_exit(&mut self) {
        self.state.flags.clear(WidgetFlags::HOVERED);
        self.state.mark_dirty();
        self.signals.moused_away.emit(&());
    }

    /// Replaces the style in one slot.
    pub fn set_style(&mut self, slot: StyleSlot, style: Option<Arc<StyleBox>>) {
        self.styles.set(slot, style);
        self.state.mark_dirty();
    }

    /// Returns the style slots.
    #[must_use]
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Returns the style for the current state: pressed, then hover, then
    /// normal.
    #[must_use]
    pub fn style(&self) -> Option<&Arc<StyleBox>> {
        self.styles.resolve(self.state.visual_state())
    }

    /// Connects a slot to `panel_pressed`.
    pub fn on_pressed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.pressed.connect(slot)
    }

    /// Connects a slot to `panel_unpressed`.
    pub fn on_unpressed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.unpressed.connect(slot)
    }

    /// Connects a slot to `panel_moused_over`.
    pub fn on_moused_over<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.moused_over.connect(slot)
    }

    /// Connects a slot to `panel_moused_away`.
    pub fn on_moused_away<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&()) + 'static,
    {
        self.signals.moused_away.connect(slot)
    }

    /// Disconnects a slot from whichever signal holds it.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        self.signals.pressed.disconnect(id)
            || self.signals.unpressed.disconnect(id)
            || self.signals.moused_over.disconnect(id)
            || self.signals.moused_away.disconnect(id)
    }

    /// Returns true if `id` is connected to any signal.
    #[must_use]
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.signals.pressed.is_connected(id)
            || self.signals.unpressed.is_connected(id)
            || self.signals.moused_over.is_connected(id)
            || self.signals.moused_away.is_connected(id)
    }

    /// Returns the number of connected slots across all signals.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.signals.pressed.connection_count()
            + self.signals.unpressed.connection_count()
            + self.signals.moused_over.connection_count()
            + self.signals.moused_away.connection_count()
    }

    fn show(&mut self, resource: &DisplayResource) {
        let data = resource.snapshot();
        self.label.set_text(data.display_name);
        if data.icon.is_some() {
            self.label.set_icon(data.icon);
        }
    }
}

impl Default for DisplayPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for DisplayPanel {
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
                self.hover_enter();
                response.hovered = true;
            }
            PointerEvent::Exited => {
                self.hover_exit();
                response.unhovered = true;
            }
            // Clicking focuses the panel, and focus presses it.
            PointerEvent::Button { button: MouseButton::Left, pressed: true } => {
                self.set_pressed(true);
                response.pressed = true;
            }
            PointerEvent::Button { .. } => {}
        }
        response
    }

    fn apply(&mut self) -> bool {
        if self.binding.take_stale() {
            if let Some(resource) = self.binding.resource().cloned() {
                self.show(&resource);
            }
        }
        let label_dirty = self.label.apply();
        self.state.take_dirty() || label_dirty
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        commands.push(RenderCommand::Panel {
            widget: self.state.id,
            style: self.style().cloned(),
            modulate: Color::WHITE,
        });
        self.label.render(commands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crab_resources::IconHandle;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn styled_panel() -> (DisplayPanel, [Arc<StyleBox>; 3]) {
        let normal = Arc::new(StyleBox::default());
        let pressed = Arc::new(StyleBox::default().with_border_color(Color::WHITE));
        let hover = Arc::new(StyleBox::default().with_border_color(Color::BLACK));
        let mut panel = DisplayPanel::with_resource(DisplayResource::new("Ore"));
        panel.set_style(StyleSlot::Normal, Some(Arc::clone(&normal)));
        panel.set_style(StyleSlot::Pressed, Some(Arc::clone(&pressed)));
        panel.set_style(StyleSlot::Hover, Some(Arc::clone(&hover)));
        (panel, [normal, pressed, hover])
    }

    #[test]
    fn test_binding_shows_name_and_icon() {
        let ore = DisplayResource::new("Ore").with_icon(IconHandle::new(5));
        let panel = DisplayPanel::with_resource(ore.clone());

        assert_eq!(panel.label().text(), "Ore");
        assert_eq!(panel.label().icon(), Some(IconHandle::new(5)));
        assert!(panel.resource().unwrap().same_resource(&ore));
    }

    #[test]
    fn test_binding_is_read_only() {
        let ore = DisplayResource::new("Ore");
        let mut panel = DisplayPanel::with_resource(ore.clone());
        panel.set_resource(None);

        assert_eq!(panel.label().text(), "");
        assert_eq!(ore.display_name(), "Ore");
    }

    #[test]
    fn test_style_follows_state() {
        let (mut panel, [normal, pressed, hover]) = styled_panel();
        assert!(Arc::ptr_eq(panel.style().unwrap(), &normal));

        panel.handle_input(&PointerEvent::Entered);
        assert!(Arc::ptr_eq(panel.style().unwrap(), &hover));

        panel.handle_input(&PointerEvent::press(MouseButton::Left));
        assert!(Arc::ptr_eq(panel.style().unwrap(), &pressed));

        // Hover changes do not override the pressed style.
        panel.handle_input(&PointerEvent::Exited);
        panel.handle_input(&PointerEvent::Entered);
        assert!(Arc::ptr_eq(panel.style().unwrap(), &pressed));

        panel.set_pressed(false);
        assert!(Arc::ptr_eq(panel.style().unwrap(), &normal));
        assert!(!panel.is_hovered());

        panel.handle_input(&PointerEvent::Entered);
        assert!(Arc::ptr_eq(panel.style().unwrap(), &hover));

        panel.handle_input(&PointerEvent::Exited);
        assert!(Arc::ptr_eq(panel.style().unwrap(), &normal));
    }

    #[test]
    fn test_duplicate_press_emits_again() {
        let count = Rc::new(RefCell::new(0));
        let mut panel = DisplayPanel::with_resource(DisplayResource::new("Ore"));
        let sink = Rc::clone(&count);
        panel.on_pressed(move |_| *sink.borrow_mut() += 1);

        panel.set_pressed(true);
        panel.set_pressed(true);

        assert!(panel.is_pressed());
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_events_carry_bound_resource() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let ore = DisplayResource::new("Ore");
        let mut panel = DisplayPanel::with_resource(ore.clone());

        let sink = Rc::clone(&seen);
        panel.on_moused_over(move |r| sink.borrow_mut().push(("over", r.clone())));
        let sink = Rc::clone(&seen);
        panel.on_unpressed(move |r| sink.borrow_mut().push(("unpressed", r.clone())));
        let sink = Rc::clone(&seen);
        panel.on_moused_away(move |()| sink.borrow_mut().push(("away", None)));

        panel.handle_input(&PointerEvent::Entered);
        panel.set_pressed(false);
        panel.handle_input(&PointerEvent::Exited);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], ("over", Some(ore.clone())));
        assert_eq!(seen[1], ("unpressed", Some(ore)));
        assert_eq!(seen[2], ("away", None));
    }

    #[test]
    fn test_right_click_does_not_press() {
        let mut panel = DisplayPanel::new();
        let response = panel.handle_input(&PointerEvent::press(MouseButton::Right));
        assert!(!response.pressed);
        assert!(!panel.is_pressed());
    }

    #[test]
    fn test_disconnect_any_signal() {
        let mut panel = DisplayPanel::new();
        let a = panel.on_pressed(|_| {});
        let b = panel.on_moused_away(|()| {});
        assert_eq!(panel.connection_count(), 2);
        assert!(panel.is_connected(b));

        assert!(panel.disconnect(b));
        assert!(!panel.is_connected(b));
        assert!(panel.disconnect(a));
        assert!(!panel.disconnect(a));
        assert_eq!(panel.connection_count(), 0);
    }

    #[test]
    fn test_resource_rename_applied() {
        let ore = DisplayResource::new("Ore");
        let mut panel = DisplayPanel::with_resource(ore.clone());
        panel.apply();

        ore.set_display_name("Iron Ore");
        assert!(panel.apply());
        assert_eq!(panel.label().text(), "Iron Ore");
    }
}
