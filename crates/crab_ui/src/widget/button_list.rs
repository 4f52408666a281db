//! Vertical list of text buttons.

use super::{Widget, WidgetResponse, WidgetState};
use crate::input::{MouseButton, PointerEvent};
use crate::render::RenderCommand;
use crate::signal::{ConnectionId, Signal};
use crate::style::Color;

/// One text button per name. Pressing button `i` emits `button_pressed(i)`.
#[derive(Debug, Default)]
pub struct ButtonList {
    state: WidgetState,
    names: Vec<String>,
    button_pressed: Signal<usize>,
}

impl ButtonList {
    /// Creates a list with one button per name.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        list.set_names(names);
        list
    }

    /// Rebuilds the buttons from `names`.
    pub fn set_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self.state.mark_dirty();
    }

    /// Returns the button labels in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Delivers a pointer event to button `index`.
    ///
    /// A left release presses the button. Out of range indices are ignored.
    pub fn dispatch(&mut self, index: usize, event: &PointerEvent) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        if index >= self.names.len() || !self.state.is_enabled() {
            return response;
        }
        if let PointerEvent::Button { button: MouseButton::Left, pressed: false } = event {
            self.button_pressed.emit(&index);
            response.pressed = true;
        }
        response
    }

    /// Connects a slot to `button_pressed`.
    pub fn on_button_pressed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&usize) + 'static,
    {
        self.button_pressed.connect(slot)
    }
}

impl Widget for ButtonList {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// Events without a target button are ignored; see [`ButtonList::dispatch`].
    fn handle_input(&mut self, _event: &PointerEvent) -> WidgetResponse {
        WidgetResponse::default()
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        for name in &self.names {
            commands.push(RenderCommand::Panel {
                widget: self.state.id,
                style: None,
                modulate: Color::WHITE,
            });
            commands.push(RenderCommand::Text {
                widget: self.state.id,
                text: name.clone(),
                font_size: 0,
                color: Color::WHITE,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_press_reports_index() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut list = ButtonList::new(["New", "Load", "Quit"]);
        let sink = Rc::clone(&seen);
        list.on_button_pressed(move |i| sink.borrow_mut().push(*i));

        list.dispatch(2, &PointerEvent::press(MouseButton::Left));
        list.dispatch(2, &PointerEvent::release(MouseButton::Left));
        list.dispatch(0, &PointerEvent::release(MouseButton::Left));
        list.dispatch(7, &PointerEvent::release(MouseButton::Left));

        assert_eq!(*seen.borrow(), [2, 0]);
    }

    #[test]
    fn test_set_names_rebuilds() {
        let mut list = ButtonList::new(["A", "B"]);
        list.set_names(vec![String::from("C")]);
        assert_eq!(list.names(), ["C"]);
        assert_eq!(list.len(), 1);
    }
}
