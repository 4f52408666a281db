//! Pointer input delivered by the host toolkit.
//!
//! The host performs hit testing and routes one [`PointerEvent`] at a time to
//! the widget under the pointer.

use serde::{Deserialize, Serialize};

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// A raw pointer event for one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered the widget.
    Entered,
    /// Pointer left the widget.
    Exited,
    /// A mouse button changed state over the widget.
    Button {
        /// Which button.
        button: MouseButton,
        /// True on press, false on release.
        pressed: bool,
    },
}

impl PointerEvent {
    /// Button press event.
    #[must_use]
    pub const fn press(button: MouseButton) -> Self {
        Self::Button { button, pressed: true }
    }

    /// Button release event.
    #[must_use]
    pub const fn release(button: MouseButton) -> Self {
        Self::Button { button, pressed: false }
    }
}

/// When a click fires its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickPolicy {
    /// Fire when the button goes down.
    Pressed,
    /// Fire when the button comes up.
    #[default]
    Released,
    /// Fire on both edges.
    Both,
}

impl ClickPolicy {
    /// Returns true if a button edge (`pressed` = down) fires under this policy.
    #[must_use]
    pub const fn fires(self, pressed: bool) -> bool {
        match self {
            Self::Pressed => pressed,
            Self::Released => !pressed,
            Self::Both => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_policy_edges() {
        assert!(ClickPolicy::Pressed.fires(true));
        assert!(!ClickPolicy::Pressed.fires(false));
        assert!(!ClickPolicy::Released.fires(true));
        assert!(ClickPolicy::Released.fires(false));
        assert!(ClickPolicy::Both.fires(true));
        assert!(ClickPolicy::Both.fires(false));
    }

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            PointerEvent::press(MouseButton::Right),
            PointerEvent::Button { button: MouseButton::Right, pressed: true }
        );
        assert_eq!(
            PointerEvent::release(MouseButton::Left),
            PointerEvent::Button { button: MouseButton::Left, pressed: false }
        );
    }
}
