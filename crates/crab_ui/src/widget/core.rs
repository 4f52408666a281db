//! Core widget types and traits.

use crate::input::PointerEvent;
use crate::render::RenderCommand;
use crate::style::VisualState;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of widget ids.
static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocates a fresh id. Ids are never reused.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags (bitfield for efficiency).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget is enabled (clicks dispatch).
    pub const ENABLED: u32 = 1 << 1;
    /// Pointer is over the widget.
    pub const HOVERED: u32 = 1 << 2;
    /// Widget is pressed.
    pub const PRESSED: u32 = 1 << 3;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 4;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::ENABLED | Self::DIRTY_RENDER);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// State flags.
    pub flags: WidgetFlags,
}

impl WidgetState {
    /// Creates state for a new widget with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            flags: WidgetFlags::DEFAULT,
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true if the widget is enabled.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Returns true if the widget is hovered.
    #[inline]
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.flags.has(WidgetFlags::HOVERED)
    }

    /// Returns true if the widget is pressed.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.flags.has(WidgetFlags::PRESSED)
    }

    /// Returns the state used for style resolution.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        if self.is_pressed() {
            VisualState::Pressed
        } else if self.is_hovered() {
            VisualState::Hovered
        } else {
            VisualState::Normal
        }
    }

    /// Marks the widget as needing redraw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }

    /// Returns true if the widget needs redraw.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.flags.has(WidgetFlags::DIRTY_RENDER)
    }

    /// Clears the redraw flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.is_dirty();
        self.flags.clear(WidgetFlags::DIRTY_RENDER);
        dirty
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a widget did in response to one input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetResponse {
    /// Widget fired its pressed/clicked event.
    pub pressed: bool,
    /// Widget fired its unpressed event.
    pub unpressed: bool,
    /// Widget fired its right-click event.
    pub right_clicked: bool,
    /// Pointer entered.
    pub hovered: bool,
    /// Pointer left.
    pub unhovered: bool,
    /// Widget value changed.
    pub changed: bool,
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles one pointer event routed by the host.
    fn handle_input(&mut self, event: &PointerEvent) -> WidgetResponse;

    /// Settles state after a batch of changes.
    ///
    /// Re-reads bound resources that reported a change and clears the redraw
    /// flag. Returns true if the widget needs to be drawn again.
    fn apply(&mut self) -> bool {
        self.state_mut().take_dirty()
    }

    /// Generates render commands for this widget.
    fn render(&self, commands: &mut Vec<RenderCommand>);

    /// Returns the widget id.
    fn id(&self) -> WidgetId {
        self.state().id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetState::new();
        let b = WidgetState::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_visual_state_pressed_wins_over_hover() {
        let mut state = WidgetState::new();
        assert_eq!(state.visual_state(), VisualState::Normal);

        state.flags.set(WidgetFlags::HOVERED);
        assert_eq!(state.visual_state(), VisualState::Hovered);

        state.flags.set(WidgetFlags::PRESSED);
        assert_eq!(state.visual_state(), VisualState::Pressed);

        state.flags.clear(WidgetFlags::PRESSED);
        assert_eq!(state.visual_state(), VisualState::Hovered);
    }

    #[test]
    fn test_take_dirty() {
        let mut state = WidgetState::new();
        assert!(state.take_dirty());
        assert!(!state.take_dirty());

        state.mark_dirty();
        assert!(state.is_dirty());
    }
}
