//! Icon label with a numeric editor.

use super::binding::ResourceBinding;
use super::icon_label::IconLabel;
use super::{Widget, WidgetResponse, WidgetState};
use crate::input::PointerEvent;
use crate::render::RenderCommand;
use crate::signal::{ConnectionId, Signal};
use crate::style::Color;
use crab_resources::{round_half_even, IconHandle, ValueDisplayResource};

/// An [`IconLabel`] next to a spinbox.
///
/// Values are clamped to `[min, max]`, snapped down to a multiple of `step`
/// and, if `rounded` is set, rounded to the nearest integer. A bound
/// resource is read, never written.
#[derive(Debug)]
pub struct SpinboxLabel {
    state: WidgetState,
    label: IconLabel,
    value: f32,
    min: f32,
    max: f32,
    step: f32,
    rounded: bool,
    editable: bool,
    prefix: String,
    suffix: String,
    resource: Option<ValueDisplayResource>,
    binding: ResourceBinding,
    value_changed: Signal<f32>,
}

impl SpinboxLabel {
    /// Creates a spinbox over `[0, 100]` with step 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WidgetState::new(),
            label: IconLabel::new(),
            value: 0.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            rounded: false,
            editable: true,
            prefix: String::new(),
            suffix: String::new(),
            resource: None,
            binding: ResourceBinding::default(),
            value_changed: Signal::new(),
        }
    }

    /// Returns the inner icon label.
    #[must_use]
    pub fn label(&self) -> &IconLabel {
        &self.label
    }

    /// Sets the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    /// Sets the icon.
    pub fn set_icon(&mut self, icon: Option<IconHandle>) {
        self.label.set_icon(icon);
    }

    /// Shows or hides the icon.
    pub fn set_icon_shown(&mut self, shown: bool) {
        self.label.set_icon_visible(shown);
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value.
    ///
    /// Setting the current value again is a no-op. Returns true if the value
    /// changed.
    #[allow(clippy::float_cmp)]
    pub fn set_value(&mut self, value: f32) -> bool {
        if value == self.value {
            return false;
        }
        let coerced = self.coerce(value);
        let changed = coerced != self.value;
        self.value = coerced;
        self.state.mark_dirty();
        changed
    }

    /// Applies a user edit and emits `value_changed` if the value moved.
    ///
    /// Ignored when the spinbox is not editable.
    pub fn input_value(&mut self, value: f32) {
        if !self.editable {
            return;
        }
        if self.set_value(value) {
            let current = self.value;
            self.value_changed.emit(&current);
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Sets the lower bound.
    pub fn set_min(&mut self, min: f32) {
        self.min = min;
        self.value = self.coerce(self.value);
        self.state.mark_dirty();
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Sets the upper bound.
    pub fn set_max(&mut self, max: f32) {
        self.max = max;
        self.value = self.coerce(self.value);
        self.state.mark_dirty();
    }

    /// Returns the step.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Sets the step. Zero is treated as 1.
    #[allow(clippy::float_cmp)]
    pub fn set_step(&mut self, step: f32) {
        self.step = if step == 0.0 { 1.0 } else { step };
    }

    /// Returns true if values are rounded to integers.
    #[must_use]
    pub fn is_rounded(&self) -> bool {
        self.rounded
    }

    /// Enables integer rounding.
    pub fn set_rounded(&mut self, rounded: bool) {
        self.rounded = rounded;
    }

    /// Returns true if user edits are accepted.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Allows or blocks user edits.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        self.state.mark_dirty();
    }

    /// Sets the text shown before the value.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
        self.state.mark_dirty();
    }

    /// Sets the text shown after the value.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
        self.state.mark_dirty();
    }

    /// Returns the spinbox text: prefix, value and suffix.
    #[must_use]
    pub fn display_text(&self) -> String {
        let value = format!("{}", self.value);
        [self.prefix.as_str(), value.as_str(), self.suffix.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the bound resource.
    #[must_use]
    pub fn resource(&self) -> Option<&ValueDisplayResource> {
        self.resource.as_ref()
    }

    /// Shows `resource`, or clears the label for `None`.
    pub fn set_resource(&mut self, resource: Option<ValueDisplayResource>) {
        self.binding.bind(resource.as_ref().map(|r| r.as_display().clone()));
        self.resource = resource;
        match self.resource.clone() {
            Some(resource) => self.read_resource(&resource),
            None => {
                self.label.set_text(String::new());
                self.label.set_icon(None);
            }
        }
    }

    /// Connects a slot to `value_changed`.
    pub fn on_value_changed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&f32) + 'static,
    {
        self.value_changed.connect(slot)
    }

    fn read_resource(&mut self, resource: &ValueDisplayResource) {
        self.label.set_text(resource.display_name());
        self.set_value(resource.value());
        if let Some(icon) = resource.icon() {
            self.label.set_icon(Some(icon));
        }
    }

    fn coerce(&self, value: f32) -> f32 {
        let mut result = value.max(self.min).min(self.max);
        result -= result % self.step;
        if self.rounded {
            result = round_half_even(result);
        }
        result
    }
}

impl Default for SpinboxLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SpinboxLabel {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle_input(&mut self, event: &PointerEvent) -> WidgetResponse {
        self.label.handle_input(event)
    }

    fn apply(&mut self) -> bool {
        if self.binding.take_stale() {
            if let Some(resource) = self.resource.clone() {
                self.read_resource(&resource);
            }
        }
        let label_dirty = self.label.apply();
        self.state.take_dirty() || label_dirty
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        self.label.render(commands);
        commands.push(RenderCommand::Text {
            widget: self.state.id,
            text: self.display_text(),
            font_size: 0,
            color: if self.editable { Color::WHITE } else { Color::DIMMED },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_value_is_clamped_and_snapped() {
        let mut spin = SpinboxLabel::new();
        spin.set_step(5.0);

        spin.set_value(250.0);
        assert!((spin.value() - 100.0).abs() < f32::EPSILON);

        spin.set_value(-3.0);
        assert!(spin.value().abs() < f32::EPSILON);

        spin.set_value(17.0);
        assert!((spin.value() - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_step_becomes_one() {
        let mut spin = SpinboxLabel::new();
        spin.set_step(0.0);
        assert!((spin.step() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rounding_ties_to_even() {
        let mut spin = SpinboxLabel::new();
        spin.set_step(0.5);
        spin.set_rounded(true);

        spin.set_value(2.5);
        assert!((spin.value() - 2.0).abs() < f32::EPSILON);

        spin.set_value(3.5);
        assert!((spin.value() - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_input_emits_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut spin = SpinboxLabel::new();
        let sink = Rc::clone(&seen);
        spin.on_value_changed(move |v| sink.borrow_mut().push(*v));

        spin.input_value(10.0);
        spin.input_value(10.0);
        spin.input_value(10.4);
        spin.input_value(12.0);

        assert_eq!(*seen.borrow(), [10.0_f32, 12.0]);
    }

    #[test]
    fn test_non_editable_ignores_input() {
        let mut spin = SpinboxLabel::new();
        spin.set_editable(false);
        spin.input_value(40.0);
        assert!(spin.value().abs() < f32::EPSILON);

        spin.set_value(40.0);
        assert!((spin.value() - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_display_text() {
        let mut spin = SpinboxLabel::new();
        spin.set_value(3.0);
        assert_eq!(spin.display_text(), "3");

        spin.set_prefix("x");
        spin.set_suffix("kg");
        assert_eq!(spin.display_text(), "x 3 kg");
    }

    #[test]
    fn test_resource_is_read_only() {
        let iron = ValueDisplayResource::new("Iron", 20.0).with_icon(IconHandle::new(3));
        let mut spin = SpinboxLabel::new();
        spin.set_resource(Some(iron.clone()));

        assert_eq!(spin.label().text(), "Iron");
        assert_eq!(spin.label().icon(), Some(IconHandle::new(3)));
        assert!((spin.value() - 20.0).abs() < f32::EPSILON);

        spin.input_value(30.0);
        assert!((iron.value() - 20.0).abs() < f32::EPSILON);

        iron.set_value(50.0);
        spin.apply();
        assert!((spin.value() - 50.0).abs() < f32::EPSILON);
    }
}
