//! Display resources that carry a number.

use crate::display::{DisplayData, DisplayResource};
use crate::icon::IconHandle;
use std::ops::Deref;

/// Rounds to the nearest integer, ties to even.
///
/// `2.5` rounds to `2`, `3.5` to `4`, `-2.5` to `-2`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn round_half_even(value: f32) -> f32 {
    let rounded = value.round();
    if (value - value.trunc()).abs() == 0.5 {
        2.0 * (value / 2.0).round()
    } else {
        rounded
    }
}

/// A [`DisplayResource`] that always carries a value.
///
/// Derefs to the underlying display resource, so name, description, icon and
/// change subscriptions work the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueDisplayResource(DisplayResource);

impl ValueDisplayResource {
    /// Creates a value resource.
    #[must_use]
    pub fn new(display_name: impl Into<String>, value: f32) -> Self {
        Self(DisplayResource::from_data(
            DisplayData {
                display_name: display_name.into(),
                ..DisplayData::default()
            },
            Some(value),
        ))
    }

    /// Recovers a value resource from a plain handle.
    ///
    /// Returns `None` if the resource was not created with a value.
    #[must_use]
    pub fn from_display(resource: DisplayResource) -> Option<Self> {
        resource.value().is_some().then_some(Self(resource))
    }

    /// Sets the description while building.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self(self.0.with_description(description))
    }

    /// Sets the icon while building.
    #[must_use]
    pub fn with_icon(self, icon: IconHandle) -> Self {
        Self(self.0.with_icon(icon))
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.0.value().unwrap_or_default()
    }

    /// Sets the value and notifies observers.
    pub fn set_value(&self, value: f32) {
        self.0.write_value(value);
    }

    /// Returns the value rounded to the nearest integer, ties to even.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_value(&self) -> i32 {
        round_half_even(self.value()) as i32
    }

    /// Returns the plain display handle.
    #[must_use]
    pub fn as_display(&self) -> &DisplayResource {
        &self.0
    }
}

impl Deref for ValueDisplayResource {
    type Target = DisplayResource;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ValueDisplayResource> for DisplayResource {
    fn from(resource: ValueDisplayResource) -> Self {
        resource.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_rounded_value_ties_to_even() {
        let resource = ValueDisplayResource::new("Gold", 2.5);
        assert_eq!(resource.rounded_value(), 2);

        resource.set_value(3.5);
        assert_eq!(resource.rounded_value(), 4);

        resource.set_value(-2.5);
        assert_eq!(resource.rounded_value(), -2);

        resource.set_value(7.6);
        assert_eq!(resource.rounded_value(), 8);
    }

    #[test]
    fn test_set_value_notifies() {
        let resource = ValueDisplayResource::new("Gold", 1.0);
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let _watch = resource.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        resource.set_value(4.0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!((resource.value() - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_display_round_trip_keeps_identity() {
        let resource = ValueDisplayResource::new("Gold", 1.0);
        let plain: DisplayResource = resource.clone().into();

        assert!(plain.same_resource(&resource));
        assert_eq!(ValueDisplayResource::from_display(plain), Some(resource));
        assert_eq!(ValueDisplayResource::from_display(DisplayResource::new("Ore")), None);
    }
}
