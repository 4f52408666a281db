//! Widget-side handle to a bound resource.

use crab_resources::{ChangeSubscription, DisplayResource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A resource binding that records change notifications.
///
/// The observer only raises a stale flag; the widget re-reads the resource on
/// its next `apply()`. Dropping the binding unsubscribes.
#[derive(Debug, Default)]
pub(crate) struct ResourceBinding {
    resource: Option<DisplayResource>,
    watch: Option<ChangeSubscription>,
    stale: Arc<AtomicBool>,
}

impl ResourceBinding {
    /// Rebinds to `resource`, dropping the previous subscription first.
    pub(crate) fn bind(&mut self, resource: Option<DisplayResource>) {
        self.watch = None;
        self.stale.store(false, Ordering::Relaxed);
        self.watch = resource.as_ref().map(|r| {
            let stale = Arc::clone(&self.stale);
            r.subscribe(move |_| stale.store(true, Ordering::Relaxed))
        });
        self.resource = resource;
    }

    pub(crate) fn resource(&self) -> Option<&DisplayResource> {
        self.resource.as_ref()
    }

    /// Returns true if the resource changed since the last call.
    pub(crate) fn take_stale(&self) -> bool {
        self.stale.swap(false, Ordering::Relaxed)
    }

    pub(crate) fn is_bound_to(&self, resource: &DisplayResource) -> bool {
        self.resource.as_ref().is_some_and(|r| r.same_resource(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_marks_stale() {
        let resource = DisplayResource::new("Ore");
        let mut binding = ResourceBinding::default();
        binding.bind(Some(resource.clone()));

        assert!(!binding.take_stale());
        resource.set_display_name("Gem");
        assert!(binding.take_stale());
        assert!(!binding.take_stale());
    }

    #[test]
    fn test_rebind_drops_old_subscription() {
        let first = DisplayResource::new("A");
        let second = DisplayResource::new("B");
        let mut binding = ResourceBinding::default();

        binding.bind(Some(first.clone()));
        assert_eq!(first.observer_count(), 1);

        binding.bind(Some(second.clone()));
        assert_eq!(first.observer_count(), 0);
        assert_eq!(second.observer_count(), 1);
        assert!(binding.is_bound_to(&second));

        first.set_display_name("changed");
        assert!(!binding.take_stale());

        drop(binding);
        assert_eq!(second.observer_count(), 0);
    }
}
