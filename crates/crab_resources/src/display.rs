//! Display resources with change notification.
//!
//! A [`DisplayResource`] is a shared handle: cloning it yields another handle
//! to the same resource, and identity comparisons use [`ResourceId`], never
//! field equality.

use crate::icon::IconHandle;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Source of process-unique resource ids.
static NEXT_RESOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    fn next() -> Self {
        Self(NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Plain copy of the displayable fields of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayData {
    /// Name shown on labels and tooltips.
    pub display_name: String,
    /// Longer text, used for icon tooltips.
    pub description: String,
    /// Icon, if any.
    pub icon: Option<IconHandle>,
}

type ChangeCallback = Arc<dyn Fn(&DisplayResource) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(u64, ChangeCallback)>,
}

struct ResourceInner {
    id: ResourceId,
    data: RwLock<DisplayData>,
    value: Option<RwLock<f32>>,
    observers: Mutex<Observers>,
}

/// Shared handle to one displayable item.
///
/// Owned by the application; widgets keep a handle and re-read the fields
/// after a change notification.
#[derive(Clone)]
pub struct DisplayResource {
    inner: Arc<ResourceInner>,
}

impl DisplayResource {
    /// Creates a resource with the given display name.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self::from_data(
            DisplayData {
                display_name: display_name.into(),
                ..DisplayData::default()
            },
            None,
        )
    }

    pub(crate) fn from_data(data: DisplayData, value: Option<f32>) -> Self {
        Self {
            inner: Arc::new(ResourceInner {
                id: ResourceId::next(),
                data: RwLock::new(data),
                value: value.map(RwLock::new),
                observers: Mutex::new(Observers::default()),
            }),
        }
    }

    /// Sets the description while building.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Sets the icon while building.
    #[must_use]
    pub fn with_icon(self, icon: IconHandle) -> Self {
        self.set_icon(Some(icon));
        self
    }

    /// Returns the identity of this resource.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.inner.id
    }

    /// Returns true if both handles point at the same resource.
    #[must_use]
    pub fn same_resource(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.inner.data.read().display_name.clone()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> String {
        self.inner.data.read().description.clone()
    }

    /// Returns the icon.
    #[must_use]
    pub fn icon(&self) -> Option<IconHandle> {
        self.inner.data.read().icon
    }

    /// Returns the numeric value for value resources.
    #[must_use]
    pub fn value(&self) -> Option<f32> {
        self.inner.value.as_ref().map(|v| *v.read())
    }

    /// Returns a copy of all displayable fields.
    #[must_use]
    pub fn snapshot(&self) -> DisplayData {
        self.inner.data.read().clone()
    }

    /// Sets the display name and notifies observers.
    pub fn set_display_name(&self, display_name: impl Into<String>) {
        let display_name = display_name.into();
        self.update(|data| data.display_name = display_name);
    }

    /// Sets the description and notifies observers.
    pub fn set_description(&self, description: impl Into<String>) {
        let description = description.into();
        self.update(|data| data.description = description);
    }

    /// Sets the icon and notifies observers.
    pub fn set_icon(&self, icon: Option<IconHandle>) {
        self.update(|data| data.icon = icon);
    }

    /// Applies a batch of edits and emits a single change notification.
    pub fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut DisplayData),
    {
        {
            let mut data = self.inner.data.write();
            edit(&mut data);
        }
        self.notify();
    }

    pub(crate) fn write_value(&self, value: f32) -> bool {
        let Some(slot) = &self.inner.value else {
            return false;
        };
        *slot.write() = value;
        self.notify();
        true
    }

    /// Registers a change observer.
    ///
    /// The observer stays registered until the returned guard is dropped.
    /// Observers run after the edit is committed, with no resource lock held,
    /// so they may read the resource freely.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, observer: F) -> ChangeSubscription
    where
        F: Fn(&DisplayResource) + Send + Sync + 'static,
    {
        let mut observers = self.inner.observers.lock();
        let id = observers.next_id;
        observers.next_id += 1;
        observers.entries.push((id, Arc::new(observer)));

        ChangeSubscription {
            resource: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Returns the number of live change observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.lock().entries.len()
    }

    fn notify(&self) {
        let callbacks: Vec<ChangeCallback> = self
            .inner
            .observers
            .lock()
            .entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        tracing::trace!(
            resource = self.inner.id.raw(),
            observers = callbacks.len(),
            "resource changed"
        );

        for callback in callbacks {
            callback(self);
        }
    }
}

impl PartialEq for DisplayResource {
    fn eq(&self, other: &Self) -> bool {
        self.same_resource(other)
    }
}

impl Eq for DisplayResource {}

impl Hash for DisplayResource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for DisplayResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.data.read();
        f.debug_struct("DisplayResource")
            .field("id", &self.inner.id.raw())
            .field("display_name", &data.display_name)
            .field("icon", &data.icon)
            .field("value", &self.value())
            .finish()
    }
}

/// Guard for a change observer. Dropping it unsubscribes.
#[derive(Debug)]
pub struct ChangeSubscription {
    resource: Weak<ResourceInner>,
    id: u64,
}

impl ChangeSubscription {
    /// Returns true while the observed resource is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.resource.strong_count() > 0
    }
}

impl Drop for ChangeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.resource.upgrade() {
            inner.observers.lock().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
