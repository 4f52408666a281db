//! Observer slots for widget events.
//!
//! A [`Signal`] is an ordered list of callbacks. Widgets own their signals;
//! containers connect relay slots when a child is added and disconnect them
//! before the child is dropped.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of connection ids. Global so ids never collide across signals.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to one connected slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    fn next() -> Self {
        Self(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

type Slot<T> = Box<dyn FnMut(&T)>;

/// An event source with any number of connected slots.
pub struct Signal<T> {
    slots: Vec<(ConnectionId, Slot<T>)>,
}

impl<T> Signal<T> {
    /// Creates a signal with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Connects a slot. Slots run in connection order.
    pub fn connect<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = ConnectionId::next();
        self.slots.push((id, Box::new(slot)));
        id
    }

    /// Disconnects a slot. Returns false if it was not connected here.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot_id, _)| *slot_id != id);
        self.slots.len() != before
    }

    /// Disconnects every slot.
    pub fn disconnect_all(&mut self) {
        self.slots.clear();
    }

    /// Invokes every slot with `value`.
    pub fn emit(&mut self, value: &T) {
        for (_, slot) in &mut self.slots {
            slot(value);
        }
    }

    /// Returns true if `id` is connected to this signal.
    #[must_use]
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.slots.iter().any(|(slot_id, _)| *slot_id == id)
    }

    /// Returns the number of connected slots.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.slots.len())
            .finish()
    }
}
