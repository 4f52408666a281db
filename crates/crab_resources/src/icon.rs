//! Opaque icon handles.

use serde::{Deserialize, Serialize};

/// Handle to an icon texture owned by the host toolkit.
///
/// The library never looks inside; it only forwards the handle to render
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconHandle(u32);

impl IconHandle {
    /// Creates a handle from an atlas id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw atlas id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}
