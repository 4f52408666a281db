//! Containers that own resource-bound children.
//!
//! A container creates one child per resource, connects relay slots to the
//! child's signals and forwards what the child emits to its own listeners.
//! Removing a child disconnects those slots and discards its queued events
//! before the child is dropped.

mod button_container;
mod display_list;
mod relay;

pub use button_container::ResourceButtonContainer;
pub use display_list::{ChildNode, DisplayList};
