//! # Crab Resources
//!
//! Declarative display data for the Crab widget library.
//!
//! A resource is the single source of truth for what one widget shows:
//! a display name, a description, an icon and (for value resources) a number.
//! Resources are owned by the application and shared with widgets through
//! cheap handles. Every mutation emits one "changed" notification that bound
//! widgets observe.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    RESOURCE FLOW                          │
//! ├──────────────────────────────────────────────────────────┤
//! │  TOML Catalog → DisplayResource → ChangeSubscription     │
//! │                       ↓                   ↓              │
//! │                 Widget binding      Stale flag → apply() │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use crab_resources::{DisplayResource, IconHandle};
//!
//! let sword = DisplayResource::new("Sword").with_icon(IconHandle::new(7));
//! let _watch = sword.subscribe(|r| println!("changed: {}", r.display_name()));
//! sword.set_display_name("Rusty Sword");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod display;
pub mod error;
pub mod icon;
pub mod value;

pub use catalog::{CatalogEntry, ResourceCatalog};
pub use display::{ChangeSubscription, DisplayData, DisplayResource, ResourceId};
pub use error::{ResourceError, ResourceResult};
pub use icon::IconHandle;
pub use value::{round_half_even, ValueDisplayResource};
