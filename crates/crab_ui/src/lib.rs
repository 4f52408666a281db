//! # Crab UI
//!
//! Resource-driven widgets: labels, panels and buttons that display a
//! [`DisplayResource`](crab_resources::DisplayResource), and the containers
//! that own them.
//!
//! - Containers own their children directly. There is no generic child list
//!   to filter by type.
//! - Children report to their container through signals. The container
//!   connects relay slots on add and disconnects them on remove, so a removed
//!   child can never fire again.
//! - A [`DisplayList`] keeps at most one panel pressed. Listeners see the
//!   previous panel's `panel_unpressed` before the new `panel_pressed`.
//! - Styles are resolved when a widget renders (pressed, then hover, then
//!   normal). Setters only record state; [`Widget::apply`] settles a batch.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      EVENT PIPELINE                         │
//! ├────────────────────────────────────────────────────────────┤
//! │  PointerEvent → Child widget → Signal → Relay queue         │
//! │                                              ↓              │
//! │            Outward signal ← Selection rules ← Container     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on the UI thread. The host toolkit does hit testing,
//! layout and drawing; widgets emit [`RenderCommand`]s.
//!
//! ## Example
//!
//! ```rust
//! use crab_resources::DisplayResource;
//! use crab_ui::{DisplayList, MouseButton, PointerEvent};
//!
//! let mut list = DisplayList::new();
//! list.populate(["Iron", "Gold"].map(DisplayResource::new));
//! list.on_panel_pressed(|r| {
//!     if let Some(r) = r {
//!         println!("selected {}", r.display_name());
//!     }
//! });
//!
//! list.dispatch(1, &PointerEvent::press(MouseButton::Left)).unwrap();
//! assert_eq!(list.selected_index(), Some(1));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod container;
pub mod deferred;
pub mod error;
pub mod input;
pub mod render;
pub mod signal;
pub mod style;
pub mod widget;

pub use config::WidgetConfig;
pub use container::{ChildNode, DisplayList, ResourceButtonContainer};
pub use deferred::DeferredQueue;
pub use error::{UiError, UiResult};
pub use input::{ClickPolicy, MouseButton, PointerEvent};
pub use render::RenderCommand;
pub use signal::{ConnectionId, Signal};
pub use style::{Color, StyleBox, StyleSet, StyleSlot, VisualState};
pub use widget::{
    ButtonList, DisplayPanel, HeaderSection, IconLabel, IconMenu, ResourceButton, ScrollText,
    SpinboxLabel, ValueLabel, Widget, WidgetId,
};
