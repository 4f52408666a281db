//! Widgets bound to display resources.
//!
//! Every widget owns a [`WidgetState`] and implements [`Widget`]. Widgets
//! that show a resource hold a binding that re-reads it on the next
//! [`Widget::apply`] after it changes.

mod binding;
mod button_list;
mod core;
mod display_panel;
mod header;
mod icon_label;
mod icon_menu;
mod resource_button;
mod scroll_text;
mod spinbox_label;
mod value_label;

pub use self::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use button_list::ButtonList;
pub use display_panel::DisplayPanel;
pub use header::HeaderSection;
pub use icon_label::IconLabel;
pub use icon_menu::IconMenu;
pub use resource_button::ResourceButton;
pub use scroll_text::ScrollText;
pub use spinbox_label::SpinboxLabel;
pub use value_label::ValueLabel;
