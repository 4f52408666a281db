//! Single-selection list of display panels.

use super::relay::RelayQueue;
use crate::config::WidgetConfig;
use crate::error::{UiError, UiResult};
use crate::input::PointerEvent;
use crate::render::RenderCommand;
use crate::signal::{ConnectionId, Signal};
use crate::style::{StyleBox, StyleSet, StyleSlot};
use crate::widget::{DisplayPanel, Widget, WidgetId, WidgetResponse, WidgetState};
use crab_resources::DisplayResource;
use std::fmt;
use std::sync::Arc;

/// A child offered to a [`DisplayList`].
///
/// Only panels are kept. Anything else is evicted on arrival.
pub enum ChildNode {
    /// A display panel.
    Panel(DisplayPanel),
    /// Any other widget.
    Foreign(Box<dyn Widget>),
}

impl fmt::Debug for ChildNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panel(panel) => f.debug_tuple("Panel").field(panel).finish(),
            Self::Foreign(widget) => f.debug_tuple("Foreign").field(&widget.id()).finish(),
        }
    }
}

#[derive(Debug)]
enum PanelEvent {
    Pressed(Option<DisplayResource>),
    Unpressed(Option<DisplayResource>),
    MousedOver(Option<DisplayResource>),
    MousedAway,
}

#[derive(Debug)]
struct PanelEntry {
    panel: DisplayPanel,
    connections: [ConnectionId; 4],
}

#[derive(Debug, Default)]
struct ListSignals {
    panel_pressed: Signal<Option<DisplayResource>>,
    panel_unpressed: Signal<Option<DisplayResource>>,
    moused_over: Signal<Option<DisplayResource>>,
    moused_away: Signal<()>,
}

/// A vertical list of [`DisplayPanel`]s with at most one pressed.
///
/// The list owns its panels, connects to each panel's signals when it is
/// added and disconnects before it is dropped. Panel events are relayed
/// outward with the panel's resource. When a panel is pressed, every other
/// pressed panel is released first, and their `panel_unpressed` relays are
/// delivered before the `panel_pressed` relay.
///
/// Container styles are shared with every panel, current and future.
///
/// ```
/// use crab_resources::DisplayResource;
/// use crab_ui::container::DisplayList;
///
/// let a = DisplayResource::new("A");
/// let b = DisplayResource::new("B");
/// let mut list = DisplayList::new();
/// list.populate([a.clone(), b.clone()]);
///
/// list.press(0).unwrap();
/// list.press(1).unwrap();
/// assert_eq!(list.selected_index(), Some(1));
/// ```
#[derive(Debug)]
pub struct DisplayList {
    state: WidgetState,
    entries: Vec<PanelEntry>,
    styles: StyleSet,
    icon_size: u32,
    relay: RelayQueue<PanelEvent>,
    signals: ListSignals,
}

impl DisplayList {
    /// Creates an empty list with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    /// Creates an empty list whose panels use `config`.
    #[must_use]
    pub fn with_config(config: &WidgetConfig) -> Self {
        Self {
            state: WidgetState::new(),
            entries: Vec::new(),
            styles: StyleSet::default(),
            icon_size: config.panel_icon_size,
            relay: RelayQueue::new(),
            signals: ListSignals::default(),
        }
    }

    /// Replaces every panel with one panel per resource, in order.
    pub fn populate(&mut self, resources: impl IntoIterator<Item = DisplayResource>) {
        let removed = self.clear();
        for resource in resources {
            self.add_resource(resource);
        }
        tracing::debug!(removed, added = self.entries.len(), "populated display list");
    }

    /// Drops every panel. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        for entry in std::mem::take(&mut self.entries) {
            self.detach(entry);
        }
        self.state.mark_dirty();
        count
    }

    /// Appends a panel for `resource` and returns its id.
    pub fn add_resource(&mut self, resource: DisplayResource) -> WidgetId {
        let mut panel = DisplayPanel::new();
        panel.set_icon_size(self.icon_size);
        panel.set_resource(Some(resource));
        self.attach(panel)
    }

    /// Offers a child to the list.
    ///
    /// Panels are adopted and styled like every other panel. A panel that
    /// arrives pressed is released and its `panel_unpressed` relayed, so the
    /// current selection is kept. Foreign widgets are dropped. Returns the id
    /// of the adopted panel.
    pub fn add_child(&mut self, child: ChildNode) -> Option<WidgetId> {
        match child {
            ChildNode::Panel(panel) => Some(self.attach(panel)),
            ChildNode::Foreign(widget) => {
                tracing::debug!(widget = widget.id().raw(), "evicted foreign child from display list");
                None
            }
        }
    }

    /// Removes the first panel bound to `resource`.
    ///
    /// # Panics
    ///
    /// Panics if no panel is bound to `resource`. Use
    /// [`DisplayList::try_remove_resource`] to handle that case.
    pub fn remove_resource(&mut self, resource: &DisplayResource) {
        if let Err(err) = self.try_remove_resource(resource) {
            panic!("{err}");
        }
    }

    /// Removes the first panel bound to `resource`.
    ///
    /// The panel's slots are disconnected and its queued events discarded,
    /// so nothing from it is relayed afterwards. The selection of the other
    /// panels is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ResourceNotFound`] if no panel is bound to it.
    pub fn try_remove_resource(&mut self, resource: &DisplayResource) -> UiResult<()> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.panel.is_bound_to(resource))
            .ok_or_else(|| UiError::ResourceNotFound {
                id: resource.id().raw(),
                name: resource.display_name(),
            })?;
        let entry = self.entries.remove(index);
        tracing::debug!(index, remaining = self.entries.len(), "removed display panel");
        self.detach(entry);
        self.state.mark_dirty();
        Ok(())
    }

    /// Returns the resource shown at `index`.
    #[must_use]
    pub fn get_resource_at_index(&self, index: usize) -> Option<DisplayResource> {
        self.entries.get(index)?.panel.resource().cloned()
    }

    /// Returns the resources of all panels, in order. Unbound panels are
    /// skipped.
    #[must_use]
    pub fn resources(&self) -> Vec<DisplayResource> {
        self.entries
            .iter()
            .filter_map(|entry| entry.panel.resource().cloned())
            .collect()
    }

    /// Returns the number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the panel at `index`.
    #[must_use]
    pub fn panel(&self, index: usize) -> Option<&DisplayPanel> {
        self.entries.get(index).map(|entry| &entry.panel)
    }

    /// Returns the index of the pressed panel.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.panel.is_pressed())
    }

    /// Presses panel `index`, releasing any other pressed panel.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::IndexOutOfRange`] if there is no such panel.
    pub fn press(&mut self, index: usize) -> UiResult<()> {
        self.configure_panel(index, |panel| panel.set_pressed(true))
    }

    /// Releases panel `index`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::IndexOutOfRange`] if there is no such panel.
    pub fn unpress(&mut self, index: usize) -> UiResult<()> {
        self.configure_panel(index, |panel| panel.set_pressed(false))
    }

    /// Delivers a pointer event to panel `index` and relays what it emits.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::IndexOutOfRange`] if there is no such panel.
    pub fn dispatch(&mut self, index: usize, event: &PointerEvent) -> UiResult<WidgetResponse> {
        let response = self.entry_mut(index)?.panel.handle_input(event);
        self.flush();
        Ok(response)
    }

    /// Runs `edit` on panel `index`, then relays whatever it emitted.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::IndexOutOfRange`] if there is no such panel.
    pub fn configure_panel<F>(&mut self, index: usize, edit: F) -> UiResult<()>
    where
        F: FnOnce(&mut DisplayPanel),
    {
        edit(&mut self.entry_mut(index)?.panel);
        self.flush();
        Ok(())
    }

    /// Sets a container style and applies it to every panel.
    ///
    /// Panels added later receive it too.
    pub fn set_style(&mut self, slot: StyleSlot, style: Option<Arc<StyleBox>>) {
        self.styles.set(slot, style);
        for entry in &mut self.entries {
            entry.panel.set_style(slot, self.styles.get(slot).cloned());
        }
        self.state.mark_dirty();
    }

    /// Returns the container styles.
    #[must_use]
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Number of relay slots the list holds on its panels.
    #[must_use]
    pub fn live_subscriptions(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| {
                entry
                    .connections
                    .iter()
                    .filter(|&&id| entry.panel.is_connected(id))
                    .count()
            })
            .sum()
    }

    /// Connects a slot to `panel_pressed`.
    pub fn on_panel_pressed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.panel_pressed.connect(slot)
    }

    /// Connects a slot to `panel_unpressed`.
    pub fn on_panel_unpressed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.panel_unpressed.connect(slot)
    }

    /// Connects a slot to `panel_moused_over`.
    pub fn on_moused_over<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.moused_over.connect(slot)
    }

    /// Connects a slot to `panel_moused_away`.
    pub fn on_moused_away<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&()) + 'static,
    {
        self.signals.moused_away.connect(slot)
    }

    /// Disconnects an outward slot.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        self.signals.panel_pressed.disconnect(id)
            || self.signals.panel_unpressed.disconnect(id)
            || self.signals.moused_over.disconnect(id)
            || self.signals.moused_away.disconnect(id)
    }

    fn entry_mut(&mut self, index: usize) -> UiResult<&mut PanelEntry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(UiError::IndexOutOfRange { index, len })
    }

    fn attach(&mut self, mut panel: DisplayPanel) -> WidgetId {
        let id = panel.id();
        for slot in [StyleSlot::Normal, StyleSlot::Pressed, StyleSlot::Hover] {
            panel.set_style(slot, self.styles.get(slot).cloned());
        }

        let tx = self.relay.sender(id);
        let pressed = panel.on_pressed(move |r| tx.send(PanelEvent::Pressed(r.clone())));
        let tx = self.relay.sender(id);
        let unpressed = panel.on_unpressed(move |r| tx.send(PanelEvent::Unpressed(r.clone())));
        let tx = self.relay.sender(id);
        let over = panel.on_moused_over(move |r| tx.send(PanelEvent::MousedOver(r.clone())));
        let tx = self.relay.sender(id);
        let away = panel.on_moused_away(move |()| tx.send(PanelEvent::MousedAway));

        let arrived_pressed = panel.is_pressed();
        if arrived_pressed {
            panel.set_pressed(false);
        }
        self.entries.push(PanelEntry {
            panel,
            connections: [pressed, unpressed, over, away],
        });
        self.state.mark_dirty();
        if arrived_pressed {
            tracing::debug!(panel = id.raw(), "released pressed panel on adoption");
            self.flush();
        }
        id
    }

    fn detach(&self, mut entry: PanelEntry) {
        for connection in entry.connections {
            entry.panel.disconnect(connection);
        }
        self.relay.purge(entry.panel.id());
    }

    /// Relays queued panel events in order.
    fn flush(&mut self) {
        while let Some((source, event)) = self.relay.pop() {
            match event {
                PanelEvent::Pressed(resource) => {
                    self.release_others(source);
                    self.signals.panel_pressed.emit(&resource);
                }
                PanelEvent::Unpressed(resource) => self.signals.panel_unpressed.emit(&resource),
                PanelEvent::MousedOver(resource) => self.signals.moused_over.emit(&resource),
                PanelEvent::MousedAway => self.signals.moused_away.emit(&()),
            }
        }
        debug_assert!(self.relay.is_empty());
    }

    /// Releases every pressed panel other than `source` and relays their
    /// unpressed events ahead of anything already queued.
    fn release_others(&mut self, source: WidgetId) {
        let backlog = self.relay.take_backlog();
        for entry in &mut self.entries {
            if entry.panel.id() != source && entry.panel.is_pressed() {
                entry.panel.set_pressed(false);
            }
        }
        self.flush();
        self.relay.restore_backlog(backlog);
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for DisplayList {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// List-level events carry no panel; see [`DisplayList::dispatch`].
    fn handle_input(&mut self, _event: &PointerEvent) -> WidgetResponse {
        WidgetResponse::default()
    }

    fn apply(&mut self) -> bool {
        let mut dirty = self.state.take_dirty();
        for entry in &mut self.entries {
            dirty |= entry.panel.apply();
        }
        dirty
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        for entry in &self.entries {
            entry.panel.render(commands);
        }
    }
}
