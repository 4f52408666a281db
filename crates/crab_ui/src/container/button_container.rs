//! Pass-through container of resource buttons.

use super::relay::RelayQueue;
use crate::config::WidgetConfig;
use crate::error::{UiError, UiResult};
use crate::input::PointerEvent;
use crate::render::RenderCommand;
use crate::signal::{ConnectionId, Signal};
use crate::widget::{ResourceButton, Widget, WidgetId, WidgetResponse, WidgetState};
use crab_resources::DisplayResource;

#[derive(Debug)]
enum ButtonEvent {
    Pressed(Option<DisplayResource>),
    RightClicked(Option<DisplayResource>),
    MousedOver(Option<DisplayResource>),
    MousedAway,
}

#[derive(Debug)]
struct ButtonEntry {
    button: ResourceButton,
    connections: [ConnectionId; 4],
}

#[derive(Debug, Default)]
struct ContainerSignals {
    button_pressed: Signal<Option<DisplayResource>>,
    button_right_clicked: Signal<Option<DisplayResource>>,
    button_moused_over: Signal<Option<DisplayResource>>,
    button_moused_away: Signal<()>,
}

/// A flow of [`ResourceButton`]s whose events are relayed one to one.
///
/// Unlike [`DisplayList`](super::DisplayList) there is no selection: every
/// button event is forwarded as is.
#[derive(Debug)]
pub struct ResourceButtonContainer {
    state: WidgetState,
    entries: Vec<ButtonEntry>,
    config: WidgetConfig,
    relay: RelayQueue<ButtonEvent>,
    signals: ContainerSignals,
}

impl ResourceButtonContainer {
    /// Creates an empty container with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    /// Creates an empty container whose buttons use `config`.
    #[must_use]
    pub fn with_config(config: &WidgetConfig) -> Self {
        Self {
            state: WidgetState::new(),
            entries: Vec::new(),
            config: config.clone(),
            relay: RelayQueue::new(),
            signals: ContainerSignals::default(),
        }
    }

    /// Removes every button, then adds one per resource with `icon_size`.
    pub fn populate(
        &mut self,
        resources: impl IntoIterator<Item = DisplayResource>,
        icon_size: u32,
    ) {
        let removed = self.clear();
        for resource in resources {
            self.add_resource(resource, icon_size);
        }
        tracing::debug!(removed, added = self.entries.len(), "populated button container");
    }

    /// Drops every button. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        for entry in std::mem::take(&mut self.entries) {
            self.detach(entry);
        }
        self.state.mark_dirty();
        count
    }

    /// Appends a button for `resource` and returns its id.
    pub fn add_resource(&mut self, resource: DisplayResource, icon_size: u32) -> WidgetId {
        let mut button = ResourceButton::with_config(&self.config);
        button.set_resource(Some(resource));
        button.set_icon_size(icon_size);
        let id = button.id();

        let tx = self.relay.sender(id);
        let pressed = button.on_pressed(move |r| tx.send(ButtonEvent::Pressed(r.clone())));
        let tx = self.relay.sender(id);
        let right = button.on_right_clicked(move |r| tx.send(ButtonEvent::RightClicked(r.clone())));
        let tx = self.relay.sender(id);
        let over = button.on_moused_over(move |r| tx.send(ButtonEvent::MousedOver(r.clone())));
        let tx = self.relay.sender(id);
        let away = button.on_moused_away(move |()| tx.send(ButtonEvent::MousedAway));

        self.entries.push(ButtonEntry {
            button,
            connections: [pressed, right, over, away],
        });
        self.state.mark_dirty();
        id
    }

    /// Removes the first button bound to `resource`.
    ///
    /// # Panics
    ///
    /// Panics if no button is bound to `resource`. Use
    /// [`ResourceButtonContainer::try_remove_resource`] to handle that case.
    pub fn remove_resource(&mut self, resource: &DisplayResource) {
        if let Err(err) = self.try_remove_resource(resource) {
            panic!("{err}");
        }
    }

    /// Removes the first button bound to `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ResourceNotFound`] if no button is bound to it.
    pub fn try_remove_resource(&mut self, resource: &DisplayResource) -> UiResult<()> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.button.is_bound_to(resource))
            .ok_or_else(|| UiError::ResourceNotFound {
                id: resource.id().raw(),
                name: resource.display_name(),
            })?;
        let entry = self.entries.remove(index);
        tracing::debug!(index, remaining = self.entries.len(), "removed resource button");
        self.detach(entry);
        self.state.mark_dirty();
        Ok(())
    }

    /// Returns the resource of the button at `index`.
    #[must_use]
    pub fn get_resource_at_index(&self, index: usize) -> Option<DisplayResource> {
        self.entries.get(index)?.button.resource().cloned()
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the button at `index`.
    #[must_use]
    pub fn button(&self, index: usize) -> Option<&ResourceButton> {
        self.entries.get(index).map(|entry| &entry.button)
    }

    /// Enables or disables button `index`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::IndexOutOfRange`] if there is no such button.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> UiResult<()> {
        self.configure_button(index, |button| button.set_enabled(enabled))
    }

    /// Runs `edit` on button `index`, then relays whatever it emitted.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::IndexOutOfRange`] if there is no such button.
    pub fn configure_button<F>(&mut self, index: usize, edit: F) -> UiResult<()>
    where
        F: FnOnce(&mut ResourceButton),
    {
        edit(&mut self.entry_mut(index)?.button);
        self.flush();
        Ok(())
    }

    /// Delivers a pointer event to button `index` and relays what it emits.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::IndexOutOfRange`] if there is no such button.
    pub fn dispatch(&mut self, index: usize, event: &PointerEvent) -> UiResult<WidgetResponse> {
        let response = self.entry_mut(index)?.button.handle_input(event);
        self.flush();
        Ok(response)
    }

    /// Number of relay slots the container holds on its buttons.
    #[must_use]
    pub fn live_subscriptions(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| {
                entry
                    .connections
                    .iter()
                    .filter(|&&id| entry.button.is_connected(id))
                    .count()
            })
            .sum()
    }

    /// Connects a slot to `button_pressed`.
    pub fn on_button_pressed<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.button_pressed.connect(slot)
    }

    /// Connects a slot to `button_right_clicked`.
    pub fn on_button_right_clicked<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.button_right_clicked.connect(slot)
    }

    /// Connects a slot to `button_moused_over`.
    pub fn on_button_moused_over<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&Option<DisplayResource>) + 'static,
    {
        self.signals.button_moused_over.connect(slot)
    }

    /// Connects a slot to `button_moused_away`.
    pub fn on_button_moused_away<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&()) + 'static,
    {
        self.signals.button_moused_away.connect(slot)
    }

    /// Disconnects an outward slot.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        self.signals.button_pressed.disconnect(id)
            || self.signals.button_right_clicked.disconnect(id)
            || self.signals.button_moused_over.disconnect(id)
            || self.signals.button_moused_away.disconnect(id)
    }

    fn entry_mut(&mut self, index: usize) -> UiResult<&mut ButtonEntry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(UiError::IndexOutOfRange { index, len })
    }

    fn detach(&self, mut entry: ButtonEntry) {
        for connection in entry.connections {
            entry.button.disconnect(connection);
        }
        self.relay.purge(entry.button.id());
    }

    fn flush(&mut self) {
        while let Some((_, event)) = self.relay.pop() {
            match event {
                ButtonEvent::Pressed(resource) => self.signals.button_pressed.emit(&resource),
                ButtonEvent::RightClicked(resource) => {
                    self.signals.button_right_clicked.emit(&resource);
                }
                ButtonEvent::MousedOver(resource) => self.signals.button_moused_over.emit(&resource),
                ButtonEvent::MousedAway => self.signals.button_moused_away.emit(&()),
            }
        }
    }
}

impl Default for ResourceButtonContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ResourceButtonContainer {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// Container-level events carry no button; see
    /// [`ResourceButtonContainer::dispatch`].
    fn handle_input(&mut self, _event: &PointerEvent) -> WidgetResponse {
        WidgetResponse::default()
    }

    fn apply(&mut self) -> bool {
        let mut dirty = self.state.take_dirty();
        for entry in &mut self.entries {
            dirty |= entry.button.apply();
        }
        dirty
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        for entry in &self.entries {
            entry.button.render(commands);
        }
    }
}
