//! # DisplayList Selection Tests
//!
//! Single selection, relay ordering, removal safety and style propagation
//! across a list of resource panels.
//!
//! Run with: cargo test --package crab_ui --test selection

use crab_resources::DisplayResource;
use crab_ui::{
    ChildNode, DisplayList, DisplayPanel, HeaderSection, MouseButton, PointerEvent, StyleBox,
    StyleSlot, Widget,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Pressed(String),
    Unpressed(String),
    Over(String),
    Away,
}

type Log = Rc<RefCell<Vec<Seen>>>;

fn name_of(resource: &Option<DisplayResource>) -> String {
    resource.as_ref().map(DisplayResource::display_name).unwrap_or_default()
}

/// List over A, B, C with every outward signal logged.
fn abc() -> (DisplayList, [DisplayResource; 3], Log) {
    let resources = ["A", "B", "C"].map(DisplayResource::new);
    let mut list = DisplayList::new();
    list.populate(resources.clone());

    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    list.on_panel_pressed(move |r| sink.borrow_mut().push(Seen::Pressed(name_of(r))));
    let sink = Rc::clone(&log);
    list.on_panel_unpressed(move |r| sink.borrow_mut().push(Seen::Unpressed(name_of(r))));
    let sink = Rc::clone(&log);
    list.on_moused_over(move |r| sink.borrow_mut().push(Seen::Over(name_of(r))));
    let sink = Rc::clone(&log);
    list.on_moused_away(move |()| sink.borrow_mut().push(Seen::Away));

    (list, resources, log)
}

fn click(list: &mut DisplayList, index: usize) {
    list.dispatch(index, &PointerEvent::press(MouseButton::Left)).unwrap();
    list.dispatch(index, &PointerEvent::release(MouseButton::Left)).unwrap();
}

fn pressed_flags(list: &DisplayList) -> Vec<bool> {
    (0..list.len())
        .map(|i| list.panel(i).unwrap().is_pressed())
        .collect()
}

#[test]
fn test_press_b_then_a() {
    let (mut list, _, log) = abc();

    click(&mut list, 1);
    assert_eq!(pressed_flags(&list), [false, true, false]);
    assert_eq!(*log.borrow(), [Seen::Pressed("B".into())]);

    log.borrow_mut().clear();
    click(&mut list, 0);
    assert_eq!(pressed_flags(&list), [true, false, false]);
    assert_eq!(
        *log.borrow(),
        [Seen::Unpressed("B".into()), Seen::Pressed("A".into())]
    );
}

#[test]
fn test_siblings_already_released_when_pressed_relayed() {
    let resources = ["A", "B", "C"].map(DisplayResource::new);
    let mut list = DisplayList::new();
    list.populate(resources.clone());
    list.press(2).unwrap();

    let order = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&order);
    list.on_panel_unpressed(move |r| sink.borrow_mut().push(format!("-{}", name_of(r))));
    let sink = Rc::clone(&order);
    list.on_panel_pressed(move |r| sink.borrow_mut().push(format!("+{}", name_of(r))));

    list.press(0).unwrap();
    assert_eq!(*order.borrow(), ["-C", "+A"]);
    assert_eq!(list.selected_index(), Some(0));
}

#[test]
fn test_single_selection_under_any_sequence() {
    let (mut list, _, _) = abc();
    let sequence = [0, 2, 2, 1, 0, 1, 1, 2, 0];

    for index in sequence {
        click(&mut list, index);
        let pressed = pressed_flags(&list).into_iter().filter(|p| *p).count();
        assert_eq!(pressed, 1);
        assert_eq!(list.selected_index(), Some(index));
    }
}

#[test]
fn test_unpress_relays_without_selecting() {
    let (mut list, _, log) = abc();
    list.press(1).unwrap();
    log.borrow_mut().clear();

    list.unpress(1).unwrap();
    assert_eq!(list.selected_index(), None);
    assert_eq!(*log.borrow(), [Seen::Unpressed("B".into())]);
}

#[test]
fn test_relay_carries_bound_resource() {
    let (mut list, resources, _) = abc();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    list.on_panel_pressed(move |r| sink.borrow_mut().push(r.clone()));
    let sink = Rc::clone(&seen);
    list.on_moused_over(move |r| sink.borrow_mut().push(r.clone()));

    list.dispatch(2, &PointerEvent::Entered).unwrap();
    list.press(2).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    for resource in seen.iter() {
        assert!(resource.as_ref().unwrap().same_resource(&resources[2]));
    }
}

#[test]
fn test_hover_relay() {
    let (mut list, _, log) = abc();
    list.dispatch(0, &PointerEvent::Entered).unwrap();
    list.dispatch(0, &PointerEvent::Exited).unwrap();

    assert_eq!(*log.borrow(), [Seen::Over("A".into()), Seen::Away]);
}

#[test]
fn test_populate_counts_and_subscriptions() {
    let (mut list, resources, _) = abc();
    assert_eq!(list.len(), 3);
    assert_eq!(list.live_subscriptions(), 12);
    for (i, resource) in resources.iter().enumerate() {
        assert_eq!(list.get_resource_at_index(i).as_ref(), Some(resource));
        assert_eq!(resource.observer_count(), 1);
    }

    list.populate(Vec::new());
    assert!(list.is_empty());
    assert_eq!(list.live_subscriptions(), 0);
    for resource in &resources {
        assert_eq!(resource.observer_count(), 0);
    }
}

#[test]
fn test_repopulate_drops_previous_generation() {
    let (mut list, old, log) = abc();
    let fresh = ["X", "Y"].map(DisplayResource::new);
    list.populate(fresh.clone());

    assert_eq!(list.resources(), fresh);
    assert_eq!(list.live_subscriptions(), 8);
    assert!(old.iter().all(|r| r.observer_count() == 0));

    click(&mut list, 1);
    assert_eq!(*log.borrow(), [Seen::Pressed("Y".into())]);
}

#[test]
fn test_remove_pressed_panel() {
    let (mut list, resources, log) = abc();
    list.press(1).unwrap();
    log.borrow_mut().clear();

    list.remove_resource(&resources[1]);

    assert_eq!(list.len(), 2);
    assert_eq!(list.selected_index(), None);
    assert_eq!(resources[1].observer_count(), 0);
    assert!(log.borrow().is_empty());

    resources[1].set_display_name("B2");
    list.apply();
    assert!(list.resources().iter().all(|r| !r.same_resource(&resources[1])));
    assert!((0..list.len()).all(|i| list.panel(i).unwrap().label().text() != "B2"));
}

#[test]
fn test_remove_other_keeps_selection() {
    let (mut list, resources, log) = abc();
    list.press(0).unwrap();
    log.borrow_mut().clear();

    list.remove_resource(&resources[1]);

    assert_eq!(list.len(), 2);
    assert_eq!(list.selected_index(), Some(0));
    assert!(list.panel(0).unwrap().is_pressed());
    assert!(log.borrow().is_empty());

    click(&mut list, 1);
    assert_eq!(
        *log.borrow(),
        [Seen::Unpressed("A".into()), Seen::Pressed("C".into())]
    );
}

#[test]
fn test_remove_missing_fails() {
    let (mut list, _, _) = abc();
    assert!(list.try_remove_resource(&DisplayResource::new("A")).is_err());
    assert_eq!(list.len(), 3);
}

#[test]
fn test_remove_same_name_matches_identity() {
    let twin_a = DisplayResource::new("Twin");
    let twin_b = DisplayResource::new("Twin");
    let mut list = DisplayList::new();
    list.populate([twin_a.clone(), twin_b.clone()]);

    list.remove_resource(&twin_b);
    assert_eq!(list.len(), 1);
    assert!(list.get_resource_at_index(0).unwrap().same_resource(&twin_a));
}

#[test]
fn test_pressed_style_set_after_children_exist() {
    let (mut list, _, _) = abc();
    let stale = Arc::new(StyleBox::default());
    let fresh = Arc::new(StyleBox {
        border_width: 3,
        ..StyleBox::default()
    });

    list.set_style(StyleSlot::Pressed, Some(Arc::clone(&stale)));
    list.set_style(StyleSlot::Pressed, Some(Arc::clone(&fresh)));
    list.press(1).unwrap();

    let style = list.panel(1).unwrap().style().unwrap();
    assert!(Arc::ptr_eq(style, &fresh));
    assert!(!Arc::ptr_eq(style, &stale));
}

#[test]
fn test_styles_reach_future_children() {
    let hover = Arc::new(StyleBox::default());
    let mut list = DisplayList::new();
    list.set_style(StyleSlot::Hover, Some(Arc::clone(&hover)));
    list.populate([DisplayResource::new("Late")]);

    list.dispatch(0, &PointerEvent::Entered).unwrap();
    assert!(Arc::ptr_eq(list.panel(0).unwrap().style().unwrap(), &hover));
}

#[test]
fn test_foreign_children_never_kept() {
    let (mut list, _, _) = abc();
    let adopted = list.add_child(ChildNode::Panel(DisplayPanel::new()));
    let evicted = list.add_child(ChildNode::Foreign(Box::new(HeaderSection::new("Stray"))));

    assert!(adopted.is_some());
    assert!(evicted.is_none());
    assert_eq!(list.len(), 4);
    assert_eq!(list.live_subscriptions(), 16);
}

#[test]
fn test_render_emits_selected_style() {
    let (mut list, _, _) = abc();
    let pressed = Arc::new(StyleBox::default());
    list.set_style(StyleSlot::Pressed, Some(Arc::clone(&pressed)));
    list.press(0).unwrap();

    let mut commands = Vec::new();
    list.render(&mut commands);

    let first_panel = list.panel(0).unwrap().id();
    let styled = commands.iter().any(|command| {
        matches!(
            command,
            crab_ui::RenderCommand::Panel { widget, style: Some(style), .. }
                if *widget == first_panel && Arc::ptr_eq(style, &pressed)
        )
    });
    assert!(styled);
}
