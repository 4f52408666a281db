//! Child-to-container event relay.
//!
//! Children emit synchronously while the container is mutably borrowed, so
//! slots connected to a child cannot call back into the container. They push
//! into a shared queue instead, and the container drains it once the child
//! call returns.

use crate::widget::WidgetId;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Queue<E> = Rc<RefCell<VecDeque<(WidgetId, E)>>>;

/// Events waiting to be relayed, tagged with the child that raised them.
#[derive(Debug)]
pub(crate) struct RelayQueue<E> {
    queue: Queue<E>,
}

impl<E> RelayQueue<E> {
    pub(crate) fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Returns a sender that tags events with `source`.
    pub(crate) fn sender(&self, source: WidgetId) -> RelaySender<E> {
        RelaySender {
            source,
            queue: Rc::clone(&self.queue),
        }
    }

    pub(crate) fn pop(&self) -> Option<(WidgetId, E)> {
        self.queue.borrow_mut().pop_front()
    }

    /// Drops every queued event from `source`.
    pub(crate) fn purge(&self, source: WidgetId) {
        self.queue.borrow_mut().retain(|(id, _)| *id != source);
    }

    /// Takes everything queued so far, leaving the queue empty.
    pub(crate) fn take_backlog(&self) -> VecDeque<(WidgetId, E)> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }

    /// Puts a backlog back in front of anything queued since it was taken.
    pub(crate) fn restore_backlog(&self, mut backlog: VecDeque<(WidgetId, E)>) {
        let mut queue = self.queue.borrow_mut();
        backlog.append(&mut queue);
        *queue = backlog;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

/// Pushes events from one child into its container's queue.
#[derive(Debug)]
pub(crate) struct RelaySender<E> {
    source: WidgetId,
    queue: Queue<E>,
}

impl<E> RelaySender<E> {
    pub(crate) fn send(&self, event: E) {
        self.queue.borrow_mut().push_back((self.source, event));
    }
}
