//! Frame-driven deferred tasks.
//!
//! Widgets that need something to happen "a little later" (the icon menu's
//! press flash, for one) schedule a task under a key, usually the widget id.
//! The host advances the queue once per frame with the frame delta. A task
//! whose owner is destroyed is cancelled by key and never runs.

#[derive(Debug)]
struct Pending<K, T> {
    key: K,
    /// Seconds left until the task is due. Negative once overdue.
    remaining: f32,
    seq: u64,
    task: T,
}

/// Tasks waiting for a deadline, at most one per key.
#[derive(Debug)]
pub struct DeferredQueue<K, T> {
    pending: Vec<Pending<K, T>>,
    next_seq: u64,
}

impl<K, T> DeferredQueue<K, T>
where
    K: Copy + Eq,
{
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedules `task` to run `delay` seconds from now.
    ///
    /// Replaces any task already pending for `key`.
    pub fn schedule(&mut self, key: K, delay: f32, task: T) {
        if self.cancel(key) {
            tracing::trace!("rescheduled deferred task");
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            key,
            remaining: delay.max(0.0),
            seq,
            task,
        });
    }

    /// Cancels the task pending for `key`. Returns true if one was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.key != key);
        before != self.pending.len()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Advances time by `dt` seconds and returns the tasks that came due,
    /// earliest deadline first. Tasks with equal deadlines keep schedule order.
    pub fn advance(&mut self, dt: f32) -> Vec<(K, T)> {
        let dt = dt.max(0.0);
        for pending in &mut self.pending {
            pending.remaining -= dt;
        }

        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].remaining <= 0.0 {
                due.push(self.pending.swap_remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by(|a, b| a.remaining.total_cmp(&b.remaining).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|p| (p.key, p.task)).collect()
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if a task is pending for `key`.
    #[must_use]
    pub fn is_scheduled(&self, key: K) -> bool {
        self.pending.iter().any(|p| p.key == key)
    }
}

impl<K, T> Default for DeferredQueue<K, T>
where
    K: Copy + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}
