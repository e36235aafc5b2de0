//! Deadline-ordered one-shot tasks.
//!
//! Every scheduled task gets a [`TaskHandle`] that can cancel it until it has
//! been drained. Nothing runs on its own: the owner drains due tasks from its
//! own event loop, so tasks always execute on the owner's thread.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

pub struct Scheduler<T> {
    /// Keyed by deadline, then by insertion order for equal deadlines.
    queue: BTreeMap<(Instant, u64), T>,
    deadlines: HashMap<u64, Instant>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> fmt::Debug for Scheduler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.queue.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant, task: T) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((at, seq), task);
        self.deadlines.insert(seq, at);
        TaskHandle(seq)
    }

    /// Returns false if the task already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(at) => self.queue.remove(&(at, handle.0)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Removes and returns every task whose deadline is at or before `now`.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let later = self.queue.split_off(&(now, u64::MAX));
        let due = std::mem::replace(&mut self.queue, later);
        due.into_iter()
            .map(|((_, seq), task)| {
                self.deadlines.remove(&seq);
                task
            })
            .collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
