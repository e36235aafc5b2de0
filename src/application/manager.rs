//! The layer stack and toast slot.
//!
//! `LayerManager` is an observable store: every mutation bumps a revision
//! counter and notifies subscribers, and views read the current state back
//! through the accessors. Deferred work (push completions and toast expiry)
//! lives in a [`Scheduler`] owned by the manager and only runs from
//! [`LayerManager::tick`], so dropping the manager drops every pending task.

use super::clock::{Clock, SystemClock};
use super::events::{LayerEvent, Observer, SubscriptionId};
use super::scheduler::{Scheduler, TaskHandle};
use crate::domain::{EntryDirection, EntryStyle, Layer, LayerConfig, LayerId};
use ratatui::layout::Position;
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Produces a layer's view from its snapshot. Called on every redraw.
pub type Content<V> = Box<dyn Fn(&Layer) -> V>;

/// Runs once the push transition has settled.
pub type Completion<V> = Box<dyn FnOnce(&mut LayerManager<V>)>;

/// A presented layer together with its content.
pub struct Entry<V> {
    layer: Layer,
    content: Content<V>,
    entered_at: Instant,
    transition: Duration,
}

impl<V> Entry<V> {
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn id(&self) -> LayerId {
        self.layer.id
    }

    pub fn view(&self) -> V {
        (self.content)(&self.layer)
    }

    /// Entry progress from `0.0` to `1.0`. Instant layers are always at rest.
    pub fn progress(&self, now: Instant) -> f32 {
        fraction(now.saturating_duration_since(self.entered_at), self.transition)
    }
}

/// A layer that has left the stack but is still animating out.
pub struct Departure<V> {
    entry: Entry<V>,
    index: usize,
    started: Instant,
    duration: Duration,
    from: f32,
}

impl<V> Departure<V> {
    /// Starts the exit from the entry's current progress. The exit lasts as
    /// long as the entry had run.
    fn start(entry: Entry<V>, index: usize, now: Instant) -> Self {
        let from = entry.progress(now);
        let duration = now.saturating_duration_since(entry.entered_at).min(entry.transition);
        Self {
            entry,
            index,
            started: now,
            duration,
            from,
        }
    }

    pub fn entry(&self) -> &Entry<V> {
        &self.entry
    }

    /// Stack position the layer occupied when it was removed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Falls to `0.0` from the entry progress the layer had when it was removed.
    pub fn progress(&self, now: Instant) -> f32 {
        self.from * (1.0 - fraction(now.saturating_duration_since(self.started), self.duration))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
}

enum Deferred<V> {
    Completion { id: LayerId, callback: Completion<V> },
    ExpireToast(LayerId),
}

/// Ordered stack of overlay layers plus a single toast slot.
///
/// Index 0 is the bottom of the stack; the last entry is the top and the
/// first candidate for [`pop`](Self::pop).
///
/// # Examples
///
/// ```
/// use tlayers::application::LayerManager;
/// use tlayers::domain::{EntryDirection, EntryStyle};
///
/// let mut manager: LayerManager<String> = LayerManager::new();
/// let id = manager.push(EntryStyle::Animated, EntryDirection::Bottom, false, false, None, |layer| {
///     format!("sheet {}", layer.id)
/// });
/// assert_eq!(manager.len(), 1);
/// assert_eq!(manager.top().map(|layer| layer.id), Some(id));
///
/// manager.pop();
/// assert!(manager.is_empty());
/// ```
pub struct LayerManager<V> {
    config: LayerConfig,
    clock: Box<dyn Clock>,
    entries: Vec<Entry<V>>,
    toast: Option<Entry<V>>,
    toast_expiry: Option<TaskHandle>,
    departing: Vec<Departure<V>>,
    toast_departure: Option<Departure<V>>,
    scheduler: Scheduler<Deferred<V>>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    revision: u64,
    /// Bumped by `pop_all` so a tick in progress stops running tasks cancelled under it.
    resets: u64,
    /// Reserved for future positioning. Nothing reads these yet.
    anchors: HashMap<String, Position>,
}

impl<V> Default for LayerManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for LayerManager<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerManager")
            .field("layers", &self.layers().collect::<Vec<_>>())
            .field("toast", &self.current_toast())
            .field("departing", &self.departing.len())
            .field("scheduler", &self.scheduler)
            .field("revision", &self.revision)
            .finish()
    }
}

impl<V> LayerManager<V> {
    pub fn new() -> Self {
        Self::with_config(LayerConfig::default())
    }

    pub fn with_config(config: LayerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: LayerConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
            entries: Vec::new(),
            toast: None,
            toast_expiry: None,
            departing: Vec::new(),
            toast_departure: None,
            scheduler: Scheduler::new(),
            observers: Vec::new(),
            next_subscription: 0,
            revision: 0,
            resets: 0,
            anchors: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Appends a layer to the top of the stack.
    ///
    /// `completion`, if any, runs from [`tick`](Self::tick) once the layer
    /// transition duration has passed, whatever the entry style.
    pub fn push<F>(
        &mut self,
        entry_style: EntryStyle,
        entry_direction: EntryDirection,
        is_modal: bool,
        is_dismissable: bool,
        completion: Option<Completion<V>>,
        content: F,
    ) -> LayerId
    where
        F: Fn(&Layer) -> V + 'static,
    {
        let layer = Layer::new(entry_style, entry_direction, is_modal, is_dismissable);
        let id = layer.id;
        let now = self.now();
        let transition = match entry_style {
            EntryStyle::Animated => self.config.layer_transition(),
            EntryStyle::Instant => Duration::ZERO,
        };
        self.entries.push(Entry {
            layer,
            content: Box::new(content),
            entered_at: now,
            transition,
        });
        let index = self.entries.len() - 1;
        debug!(%id, index, ?entry_style, ?entry_direction, is_modal, "pushed layer");

        if let Some(callback) = completion {
            self.scheduler.schedule(
                now + self.config.layer_transition(),
                Deferred::Completion { id, callback },
            );
        }
        self.emit(LayerEvent::Pushed { id, index });
        id
    }

    /// Shows a toast, replacing any current one without an exit animation.
    ///
    /// # Panics
    ///
    /// Panics if `lifespan` is zero. A toast must expire on its own.
    pub fn toast<F>(&mut self, entry_direction: EntryDirection, lifespan: Duration, content: F) -> LayerId
    where
        F: Fn(&Layer) -> V + 'static,
    {
        let layer = Layer::toast(entry_direction, lifespan);
        assert!(layer.expires(), "toast lifespan must be positive");
        let id = layer.id;
        let now = self.now();

        if let Some(handle) = self.toast_expiry.take() {
            self.scheduler.cancel(handle);
        }
        self.toast_departure = None;
        let replaced = self
            .toast
            .replace(Entry {
                layer,
                content: Box::new(content),
                entered_at: now,
                transition: self.config.toast_transition(),
            })
            .map(|old| old.layer.id);
        self.toast_expiry = match now.checked_add(lifespan) {
            Some(deadline) => Some(self.scheduler.schedule(deadline, Deferred::ExpireToast(id))),
            None => {
                debug!(%id, ?lifespan, "toast lifespan out of clock range, showing until cleared");
                None
            }
        };

        debug!(%id, ?replaced, ?lifespan, "showing toast");
        self.emit(LayerEvent::ToastShown { id, replaced });
        id
    }

    /// Empties the toast slot. Does nothing when there is no toast.
    pub fn clear_toast(&mut self) {
        self.clear_toast_inner(false);
    }

    fn clear_toast_inner(&mut self, expired: bool) {
        let Some(entry) = self.toast.take() else {
            trace!("clear_toast on empty slot");
            return;
        };
        if let Some(handle) = self.toast_expiry.take() {
            self.scheduler.cancel(handle);
        }
        let id = entry.layer.id;
        self.toast_departure = Some(Departure::start(entry, 0, self.now()));
        debug!(%id, expired, "cleared toast");
        self.emit(LayerEvent::ToastCleared { id, expired });
    }

    /// Removes the top layer, if any.
    pub fn pop(&mut self) {
        match self.entries.len().checked_sub(1) {
            Some(top) => self.pop_at(top),
            None => trace!("pop on empty stack"),
        }
    }

    /// Removes the layer at `index`. Out-of-range indices are ignored.
    pub fn pop_at(&mut self, index: usize) {
        if index >= self.entries.len() {
            trace!(index, len = self.entries.len(), "pop_at out of range");
            return;
        }
        let entry = self.entries.remove(index);
        let id = entry.layer.id;
        if entry.layer.is_animated() {
            self.departing.push(Departure::start(entry, index, self.now()));
        }
        debug!(%id, index, "popped layer");
        self.emit(LayerEvent::Popped { id, index });
    }

    /// Removes the layer with `id`. Unknown ids are ignored.
    pub fn pop_with_id(&mut self, id: LayerId) {
        match self.position(id) {
            Some(index) => self.pop_at(index),
            None => trace!(%id, "pop_with_id for unknown layer"),
        }
    }

    /// Pops every layer from the top down, then clears the toast.
    ///
    /// Pending push completions and toast expiry are cancelled as well, so
    /// nothing scheduled before the reset can run after it.
    pub fn pop_all(&mut self) {
        debug!(len = self.entries.len(), "popping all layers");
        while !self.entries.is_empty() {
            self.pop();
        }
        self.clear_toast();
        self.scheduler.clear();
        self.toast_expiry = None;
        self.resets += 1;
    }

    /// A tap landed on `id`'s scrim: pop it if it is a dismissable modal.
    pub fn dismiss_from_scrim(&mut self, id: LayerId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let layer = self.entries[index].layer;
        if !(layer.is_modal && layer.is_dismissable) {
            trace!(%id, "scrim tap on non-dismissable layer");
            return false;
        }
        self.pop_at(index);
        true
    }

    /// Runs due deferred tasks and retires finished exit animations.
    ///
    /// Returns true if anything visible may have changed.
    pub fn tick(&mut self) -> bool {
        let now = self.now();
        let departing = self.departing.len();
        self.departing.retain(|departure| !departure.is_finished(now));
        let mut changed = departing != self.departing.len();

        if self
            .toast_departure
            .as_ref()
            .is_some_and(|departure| departure.is_finished(now))
        {
            self.toast_departure = None;
            changed = true;
        }

        let resets = self.resets;
        for task in self.scheduler.drain_due(now) {
            if self.resets != resets {
                trace!("pending tasks dropped by pop_all");
                break;
            }
            changed = true;
            match task {
                Deferred::Completion { id, callback } => {
                    trace!(%id, "running push completion");
                    callback(self);
                    self.emit(LayerEvent::CompletionFired { id });
                }
                Deferred::ExpireToast(id) => {
                    if self.toast.as_ref().is_some_and(|toast| toast.layer.id == id) {
                        self.toast_expiry = None;
                        self.clear_toast_inner(true);
                    } else {
                        trace!(%id, "stale toast expiry");
                    }
                }
            }
        }
        changed
    }

    /// Earliest pending completion or toast expiry.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn is_animating(&self) -> bool {
        let now = self.now();
        !self.departing.is_empty()
            || self.toast_departure.is_some()
            || self.entries.iter().chain(self.toast.iter()).any(|entry| entry.progress(now) < 1.0)
    }

    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.entries.iter().map(|entry| &entry.layer)
    }

    pub fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.entries.iter().map(|entry| &entry.layer).find(|layer| layer.id == id)
    }

    pub fn position(&self, id: LayerId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.layer.id == id)
    }

    pub fn top(&self) -> Option<&Layer> {
        self.entries.last().map(|entry| &entry.layer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_toast(&self) -> Option<&Layer> {
        self.toast.as_ref().map(|entry| &entry.layer)
    }

    pub fn toast_entry(&self) -> Option<&Entry<V>> {
        self.toast.as_ref()
    }

    pub fn departing(&self) -> &[Departure<V>] {
        &self.departing
    }

    pub fn toast_departure(&self) -> Option<&Departure<V>> {
        self.toast_departure.as_ref()
    }

    /// Number of pending completions and toast expiries.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Bumped on every stack or toast change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_anchor(&mut self, name: impl Into<String>, position: Position) {
        self.anchors.insert(name.into(), position);
    }

    pub fn anchor(&self, name: &str) -> Option<Position> {
        self.anchors.get(name).copied()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&LayerEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);
        self.observers.len() != before
    }

    fn emit(&mut self, event: LayerEvent) {
        self.revision += 1;
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}
