//! Page-wide pointer broadcast.
//!
//! Every click dispatched through a [`Document`](crate::Document) is published
//! here once element handlers have run, so widgets can react to clicks that
//! land outside of them. Listeners stay registered for exactly as long as
//! the [`PointerSubscription`] returned by [`PointerBus::subscribe`] is alive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

/// A click as seen by pointer listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    /// Id of the clicked element.
    pub target: String,
    /// Ids from the mounting container down to the target, inclusive.
    /// Empty when the target is not mounted (a click on the bare page).
    pub path: Vec<String>,
}

impl PointerEvent {
    /// Check whether the click landed on `id` or one of its descendants.
    pub fn is_within(&self, id: &str) -> bool {
        self.path.iter().any(|p| p == id)
    }
}

/// Listener closure for pointer events.
pub type PointerListener = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(u64, PointerListener)>>,
}

/// Broadcast channel for page clicks.
#[derive(Clone, Default)]
pub struct PointerBus {
    inner: Arc<BusInner>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is removed when the returned handle is
    /// unsubscribed or dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: PointerListener) -> PointerSubscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.inner.listeners.write() {
            listeners.push((id, listener));
        }
        log::trace!("PointerBus::subscribe id={id}");
        PointerSubscription {
            id,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every listener.
    ///
    /// Listeners run on a snapshot, without the lock held, so they may
    /// subscribe or unsubscribe while being notified.
    pub fn publish(&self, event: &PointerEvent) {
        let snapshot: Vec<PointerListener> = self
            .inner
            .listeners
            .read()
            .map(|listeners| listeners.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default();

        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .read()
            .map(|listeners| listeners.len())
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for PointerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerBus")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

/// Handle to a registered pointer listener.
#[derive(Debug)]
pub struct PointerSubscription {
    id: u64,
    bus: Weak<BusInner>,
}

impl PointerSubscription {
    /// Unregister the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Whether the bus this subscription belongs to still exists.
    pub fn is_attached(&self) -> bool {
        self.bus.strong_count() > 0
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade()
            && let Ok(mut listeners) = bus.listeners.write()
        {
            listeners.retain(|(id, _)| *id != self.id);
            log::trace!("PointerSubscription dropped id={}", self.id);
        }
    }
}
