//! Element event handlers keyed by `(element_id, handler_name)`.
//!
//! Each slot holds at most one handler. Registering into an occupied slot
//! supersedes the previous owner; its [`Registration`] then no longer removes
//! anything when dropped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use crate::event::Event;

/// A handler closure invoked with the dispatched event.
///
/// Handler names used by [`Document::dispatch`](crate::Document::dispatch):
/// - `"on_focus"` - element gained focus
/// - `"on_input"` - text input changed
/// - `"on_click"` - element (or a descendant) was clicked
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

type Slot = (String, String);

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    handlers: RwLock<HashMap<Slot, (u64, Handler)>>,
}

/// Handlers registered on page elements.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    inner: Arc<RegistryInner>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handler` for `event` on `element_id`.
    ///
    /// The handler stays installed until the returned [`Registration`] is
    /// dropped or a later registration takes the same slot.
    #[must_use = "dropping the registration removes the handler"]
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) -> Registration {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let slot = (element_id.to_string(), event.to_string());
        if let Ok(mut handlers) = self.inner.handlers.write()
            && let Some((previous, _)) = handlers.insert(slot.clone(), (id, handler))
        {
            log::debug!("HandlerRegistry: {element_id}/{event} registration {previous} superseded by {id}");
        }
        Registration {
            id,
            slot,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// The handler for an element event, cloned out so it can run unlocked.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        let handlers = self.inner.handlers.read().ok()?;
        handlers
            .get(&(element_id.to_string(), event.to_string()))
            .map(|(_, handler)| Arc::clone(handler))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.inner.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry").field("len", &self.len()).finish()
    }
}

/// Ownership of one handler slot.
#[derive(Debug)]
pub struct Registration {
    id: u64,
    slot: Slot,
    registry: Weak<RegistryInner>,
}

impl Registration {
    /// Whether this registration's handler is still the one installed.
    pub fn is_current(&self) -> bool {
        self.registry
            .upgrade()
            .and_then(|inner| {
                inner
                    .handlers
                    .read()
                    .ok()
                    .map(|handlers| matches!(handlers.get(&self.slot), Some((id, _)) if *id == self.id))
            })
            .unwrap_or(false)
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut handlers) = inner.handlers.write()
            && matches!(handlers.get(&self.slot), Some((id, _)) if *id == self.id)
        {
            handlers.remove(&self.slot);
            log::trace!("Registration dropped {}/{}", self.slot.0, self.slot.1);
        }
    }
}
