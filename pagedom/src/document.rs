//! In-memory host page: named containers, handler registry and pointer bus.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::bus::{PointerBus, PointerEvent};
use crate::element::{self, Element};
use crate::event::Event;
use crate::registry::HandlerRegistry;

#[derive(Default)]
struct DocumentInner {
    containers: RwLock<BTreeMap<String, Element>>,
    /// Latest claim on each container
    owners: RwLock<HashMap<String, u64>>,
    next_claim: AtomicU64,
    registry: HandlerRegistry,
    pointer_bus: PointerBus,
}

/// A page that widgets render into.
///
/// Cloning is cheap; all clones share the same containers, handlers and
/// pointer bus.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty container that widgets can be mounted into.
    pub fn add_container(&self, id: impl Into<String>) {
        let id = id.into();
        if let Ok(mut containers) = self.inner.containers.write() {
            containers
                .entry(id.clone())
                .or_insert_with(|| Element::div().id(id));
        }
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.inner
            .containers
            .read()
            .map(|containers| containers.contains_key(id))
            .unwrap_or(false)
    }

    /// Replace the content of a container with `content`.
    ///
    /// Returns false, leaving the page untouched, when there is no such container.
    pub fn mount(&self, container_id: &str, content: Element) -> bool {
        let Ok(mut containers) = self.inner.containers.write() else {
            return false;
        };
        match containers.get_mut(container_id) {
            Some(container) => {
                container.content = element::Content::Children(vec![content]);
                true
            }
            None => {
                log::warn!("Document::mount: no container '{container_id}'");
                false
            }
        }
    }

    /// Remove whatever is mounted in a container, keeping the container itself.
    pub fn unmount(&self, container_id: &str) {
        if let Ok(mut containers) = self.inner.containers.write()
            && let Some(container) = containers.get_mut(container_id)
        {
            container.content = element::Content::None;
        }
    }

    /// Take ownership of a container, superseding any earlier claim.
    ///
    /// Widgets that share a page use this to find out that they have been
    /// replaced by a newer widget in the same container.
    pub fn claim(&self, container_id: &str) -> u64 {
        let claim = self.inner.next_claim.fetch_add(1, Ordering::Relaxed) + 1;
        if let Ok(mut owners) = self.inner.owners.write() {
            owners.insert(container_id.to_string(), claim);
        }
        claim
    }

    /// Whether `claim` is the latest claim on `container_id`.
    pub fn is_owner(&self, container_id: &str, claim: u64) -> bool {
        self.inner
            .owners
            .read()
            .map(|owners| owners.get(container_id) == Some(&claim))
            .unwrap_or(false)
    }

    /// Snapshot of a container and its mounted content.
    pub fn container(&self, id: &str) -> Option<Element> {
        self.inner
            .containers
            .read()
            .ok()
            .and_then(|containers| containers.get(id).cloned())
    }

    /// Find a mounted element by id in any container.
    pub fn find(&self, id: &str) -> Option<Element> {
        let containers = self.inner.containers.read().ok()?;
        containers
            .values()
            .find_map(|container| element::find_element(container, id).cloned())
    }

    /// Check whether `target_id` is the container itself or mounted inside it.
    pub fn contains(&self, container_id: &str, target_id: &str) -> bool {
        self.inner
            .containers
            .read()
            .ok()
            .and_then(|containers| {
                containers
                    .get(container_id)
                    .map(|container| element::contains(container, target_id))
            })
            .unwrap_or(false)
    }

    /// Check whether `target_id` is mounted and not inside a hidden element.
    pub fn is_rendered(&self, target_id: &str) -> bool {
        self.inner
            .containers
            .read()
            .map(|containers| {
                containers
                    .values()
                    .any(|container| element::is_rendered(container, target_id))
            })
            .unwrap_or(false)
    }

    /// Ids from the owning container down to `target_id`, or empty when not mounted.
    pub fn path_to(&self, target_id: &str) -> Vec<String> {
        let Ok(containers) = self.inner.containers.read() else {
            return Vec::new();
        };
        containers
            .values()
            .map(|container| element::path_to(container, target_id))
            .find(|path| !path.is_empty())
            .unwrap_or_default()
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.inner.registry
    }

    pub fn pointer_bus(&self) -> &PointerBus {
        &self.inner.pointer_bus
    }

    /// Deliver an event to the page.
    ///
    /// Focus and input events go to the handler registered on the exact
    /// target. Clicks bubble from the target up through its ancestors to the
    /// nearest `on_click` handler and are then published on the pointer bus.
    /// Events aimed at an element inside a hidden subtree are dropped; a
    /// target that is not mounted at all stands for the bare page.
    /// No lock is held while handlers or listeners run.
    pub fn dispatch(&self, event: &Event) {
        let target = event.target();
        let path = self.path_to(target);
        let name = event.handler_name();
        if !path.is_empty() && !self.is_rendered(target) {
            log::trace!("Document::dispatch {name} target={target} dropped: hidden");
            return;
        }
        log::trace!("Document::dispatch {name} target={target} depth={}", path.len());

        if event.bubbles() {
            let chain: Vec<&str> = if path.is_empty() {
                vec![target]
            } else {
                path.iter().rev().map(String::as_str).collect()
            };
            if let Some(handler) = chain
                .into_iter()
                .find_map(|id| self.inner.registry.get(id, name))
            {
                handler(event);
            }
        } else if let Some(handler) = self.inner.registry.get(target, name) {
            handler(event);
        }

        if let Event::Click { target } = event {
            self.inner.pointer_bus.publish(&PointerEvent {
                target: target.clone(),
                path,
            });
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let containers: Vec<String> = self
            .inner
            .containers
            .read()
            .map(|c| c.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("Document")
            .field("containers", &containers)
            .field("registry", &self.inner.registry)
            .field("pointer_bus", &self.inner.pointer_bus)
            .finish()
    }
}
