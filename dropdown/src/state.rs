//! Dropdown state and its public contract.

use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pagedom::{Document, Element, PointerSubscription, Registration};

use crate::config::{ChangeCallback, DropdownConfig, SelectionPolicy};
use crate::error::DropdownError;
use crate::filter::substring_filter;
use crate::item::{DropdownItem, DropdownOption, OptionValue, SelectionEvent};
use crate::render::{self, ElementIds, View};

/// Mutable dropdown state.
#[derive(Debug)]
pub(crate) struct DropdownInner<V> {
    /// Options with trimmed labels, in display order
    pub(crate) options: Vec<DropdownOption<V>>,
    /// Last user choice (or the default value); may be stale under `SelectionPolicy::Keep`
    pub(crate) selected: Option<SelectionEvent<V>>,
    /// Text the list is filtered by
    pub(crate) filter_text: String,
    /// Text shown in the search box
    pub(crate) input_text: String,
    pub(crate) is_open: bool,
    pub(crate) is_disabled: bool,
    /// Set by `detach`; nothing is mounted afterwards
    pub(crate) detached: bool,
}

/// What ties a dropdown to its page. Dropping it unhooks everything.
pub(crate) struct Wiring {
    pub(crate) registrations: Vec<Registration>,
    pub(crate) subscription: PointerSubscription,
}

/// Shared core behind every [`SearchableDropdown`] handle.
///
/// Document handlers hold only weak references to it, so dropping the last
/// handle tears the dropdown down.
pub(crate) struct DropdownCore<V> {
    pub(crate) ids: ElementIds,
    pub(crate) document: Document,
    /// Claim on the container; a newer dropdown in the same container supersedes it
    pub(crate) claim: u64,
    pub(crate) placeholder: String,
    pub(crate) required: bool,
    pub(crate) policy: SelectionPolicy,
    pub(crate) on_change: Option<ChangeCallback<V>>,
    pub(crate) state: RwLock<DropdownInner<V>>,
    pub(crate) wiring: Mutex<Option<Wiring>>,
}

impl<V: OptionValue> DropdownCore<V> {
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, DropdownInner<V>> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, DropdownInner<V>> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Build the tree for `filter` from current state.
    pub(crate) fn build(&self, filter: &str) -> Element {
        let guard = self.read();
        let view = View {
            options: &guard.options,
            selected: guard.selected.as_ref().map(|s| &s.value),
            input_text: &guard.input_text,
            placeholder: &self.placeholder,
            is_open: guard.is_open,
            is_disabled: guard.is_disabled,
            required: self.required,
        };
        render::build(&view, &self.ids, filter)
    }

    /// Re-render with the current filter text and mount the result.
    ///
    /// Must be called without the state lock held.
    pub(crate) fn refresh(&self) {
        let (detached, filter) = {
            let guard = self.read();
            (guard.detached, guard.filter_text.clone())
        };
        if detached || !self.is_live() {
            return;
        }
        let tree = self.build(&filter);
        self.document.mount(&self.ids.container, tree);
    }
}

impl<V> DropdownCore<V> {
    /// Whether this dropdown still owns its container.
    pub(crate) fn owns_container(&self) -> bool {
        self.document.is_owner(&self.ids.container, self.claim)
    }

    /// Like [`owns_container`](Self::owns_container), disconnecting a dropdown
    /// that has been replaced.
    pub(crate) fn is_live(&self) -> bool {
        if self.owns_container() {
            return true;
        }
        self.disconnect();
        false
    }

    /// Drop handler registrations and the pointer subscription.
    ///
    /// Registrations only ever remove their own handlers, so this never
    /// touches a newer dropdown built in the same container.
    pub(crate) fn disconnect(&self) {
        let wiring = self.wiring.lock().ok().and_then(|mut wiring| wiring.take());
        if let Some(wiring) = wiring {
            log::debug!(
                "SearchableDropdown disconnected container={} handlers={} bus_alive={}",
                self.ids.container,
                wiring.registrations.len(),
                wiring.subscription.is_attached()
            );
        }
    }
}

impl<V> Drop for DropdownCore<V> {
    fn drop(&mut self) {
        self.disconnect();
        log::debug!("SearchableDropdown dropped container={}", self.ids.container);
    }
}

/// A text input that filters a list of options and reports the chosen one.
///
/// Handles are cheap to clone and share one dropdown. All work happens
/// synchronously inside [`Document::dispatch`] or the method called; the
/// change callback runs with no internal lock held, so it may call back into
/// the dropdown.
///
/// # Example
///
/// ```ignore
/// let doc = Document::new();
/// doc.add_container("fruit");
///
/// let dropdown = SearchableDropdown::create(
///     &doc,
///     "fruit",
///     DropdownConfig::new()
///         .options([(1, " Apple "), (2, "Banana")])
///         .default_value(1),
/// );
///
/// doc.dispatch(&Event::focus("fruit-input"));
/// doc.dispatch(&Event::input("fruit-input", "ban"));
/// doc.dispatch(&Event::click("fruit-item-1"));
/// assert_eq!(dropdown.get_selected_item().map(|s| s.value), Some(2));
/// ```
pub struct SearchableDropdown<V: OptionValue> {
    pub(crate) core: Arc<DropdownCore<V>>,
}

impl<V: OptionValue> SearchableDropdown<V> {
    /// Build a dropdown inside the container `container_id` of `document`.
    ///
    /// Never fails: an unknown container is logged and the dropdown keeps
    /// working on its state with nothing displayed. When `config.disabled` is
    /// set no interaction handlers are attached, ever.
    pub fn create(document: &Document, container_id: &str, config: DropdownConfig<V>) -> Self {
        let DropdownConfig {
            options,
            placeholder,
            default_value,
            required,
            disabled,
            on_change,
            selection_policy,
        } = config;

        let options: Vec<DropdownOption<V>> =
            options.into_iter().map(DropdownOption::trimmed).collect();

        let selected = default_value.as_ref().and_then(|value| {
            options
                .iter()
                .find(|o| &o.value == value)
                .filter(|o| o.is_active)
                .map(|o| SelectionEvent {
                    value: o.value.clone(),
                    label: o.label.clone(),
                })
        });
        let input_text = selected
            .as_ref()
            .map(|s| s.label.clone())
            .unwrap_or_default();

        if !document.has_container(container_id) {
            log::warn!("SearchableDropdown::create: container '{container_id}' not found");
        }
        log::debug!(
            "SearchableDropdown::create container={container_id} options={} disabled={disabled} preselected={}",
            options.len(),
            selected.is_some()
        );

        let core = Arc::new(DropdownCore {
            ids: ElementIds::new(container_id),
            document: document.clone(),
            claim: document.claim(container_id),
            placeholder,
            required,
            policy: selection_policy,
            on_change,
            state: RwLock::new(DropdownInner {
                options,
                selected,
                filter_text: String::new(),
                input_text,
                is_open: false,
                is_disabled: disabled,
                detached: false,
            }),
            wiring: Mutex::new(None),
        });

        core.refresh();
        if !disabled {
            crate::events::attach(&core);
        }

        Self { core }
    }

    /// Render the rows matching `filter` into the container and return the tree.
    ///
    /// State is not modified: the stored filter text, selection and open flag
    /// stay as they are. Nothing is mounted once the dropdown is detached or
    /// a newer dropdown has been created in the same container.
    pub fn render(&self, filter: &str) -> Element {
        let tree = self.core.build(filter);
        if !self.core.read().detached && self.core.is_live() {
            self.core.document.mount(&self.core.ids.container, tree.clone());
        }
        tree
    }

    /// Replace the option list.
    ///
    /// Labels are trimmed, the disabled flag becomes "no options", and the
    /// list is re-rendered with the current filter text. What happens to a
    /// selection that is no longer offered depends on the configured
    /// [`SelectionPolicy`].
    ///
    /// An empty list disables the dropdown: the search box is rendered with
    /// the `disabled` attribute and focus, typing and row clicks are ignored
    /// until a non-empty list arrives. Hosts that expect focus to keep opening
    /// a "No items available" list should not pass an empty list.
    pub fn update_options<I, It>(&self, items: I) -> Result<(), DropdownError>
    where
        I: IntoIterator<Item = It>,
        It: DropdownItem<V>,
    {
        let options: Vec<DropdownOption<V>> =
            items.into_iter().map(|item| item.to_option()).collect();

        {
            let mut guard = self.core.write();

            let stale = guard
                .selected
                .as_ref()
                .filter(|s| !options.iter().any(|o| o.is_active && o.value == s.value))
                .map(|s| s.value.clone());

            if let Some(value) = stale {
                match self.core.policy {
                    SelectionPolicy::Keep => {
                        log::debug!("update_options: keeping stale selection {value}");
                    }
                    SelectionPolicy::Clear => {
                        log::debug!("update_options: clearing stale selection {value}");
                        guard.selected = None;
                        guard.input_text.clear();
                    }
                    SelectionPolicy::Error => {
                        return Err(DropdownError::StaleSelection {
                            value: value.to_string(),
                        });
                    }
                }
            }

            guard.is_disabled = options.is_empty();
            guard.options = options;
        }

        self.core.refresh();
        Ok(())
    }

    /// The current selection, if any.
    pub fn get_selected_item(&self) -> Option<SelectionEvent<V>> {
        self.core.read().selected.clone()
    }

    /// Detach from the page: drop handlers and the pointer subscription and
    /// empty the container. State queries keep working.
    ///
    /// A dropdown already replaced by a newer one leaves the container alone.
    pub fn detach(&self) {
        {
            let mut guard = self.core.write();
            guard.detached = true;
            guard.is_open = false;
        }
        self.core.disconnect();
        if self.core.owns_container() {
            self.core.document.unmount(&self.core.ids.container);
        }
        log::debug!("SearchableDropdown::detach container={}", self.core.ids.container);
    }

    // -------------------------------------------------------------------------
    // State inspection
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.core.read().is_open
    }

    /// True when built disabled or after the options were replaced by an empty list.
    pub fn is_disabled(&self) -> bool {
        self.core.read().is_disabled
    }

    pub fn is_detached(&self) -> bool {
        self.core.read().detached
    }

    /// Text the list is currently filtered by.
    pub fn filter_text(&self) -> String {
        self.core.read().filter_text.clone()
    }

    /// Text shown in the search box.
    pub fn input_text(&self) -> String {
        self.core.read().input_text.clone()
    }

    pub fn options(&self) -> Vec<DropdownOption<V>> {
        self.core.read().options.clone()
    }

    /// Options matching the current filter text, in order.
    pub fn visible_options(&self) -> Vec<DropdownOption<V>> {
        let guard = self.core.read();
        let labels: Vec<&str> = guard.options.iter().map(|o| o.label.as_str()).collect();
        substring_filter(&guard.filter_text, &labels)
            .into_iter()
            .map(|m| guard.options[m.index].clone())
            .collect()
    }

    /// Ids of the rendered elements.
    pub fn ids(&self) -> &ElementIds {
        &self.core.ids
    }

    pub fn document(&self) -> &Document {
        &self.core.document
    }
}

impl<V: OptionValue> Clone for SearchableDropdown<V> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
        }
    }
}

impl<V: OptionValue + std::fmt::Debug> std::fmt::Debug for SearchableDropdown<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.core.read();
        f.debug_struct("SearchableDropdown")
            .field("container", &self.core.ids.container)
            .field("options", &guard.options.len())
            .field("selected", &guard.selected)
            .field("is_open", &guard.is_open)
            .field("is_disabled", &guard.is_disabled)
            .finish()
    }
}
