//! Construction-time configuration.

use std::sync::Arc;

use crate::item::{DropdownItem, DropdownOption, SelectionEvent};

/// Placeholder shown in an empty search box unless configured otherwise.
pub const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Callback invoked synchronously when the user selects an option.
pub type ChangeCallback<V> = Arc<dyn Fn(&SelectionEvent<V>) + Send + Sync>;

/// What `update_options` does with a selection whose value is no longer
/// offered (missing, or present but inactive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Keep the old selection and the text shown in the input.
    #[default]
    Keep,

    /// Drop the selection and clear the input text.
    Clear,

    /// Reject the update, leaving options and selection untouched.
    Error,
}

/// Configuration for a [`SearchableDropdown`](crate::SearchableDropdown).
///
/// Every field is optional; the defaults give an enabled, empty dropdown
/// with the `"Search..."` placeholder.
///
/// # Example
///
/// ```ignore
/// let config = DropdownConfig::new()
///     .options([(1, "Apple"), (2, "Banana")])
///     .placeholder("Pick a fruit...")
///     .default_value(1)
///     .on_change(|event| println!("picked {}", event.label));
/// ```
pub struct DropdownConfig<V> {
    /// Options in display order.
    pub options: Vec<DropdownOption<V>>,

    /// Text shown in the empty search box.
    pub placeholder: String,

    /// Value preselected at construction, if it names an active option.
    pub default_value: Option<V>,

    /// Mark the rendered input as required. Nothing is enforced.
    pub required: bool,

    /// Build an inert dropdown: no interaction handlers are attached.
    pub disabled: bool,

    /// Called after each user selection.
    pub on_change: Option<ChangeCallback<V>>,

    /// Handling of selections invalidated by `update_options`.
    pub selection_policy: SelectionPolicy,
}

impl<V> Default for DropdownConfig<V> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_value: None,
            required: false,
            disabled: false,
            on_change: None,
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl<V: Clone> DropdownConfig<V> {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the options. Labels are trimmed.
    pub fn options<I, It>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = It>,
        It: DropdownItem<V>,
    {
        self.options = items.into_iter().map(|item| item.to_option()).collect();
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Preselect the option with this value.
    pub fn default_value(mut self, value: V) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Mark the input as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Build the dropdown disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the change callback.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&SelectionEvent<V>) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Set the stale-selection policy.
    pub fn selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for DropdownConfig<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownConfig")
            .field("options", &self.options)
            .field("placeholder", &self.placeholder)
            .field("default_value", &self.default_value)
            .field("required", &self.required)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .field("selection_policy", &self.selection_policy)
            .finish()
    }
}
