//! Options, selection events and the trait for things that can become options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bound for option values: compared by equality, written into markup with `Display`.
pub trait OptionValue: Clone + PartialEq + fmt::Display + Send + Sync + 'static {}

impl<T> OptionValue for T where T: Clone + PartialEq + fmt::Display + Send + Sync + 'static {}

fn default_active() -> bool {
    true
}

/// One selectable entry.
///
/// Inactive options are listed but cannot be selected. Deserialises from
/// `{ "value": .., "label": .., "isActive": .. }`; `isActive` defaults to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption<V> {
    pub value: V,
    pub label: String,
    #[serde(rename = "isActive", alias = "is_active", default = "default_active")]
    pub is_active: bool,
}

impl<V> DropdownOption<V> {
    /// Create an active option.
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            is_active: true,
        }
    }

    /// Create an option that is shown but cannot be selected.
    pub fn inactive(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            is_active: false,
        }
    }

    /// Copy of this option with surrounding whitespace stripped from the label.
    pub(crate) fn trimmed(mut self) -> Self {
        let trimmed = self.label.trim();
        if trimmed.len() != self.label.len() {
            self.label = trimmed.to_string();
        }
        self
    }
}

/// Payload reported when the user picks an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEvent<V> {
    pub value: V,
    /// Trimmed display text at the time of selection.
    pub label: String,
}

/// Trait for items that can be listed in a [`SearchableDropdown`](crate::SearchableDropdown).
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
///     sanctioned: bool,
/// }
///
/// impl DropdownItem<String> for Country {
///     fn dropdown_value(&self) -> String {
///         self.code.clone()
///     }
///
///     fn dropdown_label(&self) -> String {
///         self.name.clone()
///     }
///
///     fn dropdown_active(&self) -> bool {
///         !self.sanctioned
///     }
/// }
/// ```
pub trait DropdownItem<V> {
    /// Identifier reported on selection; options are matched by it.
    fn dropdown_value(&self) -> V;

    /// Display text, trimmed before it is shown or filtered on.
    fn dropdown_label(&self) -> String;

    /// Whether the item can be selected.
    fn dropdown_active(&self) -> bool {
        true
    }

    /// Convert to an option with a trimmed label.
    fn to_option(&self) -> DropdownOption<V> {
        DropdownOption {
            value: self.dropdown_value(),
            label: self.dropdown_label(),
            is_active: self.dropdown_active(),
        }
        .trimmed()
    }
}

impl<V: Clone> DropdownItem<V> for DropdownOption<V> {
    fn dropdown_value(&self) -> V {
        self.value.clone()
    }

    fn dropdown_label(&self) -> String {
        self.label.clone()
    }

    fn dropdown_active(&self) -> bool {
        self.is_active
    }
}

// (value, label) tuples are always active
impl<V, L> DropdownItem<V> for (V, L)
where
    V: Clone,
    L: AsRef<str>,
{
    fn dropdown_value(&self) -> V {
        self.0.clone()
    }

    fn dropdown_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

// (value, label, is_active) tuples
impl<V, L> DropdownItem<V> for (V, L, bool)
where
    V: Clone,
    L: AsRef<str>,
{
    fn dropdown_value(&self) -> V {
        self.0.clone()
    }

    fn dropdown_label(&self) -> String {
        self.1.as_ref().to_string()
    }

    fn dropdown_active(&self) -> bool {
        self.2
    }
}
