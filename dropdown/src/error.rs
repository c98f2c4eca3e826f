//! Dropdown error types.

use thiserror::Error;

/// Errors reported by [`SearchableDropdown`](crate::SearchableDropdown).
///
/// Construction and rendering never fail; missing containers and empty
/// option lists degrade to placeholder output instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    /// `update_options` would drop the current selection and the dropdown
    /// was configured with `SelectionPolicy::Error`.
    #[error("Selected value '{value}' is not an active option in the new list")]
    StaleSelection {
        /// The selected value, as written into markup.
        value: String,
    },
}
