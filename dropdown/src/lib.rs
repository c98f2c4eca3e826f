//! A searchable dropdown: a text input that filters a list of options and
//! reports the one the user picks.
//!
//! The dropdown renders into a container of a [`pagedom::Document`]. Its state
//! machine (open/closed, filter text, selection) lives in [`SearchableDropdown`];
//! [`render`] is a pure projection of that state into an element tree.

pub mod config;
pub mod error;
mod events;
pub mod filter;
pub mod item;
pub mod render;
mod state;

pub use config::{ChangeCallback, DEFAULT_PLACEHOLDER, DropdownConfig, SelectionPolicy};
pub use error::DropdownError;
pub use filter::{FilterMatch, substring_filter};
pub use item::{DropdownItem, DropdownOption, OptionValue, SelectionEvent};
pub use render::{ElementIds, NO_ITEM_FOUND, NO_ITEMS_AVAILABLE};
pub use state::SearchableDropdown;

pub mod prelude {
    pub use crate::config::{DropdownConfig, SelectionPolicy};
    pub use crate::error::DropdownError;
    pub use crate::item::{DropdownItem, DropdownOption, SelectionEvent};
    pub use crate::state::SearchableDropdown;

    pub use pagedom::{Document, Element, Event};
}
