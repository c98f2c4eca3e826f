//! Pure projection of dropdown state into an element tree.
//!
//! Nothing here touches the document; [`SearchableDropdown`](crate::SearchableDropdown)
//! mounts the result.

use pagedom::{Element, Tag};

use crate::filter::substring_filter;
use crate::item::{DropdownOption, OptionValue};

/// Placeholder row text when there are no options at all.
pub const NO_ITEMS_AVAILABLE: &str = "No items available";

/// Placeholder row text when options exist but none match the filter.
pub const NO_ITEM_FOUND: &str = "No item found";

/// Glyph used for the toggle indicator.
pub const ARROW: &str = "▼";

/// Class names on the rendered surface, shared with host stylesheets.
pub mod class {
    pub const CONTAINER: &str = "custom-dropdown-container";
    pub const WRAPPER: &str = "custom-dropdown-wrapper";
    pub const FORM_CONTROL: &str = "form-control";
    pub const SEARCH_BOX: &str = "custom-search-box";
    pub const ARROW: &str = "dropdown-arrow";
    pub const LIST: &str = "custom-dropdown-list";
    pub const ITEM: &str = "dropdown-item";
    pub const DISABLED_ITEM: &str = "disabled-item";
    pub const SELECTED_ITEM: &str = "selected-item";
    pub const NO_ITEM: &str = "no-item";
    pub const OPEN: &str = "open";
}

/// Element ids derived from the container id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub container: String,
    pub root: String,
    pub wrapper: String,
    pub input: String,
    /// Form field name of the input.
    pub input_name: String,
    pub arrow: String,
    pub list: String,
    pub no_item: String,
}

impl ElementIds {
    pub fn new(container: &str) -> Self {
        Self {
            container: container.to_string(),
            root: format!("{container}-dropdown"),
            wrapper: format!("{container}-wrapper"),
            input: format!("{container}-input"),
            input_name: format!("{container}-name"),
            arrow: format!("{container}-arrow"),
            list: format!("{container}-list"),
            no_item: format!("{container}-no-item"),
        }
    }

    /// Id of the row for `options[index]`.
    pub fn row(&self, index: usize) -> String {
        format!("{}-item-{index}", self.container)
    }

    /// Option index encoded in a row id, if `id` names one of this dropdown's rows.
    pub fn row_index(&self, id: &str) -> Option<usize> {
        id.strip_prefix(self.container.as_str())?
            .strip_prefix("-item-")?
            .parse()
            .ok()
    }
}

/// Everything the projection reads.
#[derive(Debug)]
pub struct View<'a, V> {
    pub options: &'a [DropdownOption<V>],
    pub selected: Option<&'a V>,
    pub input_text: &'a str,
    pub placeholder: &'a str,
    pub is_open: bool,
    pub is_disabled: bool,
    pub required: bool,
}

/// Build the whole widget: search box, toggle indicator and list region.
pub fn build<V: OptionValue>(view: &View<'_, V>, ids: &ElementIds, filter: &str) -> Element {
    let mut input = Element::text_input(view.input_text)
        .id(&ids.input)
        .class(class::FORM_CONTROL)
        .class(class::SEARCH_BOX)
        .attr("name", &ids.input_name)
        .attr("placeholder", view.placeholder)
        .attr("autocomplete", "off")
        .required(view.required)
        .disabled(view.is_disabled)
        .focusable(!view.is_disabled);
    if let Some(value) = view.selected {
        input = input.attr("data-value", value.to_string());
    }

    let arrow = Element::text(ARROW)
        .tag(Tag::Span)
        .id(&ids.arrow)
        .class(class::ARROW)
        .class_if(class::OPEN, view.is_open);

    Element::div()
        .id(&ids.root)
        .class(class::CONTAINER)
        .child(
            Element::div()
                .id(&ids.wrapper)
                .class(class::WRAPPER)
                .child(input)
                .child(arrow),
        )
        .child(build_list(view, ids, filter))
}

/// Build the list region holding the rows that match `filter`.
pub fn build_list<V: OptionValue>(view: &View<'_, V>, ids: &ElementIds, filter: &str) -> Element {
    let list = Element::div()
        .id(&ids.list)
        .class(class::LIST)
        .hidden(!view.is_open);

    let matches = substring_filter(filter, &labels(view.options));
    log::debug!(
        "render::build_list id={} filter={filter:?} matched={}/{}",
        ids.list,
        matches.len(),
        view.options.len()
    );

    if matches.is_empty() {
        let message = if view.options.is_empty() {
            NO_ITEMS_AVAILABLE
        } else {
            NO_ITEM_FOUND
        };
        return list.child(
            Element::text(message)
                .id(&ids.no_item)
                .class(class::ITEM)
                .class(class::NO_ITEM),
        );
    }

    list.children(matches.into_iter().map(|m| {
        let option = &view.options[m.index];
        let is_selected = view.selected == Some(&option.value);
        Element::text(option.label.trim())
            .id(ids.row(m.index))
            .class(class::ITEM)
            .class_if(class::DISABLED_ITEM, !option.is_active)
            .class_if(class::SELECTED_ITEM, is_selected)
            .attr("data-value", option.value.to_string())
            .disabled(!option.is_active)
            .clickable(option.is_active)
    }))
}

fn labels<V>(options: &[DropdownOption<V>]) -> Vec<&str> {
    options.iter().map(|o| o.label.trim()).collect()
}
