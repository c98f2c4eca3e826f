use pagedom::markup::to_html;
use pagedom::text::render_lines;
use pagedom::Document;
use pretty_assertions::assert_eq;
use searchable_dropdown::prelude::*;
use searchable_dropdown::render::class;
use searchable_dropdown::{NO_ITEM_FOUND, NO_ITEMS_AVAILABLE};

fn fruit(doc: &Document, config: DropdownConfig<u32>) -> SearchableDropdown<u32> {
    doc.add_container("fruit");
    SearchableDropdown::create(doc, "fruit", config)
}

fn basket() -> Vec<DropdownOption<u32>> {
    vec![
        DropdownOption::new(1, "Apple"),
        DropdownOption::inactive(2, "Banana"),
    ]
}

fn row_texts(list: &Element) -> Vec<String> {
    list.content.children().iter().map(Element::text_content).collect()
}

#[test]
fn test_initial_markup() {
    let doc = Document::new();
    let dropdown = fruit(&doc, DropdownConfig::new().options(basket()).required());

    assert_eq!(
        to_html(&dropdown.render("")),
        concat!(
            r#"<div id="fruit-dropdown" class="custom-dropdown-container">"#,
            r#"<div id="fruit-wrapper" class="custom-dropdown-wrapper">"#,
            r#"<input id="fruit-input" class="form-control custom-search-box" autocomplete="off" name="fruit-name" placeholder="Search..." type="text" value="" required>"#,
            r#"<span id="fruit-arrow" class="dropdown-arrow">▼</span>"#,
            r#"</div>"#,
            r#"<div id="fruit-list" class="custom-dropdown-list" style="display: none;">"#,
            r#"<div id="fruit-item-0" class="dropdown-item" data-value="1">Apple</div>"#,
            r#"<div id="fruit-item-1" class="dropdown-item disabled-item" data-value="2" disabled>Banana</div>"#,
            r#"</div>"#,
            r#"</div>"#,
        )
    );
}

#[test]
fn test_render_is_mounted_into_container() {
    let doc = Document::new();
    let _dropdown = fruit(&doc, DropdownConfig::new().options(basket()));

    let container = doc.container("fruit").unwrap();
    assert!(pagedom::contains(&container, "fruit-input"));
    assert!(pagedom::contains(&container, "fruit-item-1"));
}

#[test]
fn test_empty_options_placeholder() {
    let doc = Document::new();
    let dropdown = fruit(&doc, DropdownConfig::new());

    let tree = dropdown.render("");
    let placeholder = pagedom::find_element(&tree, "fruit-no-item").unwrap();
    assert_eq!(placeholder.text_content(), NO_ITEMS_AVAILABLE);
    assert!(placeholder.has_class(class::NO_ITEM));
    assert!(!placeholder.clickable);
}

#[test]
fn test_no_match_placeholder() {
    let doc = Document::new();
    let dropdown = fruit(&doc, DropdownConfig::new().options(basket()));

    let tree = dropdown.render("cherry");
    let list = pagedom::find_element(&tree, "fruit-list").unwrap();
    assert_eq!(row_texts(list), vec![NO_ITEM_FOUND.to_string()]);
}

#[test]
fn test_render_does_not_touch_state() {
    let doc = Document::new();
    let dropdown = fruit(&doc, DropdownConfig::new().options(basket()));

    dropdown.render("ban");
    assert_eq!(dropdown.filter_text(), "");
    assert!(!dropdown.is_open());
    assert!(dropdown.get_selected_item().is_none());
}

#[test]
fn test_rows_show_trimmed_labels() {
    let doc = Document::new();
    let dropdown = fruit(
        &doc,
        DropdownConfig::new().options([(1, "  Apple "), (2, "\tCherry\n")]),
    );

    let tree = dropdown.render("");
    let list = pagedom::find_element(&tree, "fruit-list").unwrap();
    assert_eq!(row_texts(list), vec!["Apple".to_string(), "Cherry".to_string()]);
}

#[test]
fn test_selected_style_follows_selection() {
    let doc = Document::new();
    let dropdown = fruit(
        &doc,
        DropdownConfig::new()
            .options([(1, "Apple"), (2, "Cherry")])
            .default_value(1),
    );

    let tree = dropdown.render("");
    assert!(pagedom::find_element(&tree, "fruit-item-0").unwrap().has_class(class::SELECTED_ITEM));

    doc.dispatch(&Event::focus("fruit-input"));
    doc.dispatch(&Event::click("fruit-item-1"));

    let tree = dropdown.render("");
    assert!(!pagedom::find_element(&tree, "fruit-item-0").unwrap().has_class(class::SELECTED_ITEM));
    assert!(pagedom::find_element(&tree, "fruit-item-1").unwrap().has_class(class::SELECTED_ITEM));

    // Selected-style is independent of the filter
    let tree = dropdown.render("err");
    assert!(pagedom::find_element(&tree, "fruit-item-1").unwrap().has_class(class::SELECTED_ITEM));
}

#[test]
fn test_input_carries_selected_value() {
    let doc = Document::new();
    let _dropdown = fruit(
        &doc,
        DropdownConfig::new().options([(7, "Plum")]).default_value(7),
    );

    let input = doc.find("fruit-input").unwrap();
    assert_eq!(input.get_attr("value").map(String::as_str), Some("Plum"));
    assert_eq!(input.get_attr("data-value").map(String::as_str), Some("7"));
}

#[test]
fn test_disabled_config_marks_input() {
    let doc = Document::new();
    let _dropdown = fruit(&doc, DropdownConfig::new().options(basket()).disabled());

    let input = doc.find("fruit-input").unwrap();
    assert!(input.disabled);
    assert!(!input.required);
}

#[test]
fn test_open_state_on_arrow_and_list() {
    let doc = Document::new();
    let _dropdown = fruit(&doc, DropdownConfig::new().options(basket()));

    assert!(!doc.find("fruit-arrow").unwrap().has_class(class::OPEN));
    assert!(doc.find("fruit-list").unwrap().hidden);

    doc.dispatch(&Event::focus("fruit-input"));
    assert!(doc.find("fruit-arrow").unwrap().has_class(class::OPEN));
    assert!(!doc.find("fruit-list").unwrap().hidden);
}

#[test]
fn test_text_projection() {
    let doc = Document::new();
    let _dropdown = fruit(
        &doc,
        DropdownConfig::new().options(basket()).placeholder("Fruit..."),
    );

    let container = doc.container("fruit").unwrap();
    assert_eq!(render_lines(&container, 40), vec!["[Fruit...] ▼"]);

    doc.dispatch(&Event::focus("fruit-input"));
    let container = doc.container("fruit").unwrap();
    assert_eq!(
        render_lines(&container, 40),
        vec!["[Fruit...] ▼", "Apple", "Banana"]
    );
}
