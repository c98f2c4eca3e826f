use pagedom::markup::to_html;
use pagedom::Element;
use pretty_assertions::assert_eq;

#[test]
fn test_text_element() {
    let el = Element::text("Apple").id("a").class("dropdown-item");
    assert_eq!(to_html(&el), r#"<div id="a" class="dropdown-item">Apple</div>"#);
}

#[test]
fn test_attributes_are_sorted_and_escaped() {
    let el = Element::div()
        .id("row")
        .attr("data-value", "a\"b")
        .attr("aria-x", "1");
    assert_eq!(
        to_html(&el),
        r#"<div id="row" aria-x="1" data-value="a&quot;b"></div>"#
    );
}

#[test]
fn test_input_is_void_with_bare_flags() {
    let el = Element::text_input("hi")
        .id("in")
        .required(true)
        .disabled(true);
    assert_eq!(
        to_html(&el),
        r#"<input id="in" type="text" value="hi" required disabled>"#
    );
}

#[test]
fn test_hidden_and_nested() {
    let el = Element::div()
        .id("list")
        .hidden(true)
        .child(Element::span().id("s").child(Element::text("<x>").id("t")));
    assert_eq!(
        to_html(&el),
        r#"<div id="list" style="display: none;"><span id="s"><div id="t">&lt;x&gt;</div></span></div>"#
    );
}

#[test]
fn test_duplicate_classes_collapse() {
    let el = Element::div()
        .id("x")
        .class("open")
        .class("open")
        .class("")
        .class_if("shut", false);
    assert_eq!(el.classes, vec!["open".to_string()]);
    assert!(el.has_class("open"));
}
