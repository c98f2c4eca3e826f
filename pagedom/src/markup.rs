//! HTML serialisation of element trees.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Serialise `root` and its descendants as compact HTML.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root);
    out
}

fn write_element(out: &mut String, element: &Element) {
    let tag = element.tag.name();
    let _ = write!(out, "<{tag} id=\"{}\"", escape(&element.id));

    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.classes.join(" ")));
    }
    for (key, value) in &element.attrs {
        let _ = write!(out, " {key}=\"{}\"", escape(value));
    }
    if element.hidden {
        out.push_str(" style=\"display: none;\"");
    }
    if element.required {
        out.push_str(" required");
    }
    if element.disabled {
        out.push_str(" disabled");
    }
    out.push('>');

    if element.tag.is_void() {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(out, child);
            }
        }
    }

    let _ = write!(out, "</{tag}>");
}

/// Escape text for use in HTML text or a double-quoted attribute.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn escape_leaves_plain_text() {
        assert_eq!(escape("Banana split"), "Banana split");
    }
}
