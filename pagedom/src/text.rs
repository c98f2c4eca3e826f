//! Plain-text projection of element trees for terminal hosts.
//!
//! Block elements (`div`, `input`) start a new line, `span`s continue the
//! current one. Hidden subtrees are skipped.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element, Tag};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    // one column is kept for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut cut: String = s
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= budget
        })
        .collect();
    if max_width > 0 {
        cut.push('…');
    }
    cut
}

/// Render `root` to lines no wider than `width` display columns.
pub fn render_lines(root: &Element, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    collect(root, &mut lines);
    lines
        .into_iter()
        .map(|line| truncate_to_width(&line, width))
        .collect()
}

fn collect(element: &Element, lines: &mut Vec<String>) {
    if element.hidden {
        return;
    }

    match element.tag {
        Tag::Input => {
            let value = element.get_attr("value").map(String::as_str).unwrap_or("");
            let shown = if value.is_empty() {
                element
                    .get_attr("placeholder")
                    .map(String::as_str)
                    .unwrap_or("")
            } else {
                value
            };
            lines.push(format!("[{shown}]"));
        }
        Tag::Span => {
            let text = element.text_content();
            match lines.last_mut() {
                Some(line) if !text.is_empty() => {
                    line.push(' ');
                    line.push_str(&text);
                }
                None => lines.push(text),
                _ => {}
            }
        }
        Tag::Div => match &element.content {
            Content::None => {}
            Content::Text(text) => lines.push(text.clone()),
            Content::Children(children) => {
                for child in children {
                    collect(child, lines);
                }
            }
        },
    }
}
