use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Markup tag an element is emitted as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tag {
    #[default]
    Div,
    Span,
    Input,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Input => "input",
        }
    }

    /// Void tags have no closing tag and no children.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Styling hooks for the host page
    pub classes: Vec<String>,
    /// Extra attributes, emitted in key order (`data-value`, `placeholder`, ...).
    pub attrs: BTreeMap<String, String>,
    /// Hidden elements are emitted with `display: none` and skipped by text output.
    pub hidden: bool,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,

    // Form state
    pub disabled: bool,
    pub required: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            hidden: false,
            focusable: false,
            clickable: false,
            disabled: false,
            required: false,
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn span() -> Self {
        Self {
            id: generate_id("span"),
            tag: Tag::Span,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a single-line text input holding `value`.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            tag: Tag::Input,
            focusable: true,
            ..Default::default()
        }
        .attr("type", "text")
        .attr("value", value)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    /// Add a class. Empty and duplicate names are ignored.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() && !self.classes.contains(&name) {
            self.classes.push(name);
        }
        self
    }

    /// Add a class only when `enabled` is true.
    pub fn class_if(self, name: impl Into<String>, enabled: bool) -> Self {
        if enabled { self.class(name) } else { self }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        let new_children: Vec<Element> = new_children.into_iter().collect();
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children),
        }
        self
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(s) => s.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }
}
