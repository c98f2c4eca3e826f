/// Host events, targeted at an element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Element gained focus
    Focus { target: String },
    /// Text input value changed; `value` is the full new text
    Input { target: String, value: String },
    /// Pointer click or tap. A target that is not mounted anywhere is the bare page.
    Click { target: String },
}

impl Event {
    pub fn focus(target: impl Into<String>) -> Self {
        Self::Focus {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Focus { target } | Self::Input { target, .. } | Self::Click { target } => target,
        }
    }

    /// Handler name this event is dispatched under.
    pub fn handler_name(&self) -> &'static str {
        match self {
            Self::Focus { .. } => "on_focus",
            Self::Input { .. } => "on_input",
            Self::Click { .. } => "on_click",
        }
    }

    /// Whether the event bubbles to ancestors of its target.
    pub fn bubbles(&self) -> bool {
        matches!(self, Self::Click { .. })
    }

    /// The new text of an `Input` event.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Input { value, .. } => Some(value),
            _ => None,
        }
    }
}
