//! Interaction handling: focus, typing, row clicks and clicks elsewhere on the page.

use std::sync::{Arc, Weak};

use pagedom::{Event, PointerEvent};

use crate::item::{OptionValue, SelectionEvent};
use crate::state::{DropdownCore, Wiring};

/// Register the dropdown's handlers on its document.
///
/// Handlers and the pointer listener hold weak references, so they go quiet
/// once the last [`SearchableDropdown`](crate::SearchableDropdown) handle is dropped.
pub(crate) fn attach<V: OptionValue>(core: &Arc<DropdownCore<V>>) {
    let registry = core.document.registry();

    let weak = Arc::downgrade(core);
    let focus = registry.register(
        &core.ids.input,
        "on_focus",
        Arc::new(move |_: &Event| with_core(&weak, |core| core.on_focus())),
    );

    let weak = Arc::downgrade(core);
    let input = registry.register(
        &core.ids.input,
        "on_input",
        Arc::new(move |event: &Event| {
            if let Some(value) = event.value() {
                with_core(&weak, |core| core.on_input(value));
            }
        }),
    );

    let weak = Arc::downgrade(core);
    let click = registry.register(
        &core.ids.list,
        "on_click",
        Arc::new(move |event: &Event| with_core(&weak, |core| core.on_row_click(event.target()))),
    );

    let weak = Arc::downgrade(core);
    let subscription = core.document.pointer_bus().subscribe(Arc::new(
        move |event: &PointerEvent| with_core(&weak, |core| core.on_pointer(event)),
    ));

    if let Ok(mut wiring) = core.wiring.lock() {
        *wiring = Some(Wiring {
            registrations: vec![focus, input, click],
            subscription,
        });
    }

    log::debug!("events::attach container={}", core.ids.container);
}

fn with_core<V, F>(weak: &Weak<DropdownCore<V>>, f: F)
where
    F: FnOnce(&DropdownCore<V>),
{
    if let Some(core) = weak.upgrade() {
        f(&core);
    }
}

impl<V: OptionValue> DropdownCore<V> {
    /// Focus opens the list and shows every option, whatever was typed before.
    pub(crate) fn on_focus(&self) {
        if !self.is_live() {
            return;
        }
        {
            let mut guard = self.write();
            if guard.is_disabled || guard.detached {
                return;
            }
            guard.is_open = true;
            guard.filter_text.clear();
        }
        log::trace!("on_focus container={}", self.ids.container);
        self.refresh();
    }

    /// Typing filters the list. The open flag is left alone.
    pub(crate) fn on_input(&self, value: &str) {
        if !self.is_live() {
            return;
        }
        {
            let mut guard = self.write();
            if guard.is_disabled || guard.detached {
                return;
            }
            guard.filter_text = value.to_string();
            guard.input_text = value.to_string();
        }
        log::trace!("on_input container={} value={value:?}", self.ids.container);
        self.refresh();
    }

    /// Click inside the list region. Only active option rows of an open
    /// list select.
    pub(crate) fn on_row_click(&self, target: &str) {
        let Some(index) = self.ids.row_index(target) else {
            return;
        };
        if !self.is_live() {
            return;
        }

        let event = {
            let mut guard = self.write();
            if guard.is_disabled || guard.detached || !guard.is_open {
                return;
            }
            let Some(option) = guard.options.get(index).filter(|o| o.is_active) else {
                return;
            };
            let event = SelectionEvent {
                value: option.value.clone(),
                label: option.label.trim().to_string(),
            };
            guard.selected = Some(event.clone());
            guard.input_text = event.label.clone();
            guard.is_open = false;
            event
        };

        log::debug!(
            "on_row_click container={} selected={} ({})",
            self.ids.container,
            event.value,
            event.label
        );
        self.refresh();

        if let Some(on_change) = self.on_change.clone() {
            on_change(&event);
        }
    }

    /// Any click outside the container closes the list.
    pub(crate) fn on_pointer(&self, event: &PointerEvent) {
        if event.is_within(&self.ids.container) || !self.is_live() {
            return;
        }
        {
            let mut guard = self.write();
            if !guard.is_open {
                return;
            }
            guard.is_open = false;
        }
        log::trace!("on_pointer: closing container={}", self.ids.container);
        self.refresh();
    }
}
