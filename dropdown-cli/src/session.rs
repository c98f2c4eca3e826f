//! A page with one dropdown, driven by script commands.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crossterm::style::Stylize;
use pagedom::markup::to_html;
use pagedom::text::{render_lines, truncate_to_width};
use pagedom::{Document, Element, Event};
use searchable_dropdown::render::class;
use searchable_dropdown::{DropdownConfig, DropdownOption, SearchableDropdown, SelectionEvent};

use crate::args::CliArgs;
use crate::command::{Command, HELP};
use crate::error::CliError;
use crate::options::load_options;

/// Id of the container the dropdown is mounted in.
pub const CONTAINER: &str = "dropdown";

/// Element id standing in for "somewhere else on the page".
const PAGE_BODY: &str = "page-body";

const WIDTH: usize = 60;

/// Whether to keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    doc: Document,
    dropdown: SearchableDropdown<String>,
    /// Messages queued by the change callback, printed after each command
    changes: Arc<Mutex<Vec<String>>>,
    color: bool,
}

impl Session {
    pub fn from_args(args: &CliArgs, color: bool) -> Result<Self, CliError> {
        let options = load_options(&args.options_path)?;

        let mut config = DropdownConfig::new()
            .options(options)
            .selection_policy(args.policy.into());
        if let Some(value) = &args.default_value {
            config = config.default_value(value.clone());
        }
        if let Some(placeholder) = &args.placeholder {
            config = config.placeholder(placeholder.clone());
        }
        if args.required {
            config = config.required();
        }
        if args.disabled {
            config = config.disabled();
        }

        Ok(Self::new(config, color))
    }

    pub fn new(config: DropdownConfig<String>, color: bool) -> Self {
        let doc = Document::new();
        doc.add_container(CONTAINER);

        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changes);
        let config = config.on_change(move |event: &SelectionEvent<String>| {
            if let Ok(mut sink) = sink.lock() {
                sink.push(format!("changed: {} ({})", event.value, event.label));
            }
        });

        let dropdown = SearchableDropdown::create(&doc, CONTAINER, config);
        Self {
            doc,
            dropdown,
            changes,
            color,
        }
    }

    pub fn dropdown(&self) -> &SearchableDropdown<String> {
        &self.dropdown
    }

    /// Run one command and print the resulting view.
    pub fn execute(&self, command: Command, out: &mut impl Write) -> Result<Flow, CliError> {
        log::debug!("Session::execute {command:?}");
        let ids = self.dropdown.ids();

        match command {
            Command::Focus => self.doc.dispatch(&Event::focus(&ids.input)),
            Command::Type(text) => self.doc.dispatch(&Event::input(&ids.input, text)),
            Command::Click(n) => match self.row_ids().get(n) {
                Some(row) => self.doc.dispatch(&Event::click(row)),
                None => writeln!(out, "no row {n}")?,
            },
            Command::Outside => self.doc.dispatch(&Event::click(PAGE_BODY)),
            Command::Update(path) => {
                let options: Vec<DropdownOption<String>> = load_options(&path)?;
                self.dropdown.update_options(options)?;
            }
            Command::Selected => {
                match self.dropdown.get_selected_item() {
                    Some(item) => writeln!(out, "selected: {} ({})", item.value, item.label)?,
                    None => writeln!(out, "selected: none")?,
                }
                return Ok(Flow::Continue);
            }
            Command::Html => {
                if let Some(container) = self.doc.container(CONTAINER) {
                    writeln!(out, "{}", to_html(&container))?;
                }
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        let changes: Vec<String> = self
            .changes
            .lock()
            .map(|mut c| c.drain(..).collect())
            .unwrap_or_default();
        for change in changes {
            writeln!(out, "{change}")?;
        }

        self.print_view(out)?;
        Ok(Flow::Continue)
    }

    /// Ids of the rows currently shown, in display order. A closed list shows none.
    fn row_ids(&self) -> Vec<String> {
        self.doc
            .find(&self.dropdown.ids().list)
            .filter(|list| !list.hidden)
            .map(|list| list.content.children().iter().map(|r| r.id.clone()).collect())
            .unwrap_or_default()
    }

    fn print_view(&self, out: &mut impl Write) -> Result<(), CliError> {
        let ids = self.dropdown.ids();

        if let Some(wrapper) = self.doc.find(&ids.wrapper) {
            for line in render_lines(&wrapper, WIDTH) {
                writeln!(out, "{line}")?;
            }
        }

        let Some(list) = self.doc.find(&ids.list) else {
            return Ok(());
        };
        if list.hidden {
            return Ok(());
        }
        for (n, row) in list.content.children().iter().enumerate() {
            self.print_row(out, n, row)?;
        }
        Ok(())
    }

    fn print_row(&self, out: &mut impl Write, n: usize, row: &Element) -> Result<(), CliError> {
        let text = truncate_to_width(&row.text_content(), WIDTH.saturating_sub(6));

        if row.has_class(class::NO_ITEM) {
            if self.color {
                writeln!(out, "    {}", text.as_str().italic().dim())?;
            } else {
                writeln!(out, "    ({text})")?;
            }
            return Ok(());
        }

        let selected = row.has_class(class::SELECTED_ITEM);
        let disabled = row.has_class(class::DISABLED_ITEM);
        let marker = if selected { '*' } else { ' ' };

        if !self.color {
            let suffix = if disabled { " [disabled]" } else { "" };
            writeln!(out, "{n:>2}{marker} {text}{suffix}")?;
        } else if disabled {
            writeln!(out, "{n:>2}{marker} {}", text.as_str().dim())?;
        } else if selected {
            writeln!(out, "{n:>2}{marker} {}", text.as_str().bold().green())?;
        } else {
            writeln!(out, "{n:>2}{marker} {text}")?;
        }
        Ok(())
    }
}
