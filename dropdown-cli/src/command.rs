//! Script commands read from stdin.

use std::path::PathBuf;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Focus the search box
    Focus,
    /// Replace the search box text
    Type(String),
    /// Click the n-th rendered row (0-based)
    Click(usize),
    /// Click somewhere on the page outside the dropdown
    Outside,
    /// Replace the options from another JSON file
    Update(PathBuf),
    /// Print the current selection
    Selected,
    /// Print the rendered markup
    Html,
    Help,
    Quit,
}

impl Command {
    /// Parse one script line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let command = match word {
            "focus" => Command::Focus,
            // Everything after the first space is the text, spaces included
            "type" => Command::Type(rest.to_string()),
            "click" => Command::Click(
                rest.trim()
                    .parse()
                    .map_err(|_| CliError::UnknownCommand(trimmed.to_string()))?,
            ),
            "outside" => Command::Outside,
            "update" if !rest.trim().is_empty() => Command::Update(PathBuf::from(rest.trim())),
            "selected" => Command::Selected,
            "html" => Command::Html,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CliError::UnknownCommand(trimmed.to_string())),
        };
        Ok(Some(command))
    }
}

pub const HELP: &str = "\
commands:
  focus              focus the search box
  type <text>        set the search box text
  click <n>          click the n-th listed row (0-based)
  outside            click outside the dropdown
  update <file>      replace options from a JSON file
  selected           print the current selection
  html               print the rendered markup
  help               show this list
  quit               exit";
