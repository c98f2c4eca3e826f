//! Loading option lists from JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use searchable_dropdown::DropdownOption;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct RawOption {
    value: serde_json::Value,
    label: String,
    #[serde(rename = "isActive", alias = "is_active", default = "active")]
    is_active: bool,
}

fn active() -> bool {
    true
}

/// Parse a JSON array of `{ value, label, isActive }` objects.
///
/// String and number values are used as-is; anything else is kept as its JSON text.
pub fn parse_options(json: &str) -> Result<Vec<DropdownOption<String>>, serde_json::Error> {
    let raw: Vec<RawOption> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|r| DropdownOption {
            value: match r.value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            },
            label: r.label,
            is_active: r.is_active,
        })
        .collect())
}

pub fn load_options(path: &Path) -> Result<Vec<DropdownOption<String>>, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&json).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} options from {}", options.len(), path.display());
    Ok(options)
}
