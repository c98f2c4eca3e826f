//! Command-line flags.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use searchable_dropdown::SelectionPolicy;

/// Drive a searchable dropdown from commands on stdin.
#[derive(Debug, Parser)]
#[command(name = "dropdown-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = crate::command::HELP)]
pub struct CliArgs {
    /// JSON array of `{ value, label, isActive }` objects
    pub options_path: PathBuf,

    /// Value of the option selected at start
    #[arg(long = "default", value_name = "VALUE")]
    pub default_value: Option<String>,

    /// Text shown in the empty search box
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Build the dropdown without interaction handlers
    #[arg(long)]
    pub disabled: bool,

    /// Mark the search box as required
    #[arg(long)]
    pub required: bool,

    /// What `update` does with a selection that is no longer offered
    #[arg(long, value_enum, default_value_t = Policy::Keep)]
    pub policy: Policy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Keep the selection
    Keep,
    /// Drop the selection and clear the search box
    Clear,
    /// Refuse the update
    Error,
}

impl From<Policy> for SelectionPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Keep => SelectionPolicy::Keep,
            Policy::Clear => SelectionPolicy::Clear,
            Policy::Error => SelectionPolicy::Error,
        }
    }
}
