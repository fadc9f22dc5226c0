//! CLI command handlers for Folio.
//!
//! This module provides headless, scriptable access to the page content and
//! the persisted theme, for automation and testing.

pub mod common;
pub mod projects;
pub mod tags;
pub mod theme;

use clap::Subcommand;
use std::path::Path;

use crate::models::Portfolio;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use projects::ProjectsArgs;
pub use tags::TagsArgs;
pub use theme::ThemeArgs;

/// Headless subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects, optionally filtered by tag
    Projects(ProjectsArgs),
    /// List every project tag
    Tags(TagsArgs),
    /// Show or change the persisted theme
    Theme(ThemeArgs),
}

impl Commands {
    /// Runs the command against the config file at `config_path`.
    ///
    /// `None` means no config location could be resolved; only saving the
    /// theme needs one.
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match self {
            Self::Projects(args) => args.execute(),
            Self::Tags(args) => args.execute(),
            Self::Theme(args) => args.execute(config_path),
        }
    }
}

/// Loads the embedded page content.
pub(crate) fn load_portfolio() -> CliResult<Portfolio> {
    Portfolio::embedded().map_err(|e| CliError::io(format!("Failed to load content: {e:#}")))
}
