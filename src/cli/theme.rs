//! Show or change the persisted theme.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::services::ThemeController;

/// Show or change the persisted theme
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: Option<ThemeCommand>,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Display the active theme and whether it is saved
    Show(ThemeShowArgs),
    /// Switch between light and dark and save the result
    Toggle,
    /// Save a specific theme
    Set(ThemeSetArgs),
}

/// Display the active theme
#[derive(Args, Debug, Default)]
pub struct ThemeShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Save a specific theme
#[derive(Args, Debug)]
pub struct ThemeSetArgs {
    /// Theme mode (light or dark)
    #[arg(value_name = "MODE")]
    mode: String,
}

/// JSON-serializable theme state
#[derive(Serialize, Debug)]
struct ThemeOutput {
    theme: ThemeMode,
    saved: bool,
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            None => ThemeShowArgs::default().execute(config_path),
            Some(ThemeCommand::Show(args)) => args.execute(config_path),
            Some(ThemeCommand::Toggle) => {
                let config_path = require_path(config_path)?;
                let mut controller = controller(config_path);
                let mode = controller.toggle();
                finish(&controller, mode, config_path)
            }
            Some(ThemeCommand::Set(args)) => {
                let mode: ThemeMode = args
                    .mode
                    .parse()
                    .map_err(|e| CliError::validation(format!("{e}")))?;
                let config_path = require_path(config_path)?;
                let mut controller = controller(config_path);
                controller.set(mode);
                finish(&controller, mode, config_path)
            }
        }
    }
}

impl ThemeShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let saved = match config_path {
            Some(path) => {
                Config::load_from(path)
                    .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?
                    .ui
                    .theme
            }
            None => None,
        };
        let output = ThemeOutput {
            theme: saved.unwrap_or_else(ThemeMode::detect),
            saved: saved.is_some(),
        };

        if self.json {
            print_json(&output)
        } else {
            let source = if output.saved {
                "saved"
            } else {
                "system default, not saved"
            };
            println!("{} ({source})", output.theme);
            Ok(())
        }
    }
}

fn require_path(config_path: Option<&Path>) -> CliResult<&Path> {
    config_path.ok_or_else(|| {
        CliError::io("No config directory found; pass --config PATH to save the theme")
    })
}

fn controller(config_path: &Path) -> ThemeController {
    ThemeController::open(Some(config_path), ThemeMode::detect)
}

fn finish(controller: &ThemeController, mode: ThemeMode, config_path: &Path) -> CliResult<()> {
    if let Some(error) = controller.persist_error() {
        return Err(CliError::io(format!("Theme preference not saved: {error}")));
    }
    println!("Theme set to {mode} (saved to {})", config_path.display());
    Ok(())
}
