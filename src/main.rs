//! Folio - personal portfolio rendered as an interactive terminal page
//!
//! Without a subcommand the full-screen page is started. The subcommands give
//! headless access to the project list and the saved theme.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use folio::cli::Commands;
use folio::config::{Config, ThemeMode};
use folio::constants::APP_BINARY_NAME;
use folio::logging::{self, LogTarget};
use folio::models::{Portfolio, SectionId};
use folio::services::ThemeController;
use folio::tui;

/// Folio - personal portfolio rendered as an interactive terminal page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use this config file instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in this theme (light or dark) and save it
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Jump to a section on start-up (home, about, skills, projects, contact)
    #[arg(long, value_name = "ID")]
    section: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Without a config location everything runs on defaults in memory
    let config_path = cli
        .config
        .clone()
        .or_else(|| Config::config_file_path().ok());

    if let Some(command) = &cli.command {
        let level = config_path
            .as_deref()
            .and_then(|path| Config::load_from(path).ok())
            .map_or_else(|| "warn".to_string(), |c| c.log.level);
        if let Err(e) = logging::init(&LogTarget::Stderr, &level) {
            eprintln!("Warning: {e:#}");
        }

        let code = match command.execute(config_path.as_deref()) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {e}");
                e.code.code()
            }
        };
        std::process::exit(code);
    }

    let section = match cli.section.as_deref().map(str::parse::<SectionId>) {
        None => None,
        Some(Ok(section)) => Some(section),
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {APP_BINARY_NAME} --help");
            std::process::exit(2);
        }
    };

    let (config, load_error) = match config_path.as_deref().map(Config::load_from) {
        None => {
            eprintln!("Warning: No config directory found, settings will not be saved");
            (Config::default(), None)
        }
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => {
            eprintln!("Warning: Failed to load config, using defaults: {e:#}");
            (Config::default(), Some(e))
        }
    };

    if let Err(e) =
        LogTarget::default_file().and_then(|target| logging::init(&target, &config.log.level))
    {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    tracing::info!(config = ?config_path, "starting");
    if let Some(e) = load_error {
        tracing::warn!("Corrupt config ignored for this session: {e:#}");
    }

    let portfolio = Portfolio::embedded().context("Failed to load embedded content")?;

    let mut theme_controller = ThemeController::open(config_path.as_deref(), ThemeMode::detect);
    if let Some(mode) = cli.theme {
        theme_controller.set(mode);
    }

    let mut terminal = tui::setup_terminal()?;
    let result = run(&mut terminal, portfolio, config, theme_controller, section);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result
}

fn run(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    portfolio: Portfolio,
    config: Config,
    theme_controller: ThemeController,
    section: Option<SectionId>,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app_state = tui::AppState::new(portfolio, config, theme_controller, size.width, size.height)?;

    if let Some(section) = section {
        app_state.navigate_to(section);
    }

    tui::run_tui(&mut app_state, terminal)
}
