//! Folio Library
//!
//! This library provides the pieces of the Folio terminal portfolio: the
//! embedded page content, the scroll and reveal state machines, the persisted
//! light/dark theme, the project tag filter and the Ratatui front end.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
