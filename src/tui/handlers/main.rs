//! Main UI input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::{AppState, Component, ComponentEvent};

/// Handle input for main UI
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}

/// Handle input while the section menu is open
pub fn handle_menu_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.floating_nav.handle_input(key) {
        Some(ComponentEvent::SectionSelected(section)) => state.navigate_to(section),
        Some(ComponentEvent::Closed) | None => {}
    }
    Ok(false)
}
