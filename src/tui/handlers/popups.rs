//! Input handling for overlays.

use anyhow::Result;
use crossterm::event;

use crate::tui::{AppState, Component, ComponentEvent, PopupType};

/// Route input to the active popup
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let event = match state.active_popup {
        Some(PopupType::HelpOverlay) => state.help_overlay.handle_input(key),
        Some(PopupType::SkillsGraph) => state.skills_graph.handle_input(key),
        None => return Ok(false),
    };

    match event {
        Some(ComponentEvent::Closed) => state.close_component(),
        Some(ComponentEvent::SectionSelected(section)) => {
            state.close_component();
            state.navigate_to(section);
        }
        None => {}
    }
    Ok(false)
}
