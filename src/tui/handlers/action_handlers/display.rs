// Theme, project filter and overlay handlers

use crate::tui::AppState;
use anyhow::Result;

fn report_filter(state: &mut AppState) {
    state.relayout();
    let shown = state.filter.apply(&state.portfolio.projects).len();
    let message = match state.filter.active_tag() {
        Some(tag) => format!("Filter: {tag} ({shown} projects)"),
        None => format!("Filter: All ({shown} projects)"),
    };
    tracing::debug!(tag = state.filter.active_tag(), shown, "project filter changed");
    state.set_status(message);
}

/// Handle next filter action
pub fn handle_next_filter(state: &mut AppState) -> Result<bool> {
    state.filter.next();
    report_filter(state);
    Ok(false)
}

/// Handle previous filter action
pub fn handle_previous_filter(state: &mut AppState) -> Result<bool> {
    state.filter.previous();
    report_filter(state);
    Ok(false)
}

/// Handle clear filter action
pub fn handle_clear_filter(state: &mut AppState) -> Result<bool> {
    state.filter.select(None);
    report_filter(state);
    Ok(false)
}

/// Handle theme toggle action
pub fn handle_toggle_theme(state: &mut AppState) -> Result<bool> {
    state.toggle_theme();
    Ok(false)
}

/// Handle skills visualization action
pub fn handle_open_skills_graph(state: &mut AppState) -> Result<bool> {
    state.open_skills_graph();
    Ok(false)
}

/// Handle help overlay action
pub fn handle_open_help(state: &mut AppState) -> Result<bool> {
    state.open_help_overlay();
    Ok(false)
}
