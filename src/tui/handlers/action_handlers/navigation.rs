// Scrolling and section navigation handlers

use crate::models::SectionId;
use crate::tui::AppState;
use anyhow::Result;

/// Handle line-wise scrolling
pub fn handle_scroll_lines(state: &mut AppState, delta: i32) -> Result<bool> {
    state.scroll_by(delta);
    Ok(false)
}

/// Handle page-wise scrolling, keeping two rows of context
pub fn handle_scroll_page(state: &mut AppState, down: bool) -> Result<bool> {
    let page = i32::from(state.page_area.height.saturating_sub(2).max(1));
    state.scroll_by(if down { page } else { -page });
    Ok(false)
}

/// Handle scroll to top action
pub fn handle_scroll_to_top(state: &mut AppState) -> Result<bool> {
    state.scroll_to_top();
    Ok(false)
}

/// Handle scroll to bottom action
pub fn handle_scroll_to_bottom(state: &mut AppState) -> Result<bool> {
    let bottom = state.layout.max_offset();
    state.animate_to(bottom);
    Ok(false)
}

/// Handle jump to section action
pub fn handle_jump_to_section(state: &mut AppState, section: SectionId) -> Result<bool> {
    state.navigate_to(section);
    Ok(false)
}

/// Handle section menu toggle
pub fn handle_toggle_menu(state: &mut AppState) -> Result<bool> {
    state.floating_nav.toggle_menu();
    Ok(false)
}
