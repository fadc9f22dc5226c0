//! Action dispatch for page shortcuts.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{display, navigation};

/// Dispatch an action to its handler. Returns `true` when the user quits.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    tracing::trace!(action = action.id(), "dispatch");
    match action {
        // Scrolling
        Action::ScrollUp => navigation::handle_scroll_lines(state, -1),
        Action::ScrollDown => navigation::handle_scroll_lines(state, 1),
        Action::PageUp => navigation::handle_scroll_page(state, false),
        Action::PageDown => navigation::handle_scroll_page(state, true),
        Action::ScrollToTop => navigation::handle_scroll_to_top(state),
        Action::ScrollToBottom => navigation::handle_scroll_to_bottom(state),

        // Sections
        Action::JumpToSection(section) => navigation::handle_jump_to_section(state, section),
        Action::ToggleMenu => navigation::handle_toggle_menu(state),

        // Projects
        Action::NextFilter => display::handle_next_filter(state),
        Action::PreviousFilter => display::handle_previous_filter(state),
        Action::ClearFilter => display::handle_clear_filter(state),

        // Display
        Action::ToggleTheme => display::handle_toggle_theme(state),
        Action::ToggleSkillsGraph => display::handle_open_skills_graph(state),
        Action::ToggleHelp => display::handle_open_help(state),

        // System
        Action::Cancel => {
            state.floating_nav.close_menu();
            state.smooth_scroll.cancel();
            state.clear_status();
            Ok(false)
        }
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
    }
}
