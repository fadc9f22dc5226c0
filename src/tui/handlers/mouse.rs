//! Mouse input: wheel scrolling and clicks on links and buttons.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::constants::MOUSE_SCROLL_ROWS;
use crate::tui::navbar::{self, NavbarTarget};
use crate::tui::{page, AppState, FloatingNav, PopupType, NAVBAR_HEIGHT};

/// Handle a mouse event
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    let rows = i32::from(MOUSE_SCROLL_ROWS);
    match mouse.kind {
        MouseEventKind::ScrollDown => scroll_wheel(state, rows),
        MouseEventKind::ScrollUp => scroll_wheel(state, -rows),
        MouseEventKind::Down(MouseButton::Left) => click(state, mouse.column, mouse.row),
        _ => {}
    }
}

fn scroll_wheel(state: &mut AppState, rows: i32) {
    match state.active_popup {
        Some(PopupType::HelpOverlay) => {
            for _ in 0..rows.unsigned_abs() {
                if rows > 0 {
                    state.help_overlay.scroll_down();
                } else {
                    state.help_overlay.scroll_up();
                }
            }
        }
        Some(PopupType::SkillsGraph) => {}
        None => {
            state.scroll_by(rows);
        }
    }
}

fn click(state: &mut AppState, col: u16, row: u16) {
    if state.active_popup.is_some() {
        return;
    }
    let at = Position::new(col, row);
    let wide = !state.is_narrow();
    let theme = state.theme();

    let navbar_area = Rect::new(0, 0, state.screen.width, NAVBAR_HEIGHT);
    if navbar_area.contains(at) {
        match navbar::target_at(navbar_area, theme.mode, wide, col, row) {
            Some(NavbarTarget::Section(section)) => state.navigate_to(section),
            Some(NavbarTarget::ThemeToggle) => {
                state.toggle_theme();
            }
            Some(NavbarTarget::Menu) => state.floating_nav.toggle_menu(),
            None => {}
        }
        return;
    }

    let page_area = state.page_area;
    if let Some(section) = state.floating_nav.menu_entry_at(page_area, col, row) {
        state.navigate_to(section);
        return;
    }
    if !wide {
        if FloatingNav::bubble_area(page_area).contains(at) && state.floating_nav.is_bubble_visible()
        {
            state.floating_nav.toggle_menu();
            return;
        }
        if FloatingNav::top_button_area(page_area).contains(at)
            && state.floating_nav.is_scroll_to_top_visible()
        {
            state.floating_nav.close_menu();
            state.scroll_to_top();
            return;
        }
    }

    if let Some(section) = page::link_at(state, &theme, col, row) {
        state.navigate_to(section);
    }
}
