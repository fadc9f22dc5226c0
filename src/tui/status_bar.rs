//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_registry::contexts;
use super::{AppState, PopupType, Theme};

/// Hint shown while the floating navigation is hidden
pub const SCROLL_HINT: &str = "Scroll up to navigate";

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if !state.status_message.is_empty() {
            let style = state
                .status_color_override
                .map_or_else(|| Style::default().fg(theme.text), |color| Style::default().fg(color));
            Line::from(Span::styled(state.status_message.clone(), style))
        } else if state.is_narrow() && state.floating_nav.shows_scroll_hint() {
            Line::from(Span::styled(
                SCROLL_HINT,
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Self::get_position_line(state, theme)
        };

        let lines = vec![first_line, Self::get_contextual_help_line(state, theme)];
        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.border))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Current section and project filter
    fn get_position_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let filter = state.filter.active_tag().unwrap_or("All").to_string();
        Line::from(vec![
            Span::styled("Section: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                state.active_section().label(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Filter: ", Style::default().fg(theme.text_muted)),
            Span::styled(filter, Style::default().fg(theme.accent)),
        ])
    }

    /// Get the current context name based on application state
    #[must_use]
    pub fn get_current_context(state: &AppState) -> &'static str {
        match state.active_popup {
            Some(PopupType::HelpOverlay) => contexts::HELP,
            Some(PopupType::SkillsGraph) => contexts::SKILLS_GRAPH,
            None if state.floating_nav.is_menu_open() => contexts::MENU,
            None => contexts::PAGE,
        }
    }

    /// Get contextual help line from help registry (bottom help line)
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context_name = Self::get_current_context(state);

        // Leave room for "?: Help" on the page
        let max_hints = if context_name == contexts::PAGE { 5 } else { 6 };
        let hints = state
            .help_registry
            .format_status_bar_hints(context_name, max_hints);

        let mut spans: Vec<Span<'static>> = Vec::new();
        if hints.is_empty() {
            spans.push(Span::raw("Press ? for help"));
            return Line::from(spans);
        }

        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }

        if context_name == contexts::PAGE {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::styled("Help", Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
