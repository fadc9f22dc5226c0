//! Help overlay listing every keybinding by context.
//!
//! Content comes from [`HelpRegistry`], so the overlay never drifts from the
//! bindings documented in `help.toml`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::help_registry::HelpRegistry;
use super::Theme;

/// Width of the key column
const KEY_COLUMN: usize = 22;

/// Scrollable help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    sections: Vec<(String, Vec<(String, String)>)>,
    total_lines: usize,
    page_height: usize,
    closed: bool,
}

impl HelpOverlay {
    /// Builds the overlay from the registry.
    #[must_use]
    pub fn new(registry: &HelpRegistry) -> Self {
        let sections: Vec<(String, Vec<(String, String)>)> = registry
            .ordered_contexts()
            .into_iter()
            .map(|(key, context)| {
                let rows = registry
                    .get_bindings(key)
                    .into_iter()
                    .map(HelpRegistry::format_binding_for_help)
                    .collect();
                (context.name.clone(), rows)
            })
            .collect();

        // heading + blank line per section, one row per binding, one trailing blank
        let total_lines = sections.iter().map(|(_, rows)| rows.len() + 3).sum();

        Self {
            scroll_offset: 0,
            sections,
            total_lines,
            page_height: 10,
            closed: false,
        }
    }

    /// Total number of content lines.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self) {
        self.scroll_offset =
            (self.scroll_offset + self.page_height).min(self.total_lines.saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(self.page_height);
    }

    /// Remembers the visible height so paging moves by one screen.
    pub fn set_page_height(&mut self, height: u16) {
        self.page_height = usize::from(height.saturating_sub(2)).max(1);
    }

    fn content(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.total_lines);
        for (name, rows) in &self.sections {
            lines.push(Line::from(Span::styled(
                format!("═══ {} ═══", name.to_uppercase()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for (keys, action) in rows {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{keys:<KEY_COLUMN$}"),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(action.clone(), Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => {
                self.closed = true;
                return Some(ComponentEvent::Closed);
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = super::centered_rect(70, 80, area);
        f.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);
        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let visible_height = usize::from(content_area.height.saturating_sub(2));
        let paragraph = Paragraph::new(self.content(theme))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.surface))
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        f.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn overlay() -> HelpOverlay {
        HelpOverlay::new(&HelpRegistry::load().unwrap())
    }

    fn press(overlay: &mut HelpOverlay, code: KeyCode) -> Option<ComponentEvent> {
        overlay.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_line_count_matches_content() {
        let overlay = overlay();
        assert_eq!(overlay.content(&Theme::dark()).len(), overlay.total_lines());
    }

    #[test]
    fn test_scroll_bounds() {
        let mut overlay = overlay();
        overlay.scroll_up();
        assert_eq!(overlay.scroll_offset, 0);

        overlay.scroll_to_bottom();
        let last = overlay.scroll_offset;
        overlay.scroll_down();
        assert_eq!(overlay.scroll_offset, last);

        overlay.set_page_height(7);
        overlay.scroll_to_top();
        overlay.page_down();
        assert_eq!(overlay.scroll_offset, 5);
        overlay.page_up();
        assert_eq!(overlay.scroll_offset, 0);
    }

    #[test]
    fn test_escape_closes() {
        let mut overlay = overlay();
        assert_eq!(press(&mut overlay, KeyCode::Char('j')), None);
        assert_eq!(overlay.scroll_offset, 1);
        assert!(!overlay.should_close());
        assert_eq!(press(&mut overlay, KeyCode::Esc), Some(ComponentEvent::Closed));
        assert!(overlay.should_close());
    }
}
