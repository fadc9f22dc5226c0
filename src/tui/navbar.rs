//! Top navigation bar.
//!
//! Shows the owner's name, the section links on wide terminals (the section
//! at the top of the viewport highlighted) and the theme toggle. The bar is
//! transparent at the very top of the page and turns opaque once scrolled.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::ThemeMode;
use crate::models::{Profile, SectionId};
use crate::services::NavbarState;

use super::Theme;

const LINK_GAP: u16 = 3;
const MENU_ICON: &str = "☰";

/// Something clickable in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarTarget {
    /// A section link
    Section(SectionId),
    /// The light/dark switch
    ThemeToggle,
    /// Section menu on narrow terminals
    Menu,
}

/// Label of the theme switch for the current mode.
#[must_use]
pub const fn theme_toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "Switch to light mode",
        ThemeMode::Light => "Switch to dark mode",
    }
}

/// Short icon of the theme switch for the current mode.
const fn theme_toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    }
}

/// Column ranges of the clickable items on the bar's middle row.
#[must_use]
pub fn hit_areas(area: Rect, mode: ThemeMode, wide: bool) -> Vec<(u16, u16, NavbarTarget)> {
    let mut areas = Vec::new();
    let right = area.right().saturating_sub(2);

    if !wide {
        areas.push((right.saturating_sub(1), 1, NavbarTarget::Menu));
        let toggle_col = right.saturating_sub(4);
        areas.push((toggle_col, 1, NavbarTarget::ThemeToggle));
        return areas;
    }

    let toggle = format!("{} {}", theme_toggle_icon(mode), theme_toggle_label(mode));
    let toggle_width = u16::try_from(toggle.chars().count()).unwrap_or(u16::MAX);
    let toggle_col = right.saturating_sub(toggle_width);
    areas.push((toggle_col, toggle_width, NavbarTarget::ThemeToggle));

    let links_width: u16 = SectionId::ALL
        .iter()
        .map(|s| s.label().len() as u16 + LINK_GAP)
        .sum();
    let mut col = toggle_col.saturating_sub(links_width + 1);
    for section in SectionId::ALL {
        let width = section.label().len() as u16;
        areas.push((col, width, NavbarTarget::Section(section)));
        col += width + LINK_GAP;
    }
    areas
}

/// Item under a click at `(col, row)`, if any.
#[must_use]
pub fn target_at(area: Rect, mode: ThemeMode, wide: bool, col: u16, row: u16) -> Option<NavbarTarget> {
    if row != area.y + 1 {
        return None;
    }
    hit_areas(area, mode, wide)
        .into_iter()
        .find(|(start, width, _)| col >= *start && col < start + width)
        .map(|(_, _, target)| target)
}

/// Draws the bar.
pub fn render(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    profile: &Profile,
    state: NavbarState,
    active: SectionId,
    wide: bool,
) {
    let background = if state.is_scrolled() {
        theme.surface
    } else {
        theme.background
    };
    let block = if state.is_scrolled() {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(background))
    } else {
        Block::default().style(Style::default().bg(background))
    };
    f.render_widget(block, area);
    if area.height < 2 {
        return;
    }
    let row = Rect::new(area.x, area.y + 1, area.width, 1);

    let name = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            profile.first_name.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", profile.last_name()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(name), row);

    let mut items = hit_areas(area, theme.mode, wide);
    items.sort_by_key(|(col, _, _)| *col);
    let Some(links_start) = items.first().map(|(col, _, _)| *col) else {
        return;
    };

    let mut spans = Vec::new();
    let mut cursor = links_start;
    for (col, width, target) in items {
        spans.push(Span::raw(" ".repeat(usize::from(col.saturating_sub(cursor)))));
        let item = match target {
            NavbarTarget::Section(section) => {
                let style = if section == active {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.text_secondary)
                };
                Span::styled(section.label(), style)
            }
            NavbarTarget::ThemeToggle if wide => Span::styled(
                format!(
                    "{} {}",
                    theme_toggle_icon(theme.mode),
                    theme_toggle_label(theme.mode)
                ),
                Style::default().fg(theme.text_muted),
            ),
            NavbarTarget::ThemeToggle => Span::styled(
                theme_toggle_icon(theme.mode),
                Style::default().fg(theme.text_muted),
            ),
            NavbarTarget::Menu => Span::styled(MENU_ICON, Style::default().fg(theme.text)),
        };
        spans.push(item);
        cursor = col + width;
    }

    let links_area = Rect::new(links_start, row.y, area.right().saturating_sub(links_start), 1);
    f.render_widget(Paragraph::new(Line::from(spans)), links_area);
}
