//! Floating navigation for narrow terminals.
//!
//! A menu bubble in the bottom-right corner opens a list of the sections.
//! It hides while the page scrolls down and comes back on any upward move.
//! A scroll-to-top button appears bottom-left once the page is far enough
//! down.
//!
//! The widget keeps its [`ScrollVisibilityState`] behind an `Rc<RefCell<_>>`
//! shared with the listener it registers on the [`ScrollObserver`]. Call
//! [`FloatingNav::mount`] before use and [`FloatingNav::unmount`] on teardown.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::models::SectionId;
use crate::services::{ScrollObserver, ScrollVisibilityState, SubscriptionId, Transition};

use super::component::{Component, ComponentEvent};
use super::Theme;

const BUBBLE_WIDTH: u16 = 7;
const BUBBLE_HEIGHT: u16 = 3;
const TOP_BUTTON_WIDTH: u16 = 5;
const MENU_WIDTH: u16 = 18;
/// Delay between menu entries sliding in
const MENU_STAGGER: Duration = Duration::from_millis(50);

/// Floating navigation bubble, menu and scroll-to-top button.
#[derive(Debug)]
pub struct FloatingNav {
    visibility: Rc<RefCell<ScrollVisibilityState>>,
    subscription: Option<SubscriptionId>,
    menu_open: bool,
    menu_opened_at: Duration,
    selected: usize,
    shown: bool,
    changed_at: Duration,
    clock: Duration,
    reduced_motion: bool,
}

impl FloatingNav {
    /// Creates an unmounted widget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visibility: Rc::new(RefCell::new(ScrollVisibilityState::new())),
            subscription: None,
            menu_open: false,
            menu_opened_at: Duration::ZERO,
            selected: 0,
            shown: true,
            changed_at: Duration::ZERO,
            clock: Duration::ZERO,
            reduced_motion: false,
        }
    }

    /// Starts listening to scroll events. Mounting twice is a no-op.
    pub fn mount(&mut self, observer: &mut ScrollObserver) {
        if self.subscription.is_some() {
            return;
        }
        let state = Rc::clone(&self.visibility);
        self.subscription =
            Some(observer.subscribe(move |offset| state.borrow_mut().on_scroll(*offset)));
    }

    /// Stops listening to scroll events.
    pub fn unmount(&mut self, observer: &mut ScrollObserver) {
        if let Some(id) = self.subscription.take() {
            observer.unsubscribe(id);
        }
    }

    /// Whether a scroll listener is registered.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Snapshot of the scroll-derived state.
    #[must_use]
    pub fn visibility(&self) -> ScrollVisibilityState {
        self.visibility.borrow().clone()
    }

    /// Whether the bubble is shown. An open menu keeps it on screen.
    #[must_use]
    pub fn is_bubble_visible(&self) -> bool {
        self.menu_open || self.visibility.borrow().is_floating_nav_visible()
    }

    /// Whether the scroll-to-top button is shown.
    #[must_use]
    pub fn is_scroll_to_top_visible(&self) -> bool {
        self.visibility.borrow().is_scroll_to_top_visible()
    }

    /// Whether the "scroll up to navigate" hint applies.
    #[must_use]
    pub fn shows_scroll_hint(&self) -> bool {
        !self.is_bubble_visible()
    }

    /// Advances the show/hide fade to clock time `clock`.
    pub fn sync(&mut self, clock: Duration, reduced_motion: bool) {
        self.clock = clock;
        self.reduced_motion = reduced_motion;
        let shown = self.is_bubble_visible();
        if shown != self.shown {
            self.shown = shown;
            self.changed_at = clock;
        }
    }

    /// Current bubble opacity.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let progress = if self.reduced_motion {
            1.0
        } else {
            Transition::FLOATING_NAV.progress(self.clock.saturating_sub(self.changed_at))
        };
        if self.shown {
            progress
        } else {
            1.0 - progress
        }
    }

    /// Whether the section menu is open.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Opens the section menu.
    pub fn open_menu(&mut self) {
        if !self.menu_open {
            self.menu_open = true;
            self.menu_opened_at = self.clock;
            self.selected = 0;
        }
    }

    /// Closes the section menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Opens or closes the section menu.
    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Highlighted menu entry.
    #[must_use]
    pub fn selected(&self) -> SectionId {
        SectionId::ALL[self.selected.min(SectionId::ALL.len() - 1)]
    }

    /// Bubble position inside the page area.
    #[must_use]
    pub fn bubble_area(page: Rect) -> Rect {
        Rect {
            x: page.right().saturating_sub(BUBBLE_WIDTH + 1),
            y: page.bottom().saturating_sub(BUBBLE_HEIGHT),
            width: BUBBLE_WIDTH.min(page.width),
            height: BUBBLE_HEIGHT.min(page.height),
        }
    }

    /// Scroll-to-top button position inside the page area.
    #[must_use]
    pub fn top_button_area(page: Rect) -> Rect {
        Rect {
            x: page.x + 1,
            y: page.bottom().saturating_sub(BUBBLE_HEIGHT),
            width: TOP_BUTTON_WIDTH.min(page.width),
            height: BUBBLE_HEIGHT.min(page.height),
        }
    }

    /// Menu position: stacked above the bubble.
    #[must_use]
    pub fn menu_area(page: Rect) -> Rect {
        let bubble = Self::bubble_area(page);
        let height = u16::try_from(SectionId::ALL.len()).unwrap_or(5) + 2;
        Rect {
            x: page.right().saturating_sub(MENU_WIDTH + 1),
            y: bubble.y.saturating_sub(height),
            width: MENU_WIDTH.min(page.width),
            height: height.min(bubble.y.saturating_sub(page.y)),
        }
    }

    /// Section under a click inside the open menu.
    #[must_use]
    pub fn menu_entry_at(&self, page: Rect, col: u16, row: u16) -> Option<SectionId> {
        if !self.menu_open {
            return None;
        }
        let menu = Self::menu_area(page);
        let inner_top = menu.y + 1;
        let inside = col > menu.x && col < menu.right().saturating_sub(1);
        if !inside || row < inner_top {
            return None;
        }
        SectionId::ALL.get(usize::from(row - inner_top)).copied()
    }

    fn render_bubble(&self, f: &mut Frame, page: Rect, theme: &Theme) {
        let opacity = self.opacity();
        if opacity <= 0.0 {
            return;
        }
        let area = Self::bubble_area(page);
        let icon = if self.menu_open { "✕" } else { "☰" };
        let bg = theme.blend(theme.accent, theme.background, opacity);
        let bubble = Paragraph::new(Line::from(Span::styled(
            icon,
            Style::default()
                .fg(theme.blend(theme.surface, bg, opacity))
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(bg))
                .style(Style::default().bg(bg)),
        );
        f.render_widget(Clear, area);
        f.render_widget(bubble, area);
    }

    fn render_top_button(f: &mut Frame, page: Rect, theme: &Theme) {
        let area = Self::top_button_area(page);
        let button = Paragraph::new(Line::from(Span::styled(
            "↑",
            Style::default().fg(theme.surface).add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.accent)),
        );
        f.render_widget(Clear, area);
        f.render_widget(button, area);
    }

    fn render_menu(&self, f: &mut Frame, page: Rect, theme: &Theme) {
        let area = Self::menu_area(page);
        let since_open = self.clock.saturating_sub(self.menu_opened_at);
        let lines: Vec<Line> = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let entry = Transition::millis(200, 0).delayed(
                    MENU_STAGGER.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
                );
                let opacity = if self.reduced_motion {
                    1.0
                } else {
                    entry.progress(since_open)
                };
                let selected = index == self.selected;
                let style = if selected {
                    Style::default()
                        .fg(theme.blend(theme.accent, theme.surface, opacity))
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.blend(theme.text, theme.surface, opacity))
                };
                Line::from(Span::styled(
                    format!(" {} {:<10}", index + 1, section.label()),
                    style,
                ))
            })
            .collect();

        let menu = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border))
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(Clear, area);
        f.render_widget(menu, area);
    }
}

impl Default for FloatingNav {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FloatingNav {
    type Event = ComponentEvent;

    /// Handles keys while the menu is open.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m' | 'q') => {
                self.close_menu();
                Some(ComponentEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(SectionId::ALL.len() - 1);
                None
            }
            KeyCode::Enter => {
                self.close_menu();
                Some(ComponentEvent::SectionSelected(self.selected()))
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = usize::from(c as u8 - b'1');
                self.close_menu();
                SectionId::ALL
                    .get(index)
                    .map(|section| ComponentEvent::SectionSelected(*section))
            }
            _ => None,
        }
    }

    /// Renders the bubble, the menu when open, and the top button when due.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.is_scroll_to_top_visible() {
            Self::render_top_button(f, area, theme);
        }
        if self.menu_open {
            self.render_menu(f, area, theme);
        }
        self.render_bubble(f, area, theme);
    }

    fn should_close(&self) -> bool {
        !self.menu_open
    }
}
