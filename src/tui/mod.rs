//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod component;
pub mod floating_nav;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod navbar;
pub mod page;
pub mod sections;
pub mod skills_graph;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Style},
    widgets::Block,
    Frame, Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::config::{Config, ThemeMode};
use crate::constants::{FRAME_INTERVAL_MS, MOBILE_BREAKPOINT_COLS};
use crate::models::{Portfolio, SectionId};
use crate::services::scroll::rows_to_units;
use crate::services::{
    NavbarState, PageLayout, ProjectFilter, RevealController, ScrollObserver, SmoothScroll,
    SubscriptionId, ThemeController,
};
use crate::shortcuts::ShortcutRegistry;

pub use component::{Component, ComponentEvent};
pub use floating_nav::FloatingNav;
pub use help_overlay::HelpOverlay;
pub use help_registry::HelpRegistry;
pub use skills_graph::SkillsGraph;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Rows taken by the top navigation bar
pub const NAVBAR_HEIGHT: u16 = 3;
/// Rows taken by the status bar
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Overlay currently covering the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Keybinding reference
    HelpOverlay,
    /// 3D skills graph
    SkillsGraph,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Content
    /// Static page content
    pub portfolio: Portfolio,
    /// Application configuration
    pub config: Config,

    // Theme
    /// Owner of the light/dark flag
    pub theme_controller: ThemeController,
    palette: Rc<Cell<Theme>>,
    theme_subscription: SubscriptionId,

    // Scrolling
    /// Broadcasts the page offset
    pub scroll: ScrollObserver,
    navbar: Rc<Cell<NavbarState>>,
    navbar_subscription: Option<SubscriptionId>,
    /// Floating navigation for narrow terminals
    pub floating_nav: FloatingNav,
    /// Animated jumps
    pub smooth_scroll: SmoothScroll,
    /// Row offset of the viewport
    pub offset: u16,
    /// Section positions for the current width
    pub layout: PageLayout,
    /// Area the page is drawn into
    pub page_area: Rect,
    /// Full terminal area
    pub screen: Rect,

    // Content state
    /// Trigger-once reveal of every section
    pub reveals: RevealController,
    /// Active project tag
    pub filter: ProjectFilter,
    /// Time since start-up
    pub clock: Duration,

    // Overlays
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Help overlay state
    pub help_overlay: HelpOverlay,
    /// Skills visualization state
    pub skills_graph: SkillsGraph,
    /// Keybinding documentation
    pub help_registry: HelpRegistry,
    /// Key to action mapping
    pub shortcuts: ShortcutRegistry,

    // Status
    /// Status bar message
    pub status_message: String,
    /// Optional color override for status message (warnings rendered via status)
    pub status_color_override: Option<Color>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a terminal of `width` x `height` cells.
    ///
    /// Every section is watched for its first reveal; the hero is revealed
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns error if the embedded help file cannot be parsed
    pub fn new(
        portfolio: Portfolio,
        config: Config,
        mut theme_controller: ThemeController,
        width: u16,
        height: u16,
    ) -> Result<Self> {
        let help_registry = HelpRegistry::load().context("Failed to parse embedded help.toml")?;

        let palette = Rc::new(Cell::new(Theme::from_mode(theme_controller.mode())));
        let theme_subscription = {
            let palette = Rc::clone(&palette);
            theme_controller.subscribe(move |mode| palette.set(Theme::from_mode(*mode)))
        };

        let mut scroll = ScrollObserver::new();
        let navbar = Rc::new(Cell::new(NavbarState::default()));
        let navbar_subscription = {
            let navbar = Rc::clone(&navbar);
            Some(scroll.subscribe(move |offset| {
                let mut state = navbar.get();
                state.on_scroll(*offset);
                navbar.set(state);
            }))
        };
        let mut floating_nav = FloatingNav::new();
        floating_nav.mount(&mut scroll);

        let mut reveals = RevealController::new();
        for section in SectionId::ALL {
            reveals.watch(section);
        }
        reveals.reveal_now(SectionId::Home, Duration::ZERO);

        let filter = ProjectFilter::new(&portfolio.projects);
        let skills_graph = SkillsGraph::new(portfolio.skill_nodes.clone());
        let help_overlay = HelpOverlay::new(&help_registry);
        let show_help = config.ui.show_help_on_startup;

        let mut state = Self {
            portfolio,
            config,
            theme_controller,
            palette,
            theme_subscription,
            scroll,
            navbar,
            navbar_subscription,
            floating_nav,
            smooth_scroll: SmoothScroll::default(),
            offset: 0,
            layout: PageLayout::default(),
            page_area: Rect::default(),
            screen: Rect::default(),
            reveals,
            filter,
            clock: Duration::ZERO,
            active_popup: None,
            help_overlay,
            skills_graph,
            help_registry,
            shortcuts: ShortcutRegistry::new(),
            status_message: String::new(),
            status_color_override: None,
            should_quit: false,
        };
        state.resize(width, height);
        if show_help {
            state.open_help_overlay();
        }
        Ok(state)
    }

    /// Current palette.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.palette.get()
    }

    /// Current navbar styling state.
    #[must_use]
    pub fn navbar_state(&self) -> NavbarState {
        self.navbar.get()
    }

    /// Whether the terminal is below the mobile breakpoint.
    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        self.screen.width < MOBILE_BREAKPOINT_COLS
    }

    /// Whether transitions are skipped.
    #[must_use]
    pub const fn reduced_motion(&self) -> bool {
        self.config.ui.reduced_motion
    }

    /// Section at the top of the viewport.
    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.layout
            .active_section(self.offset)
            .unwrap_or(SectionId::Home)
    }

    /// Adapts to a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        let page_height = height.saturating_sub(NAVBAR_HEIGHT + STATUS_BAR_HEIGHT).max(1);
        self.page_area = Rect::new(0, NAVBAR_HEIGHT.min(height), width, page_height);
        self.help_overlay
            .set_page_height(centered_rect(70, 80, self.screen).height);
        self.relayout();
    }

    /// Re-measures the page, e.g. after the filter changed.
    pub fn relayout(&mut self) {
        let theme = self.theme();
        self.layout = page::measure(
            &self.portfolio,
            &theme,
            &self.filter,
            self.page_area.width,
            self.page_area.height,
        );
        let clamped = self.layout.clamp(self.offset);
        if clamped != self.offset {
            self.set_offset(clamped);
        }
        // A running jump must stay reachable on the new page
        if let Some(target) = self.smooth_scroll.target() {
            self.smooth_scroll.start(self.layout.clamp(target));
        }
        self.observe_reveals();
    }

    fn set_offset(&mut self, offset: u16) {
        self.offset = offset;
        self.scroll.publish(rows_to_units(offset));
    }

    /// Moves the viewport to `offset` (clamped) and emits a scroll event.
    ///
    /// Returns `true` when the offset changed.
    pub fn scroll_to(&mut self, offset: u16) -> bool {
        let clamped = self.layout.clamp(offset);
        if clamped == self.offset {
            return false;
        }
        self.set_offset(clamped);
        self.observe_reveals();
        true
    }

    /// Scrolls by `delta` rows, cancelling any animated jump.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.smooth_scroll.cancel();
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(u16::try_from(target).unwrap_or(u16::MAX))
    }

    /// Starts an animated jump to `offset`. Jumps instantly with reduced motion.
    pub fn animate_to(&mut self, offset: u16) {
        let target = self.layout.clamp(offset);
        if self.reduced_motion() {
            self.scroll_to(target);
        } else {
            self.smooth_scroll.start(target);
        }
    }

    /// Scrolls to the start of `section` and closes the menu.
    pub fn navigate_to(&mut self, section: SectionId) {
        self.floating_nav.close_menu();
        if let Some(target) = self.layout.offset_of(section) {
            tracing::debug!(%section, target, "navigating");
            self.animate_to(target);
        }
    }

    /// Scrolls to the section with anchor `anchor`. Unknown anchors do nothing.
    pub fn navigate_to_anchor(&mut self, anchor: &str) -> bool {
        match self.layout.scroll_to_section(anchor) {
            Some(target) => {
                self.floating_nav.close_menu();
                self.animate_to(target);
                true
            }
            None => false,
        }
    }

    /// Scrolls back to the very top.
    pub fn scroll_to_top(&mut self) {
        self.animate_to(0);
    }

    /// Checks every section against the viewport.
    pub fn observe_reveals(&mut self) {
        let viewport = self.layout.viewport(self.offset);
        let sections: Vec<_> = self.layout.sections().collect();
        for (section, span) in sections {
            self.reveals.observe(section, span, viewport, self.clock);
        }
    }

    /// Advances animations to clock time `clock`.
    pub fn tick(&mut self, clock: Duration) {
        self.clock = clock;
        if let Some(next) = self.smooth_scroll.step(self.offset) {
            if !self.scroll_to(next) {
                self.smooth_scroll.cancel();
            }
        }
        let reduced_motion = self.reduced_motion();
        self.floating_nav.sync(clock, reduced_motion);
        self.skills_graph.sync(clock, reduced_motion);
    }

    /// Flips light and dark mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.theme_controller.toggle();
        self.config.ui.theme = Some(mode);
        if let Some(error) = self.theme_controller.persist_error() {
            let message = format!("Switched to {mode} mode (not saved: {error})");
            self.set_status_with_style(message, self.theme().warning);
        } else {
            self.set_status(format!("Switched to {mode} mode"));
        }
        mode
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_color_override = None;
    }

    /// Set status message with custom foreground color (used for warnings)
    pub fn set_status_with_style(&mut self, message: impl Into<String>, color: Color) {
        self.status_message = message.into();
        self.status_color_override = Some(color);
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_color_override = None;
    }

    /// Opens the keybinding reference.
    pub fn open_help_overlay(&mut self) {
        self.help_overlay = HelpOverlay::new(&self.help_registry);
        self.help_overlay
            .set_page_height(centered_rect(70, 80, self.screen).height);
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Opens the skills visualization.
    pub fn open_skills_graph(&mut self) {
        self.skills_graph.open(self.clock);
        self.active_popup = Some(PopupType::SkillsGraph);
    }

    /// Close the currently active popup
    pub fn close_component(&mut self) {
        if self.active_popup == Some(PopupType::SkillsGraph) {
            self.skills_graph.close(self.clock);
        }
        self.active_popup = None;
    }

    /// Detaches every listener registered on start-up.
    pub fn unmount(&mut self) {
        self.floating_nav.unmount(&mut self.scroll);
        if let Some(id) = self.navbar_subscription.take() {
            self.scroll.unsubscribe(id);
        }
        self.theme_controller.unsubscribe(self.theme_subscription);
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
///
/// Listeners are detached when the loop ends, also when it fails.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    run_mounted(state, |state| event_loop(state, terminal))
}

/// Runs `body` and unmounts `state` afterwards, whatever `body` returned.
fn run_mounted<T>(
    state: &mut AppState,
    body: impl FnOnce(&mut AppState) -> Result<T>,
) -> Result<T> {
    let result = body(state);
    state.unmount();
    result
}

fn event_loop(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let started = Instant::now();
    loop {
        state.tick(started.elapsed());

        terminal.draw(|f| render(f, state))?;

        // Short timeout keeps transitions moving between events
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse),
                Event::Resize(width, height) => state.resize(width, height),
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = state.theme();

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(f.area());

    page::render(f, chunks[1], state, &theme);
    navbar::render(
        f,
        chunks[0],
        &theme,
        &state.portfolio.profile,
        state.navbar_state(),
        state.active_section(),
        !state.is_narrow(),
    );

    if state.is_narrow() || state.floating_nav.is_menu_open() {
        state.floating_nav.render(f, chunks[1], &theme);
    }

    StatusBar::render(f, chunks[2], state, &theme);

    match state.active_popup {
        Some(PopupType::HelpOverlay) => state.help_overlay.render(f, f.area(), &theme),
        Some(PopupType::SkillsGraph) => state.skills_graph.render(f, f.area(), &theme),
        None => {}
    }
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns `true` when the user quits.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return Ok(true);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    if state.floating_nav.is_menu_open() {
        return handlers::handle_menu_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
