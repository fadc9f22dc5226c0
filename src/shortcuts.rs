//! Keyboard shortcuts for the page view.
//!
//! Maps key events to [`Action`]s. The action ids double as the `id` field of
//! the bindings in `help.toml`, so help text and handling stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::models::SectionId;

/// Everything a key press can do on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === SCROLLING ===
    /// One row up
    ScrollUp,
    /// One row down
    ScrollDown,
    /// One viewport up
    PageUp,
    /// One viewport down
    PageDown,
    /// Smooth scroll back to the top
    ScrollToTop,
    /// Jump to the bottom of the page
    ScrollToBottom,

    // === NAVIGATION ===
    /// Smooth scroll to a section
    JumpToSection(SectionId),
    /// Open or close the floating navigation menu
    ToggleMenu,

    // === PROJECTS ===
    /// Next project tag filter
    NextFilter,
    /// Previous project tag filter
    PreviousFilter,
    /// Show every project again
    ClearFilter,

    // === DISPLAY ===
    /// Switch between light and dark mode
    ToggleTheme,
    /// Open the skills visualization
    ToggleSkillsGraph,

    // === HELP ===
    /// Open the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Leave the application
    Quit,
    /// Close whatever is open
    Cancel,
}

impl Action {
    /// Id used for this action in `help.toml`.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",
            Self::ScrollToTop => "scroll_to_top",
            Self::ScrollToBottom => "scroll_to_bottom",
            Self::JumpToSection(_) => "jump_to_section",
            Self::ToggleMenu => "toggle_menu",
            Self::NextFilter => "next_filter",
            Self::PreviousFilter => "previous_filter",
            Self::ClearFilter => "clear_filter",
            Self::ToggleTheme => "toggle_theme",
            Self::ToggleSkillsGraph => "toggle_skills_graph",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a `KeyEvent`.
    ///
    /// Shift is dropped for character keys: terminals disagree on whether
    /// `G` arrives with the shift modifier set.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Maps key events to actions for the page view.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };
        registry.register_page_shortcuts();
        registry
    }

    fn register_page_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === SCROLLING ===
        self.register(K::Up, M::NONE, Action::ScrollUp);
        self.register(K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(K::Down, M::NONE, Action::ScrollDown);
        self.register(K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(K::PageUp, M::NONE, Action::PageUp);
        self.register(K::Char('u'), M::CONTROL, Action::PageUp);
        self.register(K::PageDown, M::NONE, Action::PageDown);
        self.register(K::Char(' '), M::NONE, Action::PageDown);
        self.register(K::Char('d'), M::CONTROL, Action::PageDown);
        self.register(K::Home, M::NONE, Action::ScrollToTop);
        self.register(K::Char('g'), M::NONE, Action::ScrollToTop);
        self.register(K::End, M::NONE, Action::ScrollToBottom);
        self.register(K::Char('G'), M::NONE, Action::ScrollToBottom);

        // === NAVIGATION ===
        for (digit, section) in ('1'..='5').zip(SectionId::ALL) {
            self.register(K::Char(digit), M::NONE, Action::JumpToSection(section));
        }
        self.register(K::Char('m'), M::NONE, Action::ToggleMenu);

        // === PROJECTS ===
        self.register(K::Char('f'), M::NONE, Action::NextFilter);
        self.register(K::Tab, M::NONE, Action::NextFilter);
        self.register(K::Char('F'), M::NONE, Action::PreviousFilter);
        self.register(K::BackTab, M::SHIFT, Action::PreviousFilter);
        self.register(K::BackTab, M::NONE, Action::PreviousFilter);
        self.register(K::Char('a'), M::NONE, Action::ClearFilter);

        // === DISPLAY ===
        self.register(K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(K::Char('v'), M::NONE, Action::ToggleSkillsGraph);

        // === HELP ===
        self.register(K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Char('c'), M::CONTROL, Action::Quit);
        self.register(K::Esc, M::NONE, Action::Cancel);
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings.insert(KeyBinding::new(code, modifiers), action);
    }

    /// Look up the action bound to a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    /// Every registered action, without duplicates.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        let mut actions: Vec<Action> = Vec::new();
        for action in self.bindings.values() {
            if !actions.contains(action) {
                actions.push(*action);
            }
        }
        actions
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
