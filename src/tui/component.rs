//! Component trait pattern for overlays.
//!
//! Overlays (help, navigation menu, skills visualization) own their state,
//! handle their own input, and report back to the page through
//! [`ComponentEvent`]s.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::SectionId;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if component should close.
    fn should_close(&self) -> bool {
        false
    }
}

/// Events emitted by overlay components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User picked a section to scroll to
    SectionSelected(SectionId),
    /// Component was dismissed
    Closed,
}
