//! Viewport intersection tracking for section fade-ins.
//!
//! Every section is watched with a fixed visibility threshold. The first
//! time enough of it is inside the viewport it switches from
//! [`RevealState::Hidden`] to [`RevealState::Revealed`] and stays there.
//! The timestamp of that transition drives the section's animations.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::constants::REVEAL_THRESHOLD;
use crate::models::SectionId;

use super::animation::Transition;

/// A vertical range of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// First row
    pub start: u16,
    /// Number of rows
    pub height: u16,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(start: u16, height: u16) -> Self {
        Self { start, height }
    }

    /// One past the last row.
    #[must_use]
    pub const fn end(&self) -> u16 {
        self.start.saturating_add(self.height)
    }

    /// Whether `row` falls inside the span.
    #[must_use]
    pub const fn contains(&self, row: u16) -> bool {
        row >= self.start && row < self.end()
    }
}

/// Fraction of `target` that lies inside `viewport` (`0.0..=1.0`).
///
/// An empty target counts as fully visible when its position is inside the
/// viewport (edges included), and invisible otherwise.
#[must_use]
pub fn intersection_ratio(target: Span, viewport: Span) -> f32 {
    if target.height == 0 {
        let inside = target.start >= viewport.start && target.start <= viewport.end();
        return if inside { 1.0 } else { 0.0 };
    }

    let top = target.start.max(viewport.start);
    let bottom = target.end().min(viewport.end());
    if bottom <= top {
        return 0.0;
    }
    f32::from(bottom - top) / f32::from(target.height)
}

/// How a watcher reacts to leaving the viewport again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealTrigger {
    /// Reveal on first entry, never hide again
    #[default]
    Once,
    /// Reveal on every entry, hide on every exit
    Repeat,
}

/// Reveal state of one watched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Not yet inside the viewport
    #[default]
    Hidden,
    /// Entered the viewport at the given clock time
    Revealed {
        /// Clock time of the transition
        at: Duration,
    },
}

impl RevealState {
    /// Whether the element has been revealed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        matches!(self, Self::Revealed { .. })
    }
}

/// Watcher for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionReveal {
    trigger: RevealTrigger,
    threshold: f32,
    state: RevealState,
}

impl SectionReveal {
    /// Creates a hidden watcher with the default threshold.
    #[must_use]
    pub const fn new(trigger: RevealTrigger) -> Self {
        Self {
            trigger,
            threshold: REVEAL_THRESHOLD,
            state: RevealState::Hidden,
        }
    }

    /// Feeds an intersection ratio observed at clock time `now`.
    ///
    /// Returns `true` when the state changed.
    pub fn observe(&mut self, ratio: f32, now: Duration) -> bool {
        let visible = ratio >= self.threshold;
        match (self.trigger, self.state, visible) {
            (_, RevealState::Hidden, true) => {
                self.state = RevealState::Revealed { at: now };
                true
            }
            (RevealTrigger::Repeat, RevealState::Revealed { .. }, false) => {
                self.state = RevealState::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    /// Time since the reveal, or `None` while hidden.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Option<Duration> {
        match self.state {
            RevealState::Hidden => None,
            RevealState::Revealed { at } => Some(now.saturating_sub(at)),
        }
    }

    /// Progress of `transition` for this element: 0 while hidden.
    #[must_use]
    pub fn progress(&self, transition: &Transition, now: Duration) -> f32 {
        self.elapsed(now)
            .map_or(0.0, |elapsed| transition.progress(elapsed))
    }
}

/// Trigger-once watchers for every page section.
#[derive(Debug, Clone, Default)]
pub struct RevealController {
    sections: BTreeMap<SectionId, SectionReveal>,
}

impl RevealController {
    /// Creates a controller with no watched sections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `section`. Re-registering keeps the existing state.
    pub fn watch(&mut self, section: SectionId) {
        self.sections
            .entry(section)
            .or_insert_with(|| SectionReveal::new(RevealTrigger::Once));
    }

    /// Marks `section` as revealed at `now` without an intersection check.
    ///
    /// Used for content that animates on mount rather than on scroll.
    pub fn reveal_now(&mut self, section: SectionId, now: Duration) {
        self.watch(section);
        if let Some(reveal) = self.sections.get_mut(&section) {
            reveal.observe(1.0, now);
        }
    }

    /// Checks one section against the viewport.
    ///
    /// Unwatched sections are ignored. Returns `true` when the section was
    /// revealed by this call.
    pub fn observe(&mut self, section: SectionId, span: Span, viewport: Span, now: Duration) -> bool {
        let Some(reveal) = self.sections.get_mut(&section) else {
            return false;
        };
        if reveal.state().is_revealed() {
            return false;
        }
        let changed = reveal.observe(intersection_ratio(span, viewport), now);
        if changed {
            tracing::debug!(section = %section, "section revealed");
        }
        changed
    }

    /// Whether `section` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.sections
            .get(&section)
            .is_some_and(|reveal| reveal.state().is_revealed())
    }

    /// Watcher for `section`, if watched.
    #[must_use]
    pub fn get(&self, section: SectionId) -> Option<&SectionReveal> {
        self.sections.get(&section)
    }

    /// Progress of `transition` inside `section` (0 while hidden or unwatched).
    #[must_use]
    pub fn progress(&self, section: SectionId, transition: &Transition, now: Duration) -> f32 {
        self.sections
            .get(&section)
            .map_or(0.0, |reveal| reveal.progress(transition, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_intersection_ratio() {
        let viewport = Span::new(10, 20);
        assert!((intersection_ratio(Span::new(10, 20), viewport) - 1.0).abs() < EPS);
        assert!((intersection_ratio(Span::new(25, 10), viewport) - 0.5).abs() < EPS);
        assert!(intersection_ratio(Span::new(30, 5), viewport).abs() < EPS);
        assert!(intersection_ratio(Span::new(0, 10), viewport).abs() < EPS);
        // Taller than the viewport: at most viewport/target
        assert!((intersection_ratio(Span::new(0, 80), viewport) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_intersection_ratio_empty_target() {
        let viewport = Span::new(10, 20);
        assert!((intersection_ratio(Span::new(15, 0), viewport) - 1.0).abs() < EPS);
        assert!(intersection_ratio(Span::new(50, 0), viewport).abs() < EPS);
    }

    #[test]
    fn test_threshold_is_ten_percent() {
        let mut reveal = SectionReveal::new(RevealTrigger::Once);
        assert!(!reveal.observe(0.09, Duration::ZERO));
        assert!(reveal.observe(0.1, Duration::from_secs(2)));
        assert_eq!(
            reveal.state(),
            RevealState::Revealed {
                at: Duration::from_secs(2)
            }
        );
    }

    #[test]
    fn test_trigger_once_never_reverts() {
        let mut reveal = SectionReveal::new(RevealTrigger::Once);
        reveal.observe(1.0, Duration::from_secs(1));
        for (i, ratio) in [0.0, 1.0, 0.0, 0.5, 0.0].into_iter().enumerate() {
            assert!(!reveal.observe(ratio, Duration::from_secs(2 + i as u64)));
            assert!(reveal.state().is_revealed());
        }
        // Original reveal time is kept
        assert_eq!(reveal.elapsed(Duration::from_secs(5)), Some(Duration::from_secs(4)));
    }

    #[test]
    fn test_repeat_trigger_hides_and_reveals() {
        let mut reveal = SectionReveal::new(RevealTrigger::Repeat);
        assert!(reveal.observe(1.0, Duration::from_secs(1)));
        assert!(reveal.observe(0.0, Duration::from_secs(2)));
        assert!(!reveal.state().is_revealed());
        assert!(reveal.observe(0.5, Duration::from_secs(3)));
        assert_eq!(reveal.elapsed(Duration::from_secs(4)), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_progress_zero_while_hidden() {
        let reveal = SectionReveal::new(RevealTrigger::Once);
        assert!(reveal.progress(&Transition::ITEM, Duration::from_secs(9)).abs() < EPS);
    }

    #[test]
    fn test_controller_reveals_each_section_once() {
        let mut controller = RevealController::new();
        controller.watch(SectionId::About);

        let about = Span::new(40, 30);
        assert!(!controller.observe(SectionId::About, about, Span::new(0, 20), Duration::ZERO));
        assert!(controller.observe(
            SectionId::About,
            about,
            Span::new(25, 20),
            Duration::from_secs(1)
        ));
        assert!(!controller.observe(
            SectionId::About,
            about,
            Span::new(40, 20),
            Duration::from_secs(2)
        ));
        assert!(controller.is_revealed(SectionId::About));
    }

    #[test]
    fn test_controller_ignores_unwatched_sections() {
        let mut controller = RevealController::new();
        assert!(!controller.observe(
            SectionId::Skills,
            Span::new(0, 10),
            Span::new(0, 10),
            Duration::ZERO
        ));
        assert!(!controller.is_revealed(SectionId::Skills));
    }

    #[test]
    fn test_reveal_now() {
        let mut controller = RevealController::new();
        controller.reveal_now(SectionId::Home, Duration::from_millis(10));
        assert!(controller.is_revealed(SectionId::Home));
        let progress = controller.progress(SectionId::Home, &Transition::ITEM, Duration::from_secs(5));
        assert!((progress - 1.0).abs() < EPS);
    }
}
