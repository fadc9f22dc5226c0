//! Scroll position tracking and the state derived from it.
//!
//! [`ScrollObserver`] broadcasts the vertical offset (in units, see
//! [`rows_to_units`]) to listeners. Each consumer keeps its own derived state:
//! [`ScrollVisibilityState`] for the floating navigation and [`NavbarState`]
//! for the top bar. [`SmoothScroll`] animates programmatic jumps.

use crate::constants::{
    FLOATING_NAV_HIDE_THRESHOLD, NAVBAR_SCROLLED_THRESHOLD, ROW_HEIGHT_UNITS,
    SCROLL_TO_TOP_THRESHOLD,
};

use super::observer::{SubscriptionId, Subscribers};

/// Converts a row offset into scroll units.
#[must_use]
pub fn rows_to_units(rows: u16) -> u32 {
    u32::from(rows) * ROW_HEIGHT_UNITS
}

/// Direction of the most recent scroll movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Towards the top of the page (or no movement)
    #[default]
    Up,
    /// Towards the bottom of the page
    Down,
}

/// Visibility of the floating navigation controls, derived from scrolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollVisibilityState {
    last_offset: u32,
    direction: ScrollDirection,
    floating_nav_visible: bool,
    scroll_to_top_visible: bool,
}

impl ScrollVisibilityState {
    /// Initial state: top of the page, navigation shown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_offset: 0,
            direction: ScrollDirection::Up,
            floating_nav_visible: true,
            scroll_to_top_visible: false,
        }
    }

    /// Applies one scroll event.
    ///
    /// The navigation hides only while moving down past
    /// [`FLOATING_NAV_HIDE_THRESHOLD`]; any other event shows it again.
    pub fn on_scroll(&mut self, offset: u32) {
        let moving_down = offset > self.last_offset;

        if offset != self.last_offset {
            self.direction = if moving_down {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
        }

        self.scroll_to_top_visible = offset > SCROLL_TO_TOP_THRESHOLD;
        self.floating_nav_visible = !(moving_down && offset > FLOATING_NAV_HIDE_THRESHOLD);
        self.last_offset = offset;
    }

    /// Offset of the last processed event.
    #[must_use]
    pub const fn last_offset(&self) -> u32 {
        self.last_offset
    }

    /// Direction of the last movement.
    #[must_use]
    pub const fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Whether the floating navigation bubble is shown.
    #[must_use]
    pub const fn is_floating_nav_visible(&self) -> bool {
        self.floating_nav_visible
    }

    /// Whether the scroll-to-top button is shown.
    #[must_use]
    pub const fn is_scroll_to_top_visible(&self) -> bool {
        self.scroll_to_top_visible
    }
}

impl Default for ScrollVisibilityState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top bar styling state: opaque once the page has left the very top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    scrolled: bool,
}

impl NavbarState {
    /// Applies one scroll event.
    pub fn on_scroll(&mut self, offset: u32) {
        self.scrolled = offset > NAVBAR_SCROLLED_THRESHOLD;
    }

    /// Whether the bar is drawn with an opaque background.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Broadcasts the page scroll offset to registered listeners.
#[derive(Debug, Default)]
pub struct ScrollObserver {
    offset: u32,
    listeners: Subscribers<u32>,
}

impl ScrollObserver {
    /// Creates an observer at offset 0 with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for subsequent scroll events.
    pub fn subscribe(&mut self, listener: impl FnMut(&u32) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener; call on teardown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Records a scroll event and notifies listeners synchronously.
    pub fn publish(&mut self, offset: u32) {
        self.offset = offset;
        tracing::trace!(offset, "scroll");
        self.listeners.notify(&offset);
    }

    /// Last published offset.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Animates programmatic scrolling towards a target row.
///
/// Each tick covers a fixed fraction of the remaining distance (at least one
/// row) and snaps once the target is adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmoothScroll {
    target: Option<u16>,
}

impl SmoothScroll {
    /// Percentage of the remaining distance covered per tick.
    const STEP_PERCENT: u32 = 35;

    /// Starts (or retargets) an animation.
    pub fn start(&mut self, target: u16) {
        self.target = Some(target);
    }

    /// Stops any running animation, e.g. when the user scrolls manually.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Whether an animation is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Row the running animation heads for.
    #[must_use]
    pub const fn target(&self) -> Option<u16> {
        self.target
    }

    /// Computes the next offset from `current`.
    ///
    /// Returns `None` when idle. The animation ends on the tick that reaches
    /// the target.
    pub fn step(&mut self, current: u16) -> Option<u16> {
        let target = self.target?;
        let distance = u32::from(current.abs_diff(target));

        if distance <= 1 {
            self.target = None;
            return Some(target);
        }

        let delta = (distance * Self::STEP_PERCENT / 100).max(1) as u16;
        let next = if target > current {
            current + delta
        } else {
            current - delta
        };
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ScrollVisibilityState::new();
        assert!(state.is_floating_nav_visible());
        assert!(!state.is_scroll_to_top_visible());
        assert_eq!(state.direction(), ScrollDirection::Up);
    }

    #[test]
    fn test_scroll_to_top_threshold_is_strict() {
        let mut state = ScrollVisibilityState::new();
        for offset in [0, 250, 499, 500] {
            state.on_scroll(offset);
            assert!(!state.is_scroll_to_top_visible(), "offset {offset}");
        }
        for offset in [501, 800, 10_000] {
            state.on_scroll(offset);
            assert!(state.is_scroll_to_top_visible(), "offset {offset}");
        }
        state.on_scroll(500);
        assert!(!state.is_scroll_to_top_visible());
    }

    #[test]
    fn test_downward_past_threshold_hides_nav() {
        let mut state = ScrollVisibilityState::new();
        state.on_scroll(80);
        assert!(state.is_floating_nav_visible(), "below threshold stays visible");
        state.on_scroll(100);
        assert!(state.is_floating_nav_visible(), "threshold itself stays visible");
        state.on_scroll(101);
        assert!(!state.is_floating_nav_visible());
        assert_eq!(state.direction(), ScrollDirection::Down);
    }

    #[test]
    fn test_upward_scroll_shows_nav_at_any_offset() {
        let mut state = ScrollVisibilityState::new();
        state.on_scroll(2000);
        assert!(!state.is_floating_nav_visible());
        state.on_scroll(1990);
        assert!(state.is_floating_nav_visible());
        assert_eq!(state.direction(), ScrollDirection::Up);
    }

    #[test]
    fn test_repeated_offset_shows_nav() {
        let mut state = ScrollVisibilityState::new();
        state.on_scroll(400);
        assert!(!state.is_floating_nav_visible());
        state.on_scroll(400);
        assert!(state.is_floating_nav_visible());
        assert_eq!(state.direction(), ScrollDirection::Down);
    }

    #[test]
    fn test_navbar_scrolled_threshold() {
        let mut navbar = NavbarState::default();
        navbar.on_scroll(10);
        assert!(!navbar.is_scrolled());
        navbar.on_scroll(11);
        assert!(navbar.is_scrolled());
        navbar.on_scroll(0);
        assert!(!navbar.is_scrolled());
    }

    #[test]
    fn test_rows_to_units() {
        assert_eq!(rows_to_units(0), 0);
        assert_eq!(rows_to_units(32), 32 * ROW_HEIGHT_UNITS);
    }

    #[test]
    fn test_observer_notifies_and_unsubscribes() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let state = Rc::new(RefCell::new(ScrollVisibilityState::new()));
        let mut observer = ScrollObserver::new();

        let listener_state = Rc::clone(&state);
        let id = observer.subscribe(move |offset| listener_state.borrow_mut().on_scroll(*offset));
        observer.publish(900);
        assert!(state.borrow().is_scroll_to_top_visible());
        assert_eq!(observer.offset(), 900);

        assert!(observer.unsubscribe(id));
        assert_eq!(observer.listener_count(), 0);
        observer.publish(0);
        assert!(state.borrow().is_scroll_to_top_visible(), "detached listener not called");
    }

    #[test]
    fn test_smooth_scroll_converges_down_and_up() {
        let mut smooth = SmoothScroll::default();
        assert_eq!(smooth.step(5), None);

        smooth.start(40);
        let mut offset = 0;
        let mut ticks = 0;
        while let Some(next) = smooth.step(offset) {
            assert!(next > offset && next <= 40);
            offset = next;
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(offset, 40);
        assert!(!smooth.is_active());

        smooth.start(3);
        while let Some(next) = smooth.step(offset) {
            assert!(next < offset && next >= 3);
            offset = next;
        }
        assert_eq!(offset, 3);
    }

    #[test]
    fn test_smooth_scroll_cancel() {
        let mut smooth = SmoothScroll::default();
        smooth.start(10);
        smooth.cancel();
        assert_eq!(smooth.step(0), None);
    }

    #[test]
    fn test_smooth_scroll_retarget_keeps_running() {
        let mut smooth = SmoothScroll::default();
        smooth.start(120);
        assert_eq!(smooth.target(), Some(120));
        smooth.start(90);
        assert_eq!(smooth.target(), Some(90));
        assert!(smooth.is_active());
    }
}
