//! Time-based transitions for fades and bar fills.
//!
//! A [`Transition`] maps the time elapsed since its trigger to a progress
//! value in `0.0..=1.0`. Rendering turns that progress into a color blend or
//! a bar width; nothing here knows about the terminal.

use std::time::Duration;

/// Timing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Fast start, slow finish (cubic)
    #[default]
    EaseOut,
    /// Slow start and finish (cubic)
    EaseInOut,
}

impl Easing {
    /// Applies the curve to a linear progress value in `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A one-shot transition with a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Length of the transition once started
    pub duration: Duration,
    /// Wait before the transition starts
    pub delay: Duration,
    /// Timing curve
    pub easing: Easing,
}

impl Transition {
    /// Default length of a child fade.
    pub const ITEM: Self = Self::millis(600, 0);
    /// Hero container fade.
    pub const HERO: Self = Self::millis(800, 0);
    /// Whole-page fade on launch.
    pub const PAGE: Self = Self {
        duration: Duration::from_millis(500),
        delay: Duration::ZERO,
        easing: Easing::EaseInOut,
    };
    /// Skill bar fill.
    pub const SKILL_BAR: Self = Self::millis(1000, 300);
    /// Floating navigation show/hide.
    pub const FLOATING_NAV: Self = Self::millis(300, 0);
    /// Skills visualization fade.
    pub const SKILLS_GRAPH: Self = Self::millis(1500, 0);

    /// Delay between siblings of a staggered group.
    pub const STAGGER: Duration = Duration::from_millis(100);

    /// Ease-out transition from millisecond values.
    #[must_use]
    pub const fn millis(duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
            easing: Easing::EaseOut,
        }
    }

    /// Returns a copy with `extra` added to the delay.
    #[must_use]
    pub fn delayed(self, extra: Duration) -> Self {
        Self {
            delay: self.delay + extra,
            ..self
        }
    }

    /// Returns a copy delayed as the `index`-th child of a staggered group.
    #[must_use]
    pub fn staggered(self, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delayed(Self::STAGGER.saturating_mul(index))
    }

    /// Progress after `elapsed` time since the trigger.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = running.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(linear)
    }

    /// Whether the transition has completed after `elapsed`.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_progress_respects_delay() {
        let t = Transition::millis(1000, 300);
        assert!(t.progress(Duration::ZERO).abs() < EPS);
        assert!(t.progress(Duration::from_millis(300)).abs() < EPS);
        assert!(t.progress(Duration::from_millis(800)) > 0.0);
    }

    #[test]
    fn test_progress_clamps_to_one() {
        let t = Transition::ITEM;
        assert!((t.progress(Duration::from_secs(10)) - 1.0).abs() < EPS);
        assert!(t.is_finished(Duration::from_millis(600)));
        assert!(!t.is_finished(Duration::from_millis(599)));
    }

    #[test]
    fn test_linear_midpoint() {
        let t = Transition {
            easing: Easing::Linear,
            ..Transition::millis(1000, 0)
        };
        assert!((t.progress(Duration::from_millis(500)) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_easings_are_monotonic_with_fixed_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < EPS);
            assert!((easing.apply(1.0) - 1.0).abs() < EPS);
            let mut previous = 0.0;
            for step in 1..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value >= previous, "{easing:?} not monotonic");
                previous = value;
            }
        }
    }

    #[test]
    fn test_stagger_adds_delay_per_index() {
        let t = Transition::ITEM.staggered(3);
        assert_eq!(t.delay, Duration::from_millis(300));
        assert_eq!(t.duration, Transition::ITEM.duration);
    }

    #[test]
    fn test_zero_duration_completes_after_delay() {
        let t = Transition::millis(0, 100);
        assert!(t.progress(Duration::from_millis(50)).abs() < EPS);
        assert!((t.progress(Duration::from_millis(100)) - 1.0).abs() < EPS);
    }
}
