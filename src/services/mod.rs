//! Page behaviour independent of the terminal.
//!
//! Everything here is driven by explicit inputs (offsets, clock times,
//! key presses) so it can be tested without a terminal.

pub mod animation;
pub mod navigation;
pub mod observer;
pub mod project_filter;
pub mod reveal;
pub mod scroll;
pub mod theme;

pub use animation::{Easing, Transition};
pub use navigation::PageLayout;
pub use observer::{SubscriptionId, Subscribers};
pub use project_filter::{all_tags, filter_projects, ProjectFilter};
pub use reveal::{intersection_ratio, RevealController, RevealState, RevealTrigger, SectionReveal, Span};
pub use scroll::{NavbarState, ScrollDirection, ScrollObserver, ScrollVisibilityState, SmoothScroll};
pub use theme::{ConfigThemeStore, MemoryThemeStore, ThemeController, ThemeStore};
