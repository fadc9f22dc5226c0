//! Handlers behind each shortcut action, grouped by concern.

pub mod display;
pub mod navigation;
