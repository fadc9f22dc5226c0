//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed scroll thresholds.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Folio";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "folio";

/// Name of the directory holding config and log files inside the platform config dir.
pub const CONFIG_DIR_NAME: &str = "Folio";

/// Environment variable consulted for the log filter before the config value.
pub const LOG_ENV_VAR: &str = "FOLIO_LOG";

/// Scroll units represented by one terminal row.
///
/// Thresholds below are expressed in units so that a page of text rows keeps
/// the proportions of a pixel-based page (roughly one line of body text).
pub const ROW_HEIGHT_UNITS: u32 = 16;

/// Offset above which the scroll-to-top control is shown.
pub const SCROLL_TO_TOP_THRESHOLD: u32 = 500;

/// Offset above which scrolling downward hides the floating navigation.
pub const FLOATING_NAV_HIDE_THRESHOLD: u32 = 100;

/// Offset above which the top navigation bar turns opaque.
pub const NAVBAR_SCROLLED_THRESHOLD: u32 = 10;

/// Fraction of a section that must be inside the viewport to reveal it.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Terminal width (columns) below which the layout switches to the mobile variant.
pub const MOBILE_BREAKPOINT_COLS: u16 = 96;

/// Rows scrolled per mouse wheel notch.
pub const MOUSE_SCROLL_ROWS: u16 = 3;

/// Event poll timeout; also the animation tick.
pub const FRAME_INTERVAL_MS: u64 = 33;
