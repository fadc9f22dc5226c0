//! Input handler modules for different TUI contexts.

pub mod action_handlers;
pub mod actions;
pub mod main;
pub mod mouse;
pub mod popups;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::{handle_main_input, handle_menu_input};
pub use mouse::handle_mouse_event;
pub use popups::handle_popup_input;
