//! # Application State
//!
//! Core business state for Trio. This module contains domain state only -
//! no TUI-specific types. Presentation state (cursor positions, scroll
//! offsets, the open menu) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen            // where the user is
//! ├── keypad: Keypad            // calculator buffer + result
//! ├── submitted_name: Option    // name shown on the echo screen
//! └── toast: Option<String>     // transient notification text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::calc::Keypad;
use crate::core::config::ResolvedConfig;
use crate::core::screen::Screen;

pub struct App {
    pub screen: Screen,
    pub keypad: Keypad,
    /// Last name submitted on the name-echo screen (None = nothing shown yet).
    pub submitted_name: Option<String>,
    /// Text of the currently visible toast, if any. The TUI owns its expiry.
    pub toast: Option<String>,
}

impl App {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            keypad: Keypad::new(),
            submitted_name: None,
            toast: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.start_screen)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Screen::Home)
    }
}
