//! # Screens
//!
//! Every navigable destination is a variant of [`Screen`]. Routing by a
//! closed enum instead of string keys means an invalid route cannot be
//! expressed at all, and `match` exhaustiveness forces every dispatch
//! site to handle a newly added screen.

/// A navigable screen. `Home` is the launch destination; the other three
/// are reachable through the dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    NameEntry,
    Calculator,
    CountryList,
}

impl Screen {
    /// The screens listed in the dropdown menu, in display order.
    pub const MENU: [Screen; 3] = [Screen::NameEntry, Screen::Calculator, Screen::CountryList];

    /// Human-readable title shown in the title bar and the menu.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::NameEntry => "Name Echo",
            Screen::Calculator => "Calculator",
            Screen::CountryList => "Countries",
        }
    }

    /// Key hint rendered at the right edge of the title bar.
    pub fn hint(self) -> &'static str {
        match self {
            Screen::Home => "m Menu · q Quit",
            Screen::NameEntry => "Enter Show · Esc Back",
            Screen::Calculator => "Type keys or navigate grid · Esc Back",
            Screen::CountryList => "↑↓ Move · Enter Select · Esc Back",
        }
    }
}
