//! Trio library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Start screen choices for the `--screen` CLI flag.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StartScreen {
    Home,
    Name,
    Calculator,
    Countries,
}

impl From<StartScreen> for core::screen::Screen {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Home => Self::Home,
            StartScreen::Name => Self::NameEntry,
            StartScreen::Calculator => Self::Calculator,
            StartScreen::Countries => Self::CountryList,
        }
    }
}
