//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an input event, a
//! resize, or a toast expiring. Between events it sleeps in
//! `event::poll` for one tick (configurable, 250ms by default) so toast
//! lifetimes are still observed promptly.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::screen::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CalcEvent, CalculatorPad, CountryEvent, CountryList, MenuEvent, MenuState, NameEntry,
    NameEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub name_entry: NameEntry,
    pub calculator: CalculatorPad,
    pub country_list: CountryList,
    /// Dropdown menu overlay (None = closed).
    pub menu: Option<MenuState>,
    /// When the visible toast should be dismissed.
    pub toast_deadline: Option<Instant>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            name_entry: NameEntry::new(),
            calculator: CalculatorPad::new(),
            country_list: CountryList::new(),
            menu: None,
            toast_deadline: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture lets the keypad and the country list take clicks.
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let tick = Duration::from_millis(config.tick_rate_ms);
    let toast_duration = Duration::from_millis(config.toast_duration_ms);
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with App state
        tui.calculator.input = app.keypad.input.clone();
        tui.calculator.result = app.keypad.result.clone();
        tui.name_entry.submitted = app.submitted_name.clone();

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Expire the toast on its deadline
        if let Some(deadline) = tui.toast_deadline
            && Instant::now() >= deadline
        {
            tui.toast_deadline = None;
            update(&mut app, Action::DismissToast);
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(tick);
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the menu is open, route all events to it
            if let Some(ref mut menu) = tui.menu {
                if let Some(menu_event) = menu.handle_event(&event) {
                    match menu_event {
                        MenuEvent::Select(screen) => {
                            tui.menu = None;
                            open_screen(&mut app, &mut tui, screen);
                        }
                        MenuEvent::Dismiss => tui.menu = None,
                    }
                }
                continue;
            }

            // Esc backs out of a sub-screen; on home it leaves the app
            if matches!(event, TuiEvent::Escape) {
                if app.screen == Screen::Home {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                } else {
                    update(&mut app, Action::GoHome);
                }
                continue;
            }

            // Screen-modal dispatch
            match app.screen {
                Screen::Home => match event {
                    TuiEvent::InputChar('m') | TuiEvent::Submit => {
                        tui.menu = Some(MenuState::new());
                    }
                    TuiEvent::InputChar('q') => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    _ => {}
                },
                Screen::NameEntry => {
                    if let Some(NameEvent::Submitted(name)) = tui.name_entry.handle_event(&event)
                    {
                        update(&mut app, Action::NameSubmitted(name));
                    }
                }
                Screen::Calculator => {
                    if let Some(CalcEvent::Pressed(key)) = tui.calculator.handle_event(&event) {
                        update(&mut app, Action::CalcKey(key));
                    }
                }
                Screen::CountryList => {
                    if let Some(CountryEvent::Activated(country)) =
                        tui.country_list.handle_event(&event)
                    {
                        if update(&mut app, Action::CountryActivated(country))
                            == Effect::ShowToast
                        {
                            tui.toast_deadline = Some(Instant::now() + toast_duration);
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Navigate to a screen, resetting its per-visit presentation state.
fn open_screen(app: &mut App, tui: &mut TuiState, screen: Screen) {
    match screen {
        Screen::NameEntry => tui.name_entry = NameEntry::new(),
        Screen::Calculator => tui.calculator = CalculatorPad::new(),
        Screen::CountryList => tui.country_list = CountryList::new(),
        Screen::Home => {}
    }
    update(app, Action::OpenScreen(screen));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn open_screen_resets_presentation_state() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        tui.name_entry.buffer = "draft".into();
        open_screen(&mut app, &mut tui, Screen::NameEntry);

        assert_eq!(app.screen, Screen::NameEntry);
        assert!(tui.name_entry.buffer.is_empty());
    }
}
