//! # Actions
//!
//! Everything that can happen in Trio becomes an `Action`.
//! User picks a menu entry? That's `Action::OpenScreen(screen)`.
//! A calculator button is pressed? That's `Action::CalcKey(key)`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state and returns an `Effect` describing any follow-up
//! work. No I/O happens here; arming the toast timer and leaving the
//! terminal are the event loop's job.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.

use log::debug;

use crate::core::calc::{Key, Keypad};
use crate::core::screen::Screen;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a screen picked from the dropdown menu.
    OpenScreen(Screen),
    /// Back: return to the home screen.
    GoHome,
    /// The name-echo screen submitted a name to display.
    NameSubmitted(String),
    /// A calculator button was pressed.
    CalcKey(Key),
    /// A country entry was activated on the list screen.
    CountryActivated(&'static str),
    /// The visible toast reached the end of its lifetime.
    DismissToast,
    Quit,
}

/// Follow-up work the event loop performs after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Arm the expiry timer for the toast now stored in `App::toast`.
    ShowToast,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {action:?}");
    match action {
        Action::OpenScreen(screen) => {
            // Screens keep no state across visits; opening one starts fresh.
            match screen {
                Screen::NameEntry => app.submitted_name = None,
                Screen::Calculator => app.keypad = Keypad::new(),
                Screen::Home | Screen::CountryList => {}
            }
            app.screen = screen;
            Effect::None
        }
        Action::GoHome => {
            app.screen = Screen::Home;
            Effect::None
        }
        Action::NameSubmitted(name) => {
            app.submitted_name = Some(name);
            Effect::None
        }
        Action::CalcKey(key) => {
            app.keypad.press(key);
            Effect::None
        }
        Action::CountryActivated(country) => {
            app.toast = Some(country.to_string());
            Effect::ShowToast
        }
        Action::DismissToast => {
            app.toast = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calc::Key;
    use crate::test_support::test_app;

    #[test]
    fn open_screen_navigates() {
        let mut app = test_app();
        let effect = update(&mut app, Action::OpenScreen(Screen::Calculator));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.screen, Screen::Calculator);
    }

    #[test]
    fn reopening_the_calculator_starts_fresh() {
        let mut app = test_app();
        update(&mut app, Action::OpenScreen(Screen::Calculator));
        update(&mut app, Action::CalcKey(Key::Digit(5)));
        update(&mut app, Action::GoHome);
        update(&mut app, Action::OpenScreen(Screen::Calculator));
        assert!(app.keypad.input.is_empty());
        assert!(app.keypad.result.is_none());
    }

    #[test]
    fn reopening_name_entry_clears_the_echo() {
        let mut app = test_app();
        update(&mut app, Action::NameSubmitted("Ada".into()));
        update(&mut app, Action::OpenScreen(Screen::NameEntry));
        assert!(app.submitted_name.is_none());
    }

    #[test]
    fn go_home_leaves_sub_screen() {
        let mut app = test_app();
        update(&mut app, Action::OpenScreen(Screen::CountryList));
        update(&mut app, Action::GoHome);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn name_submission_replaces_previous() {
        let mut app = test_app();
        update(&mut app, Action::NameSubmitted("Ada".into()));
        update(&mut app, Action::NameSubmitted("Grace".into()));
        assert_eq!(app.submitted_name.as_deref(), Some("Grace"));
    }

    #[test]
    fn calc_keys_flow_into_the_keypad() {
        let mut app = test_app();
        for key in [Key::Digit(2), Key::Add, Key::Digit(3), Key::Equals] {
            update(&mut app, Action::CalcKey(key));
        }
        assert_eq!(app.keypad.result.as_deref(), Some("5"));
    }

    #[test]
    fn country_activation_raises_a_toast() {
        let mut app = test_app();
        let effect = update(&mut app, Action::CountryActivated("Japan"));
        assert_eq!(effect, Effect::ShowToast);
        assert_eq!(app.toast.as_deref(), Some("Japan"));

        let effect = update(&mut app, Action::DismissToast);
        assert_eq!(effect, Effect::None);
        assert!(app.toast.is_none());
    }

    #[test]
    fn quit_requests_the_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
