//! Frame composition: title bar, the active screen, then any overlays.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::screen::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Menu, TitleBar, Toast};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(app.screen.title(), app.screen.hint()).render(frame, title_area);

    match app.screen {
        Screen::Home => draw_home(frame, main_area),
        Screen::NameEntry => tui.name_entry.render(frame, main_area),
        Screen::Calculator => tui.calculator.render(frame, main_area),
        Screen::CountryList => tui.country_list.render(frame, main_area),
    }

    if let Some(menu) = &mut tui.menu {
        Menu::new(menu).render(frame, main_area);
    }

    if let Some(message) = &app.toast {
        Toast::new(message).render(frame, main_area);
    }
}

fn draw_home(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Trio",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "name echo · calculator · countries",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from("Press m to open the menu"),
    ];

    let height = lines.len() as u16;
    let [banner_area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(banner, banner_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use crate::tui::TuiState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn home_screen_shows_the_banner() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Trio"));
        assert!(text.contains("Press m to open the menu"));
    }

    #[test]
    fn each_screen_draws_without_panicking() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        for screen in [Screen::NameEntry, Screen::Calculator, Screen::CountryList] {
            update(&mut app, Action::OpenScreen(screen));
            let text = draw_to_text(&app, &mut tui);
            assert!(text.contains(screen.title()));
        }
    }

    #[test]
    fn toast_overlays_the_active_screen() {
        let mut app = test_app();
        update(&mut app, Action::CountryActivated("Japan"));
        // Still on the home screen, so the only "Japan" on screen is the toast.
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Japan"));
    }
}
