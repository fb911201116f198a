//! # TitleBar Component
//!
//! Single-line bar at the top of every screen: the app name, the active
//! screen's title, and the screen's key hints.
//!
//! Purely presentational: all fields are props set by the parent each
//! frame, which keeps it trivial to test and reason about.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Active screen title (e.g. "Calculator").
    pub screen_title: &'static str,
    /// Key hints for the active screen (e.g. "Esc Back").
    pub hint: &'static str,
}

impl TitleBar {
    pub fn new(screen_title: &'static str, hint: &'static str) -> Self {
        Self { screen_title, hint }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = format!("Trio · {}", self.screen_title);
        let padding = (area.width as usize)
            .saturating_sub(left.width() + self.hint.width())
            .max(1);

        let line = Line::from(vec![
            Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
            Span::styled(
                self.hint,
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        frame.render_widget(line, area);
    }
}
