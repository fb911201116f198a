//! # Toast Component
//!
//! Bottom-centered transient notification. Stateless: the message is a
//! prop, and the event loop dismisses it when its lifetime runs out.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct Toast<'a> {
    pub message: &'a str,
}

impl<'a> Toast<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = (self.message.width() as u16 + 4).min(area.width);
        let [overlay] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [_, overlay] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(overlay);

        frame.render_widget(Clear, overlay);
        let toast = Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(Color::Gray))
            .block(Block::bordered().border_style(Style::default().fg(Color::Gray)));
        frame.render_widget(toast, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn render_shows_the_message_near_the_bottom() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| Toast::new("Japan").render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let bottom_rows: String = buffer
            .content()
            .iter()
            .skip(40 * 7)
            .map(|c| c.symbol())
            .collect();
        assert!(bottom_rows.contains("Japan"));
    }
}
