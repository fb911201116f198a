//! # NameEntry Component
//!
//! The name-echo screen: a single-line text field and, once the user
//! presses Enter, the echoed `Name: <name>` line beneath it.
//!
//! The draft text and cursor are internal state; the echoed name is a
//! prop synced from `App` each frame. Submitting does not clear the
//! field; the echoed line simply reflects the latest submission.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the name entry field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEvent {
    /// Enter pressed; carries the draft text as typed.
    Submitted(String),
}

pub struct NameEntry {
    /// Draft text being typed (internal state).
    pub buffer: String,
    /// Byte offset of the cursor within `buffer`.
    cursor: usize,
    /// Last submitted name, if any (prop from App state).
    pub submitted: Option<String>,
}

impl NameEntry {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            submitted: None,
        }
    }
}

impl Default for NameEntry {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

impl EventHandler for NameEntry {
    type Event = NameEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::Submit => Some(NameEvent::Submitted(self.buffer.clone())),
            _ => None,
        }
    }
}

impl Component for NameEntry {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Field, spacer, echo line, vertically centered as a group.
        let [field_area, _, echo_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [field_area] = Layout::horizontal([Constraint::Percentage(70)])
            .flex(Flex::Center)
            .areas(field_area);

        let field = Paragraph::new(self.buffer.as_str())
            .block(Block::bordered().title("Enter name"))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(field, field_area);

        // Cursor sits after the text typed so far (display columns, not bytes).
        let cursor_col = self.buffer[..self.cursor].width() as u16;
        frame.set_cursor_position((
            field_area.x + 1 + cursor_col.min(field_area.width.saturating_sub(2)),
            field_area.y + 1,
        ));

        if let Some(name) = &self.submitted {
            let echo = Paragraph::new(format!("Name: {name}"))
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(echo, echo_area);
        }
    }
}
