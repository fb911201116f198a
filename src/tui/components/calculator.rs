//! # CalculatorPad Component
//!
//! The calculator screen: the input line, the result line, and the
//! 18-button grid. Buttons are pressed three ways: typing the button's
//! character, arrow-navigating the grid and pressing Enter, or clicking
//! a button with the mouse.
//!
//! The input buffer and result are props synced from `App::keypad`; this
//! component only owns the grid focus and the hit-test geometry cached
//! during the last render.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::calc::Key;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Button layout: four per row, with a final half-row holding `%` and `=`.
pub const LAYOUT: [&[Key]; 5] = [
    &[Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Add],
    &[Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Sub],
    &[Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Mul],
    &[Key::Digit(0), Key::Dot, Key::Clear, Key::Div],
    &[Key::Percent, Key::Equals],
];

/// Events emitted by the calculator pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcEvent {
    Pressed(Key),
}

pub struct CalculatorPad {
    /// Current input buffer (prop from `App::keypad`).
    pub input: String,
    /// Latest evaluation result (prop from `App::keypad`).
    pub result: Option<String>,
    /// Focused grid cell.
    row: usize,
    col: usize,
    /// Button rectangles from the last render, for mouse hit-testing.
    button_rects: Vec<(Rect, Key)>,
}

impl CalculatorPad {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            result: None,
            row: 0,
            col: 0,
            button_rects: Vec::new(),
        }
    }

    /// The key under the grid focus.
    fn focused(&self) -> Key {
        LAYOUT[self.row][self.col]
    }

    fn move_focus(&mut self, d_row: isize, d_col: isize) {
        let row = self
            .row
            .saturating_add_signed(d_row)
            .min(LAYOUT.len() - 1);
        let col = self
            .col
            .saturating_add_signed(d_col)
            .min(LAYOUT[row].len() - 1);
        self.row = row;
        self.col = col;
    }

    fn key_at(&self, column: u16, row: u16) -> Option<Key> {
        self.button_rects
            .iter()
            .find(|(rect, _)| rect.contains((column, row).into()))
            .map(|&(_, key)| key)
    }
}

impl Default for CalculatorPad {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CalculatorPad {
    type Event = CalcEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => Key::from_char(*c).map(CalcEvent::Pressed),
            TuiEvent::Submit => Some(CalcEvent::Pressed(self.focused())),
            TuiEvent::Backspace => {
                // The keypad has no backspace button; treat it as C.
                Some(CalcEvent::Pressed(Key::Clear))
            }
            TuiEvent::CursorUp => {
                self.move_focus(-1, 0);
                None
            }
            TuiEvent::CursorDown => {
                self.move_focus(1, 0);
                None
            }
            TuiEvent::CursorLeft => {
                self.move_focus(0, -1);
                None
            }
            TuiEvent::CursorRight => {
                self.move_focus(0, 1);
                None
            }
            TuiEvent::MouseClick(column, row) => {
                self.key_at(*column, *row).map(CalcEvent::Pressed)
            }
            _ => None,
        }
    }
}

impl Component for CalculatorPad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = LAYOUT.len() as u16;
        let [pad_area] = Layout::horizontal([Constraint::Length(36)])
            .flex(Flex::Center)
            .areas(area);
        let [input_area, result_area, grid_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(rows * 3),
        ])
        .flex(Flex::Center)
        .areas(pad_area);

        let input = Paragraph::new(self.input.as_str())
            .block(Block::bordered().title("Input"))
            .alignment(Alignment::Right);
        frame.render_widget(input, input_area);

        let result = Paragraph::new(self.result.as_deref().unwrap_or_default())
            .alignment(Alignment::Right)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(result, result_area);

        self.button_rects.clear();
        let row_areas = Layout::vertical(vec![Constraint::Length(3); LAYOUT.len()])
            .split(grid_area);
        for (r, (keys, row_area)) in LAYOUT.iter().zip(row_areas.iter()).enumerate() {
            let cells =
                Layout::horizontal(vec![Constraint::Fill(1); keys.len()]).split(*row_area);
            for (c, (key, cell)) in keys.iter().zip(cells.iter()).enumerate() {
                let is_focused = r == self.row && c == self.col;
                let style = if is_focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                let button = Paragraph::new(key.legend())
                    .alignment(Alignment::Center)
                    .block(Block::bordered())
                    .style(style);
                frame.render_widget(button, *cell);
                self.button_rects.push((*cell, *key));
            }
        }
    }
}
