//! # CountryList Component
//!
//! Scrollable list of the 50 countries. Moving the selection scrolls the
//! list; activating an entry (Enter or a mouse click) emits the country
//! so the app can raise a toast.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::countries::COUNTRIES;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryEvent {
    Activated(&'static str),
}

pub struct CountryList {
    pub selected: usize,
    list_state: ListState,
    /// List area from the last render, for mouse hit-testing.
    area: Option<Rect>,
}

impl CountryList {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
            area: None,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(COUNTRIES.len() - 1);
        self.list_state.select(Some(self.selected));
    }

    /// The list row under a screen position, accounting for the border
    /// and the current scroll offset.
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area?;
        let inner = area.inner(ratatui::layout::Margin::new(1, 1));
        if !inner.contains((column, row).into()) {
            return None;
        }
        let index = usize::from(row - inner.y) + self.list_state.offset();
        (index < COUNTRIES.len()).then_some(index)
    }
}

impl Default for CountryList {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CountryList {
    type Event = CountryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Submit => Some(CountryEvent::Activated(COUNTRIES[self.selected])),
            TuiEvent::MouseClick(column, row) => {
                let index = self.row_at(*column, *row)?;
                self.select(index);
                Some(CountryEvent::Activated(COUNTRIES[index]))
            }
            _ => None,
        }
    }
}

impl Component for CountryList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = Some(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Countries ({}) ", COUNTRIES.len()))
            .title_bottom(Line::from(" Enter Select ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = COUNTRIES
            .iter()
            .map(|country| ListItem::new(*country))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
