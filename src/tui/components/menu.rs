//! # Menu Component
//!
//! Centered overlay listing the three sub-screens. Opened from the home
//! screen, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState` while the menu is open
//! - `Menu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::screen::Screen;
use crate::tui::event::TuiEvent;

/// Persistent state for the open menu.
pub struct MenuState {
    pub selected: usize,
    pub list_state: ListState,
}

impl MenuState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Handle a key event, returning a MenuEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::Escape => Some(MenuEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(Screen::MENU.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Screen::MENU
                .get(self.selected)
                .copied()
                .map(MenuEvent::Select),
            _ => None,
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the menu overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Select(Screen),
    Dismiss,
}

/// Transient render wrapper for the menu overlay.
pub struct Menu<'a> {
    state: &'a mut MenuState,
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a mut MenuState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, Screen::MENU.len() as u16 + 2, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Open ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = Screen::MENU
            .iter()
            .map(|screen| ListItem::new(screen.title()))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect `percent_x` wide and `height` rows tall.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
