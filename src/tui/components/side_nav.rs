//! # Side Navigation Component
//!
//! Vertical list of dish categories, one row per `NavItem`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SideNavState` lives in `ShellState` and survives between frames
//! - `SideNav` is created each frame with borrowed props and state
//!
//! The highlighted row is a keyboard cursor only. Activating a row emits
//! `NavEvent::Activate` and nothing in the app reacts to it yet.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use crate::core::menu::NavItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const HIGHLIGHT_SYMBOL: &str = "› ";

/// Events emitted by the navigation components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The item at this index was activated (Enter / click).
    Activate(usize),
}

pub struct SideNavState {
    pub len: usize,
    pub list_state: ListState,
}

impl SideNavState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self { len, list_state }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.len {
            self.list_state.select(Some(index));
        }
    }

    /// Maps a row inside the list's inner area to an item index.
    pub fn index_at_row(&self, row_in_list: u16) -> Option<usize> {
        let index = row_in_list as usize + self.list_state.offset();
        (index < self.len).then_some(index)
    }
}

impl EventHandler for SideNavState {
    type Event = NavEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavEvent> {
        if self.len == 0 {
            return None;
        }
        let current = self.cursor().unwrap_or(0);
        match event {
            TuiEvent::CursorUp => {
                self.set_cursor(current.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.set_cursor((current + 1).min(self.len - 1));
                None
            }
            TuiEvent::Submit => Some(NavEvent::Activate(current)),
            _ => None,
        }
    }
}

/// Width the side nav needs: widest title plus the highlight gutter and borders.
pub fn required_width(items: &[NavItem]) -> u16 {
    let widest = items.iter().map(|i| i.title.width()).max().unwrap_or(0);
    let needed = widest.saturating_add(HIGHLIGHT_SYMBOL.width() + 2).max(8);
    u16::try_from(needed).unwrap_or(u16::MAX)
}

/// Transient render wrapper for the side navigation.
pub struct SideNav<'a> {
    pub items: &'a [NavItem],
    pub state: &'a mut SideNavState,
    pub focused: bool,
}

impl Component for SideNav<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let highlight = if self.focused {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.title.as_str()))
            .collect();

        let list = List::new(rows)
            .block(Block::bordered().border_style(Style::default().fg(border_color)))
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
