//! # Tab Bar Component
//!
//! Bottom bar with one tab per `NavItem`, left to right.
//! Same state + wrapper split as the side nav.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Tabs};
use unicode_width::UnicodeWidthStr;

use crate::core::menu::NavItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::side_nav::NavEvent;
use crate::tui::event::TuiEvent;

/// Cells around each title: one pad on each side, plus the divider after it.
const TAB_PADDING: u16 = 2;
const DIVIDER: &str = "│";

pub const TAB_BAR_HEIGHT: u16 = 3;

pub struct TabBarState {
    pub len: usize,
    pub cursor: usize,
}

impl TabBarState {
    pub fn new(len: usize) -> Self {
        Self { len, cursor: 0 }
    }
}

impl EventHandler for TabBarState {
    type Event = NavEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = (self.cursor + 1).min(self.len - 1);
                None
            }
            TuiEvent::Submit => Some(NavEvent::Activate(self.cursor)),
            _ => None,
        }
    }
}

/// Column spans (start, end exclusive) of each tab relative to the bar's
/// inner area, matching how `Tabs` lays titles out.
pub fn tab_spans(items: &[NavItem]) -> Vec<(u16, u16)> {
    let divider = column_count(DIVIDER.width());
    let mut x = 0u16;
    items
        .iter()
        .map(|item| {
            let start = x;
            let end = start
                .saturating_add(column_count(item.title.width()))
                .saturating_add(TAB_PADDING);
            x = end.saturating_add(divider);
            (start, end)
        })
        .collect()
}

/// Terminal columns are u16; anything wider pins to the last column.
fn column_count(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Transient render wrapper for the tab bar.
pub struct TabBar<'a> {
    pub items: &'a [NavItem],
    pub state: &'a TabBarState,
    pub focused: bool,
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let highlight = if self.focused {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let titles: Vec<&str> = self.items.iter().map(|item| item.title.as_str()).collect();
        let tabs = Tabs::new(titles)
            .block(Block::bordered().border_style(Style::default().fg(border_color)))
            .divider(DIVIDER)
            .highlight_style(highlight)
            .select(self.state.cursor);

        frame.render_widget(tabs, area);
    }
}
