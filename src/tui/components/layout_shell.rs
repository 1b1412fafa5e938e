//! # Layout Shell
//!
//! The element behind `/`. Stacks, top to bottom:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │            header image              │  full width
//! ├────────┬─────────────────────────────┤
//! │ side   │                             │
//! │ nav    │   (no child routes yet)     │
//! ├────────┴─────────────────────────────┤
//! │ tab │ tab │ tab                      │  tab bar
//! └──────────────────────────────────────┘
//! ```
//!
//! Everything rendered comes from props. The only state is `ShellState`:
//! focus cursors plus the areas from the last frame, kept for mouse hit
//! testing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::menu::{MenuConfig, NavList};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::header_image::HeaderImage;
use crate::tui::components::side_nav::{self, NavEvent, SideNav, SideNavState};
use crate::tui::components::tab_bar::{self, TAB_BAR_HEIGHT, TabBar, TabBarState};
use crate::tui::event::TuiEvent;

/// Region that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SideNav,
    TabBar,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellAreas {
    pub header: Rect,
    pub side_nav: Rect,
    pub content: Rect,
    pub tab_bar: Rect,
}

impl ShellAreas {
    pub fn compute(area: Rect, header: &HeaderImage, menu: &MenuConfig) -> Self {
        use Constraint::{Length, Min};
        let [header_area, body, tab_area] =
            Layout::vertical([Length(header.height()), Min(0), Length(TAB_BAR_HEIGHT)]).areas(area);
        let [side_area, content] =
            Layout::horizontal([Length(side_nav::required_width(&menu.side_nav)), Min(0)])
                .areas(body);
        Self {
            header: header_area,
            side_nav: side_area,
            content,
            tab_bar: tab_area,
        }
    }
}

/// Persistent presentation state for the shell.
pub struct ShellState {
    pub side_nav: SideNavState,
    pub tab_bar: TabBarState,
    pub focus: Focus,
    pub areas: ShellAreas,
    tab_spans: Vec<(u16, u16)>,
}

impl ShellState {
    pub fn new(menu: &MenuConfig) -> Self {
        Self {
            side_nav: SideNavState::new(menu.side_nav.len()),
            tab_bar: TabBarState::new(menu.tab_bar.len()),
            focus: Focus::SideNav,
            areas: ShellAreas::default(),
            tab_spans: tab_bar::tab_spans(&menu.tab_bar),
        }
    }

    /// Route an event to the focused region. Returns the activated item.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<(NavList, usize)> {
        match event {
            TuiEvent::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::SideNav => Focus::TabBar,
                    Focus::TabBar => Focus::SideNav,
                };
                None
            }
            TuiEvent::MouseClick(column, row) => self.hit_test(*column, *row),
            _ => match self.focus {
                Focus::SideNav => self
                    .side_nav
                    .handle_event(event)
                    .map(|NavEvent::Activate(i)| (NavList::SideNav, i)),
                Focus::TabBar => self
                    .tab_bar
                    .handle_event(event)
                    .map(|NavEvent::Activate(i)| (NavList::TabBar, i)),
            },
        }
    }

    /// Map a click to an item using the areas from the last frame. A hit also
    /// moves focus and cursor to the clicked item.
    fn hit_test(&mut self, column: u16, row: u16) -> Option<(NavList, usize)> {
        let position = Position::new(column, row);

        let nav_inner = inner(self.areas.side_nav);
        if nav_inner.contains(position) {
            let index = self.side_nav.index_at_row(row - nav_inner.y)?;
            self.focus = Focus::SideNav;
            self.side_nav.set_cursor(index);
            return Some((NavList::SideNav, index));
        }

        let tab_inner = inner(self.areas.tab_bar);
        if tab_inner.contains(position) {
            let x = column - tab_inner.x;
            let index = self
                .tab_spans
                .iter()
                .position(|(start, end)| (*start..*end).contains(&x))?;
            self.focus = Focus::TabBar;
            self.tab_bar.cursor = index;
            return Some((NavList::TabBar, index));
        }

        None
    }
}

fn inner(area: Rect) -> Rect {
    area.inner(ratatui::layout::Margin::new(1, 1))
}

/// Transient render wrapper for the shell.
pub struct LayoutShell<'a> {
    pub menu: &'a MenuConfig,
    pub header: HeaderImage,
    pub state: &'a mut ShellState,
}

impl Component for LayoutShell<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let areas = ShellAreas::compute(area, &self.header, self.menu);
        self.state.areas = areas;

        self.header.render(frame, areas.header);

        SideNav {
            items: &self.menu.side_nav,
            state: &mut self.state.side_nav,
            focused: self.state.focus == Focus::SideNav,
        }
        .render(frame, areas.side_nav);

        TabBar {
            items: &self.menu.tab_bar,
            state: &self.state.tab_bar,
            focused: self.state.focus == Focus::TabBar,
        }
        .render(frame, areas.tab_bar);
    }
}
