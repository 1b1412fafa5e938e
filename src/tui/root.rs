//! # Application Root
//!
//! Owns the app and its presentation state, and attaches them to the
//! terminal. Mounting happens once; later frames go through `redraw()`.
//!
//! The terminal is the mount point. Without an interactive stdout there is
//! nothing to attach to and startup stops with `MissingMountPoint`.

use std::fmt;
use std::io::stdout;

use crossterm::tty::IsTty;
use log::{debug, info};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::core::action::{Action, Effect, update};
use crate::core::router::Element;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::event::TuiEvent;
use crate::tui::ui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// stdout is not a terminal.
    MissingMountPoint,
    AlreadyMounted,
    NotMounted,
    Render(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::MissingMountPoint => write!(f, "no terminal to mount on (stdout is not a tty)"),
            MountError::AlreadyMounted => write!(f, "application is already mounted"),
            MountError::NotMounted => write!(f, "application has not been mounted"),
            MountError::Render(e) => write!(f, "render failed: {e}"),
        }
    }
}

impl std::error::Error for MountError {}

/// Checks that stdout is an interactive terminal.
pub fn locate_mount_point() -> Result<(), MountError> {
    if stdout().is_tty() {
        Ok(())
    } else {
        Err(MountError::MissingMountPoint)
    }
}

pub struct Root {
    app: App,
    tui: TuiState,
    mounted: bool,
}

impl Root {
    pub fn new(app: App) -> Self {
        let tui = TuiState::new(&app.menu);
        Self {
            app,
            tui,
            mounted: false,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Attach to the terminal and draw the first frame.
    ///
    /// Calling this a second time always fails with `AlreadyMounted`.
    pub fn mount<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), MountError> {
        if self.mounted {
            return Err(MountError::AlreadyMounted);
        }
        self.draw(terminal)?;
        self.mounted = true;
        info!("Mounted at {}", self.app.location);
        Ok(())
    }

    pub fn redraw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), MountError> {
        if !self.mounted {
            return Err(MountError::NotMounted);
        }
        self.draw(terminal)
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), MountError> {
        let app = &self.app;
        let tui = &mut self.tui;
        terminal
            .draw(|f| ui::draw_ui(f, app, tui))
            .map_err(|e| MountError::Render(e.to_string()))?;
        Ok(())
    }

    /// Feed one input event through the shell and the reducer.
    ///
    /// Navigation input only reaches the shell while the shell is on screen.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Effect {
        match event {
            TuiEvent::Quit | TuiEvent::ForceQuit => update(&mut self.app, Action::Quit),
            TuiEvent::Resize => Effect::None,
            _ if !self.shows_shell() => Effect::None,
            _ => {
                let Some((list, index)) = self.tui.shell.handle_event(event) else {
                    return Effect::None;
                };
                let Some(item) = self.app.menu.items(list).get(index) else {
                    debug!("Activated {} index {} has no item", list, index);
                    return Effect::None;
                };
                let action = Action::Select {
                    list,
                    key: item.key.clone(),
                };
                update(&mut self.app, action)
            }
        }
    }

    fn shows_shell(&self) -> bool {
        self.app.current_route().map(|matched| matched.element()) == Some(Element::Layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::backend::TestBackend;

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(60, 20)).unwrap()
    }

    #[test]
    fn test_mount_once() {
        let mut root = Root::new(test_app("/"));
        let mut terminal = terminal();
        assert!(!root.is_mounted());
        root.mount(&mut terminal).unwrap();
        assert!(root.is_mounted());
    }

    #[test]
    fn test_second_mount_always_fails() {
        let mut root = Root::new(test_app("/"));
        let mut terminal = terminal();
        root.mount(&mut terminal).unwrap();
        assert_eq!(root.mount(&mut terminal), Err(MountError::AlreadyMounted));
        assert_eq!(root.mount(&mut terminal), Err(MountError::AlreadyMounted));
        assert!(root.is_mounted());
    }

    #[test]
    fn test_redraw_requires_mount() {
        let mut root = Root::new(test_app("/"));
        let mut terminal = terminal();
        assert_eq!(root.redraw(&mut terminal), Err(MountError::NotMounted));
        root.mount(&mut terminal).unwrap();
        assert_eq!(root.redraw(&mut terminal), Ok(()));
    }

    #[test]
    fn test_selection_changes_no_app_state() {
        let mut root = Root::new(test_app("/"));
        let before = root.app().clone();
        let events = [
            TuiEvent::CursorDown,
            TuiEvent::Submit,
            TuiEvent::SwitchFocus,
            TuiEvent::CursorRight,
            TuiEvent::Submit,
        ];
        for event in &events {
            assert_eq!(root.handle_event(event), Effect::None);
        }
        assert_eq!(root.app(), &before);
    }

    #[test]
    fn test_not_found_page_ignores_navigation() {
        let mut root = Root::new(test_app("/orders"));
        let before = root.app().clone();
        for event in [
            TuiEvent::CursorDown,
            TuiEvent::SwitchFocus,
            TuiEvent::CursorRight,
            TuiEvent::Submit,
            TuiEvent::MouseClick(2, 2),
        ] {
            assert_eq!(root.handle_event(&event), Effect::None);
        }
        assert_eq!(root.app(), &before);
        assert_eq!(root.tui.shell.side_nav.cursor(), Some(0));
        assert_eq!(root.tui.shell.tab_bar.cursor, 0);
        assert_eq!(root.tui.shell.focus, crate::tui::components::Focus::SideNav);
        assert_eq!(root.handle_event(&TuiEvent::Quit), Effect::Quit);
    }

    #[test]
    fn test_quit_events() {
        let mut root = Root::new(test_app("/"));
        assert_eq!(root.handle_event(&TuiEvent::Quit), Effect::Quit);
        assert_eq!(root.handle_event(&TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_mount_error_messages() {
        assert_eq!(
            MountError::MissingMountPoint.to_string(),
            "no terminal to mount on (stdout is not a tty)"
        );
        assert_eq!(
            MountError::Render("boom".to_string()).to_string(),
            "render failed: boom"
        );
    }
}
