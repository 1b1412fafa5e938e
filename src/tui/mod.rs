//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates and nothing changes on its own, so the loop sleeps up to
//! 500ms waiting for input and only redraws after an event (including a
//! terminal resize).

mod component;
pub mod components;
pub mod event;
pub mod root;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::Effect;
use crate::core::config::ResolvedConfig;
use crate::core::menu::MenuConfig;
use crate::core::state::App;
use crate::tui::components::{HeaderImage, ShellState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::root::{MountError, Root, locate_mount_point};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub header: HeaderImage,
    pub shell: ShellState,
}

impl TuiState {
    pub fn new(menu: &MenuConfig) -> Self {
        Self {
            header: HeaderImage::bundled(),
            shell: ShellState::new(menu),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

#[derive(Debug)]
pub enum RunError {
    Mount(MountError),
    Io(std::io::Error),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Mount(e) => write!(f, "{e}"),
            RunError::Io(e) => write!(f, "terminal I/O error: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<MountError> for RunError {
    fn from(e: MountError) -> Self {
        RunError::Mount(e)
    }
}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        RunError::Io(e)
    }
}

pub fn run(config: ResolvedConfig) -> Result<(), RunError> {
    // Fail before touching terminal modes when there is nothing to draw on
    locate_mount_point()?;

    let app = App::from_config(&config);
    match app.current_route() {
        Some(matched) => info!("Initial path {} resolved to {:?}", matched.path, matched.element()),
        None => warn!("Initial path {} matches no route", app.location),
    }
    let mut root = Root::new(app);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .map_err(RunError::from)
        .and_then(|_guard| event_loop(&mut root, &mut terminal));
    ratatui::restore();
    result
}

fn event_loop(root: &mut Root, terminal: &mut ratatui::DefaultTerminal) -> Result<(), RunError> {
    root.mount(terminal)?;

    loop {
        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };

        // Process first event + drain everything pending before the next draw
        let mut should_quit = root.handle_event(&first_event) == Effect::Quit;
        while !should_quit {
            let Some(event) = poll_event_immediate()? else {
                break;
            };
            should_quit = root.handle_event(&event) == Effect::Quit;
        }

        if should_quit {
            info!("Shutting down");
            return Ok(());
        }

        root.redraw(terminal)?;
    }
}
