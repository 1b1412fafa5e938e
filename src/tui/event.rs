use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use std::io;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    Submit,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    SwitchFocus,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    next_event(event::poll(timeout), event::read)
}

/// Terminal errors are returned, never retried: a dead tty fails every
/// poll immediately.
fn next_event(
    polled: io::Result<bool>,
    read: impl FnOnce() -> io::Result<Event>,
) -> io::Result<Option<TuiEvent>> {
    if !polled? {
        return Ok(None);
    }
    Ok(translate(read()?))
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Keyboard enhancement reports releases too; only presses count
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Submit),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) | (_, KeyCode::Char('h')) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) | (_, KeyCode::Char('l')) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Tab) | (_, KeyCode::BackTab) => Some(TuiEvent::SwitchFocus),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate(key(KeyCode::Down, KeyModifiers::NONE)), Some(TuiEvent::CursorDown));
        assert_eq!(translate(key(KeyCode::Char('k'), KeyModifiers::NONE)), Some(TuiEvent::CursorUp));
        assert_eq!(translate(key(KeyCode::Right, KeyModifiers::NONE)), Some(TuiEvent::CursorRight));
        assert_eq!(translate(key(KeyCode::Tab, KeyModifiers::NONE)), Some(TuiEvent::SwitchFocus));
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)), Some(TuiEvent::Submit));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::MouseClick(4, 9)));
    }

    #[test]
    fn test_poll_error_is_returned() {
        let polled = Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty closed"));
        let err = next_event(polled, || panic!("read must not run after a failed poll")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_read_error_is_returned() {
        let err = next_event(Ok(true), || Err(io::Error::other("read failed"))).unwrap_err();
        assert_eq!(err.to_string(), "read failed");
    }

    #[test]
    fn test_poll_timeout_is_no_event() {
        let event = next_event(Ok(false), || panic!("nothing to read")).unwrap();
        assert_eq!(event, None);
    }

    #[test]
    fn test_polled_event_is_translated() {
        let event = next_event(Ok(true), || Ok(Event::Resize(10, 10))).unwrap();
        assert_eq!(event, Some(TuiEvent::Resize));
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
