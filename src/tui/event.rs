use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::action::Key;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Submit,
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    Escape,
    ForceQuit, // Ctrl+C
    Resize,
}

/// Block until the next event the TUI cares about.
pub fn next_event() -> std::io::Result<Option<TuiEvent>> {
    Ok(translate(event::read()?))
}

/// Map a raw crossterm event; `None` for anything we ignore.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Windows reports releases too.
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Classify an event as a menu key. Events that are not key presses
/// (paste, resize, Ctrl+C) have no classification.
pub fn classify(event: &TuiEvent) -> Option<Key> {
    let key = match event {
        TuiEvent::CursorUp => Key::Up,
        TuiEvent::CursorDown => Key::Down,
        TuiEvent::PageUp => Key::ScrollUp,
        TuiEvent::PageDown => Key::ScrollDown,
        TuiEvent::Submit => Key::Confirm,
        TuiEvent::InputChar('q' | 'Q') => Key::Cancel,
        TuiEvent::InputChar('y' | 'Y') => Key::Yes,
        TuiEvent::InputChar('n' | 'N') => Key::No,
        TuiEvent::InputChar(_) | TuiEvent::Backspace | TuiEvent::Escape => Key::Other,
        TuiEvent::Paste(_) | TuiEvent::ForceQuit | TuiEvent::Resize => return None,
    };
    Some(key)
}
