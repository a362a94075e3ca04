//! Event handling.

use crossterm::event::{KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Terminal event helpers.
pub struct EventHandler;

impl EventHandler {
    /// Whether the key event should trigger a binding. Release and repeat reports are
    /// ignored so a single press never acts twice.
    #[must_use]
    pub fn is_actionable(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use test_case::test_case;

    #[test_case(KeyEventKind::Press, true ; "press")]
    #[test_case(KeyEventKind::Release, false ; "release")]
    #[test_case(KeyEventKind::Repeat, false ; "repeat")]
    fn test_actionable_kinds(kind: KeyEventKind, expected: bool) {
        let key = KeyEvent::new_with_kind(KeyCode::Char('p'), KeyModifiers::NONE, kind);

        assert_eq!(EventHandler::is_actionable(&key), expected);
    }
}
