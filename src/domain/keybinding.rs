use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::errors::KeyParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    ToggleHelp,

    // Navigation stack
    Push,
    Pop,

    // Focus
    FocusNext,
    FocusPrevious,
    Activate,

    // Row list
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}

impl Action {
    /// Short label shown in the footer and help popup.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::ToggleHelp => "Help",
            Self::Push => "Push",
            Self::Pop => "Back",
            Self::FocusNext => "Next",
            Self::FocusPrevious => "Prev",
            Self::Activate => "Press",
            Self::ScrollUp => "Up",
            Self::ScrollDown => "Down",
            Self::PageUp => "Page up",
            Self::PageDown => "Page down",
            Self::ScrollToTop => "Top",
            Self::ScrollToBottom => "Bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}

/// Parses a binding such as `Ctrl+q`, `Shift+Tab`, `PageDown` or `?`.
///
/// # Errors
/// Returns `KeyParseError` for empty input, unknown modifiers or unknown key names.
pub fn parse_key(input: &str) -> Result<KeyEvent, KeyParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(KeyParseError::Empty);
    }

    // A lone "+" is the plus key, and "Ctrl++" binds it with a modifier.
    let (modifier_part, key_part) = match trimmed.strip_suffix("++") {
        Some(rest) => (Some(rest), "+"),
        None if trimmed == "+" => (None, "+"),
        None => match trimmed.rsplit_once('+') {
            Some((mods, key)) => (Some(mods), key),
            None => (None, trimmed),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    for modifier in modifier_part.into_iter().flat_map(|m| m.split('+')) {
        modifiers |= match modifier.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "meta" | "a" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            _ => {
                return Err(KeyParseError::UnknownModifier {
                    modifier: modifier.to_string(),
                    input: input.to_string(),
                });
            }
        };
    }

    let code = parse_key_code(key_part.trim()).ok_or_else(|| KeyParseError::UnknownKey {
        key: key_part.to_string(),
        input: input.to_string(),
    })?;

    // Terminals report Shift+Tab as BackTab.
    let code = if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        KeyCode::BackTab
    } else {
        code
    };

    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(key: &str) -> Option<KeyCode> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let code = match key.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bksp" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "delete" | "del" => KeyCode::Delete,
        other => {
            let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
            if (1..=12).contains(&n) {
                KeyCode::F(n)
            } else {
                return None;
            }
        }
    };
    Some(code)
}
