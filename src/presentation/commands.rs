use crate::domain::keybinding::{Action, Keybind, parse_key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

/// Actions shown in the footer, in display order.
const FOOTER_ACTIONS: [Action; 6] = [
    Action::Push,
    Action::Pop,
    Action::FocusNext,
    Action::Activate,
    Action::ToggleHelp,
    Action::Quit,
];

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register =
            |action: Action, code: KeyCode, modifiers: KeyModifiers, primary: bool| {
                let key = KeyEvent::new(code, modifiers);
                if primary {
                    display_bindings.insert(action, key);
                }
                input_bindings.push((key, action));
            };

        register(Action::Quit, KeyCode::Char('q'), KeyModifiers::NONE, true);
        register(Action::Quit, KeyCode::Char('c'), KeyModifiers::CONTROL, false);
        register(Action::ToggleHelp, KeyCode::Char('?'), KeyModifiers::NONE, true);
        register(Action::ToggleHelp, KeyCode::F(1), KeyModifiers::NONE, false);

        register(Action::Push, KeyCode::Char('p'), KeyModifiers::NONE, true);
        register(Action::Pop, KeyCode::Char('b'), KeyModifiers::NONE, true);
        register(Action::Pop, KeyCode::Backspace, KeyModifiers::NONE, false);
        register(Action::Pop, KeyCode::Esc, KeyModifiers::NONE, false);

        register(Action::FocusNext, KeyCode::Tab, KeyModifiers::NONE, true);
        register(Action::FocusPrevious, KeyCode::BackTab, KeyModifiers::SHIFT, true);
        register(Action::FocusPrevious, KeyCode::BackTab, KeyModifiers::NONE, false);
        register(Action::Activate, KeyCode::Enter, KeyModifiers::NONE, true);
        register(Action::Activate, KeyCode::Char(' '), KeyModifiers::NONE, false);

        register(Action::ScrollUp, KeyCode::Char('k'), KeyModifiers::NONE, true);
        register(Action::ScrollUp, KeyCode::Up, KeyModifiers::NONE, false);
        register(Action::ScrollDown, KeyCode::Char('j'), KeyModifiers::NONE, true);
        register(Action::ScrollDown, KeyCode::Down, KeyModifiers::NONE, false);
        register(Action::PageUp, KeyCode::PageUp, KeyModifiers::NONE, true);
        register(Action::PageUp, KeyCode::Char('u'), KeyModifiers::CONTROL, false);
        register(Action::PageDown, KeyCode::PageDown, KeyModifiers::NONE, true);
        register(Action::PageDown, KeyCode::Char('d'), KeyModifiers::CONTROL, false);
        register(Action::ScrollToTop, KeyCode::Char('g'), KeyModifiers::NONE, true);
        register(Action::ScrollToTop, KeyCode::Home, KeyModifiers::NONE, false);
        register(Action::ScrollToBottom, KeyCode::Char('G'), KeyModifiers::NONE, true);
        register(Action::ScrollToBottom, KeyCode::End, KeyModifiers::NONE, false);

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the defaults and layers user overrides on top.
    ///
    /// An override becomes the displayed key for its action and wins over any default
    /// bound to the same key. Unparseable keys are logged and skipped.
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();

        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (raw, action) in entries {
            match parse_key(raw) {
                Ok(key) => registry.bind(key, *action),
                Err(e) => warn!(key = %raw, error = %e, "Ignoring invalid keybinding"),
            }
        }

        registry
    }

    fn bind(&mut self, key: KeyEvent, action: Action) {
        let key = normalize(key);
        self.input_bindings.retain(|(k, _)| normalize(*k) != key);
        self.input_bindings.insert(0, (key, action));

        let stale: Vec<Action> = self
            .display_bindings
            .iter()
            .filter(|&(a, k)| *a != action && normalize(*k) == key)
            .map(|(a, _)| *a)
            .collect();
        for stale_action in stale {
            match self.input_bindings.iter().find(|(_, a)| *a == stale_action) {
                Some((fallback, _)) => {
                    self.display_bindings.insert(stale_action, *fallback);
                }
                None => {
                    self.display_bindings.remove(&stale_action);
                }
            }
        }

        self.display_bindings.insert(action, key);
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        let key = normalize(key);
        self.input_bindings
            .iter()
            .find(|(k, _)| normalize(*k) == key)
            .map(|(_, a)| *a)
    }

    /// Bindings for the footer bar.
    pub fn footer_bindings(&self) -> Vec<Keybind> {
        FOOTER_ACTIONS
            .iter()
            .filter_map(|&action| {
                self.get(action)
                    .map(|key| Keybind::new(key, action, action.label()))
            })
            .collect()
    }

    /// Every primary binding, for the help popup.
    pub fn all_bindings(&self) -> Vec<Keybind> {
        let mut bindings: Vec<Keybind> = self
            .display_bindings
            .iter()
            .map(|(&action, &key)| Keybind::new(key, action, action.label()))
            .collect();
        bindings.sort_by_key(|k| k.label.to_string());
        bindings
    }
}

/// Shifted characters arrive with or without SHIFT depending on the terminal.
fn normalize(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}
