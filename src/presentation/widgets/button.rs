//! Single-line push button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

/// Visual state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Idle.
    Normal,
    /// Has keyboard focus.
    Focused,
    /// Cannot be pressed.
    Disabled,
}

/// Button rendered as ` label ` with padding.
pub struct Button<'a> {
    label: &'a str,
    state: ButtonState,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    #[must_use]
    pub const fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            state: ButtonState::Normal,
            theme,
        }
    }

    #[must_use]
    pub const fn state(mut self, state: ButtonState) -> Self {
        self.state = state;
        self
    }

    /// Display width including padding.
    #[must_use]
    pub fn width(label: &str) -> u16 {
        u16::try_from(label.width() + 4).unwrap_or(u16::MAX)
    }

    fn style(&self) -> Style {
        match self.state {
            ButtonState::Normal => self.theme.button,
            ButtonState::Focused => self.theme.button_focused,
            ButtonState::Disabled => self.theme.button_disabled,
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let (open, close) = if self.state == ButtonState::Focused {
            ("▶ ", " ◀")
        } else {
            ("  ", "  ")
        };
        let text = format!("{open}{}{close}", self.label);

        Paragraph::new(Span::styled(text, self.style())).render(area, buf);
    }
}
