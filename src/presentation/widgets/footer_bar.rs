use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct FooterBarStyle {
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: theme.label,
            key_style: theme.key,
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Bottom bar listing the visible keybindings.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Compact key notation such as `C-q`, `S-Tab` or `PgDn`.
    #[must_use]
    pub fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }
        if key.modifiers.contains(KeyModifiers::SHIFT)
            && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
        {
            s.push_str("S-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::BackTab => s.push_str("S-Tab"),
            KeyCode::Backspace => s.push_str("Bksp"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::Left => s.push('←'),
            KeyCode::Right => s.push('→'),
            KeyCode::PageUp => s.push_str("PgUp"),
            KeyCode::PageDown => s.push_str("PgDn"),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            _ => {
                let _ = write!(s, "{:?}", key.code);
            }
        }
        s
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, binding) in self.keybindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Span::styled(info, self.style.info)).render(right_area, buf);
        }
    }
}
