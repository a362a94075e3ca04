//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
        }
    }
}

/// One-line status message with optional right-aligned detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    message: String,
    detail: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            detail: String::new(),
            level: StatusLevel::Info,
        }
    }

    #[must_use]
    pub fn message(mut self, content: impl Into<String>) -> Self {
        self.message = content.into();
        self
    }

    #[must_use]
    pub fn detail(mut self, content: impl Into<String>) -> Self {
        self.detail = content.into();
        self
    }

    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Creates info status bar.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Info)
    }

    /// Creates success status bar.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Success)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.message
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let width = usize::from(area.width);
        let used = self.message.width() + self.detail.width();
        let padding = width.saturating_sub(used);

        let mut spans = vec![Span::styled(self.message.as_str(), style)];
        if !self.detail.is_empty() {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(
                self.detail.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_right_aligned() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        (&StatusBar::success("Pushed").detail("depth 2")).render(area, &mut buf);

        let rendered: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(rendered, "Pushed       depth 2");
        assert_eq!(buf[(0, 0)].fg, Color::Green);
    }

    #[test]
    fn test_info_without_detail() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        (&StatusBar::info("Back to Main")).render(area, &mut buf);

        let rendered: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(rendered, "Back to Main");
        assert_eq!(buf[(0, 0)].fg, Color::Cyan);
    }
}
