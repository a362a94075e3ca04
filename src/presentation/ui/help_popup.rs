use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::FooterBar;

const KEY_COLUMN: usize = 10;

/// Overlay listing every key binding.
pub struct HelpPopup<'a> {
    bindings: &'a [Keybind],
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    #[must_use]
    pub const fn new(bindings: &'a [Keybind], theme: &'a Theme) -> Self {
        Self { bindings, theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.bindings.len() + 2).unwrap_or(u16::MAX);
        let area = centered_rect(36, height, area);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(" Keys ")
            .title_bottom(" ? to close ");

        let lines: Vec<Line> = self
            .bindings
            .iter()
            .map(|binding| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<KEY_COLUMN$}", FooterBar::format_key(&binding.key)),
                        Style::default().fg(self.theme.accent),
                    ),
                    Span::raw(binding.label.as_ref()),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    area
}
