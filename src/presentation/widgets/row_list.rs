//! Scrollable list of numbered rows.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

/// Scroll position of a row list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowListState {
    offset: usize,
    viewport: usize,
}

impl RowListState {
    /// Index of the first visible row.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Rows visible at the last render, zero before the first one.
    #[must_use]
    pub const fn viewport(&self) -> usize {
        self.viewport
    }

    /// Rows moved by a page scroll.
    #[must_use]
    pub fn page(&self) -> usize {
        self.viewport.max(1)
    }

    fn max_offset(&self, len: usize) -> usize {
        len.saturating_sub(self.viewport.max(1))
    }

    /// Scrolls by `delta` rows, clamped to the list.
    pub fn scroll_by(&mut self, delta: isize, len: usize) {
        let target = self.offset.saturating_add_signed(delta);
        self.offset = target.min(self.max_offset(len));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, len: usize) {
        self.offset = self.max_offset(len);
    }

    fn set_viewport(&mut self, viewport: usize, len: usize) {
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset(len));
    }
}

pub struct RowList<'a> {
    rows: &'a [usize],
    style: Style,
    show_scrollbar: bool,
}

impl<'a> RowList<'a> {
    #[must_use]
    pub const fn new(rows: &'a [usize]) -> Self {
        Self {
            rows,
            style: Style::new(),
            show_scrollbar: true,
        }
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn show_scrollbar(mut self, show: bool) -> Self {
        self.show_scrollbar = show;
        self
    }
}

impl StatefulWidget for RowList<'_> {
    type State = RowListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        let [list_area, bar_area] = if self.show_scrollbar {
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)]).areas(area)
        } else {
            [area, Rect::default()]
        };

        state.set_viewport(usize::from(list_area.height), self.rows.len());

        let lines: Vec<Line> = self
            .rows
            .iter()
            .skip(state.offset)
            .take(state.viewport)
            .map(|n| Line::styled(n.to_string(), self.style))
            .collect();
        Paragraph::new(lines).render(list_area, buf);

        if self.show_scrollbar && self.rows.len() > state.viewport {
            let mut bar_state = ScrollbarState::new(self.rows.len())
                .position(state.offset)
                .viewport_content_length(state.viewport);
            Scrollbar::new(ScrollbarOrientation::VerticalRight).render(
                bar_area,
                buf,
                &mut bar_state,
            );
        }
    }
}
