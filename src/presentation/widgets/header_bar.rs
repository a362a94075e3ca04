use crate::domain::ScreenId;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const TRAIL_SEPARATOR: &str = " › ";
const ELLIPSIS: &str = "… › ";

pub struct HeaderBarStyle {
    pub app_name: Style,
    pub trail: Style,
    pub current: Style,
    pub depth: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: theme.label,
            trail: theme.dimmed,
            current: Style::default().fg(theme.accent),
            depth: theme.key,
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Top bar with the app name, the route trail and the stack depth.
///
/// `trail` holds the newest entries only, oldest first; `depth` is the full stack size.
pub struct HeaderBar<'a> {
    trail: &'a [ScreenId],
    depth: usize,
    show_trail: bool,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(trail: &'a [ScreenId], depth: usize) -> Self {
        Self {
            trail,
            depth,
            show_trail: true,
            style: HeaderBarStyle::default(),
        }
    }

    /// Most trail entries that can show in `width` columns.
    #[must_use]
    pub fn visible_capacity(width: u16) -> usize {
        usize::from(width) / (1 + TRAIL_SEPARATOR.width()) + 1
    }

    #[must_use]
    pub const fn show_trail(mut self, show: bool) -> Self {
        self.show_trail = show;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Trail text that fits in `budget` columns, dropping the oldest entries first.
    fn trail_text(&self, budget: usize) -> String {
        let separator = TRAIL_SEPARATOR.width();
        let ellipsis = ELLIPSIS.width();
        let mut taken = 0;
        let mut width = 0;

        for id in self.trail.iter().rev() {
            let added = if taken == 0 {
                id.name().width()
            } else {
                id.name().width() + separator
            };
            let reserve = if taken + 1 == self.depth { 0 } else { ellipsis };
            if taken > 0 && width + added + reserve > budget {
                break;
            }
            width += added;
            taken += 1;
        }

        let shown = &self.trail[self.trail.len() - taken..];
        let mut text = shown
            .iter()
            .map(|id| id.name())
            .collect::<Vec<_>>()
            .join(TRAIL_SEPARATOR);
        if taken < self.depth && width + ellipsis <= budget {
            text.insert_str(0, ELLIPSIS);
        }
        text
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let name = format!(" {} ", crate::NAME);
        let depth = format!(" depth {} ", self.depth);
        let budget = usize::from(area.width).saturating_sub(name.width() + depth.width() + 2);

        let mut spans = vec![
            Span::styled(name.clone(), self.style.app_name),
            Span::raw(" "),
        ];
        let mut used = name.width() + 1;

        if self.show_trail {
            let trail = self.trail_text(budget);
            let (past, current) = match trail.rsplit_once(TRAIL_SEPARATOR) {
                Some((past, current)) => {
                    (format!("{past}{TRAIL_SEPARATOR}"), current.to_string())
                }
                None => (String::new(), trail.clone()),
            };
            used += trail.width();
            spans.push(Span::styled(past, self.style.trail));
            spans.push(Span::styled(current, self.style.current));
        }

        let padding = usize::from(area.width).saturating_sub(used + depth.width());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(depth, self.style.depth));

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::Reset))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(trail: &[ScreenId], depth: usize, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new(trail, depth).render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_shows_trail_and_depth() {
        let line = rendered(&[ScreenId::Main, ScreenId::Main], 2, 60);

        assert!(line.contains("Main › Main"));
        assert!(!line.contains('…'));
        assert!(line.trim_end().ends_with("depth 2"));
    }

    #[test]
    fn test_long_trail_is_elided() {
        let trail = [ScreenId::Main; 20];
        let header = HeaderBar::new(&trail, 20);

        let text = header.trail_text(30);

        assert_eq!(text, "… › Main › Main › Main › Main");
        assert!(text.width() <= 30);
    }

    #[test]
    fn test_tail_shorter_than_depth_is_elided() {
        let trail = [ScreenId::Main; 2];
        let header = HeaderBar::new(&trail, 5);

        assert_eq!(header.trail_text(60), "… › Main › Main");
    }

    #[test]
    fn test_tiny_budget_keeps_current_only() {
        let trail = [ScreenId::Main; 3];
        let header = HeaderBar::new(&trail, 3);

        assert_eq!(header.trail_text(6), "Main");
    }

    #[test]
    fn test_deep_stack_renders_from_capped_tail() {
        let width = 80;
        let full = vec![ScreenId::Main; 10_000];
        let cap = HeaderBar::visible_capacity(width);
        let tail = &full[full.len() - cap..];

        let from_full = rendered(&full, full.len(), width);
        let from_tail = rendered(tail, full.len(), width);

        assert_eq!(from_full, from_tail);
        assert!(from_tail.contains("… › Main › Main"));
        assert!(from_tail.trim_end().ends_with("depth 10000"));
    }
}
