//! Closed mapping from screen identifiers to their views.

use crossterm::event::MouseEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

use super::main_screen::{MainScreen, MainScreenState};
use crate::domain::keybinding::Action;
use crate::domain::{ScreenDescriptor, ScreenId};
use crate::presentation::theme::Theme;

/// What a screen asks the application to do after handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Push a new screen.
    Push(ScreenDescriptor),
    /// Pop the current screen.
    Pop,
    /// Input handled, nothing else to do.
    Consumed,
    /// Input not relevant to the screen.
    Ignored,
}

/// Shared data every screen renders with.
pub struct ScreenContext<'a> {
    pub rows: &'a [usize],
    pub theme: &'a Theme,
    pub can_pop: bool,
    pub show_scrollbar: bool,
}

/// View state of a stack entry, one variant per `ScreenId`.
#[derive(Debug, Clone)]
pub enum ScreenView {
    Main(MainScreenState),
}

impl ScreenView {
    /// Creates fresh view state for `id`.
    #[must_use]
    pub fn for_screen(id: ScreenId) -> Self {
        match id {
            ScreenId::Main => Self::Main(MainScreenState::default()),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ScreenId {
        match self {
            Self::Main(_) => ScreenId::Main,
        }
    }

    /// Short position text for the status bar.
    #[must_use]
    pub fn position_hint(&self, row_count: usize) -> String {
        match self {
            Self::Main(state) => format!("row {}/{row_count}", state.row_offset() + 1),
        }
    }

    pub fn handle_action(&mut self, action: Action, ctx: &ScreenContext<'_>) -> ScreenAction {
        match self {
            Self::Main(state) => state.handle_action(action, ctx.rows.len()),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, ctx: &ScreenContext<'_>) -> ScreenAction {
        match self {
            Self::Main(state) => state.handle_mouse(mouse, ctx.rows.len()),
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ScreenContext<'_>) {
        match self {
            Self::Main(state) => MainScreen::new(ctx.rows, ctx.theme)
                .can_pop(ctx.can_pop)
                .show_scrollbar(ctx.show_scrollbar)
                .render(area, buf, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_has_a_view() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenView::for_screen(id).id(), id);
        }
    }

    #[test]
    fn test_dispatches_to_main_screen() {
        let rows: Vec<usize> = (0..10).collect();
        let theme = Theme::default();
        let ctx = ScreenContext {
            rows: &rows,
            theme: &theme,
            can_pop: true,
            show_scrollbar: true,
        };
        let mut view = ScreenView::for_screen(ScreenId::Main);

        assert_eq!(
            view.handle_action(Action::Activate, &ctx),
            ScreenAction::Push(ScreenDescriptor::new(ScreenId::Main))
        );
        assert_eq!(view.handle_action(Action::Pop, &ctx), ScreenAction::Ignored);
    }
}
