//! The main screen: a button pair and the numbered row list.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    widgets::{Block, Borders, StatefulWidget, Widget},
};

use super::screens::ScreenAction;
use crate::domain::keybinding::Action;
use crate::domain::{ScreenDescriptor, ScreenId};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Button, ButtonState, RowList, RowListState};

const PUSH_LABEL: &str = "Push other";
const BACK_LABEL: &str = "Back";
const WHEEL_STEP: isize = 3;

/// Focusable parts of the main screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MainFocus {
    /// The "Push other" button.
    #[default]
    PushButton,
    /// The "Back" button.
    BackButton,
    /// The row list.
    Rows,
}

impl MainFocus {
    const fn next(self) -> Self {
        match self {
            Self::PushButton => Self::BackButton,
            Self::BackButton => Self::Rows,
            Self::Rows => Self::PushButton,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::PushButton => Self::Rows,
            Self::BackButton => Self::PushButton,
            Self::Rows => Self::BackButton,
        }
    }
}

/// View state of one main screen instance.
#[derive(Debug, Clone, Default)]
pub struct MainScreenState {
    focus: MainFocus,
    rows: RowListState,
    push_area: Rect,
    back_area: Rect,
    list_area: Rect,
}

impl MainScreenState {
    #[must_use]
    pub const fn focus(&self) -> MainFocus {
        self.focus
    }

    #[must_use]
    pub const fn row_offset(&self) -> usize {
        self.rows.offset()
    }

    pub fn scroll_rows(&mut self, delta: isize, row_count: usize) {
        self.rows.scroll_by(delta, row_count);
    }

    /// Applies a key action.
    pub fn handle_action(&mut self, action: Action, row_count: usize) -> ScreenAction {
        let page = isize::try_from(self.rows.page()).unwrap_or(isize::MAX);
        match action {
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrevious => self.focus = self.focus.previous(),
            Action::Activate => return Self::activate(self.focus),
            Action::ScrollUp => self.rows.scroll_by(-1, row_count),
            Action::ScrollDown => self.rows.scroll_by(1, row_count),
            Action::PageUp => self.rows.scroll_by(-page, row_count),
            Action::PageDown => self.rows.scroll_by(page, row_count),
            Action::ScrollToTop => self.rows.scroll_to_top(),
            Action::ScrollToBottom => self.rows.scroll_to_bottom(row_count),
            Action::Quit | Action::ToggleHelp | Action::Push | Action::Pop => {
                return ScreenAction::Ignored;
            }
        }
        ScreenAction::Consumed
    }

    /// Applies a mouse event using the areas recorded at the last render.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, row_count: usize) -> ScreenAction {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.push_area.contains(position) {
                    self.focus = MainFocus::PushButton;
                    Self::activate(MainFocus::PushButton)
                } else if self.back_area.contains(position) {
                    self.focus = MainFocus::BackButton;
                    Self::activate(MainFocus::BackButton)
                } else if self.list_area.contains(position) {
                    self.focus = MainFocus::Rows;
                    ScreenAction::Consumed
                } else {
                    ScreenAction::Ignored
                }
            }
            MouseEventKind::ScrollDown => {
                self.rows.scroll_by(WHEEL_STEP, row_count);
                ScreenAction::Consumed
            }
            MouseEventKind::ScrollUp => {
                self.rows.scroll_by(-WHEEL_STEP, row_count);
                ScreenAction::Consumed
            }
            _ => ScreenAction::Ignored,
        }
    }

    const fn activate(target: MainFocus) -> ScreenAction {
        match target {
            MainFocus::PushButton => ScreenAction::Push(ScreenDescriptor::new(ScreenId::Main)),
            MainFocus::BackButton => ScreenAction::Pop,
            MainFocus::Rows => ScreenAction::Consumed,
        }
    }
}

/// Renders the main screen.
pub struct MainScreen<'a> {
    rows: &'a [usize],
    theme: &'a Theme,
    can_pop: bool,
    show_scrollbar: bool,
}

impl<'a> MainScreen<'a> {
    #[must_use]
    pub const fn new(rows: &'a [usize], theme: &'a Theme) -> Self {
        Self {
            rows,
            theme,
            can_pop: false,
            show_scrollbar: true,
        }
    }

    #[must_use]
    pub const fn can_pop(mut self, can_pop: bool) -> Self {
        self.can_pop = can_pop;
        self
    }

    #[must_use]
    pub const fn show_scrollbar(mut self, show: bool) -> Self {
        self.show_scrollbar = show;
        self
    }

    const fn button_state(focused: bool, enabled: bool) -> ButtonState {
        match (focused, enabled) {
            (_, false) => ButtonState::Disabled,
            (true, true) => ButtonState::Focused,
            (false, true) => ButtonState::Normal,
        }
    }
}

impl StatefulWidget for MainScreen<'_> {
    type State = MainScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(format!(" {} ", ScreenId::Main));
        let inner = block.inner(area);
        block.render(area, buf);

        let [buttons_area, _, list_block_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let [push_area, _, back_area, _] = Layout::horizontal([
            Constraint::Length(Button::width(PUSH_LABEL)),
            Constraint::Length(2),
            Constraint::Length(Button::width(BACK_LABEL)),
            Constraint::Fill(1),
        ])
        .areas(buttons_area);

        Button::new(PUSH_LABEL, self.theme)
            .state(Self::button_state(state.focus == MainFocus::PushButton, true))
            .render(push_area, buf);
        Button::new(BACK_LABEL, self.theme)
            .state(Self::button_state(state.focus == MainFocus::BackButton, self.can_pop))
            .render(back_area, buf);

        let list_border = if state.focus == MainFocus::Rows {
            Style::default().fg(self.theme.accent)
        } else {
            self.theme.dimmed
        };
        let list_block = Block::default()
            .borders(Borders::TOP)
            .border_style(list_border)
            .title(format!(" {} rows ", self.rows.len()));
        let list_area = list_block.inner(list_block_area);
        list_block.render(list_block_area, buf);

        RowList::new(self.rows)
            .style(self.theme.row)
            .show_scrollbar(self.show_scrollbar)
            .render(list_area, buf, &mut state.rows);

        state.push_area = push_area;
        state.back_area = back_area;
        state.list_area = list_area;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use test_case::test_case;

    const ROWS: usize = 1000;

    fn render(state: &mut MainScreenState, can_pop: bool) -> Buffer {
        let rows: Vec<usize> = (0..ROWS).collect();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        MainScreen::new(&rows, &theme)
            .can_pop(can_pop)
            .render(area, &mut buf, state);
        buf
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test_case(MainFocus::PushButton, MainFocus::BackButton ; "push_to_back")]
    #[test_case(MainFocus::BackButton, MainFocus::Rows ; "back_to_rows")]
    #[test_case(MainFocus::Rows, MainFocus::PushButton ; "rows_wraps")]
    fn test_focus_cycle(from: MainFocus, to: MainFocus) {
        assert_eq!(from.next(), to);
        assert_eq!(to.previous(), from);
    }

    #[test]
    fn test_activate_buttons() {
        let mut state = MainScreenState::default();

        assert_eq!(
            state.handle_action(Action::Activate, ROWS),
            ScreenAction::Push(ScreenDescriptor::new(ScreenId::Main))
        );

        state.handle_action(Action::FocusNext, ROWS);
        assert_eq!(state.handle_action(Action::Activate, ROWS), ScreenAction::Pop);

        state.handle_action(Action::FocusNext, ROWS);
        assert_eq!(
            state.handle_action(Action::Activate, ROWS),
            ScreenAction::Consumed
        );
    }

    #[test]
    fn test_stack_actions_are_left_to_the_app() {
        let mut state = MainScreenState::default();

        assert_eq!(state.handle_action(Action::Push, ROWS), ScreenAction::Ignored);
        assert_eq!(state.handle_action(Action::Quit, ROWS), ScreenAction::Ignored);
    }

    #[test]
    fn test_renders_buttons_and_first_rows() {
        let mut state = MainScreenState::default();

        let buf = render(&mut state, true);

        assert!(line(&buf, 0).contains("Main"));
        assert!(line(&buf, 1).contains("▶ Push other ◀"));
        assert!(line(&buf, 1).contains("Back"));
        assert!(line(&buf, 3).contains("1000 rows"));
        let first_row = line(&buf, 4);
        assert_eq!(
            first_row.trim_start_matches('│').trim_start().chars().next(),
            Some('0')
        );
    }

    #[test]
    fn test_paging_uses_rendered_height() {
        let mut state = MainScreenState::default();
        render(&mut state, false);
        let page = state.rows.page();

        state.handle_action(Action::PageDown, ROWS);
        assert_eq!(state.row_offset(), page);

        state.handle_action(Action::ScrollToBottom, ROWS);
        assert_eq!(state.row_offset(), ROWS - page);

        state.handle_action(Action::ScrollUp, ROWS);
        assert_eq!(state.row_offset(), ROWS - page - 1);

        state.handle_action(Action::ScrollToTop, ROWS);
        assert_eq!(state.row_offset(), 0);
    }

    #[test]
    fn test_mouse_clicks_hit_buttons() {
        let mut state = MainScreenState::default();
        render(&mut state, true);
        let push = state.push_area;
        let back = state.back_area;

        assert_eq!(
            state.handle_mouse(click(push.x + 1, push.y), ROWS),
            ScreenAction::Push(ScreenDescriptor::new(ScreenId::Main))
        );
        assert_eq!(
            state.handle_mouse(click(back.x + 1, back.y), ROWS),
            ScreenAction::Pop
        );
        assert_eq!(state.focus(), MainFocus::BackButton);
        assert_eq!(state.handle_mouse(click(39, 0), ROWS), ScreenAction::Ignored);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut state = MainScreenState::default();
        render(&mut state, true);
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 6,
            modifiers: KeyModifiers::NONE,
        };

        state.handle_mouse(wheel, ROWS);

        assert_eq!(state.row_offset(), 3);
    }
}
