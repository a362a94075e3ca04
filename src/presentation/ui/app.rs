//! Main application orchestrator.

use crossterm::event::{Event, EventStream, KeyEvent, MouseEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::help_popup::HelpPopup;
use super::screens::{ScreenAction, ScreenContext};
use crate::domain::keybinding::Action;
use crate::domain::{DemoRows, NavigationEvent, ScreenDescriptor};
use crate::infrastructure::config::{AppConfig, UiConfig};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::navigator::Navigator;
use crate::presentation::observers::{ChannelObserver, TracingObserver};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, StatusBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    navigator: Navigator,
    navigation_rx: mpsc::UnboundedReceiver<NavigationEvent>,
    commands: CommandRegistry,
    theme: Theme,
    rows: DemoRows,
    ui: UiConfig,
    mouse: bool,
    show_help: bool,
    status: StatusBar,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let (navigation_tx, navigation_rx) = mpsc::unbounded_channel();

        let mut navigator = Navigator::new(ScreenDescriptor::new(config.initial_screen));
        navigator.subscribe(Box::new(ChannelObserver::new(navigation_tx)));
        navigator.subscribe(Box::new(TracingObserver));

        Self {
            state: AppState::Running,
            navigator,
            navigation_rx,
            commands: CommandRegistry::with_overrides(&config.keybindings),
            theme: Theme::new(&config.ui.accent_color),
            rows: DemoRows::new(),
            ui: config.ui.clone(),
            mouse: config.mouse,
            show_help: false,
            status: StatusBar::info(format!("Showing {}", config.initial_screen)),
        }
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(screen = %self.navigator.current(), "Starting event loop");

        self.run_event_loop(terminal).await?;

        info!(depth = self.navigator.depth(), "Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(event) = self.navigation_rx.recv() => {
                    self.handle_navigation(&event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                terminal_event = terminal_events.next() => {
                    match terminal_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            debug!("Terminal event stream closed");
                            self.state = AppState::Exiting;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_actionable(&key) => self.handle_key(key),
            Event::Mouse(mouse) if self.mouse => self.handle_mouse(mouse),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        let Some(action) = self.commands.find_action(key) else {
            return EventResult::Continue;
        };

        if self.show_help {
            return match action {
                Action::Quit => EventResult::Exit,
                _ => {
                    self.show_help = false;
                    EventResult::Consumed
                }
            };
        }

        match action {
            Action::Quit => EventResult::Exit,
            Action::ToggleHelp => {
                self.show_help = true;
                EventResult::Consumed
            }
            Action::Push => self.apply(ScreenAction::Push(ScreenDescriptor::new(
                self.navigator.current().id(),
            ))),
            Action::Pop => self.apply(ScreenAction::Pop),
            _ => {
                let ctx = Self::context(&self.rows, &self.theme, &self.ui, &self.navigator);
                let result = self.navigator.current_view_mut().handle_action(action, &ctx);
                self.apply(result)
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        if self.show_help {
            return EventResult::Continue;
        }

        let ctx = Self::context(&self.rows, &self.theme, &self.ui, &self.navigator);
        let result = self.navigator.current_view_mut().handle_mouse(mouse, &ctx);
        self.apply(result)
    }

    fn apply(&mut self, action: ScreenAction) -> EventResult {
        match action {
            ScreenAction::Push(descriptor) => {
                self.navigator.push(descriptor);
                EventResult::Consumed
            }
            ScreenAction::Pop => {
                if self.navigator.pop().is_none() {
                    self.status = StatusBar::info("Already at the first screen");
                }
                EventResult::Consumed
            }
            ScreenAction::Consumed => EventResult::Consumed,
            ScreenAction::Ignored => EventResult::Continue,
        }
    }

    fn handle_navigation(&mut self, event: &NavigationEvent) {
        self.status = match event {
            NavigationEvent::Pushed { descriptor, .. } => {
                StatusBar::success(format!("Pushed {descriptor}"))
            }
            NavigationEvent::Popped { .. } => {
                StatusBar::info(format!("Back to {}", self.navigator.current()))
            }
        };
    }

    fn context<'a>(
        rows: &'a DemoRows,
        theme: &'a Theme,
        ui: &UiConfig,
        navigator: &Navigator,
    ) -> ScreenContext<'a> {
        ScreenContext {
            rows: rows.as_slice(),
            theme,
            can_pop: !navigator.is_at_root(),
            show_scrollbar: ui.show_scrollbar,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let trail = self
            .navigator
            .recent_trail(HeaderBar::visible_capacity(header_area.width));
        frame.render_widget(
            HeaderBar::new(&trail, self.navigator.depth())
                .show_trail(self.ui.show_trail)
                .style(HeaderBarStyle::from_theme(&self.theme)),
            header_area,
        );

        let ctx = Self::context(&self.rows, &self.theme, &self.ui, &self.navigator);
        self.navigator
            .current_view_mut()
            .render(body_area, frame.buffer_mut(), &ctx);

        let status = self
            .status
            .clone()
            .detail(self.navigator.current_view().position_hint(self.rows.len()));
        frame.render_widget(&status, status_area);

        let footer = self.commands.footer_bindings();
        let version = format!("v{}", crate::VERSION);
        frame.render_widget(
            FooterBar::new(&footer)
                .right_info(Some(&version))
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer_area,
        );

        if self.show_help {
            let bindings = self.commands.all_bindings();
            frame.render_widget(HelpPopup::new(&bindings, &self.theme), body_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};
    use std::collections::HashMap;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn drain_navigation(app: &mut App) -> Vec<NavigationEvent> {
        let mut events = Vec::new();
        while let Ok(event) = app.navigation_rx.try_recv() {
            app.handle_navigation(&event);
            events.push(event);
        }
        events
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_app_starts_on_initial_screen() {
        let app = App::new(&AppConfig::default());

        assert_eq!(app.navigator().depth(), 1);
        assert_eq!(app.rows.len(), crate::domain::DEMO_ROW_COUNT);
        assert_eq!(app.state, AppState::Running);
    }

    #[test]
    fn test_push_then_pop_keys() {
        let mut app = App::new(&AppConfig::default());

        app.handle_terminal_event(press(KeyCode::Char('p')));
        assert_eq!(app.navigator().depth(), 2);
        assert_eq!(drain_navigation(&mut app).len(), 1);
        assert_eq!(app.status.text(), "Pushed Main");

        app.handle_terminal_event(press(KeyCode::Char('b')));
        assert_eq!(app.navigator().depth(), 1);
        assert_eq!(drain_navigation(&mut app).len(), 1);
        assert_eq!(app.status.text(), "Back to Main");
    }

    #[test]
    fn test_pop_at_root_is_silent() {
        let mut app = App::new(&AppConfig::default());

        for _ in 0..3 {
            let result = app.handle_terminal_event(press(KeyCode::Esc));
            assert_eq!(result, EventResult::Consumed);
        }

        assert_eq!(app.navigator().depth(), 1);
        assert!(drain_navigation(&mut app).is_empty());
        assert_eq!(app.status.text(), "Already at the first screen");
    }

    #[test]
    fn test_activate_focused_push_button() {
        let mut app = App::new(&AppConfig::default());

        app.handle_terminal_event(press(KeyCode::Enter));
        app.handle_terminal_event(press(KeyCode::Enter));

        assert_eq!(app.navigator().depth(), 3);
    }

    #[test]
    fn test_quit_and_help() {
        let mut app = App::new(&AppConfig::default());

        assert_eq!(
            app.handle_terminal_event(press(KeyCode::Char('?'))),
            EventResult::Consumed
        );
        assert!(app.show_help);

        app.handle_terminal_event(press(KeyCode::Char('p')));
        assert!(!app.show_help);
        assert_eq!(app.navigator().depth(), 1);

        assert_eq!(
            app.handle_terminal_event(press(KeyCode::Char('q'))),
            EventResult::Exit
        );
    }

    #[test]
    fn test_keybinding_overrides_apply() {
        let config = AppConfig {
            keybindings: HashMap::from([("n".to_string(), Action::Push)]),
            ..AppConfig::default()
        };
        let mut app = App::new(&config);

        app.handle_terminal_event(press(KeyCode::Char('n')));

        assert_eq!(app.navigator().depth(), 2);
    }

    #[test]
    fn test_mouse_ignored_when_disabled() {
        let config = AppConfig {
            mouse: false,
            ..AppConfig::default()
        };
        let mut app = App::new(&config);
        draw(&mut app);

        let result = app.handle_terminal_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }));

        assert_eq!(result, EventResult::Continue);
        assert_eq!(app.navigator().depth(), 1);
    }

    #[test]
    fn test_mouse_click_pushes() {
        let mut app = App::new(&AppConfig::default());
        draw(&mut app);

        app.handle_terminal_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }));

        assert_eq!(app.navigator().depth(), 2);
    }

    #[test]
    fn test_render_layout() {
        let mut app = App::new(&AppConfig::default());
        app.handle_terminal_event(press(KeyCode::Char('p')));
        drain_navigation(&mut app);

        let screen = draw(&mut app);
        let lines: Vec<&str> = screen.lines().collect();

        assert!(lines[0].contains("stackview"));
        assert!(lines[0].contains("Main › Main"));
        assert!(lines[0].contains("depth 2"));
        assert!(screen.contains("Push other"));
        assert!(lines[14].starts_with("Pushed Main"));
        assert!(lines[14].trim_end().ends_with("row 1/1000"));
        assert!(lines[15].contains("Push"));
        assert!(lines[15].ends_with(&format!("v{}", crate::VERSION)));
    }

    #[test]
    fn test_header_stays_compact_on_deep_stacks() {
        let mut app = App::new(&AppConfig::default());
        for _ in 0..2_000 {
            app.handle_terminal_event(press(KeyCode::Char('p')));
        }
        drain_navigation(&mut app);

        let screen = draw(&mut app);
        let header = screen.lines().next().unwrap_or_default();

        assert!(header.contains("… › Main › Main"));
        assert!(header.contains("depth 2001"));
    }
}
