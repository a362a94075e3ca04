//! Navigation stack controller used by the application.

use tracing::debug;

use crate::domain::{
    NavigationEvent, NavigationObserver, NavigationStack, ScreenDescriptor, ScreenId,
};
use crate::presentation::ui::ScreenView;

/// A stack entry: the immutable descriptor and the view state of its screen.
#[derive(Debug)]
struct Route {
    descriptor: ScreenDescriptor,
    view: ScreenView,
}

impl Route {
    fn new(descriptor: ScreenDescriptor) -> Self {
        let view = ScreenView::for_screen(descriptor.id());
        Self { descriptor, view }
    }
}

/// Owns the navigation stack and tells observers about every effective change.
pub struct Navigator {
    stack: NavigationStack<Route>,
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl Navigator {
    #[must_use]
    pub fn new(initial: ScreenDescriptor) -> Self {
        Self {
            stack: NavigationStack::new(Route::new(initial)),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn NavigationObserver>) {
        self.observers.push(observer);
    }

    /// Pushes a screen with fresh view state.
    pub fn push(&mut self, descriptor: ScreenDescriptor) {
        self.stack.push(Route::new(descriptor.clone()));
        self.notify(&NavigationEvent::Pushed {
            descriptor,
            depth: self.stack.depth(),
        });
    }

    /// Pops the top screen. At the root this does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<ScreenDescriptor> {
        let Some(route) = self.stack.pop() else {
            debug!("Pop ignored at root screen");
            return None;
        };

        self.notify(&NavigationEvent::Popped {
            descriptor: route.descriptor.clone(),
            depth: self.stack.depth(),
        });
        Some(route.descriptor)
    }

    #[must_use]
    pub fn current(&self) -> &ScreenDescriptor {
        &self.stack.current().descriptor
    }

    #[must_use]
    pub fn current_view(&self) -> &ScreenView {
        &self.stack.current().view
    }

    pub fn current_view_mut(&mut self) -> &mut ScreenView {
        &mut self.stack.current_mut().view
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.stack.is_at_root()
    }

    /// Descriptors from the root to the visible screen.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ScreenDescriptor> {
        self.stack.iter().map(|r| r.descriptor.clone()).collect()
    }

    /// Identifiers of the top `limit` screens, oldest first.
    #[must_use]
    pub fn recent_trail(&self, limit: usize) -> Vec<ScreenId> {
        let mut ids: Vec<ScreenId> = self
            .stack
            .iter()
            .rev()
            .take(limit)
            .map(|r| r.descriptor.id())
            .collect();
        ids.reverse();
        ids
    }

    fn notify(&self, event: &NavigationEvent) {
        for observer in &self.observers {
            observer.on_navigation(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::RecordingObserver;

    fn main_screen() -> ScreenDescriptor {
        ScreenDescriptor::new(ScreenId::Main)
    }

    fn navigator_with_recorder() -> (Navigator, RecordingObserver) {
        let recorder = RecordingObserver::new();
        let mut navigator = Navigator::new(main_screen());
        navigator.subscribe(Box::new(recorder.clone()));
        (navigator, recorder)
    }

    #[test]
    fn test_push_pop_scenario() {
        let (mut navigator, _) = navigator_with_recorder();

        navigator.push(main_screen());
        assert_eq!(navigator.snapshot(), vec![main_screen(), main_screen()]);
        assert_eq!(navigator.current(), &main_screen());

        assert_eq!(navigator.pop(), Some(main_screen()));
        assert_eq!(navigator.snapshot(), vec![main_screen()]);

        assert_eq!(navigator.pop(), None);
        assert_eq!(navigator.snapshot(), vec![main_screen()]);
    }

    #[test]
    fn test_observers_see_each_effective_change() {
        let (mut navigator, recorder) = navigator_with_recorder();
        let pushed = main_screen().with_param("from", "1");

        navigator.push(pushed.clone());
        navigator.pop();
        navigator.pop();
        navigator.pop();

        assert_eq!(
            recorder.recorded(),
            vec![
                NavigationEvent::Pushed {
                    descriptor: pushed.clone(),
                    depth: 2,
                },
                NavigationEvent::Popped {
                    descriptor: pushed,
                    depth: 1,
                },
            ]
        );
    }

    #[test]
    fn test_root_pop_notifies_nobody() {
        let (mut navigator, recorder) = navigator_with_recorder();

        for _ in 0..10 {
            assert_eq!(navigator.pop(), None);
        }

        assert!(recorder.recorded().is_empty());
        assert_eq!(navigator.depth(), 1);
        assert!(navigator.is_at_root());
    }

    #[test]
    fn test_view_state_is_per_entry() {
        let (mut navigator, _) = navigator_with_recorder();
        let ScreenView::Main(state) = navigator.current_view_mut();
        state.scroll_rows(25, 1000);

        navigator.push(main_screen());
        let ScreenView::Main(top) = navigator.current_view();
        assert_eq!(top.row_offset(), 0);

        navigator.pop();
        let ScreenView::Main(root) = navigator.current_view();
        assert_eq!(root.row_offset(), 25);
    }

    #[test]
    fn test_recent_trail_is_bounded() {
        let (mut navigator, _) = navigator_with_recorder();
        navigator.push(main_screen());
        navigator.push(main_screen());

        assert_eq!(navigator.recent_trail(10), vec![ScreenId::Main; 3]);
        assert_eq!(navigator.recent_trail(2), vec![ScreenId::Main; 2]);
        assert!(navigator.recent_trail(0).is_empty());
    }
}
