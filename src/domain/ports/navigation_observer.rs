use crate::domain::navigation::NavigationEvent;

/// Port notified whenever the navigation stack changes.
pub trait NavigationObserver: Send + Sync {
    /// Called once per push and once per effective pop.
    fn on_navigation(&self, event: &NavigationEvent);
}
