mod navigation_observer;

pub use navigation_observer::NavigationObserver;
