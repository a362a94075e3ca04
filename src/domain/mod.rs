//! Domain layer with screens, the navigation stack and port definitions.

/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Navigation stack and transition events.
pub mod navigation;
/// Port definitions.
pub mod ports;
/// Demo row data.
pub mod rows;
/// Screen identifiers and descriptors.
pub mod screen;

pub use errors::{KeyParseError, ScreenError};
pub use navigation::{NavigationEvent, NavigationStack};
pub use ports::NavigationObserver;
pub use rows::{DEMO_ROW_COUNT, DemoRows};
pub use screen::{ScreenDescriptor, ScreenId};
