//! Presentation layer with UI components and event handling.

/// Key command registry.
pub mod commands;
/// Event handling.
pub mod events;
/// Navigation stack controller.
pub mod navigator;
/// Navigation observers.
pub mod observers;
/// Color theme.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use navigator::Navigator;
pub use ui::App;
