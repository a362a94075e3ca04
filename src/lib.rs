//! Stackview - a terminal screen sample built around a navigation stack.
//!
//! The main screen shows a "Push other" and a "Back" button above a list of numbered
//! rows. Pushing adds another screen to the stack; going back pops it, except at the
//! first screen, where popping does nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing screens, the navigation stack and ports.
pub mod domain;
/// Infrastructure layer containing configuration loading.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "stackview";
