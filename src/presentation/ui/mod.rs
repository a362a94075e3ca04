//! UI screens.

mod app;
mod help_popup;
mod main_screen;
mod screens;

pub use app::App;
pub use help_popup::HelpPopup;
pub use main_screen::{MainFocus, MainScreen, MainScreenState};
pub use screens::{ScreenAction, ScreenContext, ScreenView};
