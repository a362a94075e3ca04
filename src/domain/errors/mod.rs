//! Domain error types.

mod key_error;
mod screen_error;

pub use key_error::KeyParseError;
pub use screen_error::ScreenError;
