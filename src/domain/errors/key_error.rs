//! Key binding parse errors.

use thiserror::Error;

/// Errors raised while parsing a key binding string such as `Ctrl+q`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum KeyParseError {
    #[error("empty key binding")]
    Empty,

    #[error("unknown modifier '{modifier}' in '{input}'")]
    UnknownModifier { modifier: String, input: String },

    #[error("unknown key '{key}' in '{input}'")]
    UnknownKey { key: String, input: String },
}
