//! Screen lookup error types.

use thiserror::Error;

/// Screen resolution error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// The name does not match any known screen.
    #[error("unknown screen '{name}' (known screens: {known})")]
    UnknownScreen {
        /// Name that failed to resolve.
        name: String,
        /// Comma separated list of valid names.
        known: String,
    },
}

impl ScreenError {
    /// Creates unknown screen error.
    #[must_use]
    pub fn unknown(name: impl Into<String>, known: impl Into<String>) -> Self {
        Self::UnknownScreen {
            name: name.into(),
            known: known.into(),
        }
    }
}
