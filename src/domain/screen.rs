//! Screen identifiers and descriptors.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ScreenError;

/// Every screen the application knows how to render.
///
/// Screens are a closed set: a descriptor can only name a variant of this enum, so an
/// unknown screen is rejected when a name is parsed rather than when it is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ScreenId {
    /// Button pair plus the numbered row list.
    #[default]
    Main,
}

impl ScreenId {
    /// All known screens.
    pub const ALL: [Self; 1] = [Self::Main];

    /// Returns the screen name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "Main",
        }
    }

    fn known_names() -> String {
        Self::ALL
            .iter()
            .map(|id| id.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenId {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ScreenError::unknown(name, Self::known_names()))
    }
}

impl TryFrom<String> for ScreenId {
    type Error = ScreenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Immutable reference to a screen plus optional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenDescriptor {
    id: ScreenId,
    params: BTreeMap<String, String>,
}

impl ScreenDescriptor {
    /// Creates a descriptor without parameters.
    #[must_use]
    pub const fn new(id: ScreenId) -> Self {
        Self {
            id,
            params: BTreeMap::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns screen identifier.
    #[must_use]
    pub const fn id(&self) -> ScreenId {
        self.id
    }

    /// Returns all parameters.
    #[must_use]
    pub const fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Returns a single parameter.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl From<ScreenId> for ScreenDescriptor {
    fn from(id: ScreenId) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ScreenDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id.name())?;
        if !self.params.is_empty() {
            let params = self
                .params
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "({params})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Main" ; "exact")]
    #[test_case("main" ; "lowercase")]
    #[test_case("  MAIN " ; "padded_uppercase")]
    fn test_parse_known_screen(input: &str) {
        assert_eq!(input.parse::<ScreenId>(), Ok(ScreenId::Main));
    }

    #[test]
    fn test_parse_unknown_screen() {
        let err = "Settings".parse::<ScreenId>().unwrap_err();
        assert_eq!(err, ScreenError::unknown("Settings", "Main"));
        assert_eq!(
            err.to_string(),
            "unknown screen 'Settings' (known screens: Main)"
        );
    }

    #[test]
    fn test_descriptor_params() {
        let descriptor = ScreenDescriptor::new(ScreenId::Main).with_param("origin", "3");

        assert_eq!(descriptor.id(), ScreenId::Main);
        assert_eq!(descriptor.param("origin"), Some("3"));
        assert_eq!(descriptor.param("missing"), None);
        assert_eq!(descriptor.to_string(), "Main(origin=3)");
    }

    #[test]
    fn test_descriptor_display_without_params() {
        assert_eq!(ScreenDescriptor::from(ScreenId::Main).to_string(), "Main");
    }
}
