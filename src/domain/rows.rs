//! Demo row data shown by the main screen.

use std::ops::Deref;
use std::sync::Arc;

/// Number of rows generated for the demo list.
pub const DEMO_ROW_COUNT: usize = 1000;

/// Numbered rows `0..len`, built once and shared by every screen instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRows(Arc<[usize]>);

impl DemoRows {
    /// Creates the standard `DEMO_ROW_COUNT` rows.
    #[must_use]
    pub fn new() -> Self {
        Self::with_len(DEMO_ROW_COUNT)
    }

    /// Creates `len` rows.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Returns the rows.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Default for DemoRows {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for DemoRows {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rows() {
        let rows = DemoRows::new();

        assert_eq!(rows.len(), DEMO_ROW_COUNT);
        assert_eq!(rows.first(), Some(&0));
        assert_eq!(rows.last(), Some(&999));
    }

    #[test]
    fn test_clones_share_storage() {
        let rows = DemoRows::with_len(3);
        let shared = rows.clone();

        assert!(std::ptr::eq(rows.as_slice(), shared.as_slice()));
        assert_eq!(shared.as_slice(), &[0, 1, 2]);
    }
}
