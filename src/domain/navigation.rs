//! Navigation stack.
//!
//! The stack always holds at least its root entry. `push` appends, `pop` removes the top
//! entry unless only the root remains, in which case it does nothing.

use super::screen::ScreenDescriptor;

/// Non-empty ordered history of entries; the last one is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack<T> {
    root: T,
    above: Vec<T>,
}

impl<T> NavigationStack<T> {
    /// Creates a stack holding only `root`.
    #[must_use]
    pub const fn new(root: T) -> Self {
        Self {
            root,
            above: Vec::new(),
        }
    }

    /// Appends an entry, making it the current one.
    pub fn push(&mut self, entry: T) {
        self.above.push(entry);
    }

    /// Removes and returns the top entry, or `None` when only the root is left.
    pub fn pop(&mut self) -> Option<T> {
        self.above.pop()
    }

    /// Returns the visible entry.
    #[must_use]
    pub fn current(&self) -> &T {
        self.above.last().unwrap_or(&self.root)
    }

    /// Returns the visible entry mutably.
    pub fn current_mut(&mut self) -> &mut T {
        self.above.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of entries, never zero.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }

    /// Whether only the root entry is left.
    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.above.is_empty()
    }

    /// Iterates from the root to the current entry.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        std::iter::once(&self.root).chain(self.above.iter())
    }

    /// Copies the entries, root first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// A change applied to the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A screen was pushed and is now visible.
    Pushed {
        /// Screen that was pushed.
        descriptor: ScreenDescriptor,
        /// Stack depth after the push.
        depth: usize,
    },
    /// The top screen was removed.
    Popped {
        /// Screen that was removed.
        descriptor: ScreenDescriptor,
        /// Stack depth after the pop.
        depth: usize,
    },
}
