//! Filtered directory views.

use std::ops::Index;
use std::path::{Path, PathBuf};

use crate::Entry;

/// Identifies one generated view.
///
/// Row indices are only meaningful relative to the view that produced them,
/// so anything keyed by row records the generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Ordered, filtered listing of one directory.
#[derive(Debug, Clone)]
pub struct View {
    directory: PathBuf,
    entries: Vec<Entry>,
    generation: Generation,
}

impl View {
    /// Create a view from already ordered entries.
    pub fn new(directory: impl Into<PathBuf>, entries: Vec<Entry>, generation: Generation) -> Self {
        Self {
            directory: directory.into(),
            entries,
            generation,
        }
    }

    /// Directory this view was listed from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Generation of this view.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// All entries, in display order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry at a row, if any.
    pub fn get(&self, row: usize) -> Option<&Entry> {
        self.entries.get(row)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the view has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row of the synthetic `..` entry, if present.
    pub fn parent_row(&self) -> Option<usize> {
        self.entries.iter().position(Entry::is_parent)
    }

    /// Row of a non-synthetic entry with the given name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| !e.is_parent() && e.name == name)
    }

    /// Iterate over rows and entries.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().enumerate()
    }
}

impl Index<usize> for View {
    type Output = Entry;

    fn index(&self, row: usize) -> &Entry {
        &self.entries[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> View {
        View::new(
            "/tmp/x",
            vec![Entry::parent(), Entry::dir("notes"), Entry::file("a.txt")],
            Generation(3),
        )
    }

    #[test]
    fn test_view_lookup() {
        let view = sample();
        assert_eq!(view.len(), 3);
        assert_eq!(view.parent_row(), Some(0));
        assert_eq!(view.position_of("a.txt"), Some(2));
        assert_eq!(view.position_of(".."), None);
        assert_eq!(view[1].name, "notes");
        assert!(view.get(3).is_none());
    }

    #[test]
    fn test_generation_next() {
        assert_eq!(Generation(3).next(), Generation(4));
        assert_eq!(sample().generation(), Generation(3));
    }
}
