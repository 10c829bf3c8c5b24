//! Listing filters.

use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::Entry;

/// Which kinds of entries a view keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, FromRepr)]
#[strum(serialize_all = "lowercase")]
pub enum FilterKind {
    /// Only regular files.
    Files,
    /// Only directories.
    Dirs,
    /// Files and directories.
    #[default]
    Both,
}

impl FilterKind {
    /// Cycle to the next kind, wrapping around.
    pub fn next(self) -> Self {
        let next = (self as usize + 1) % Self::iter().count();
        Self::from_repr(next).unwrap_or_default()
    }

    /// Cycle to the previous kind, wrapping around.
    pub fn prev(self) -> Self {
        let count = Self::iter().count();
        let prev = (self as usize + count - 1) % count;
        Self::from_repr(prev).unwrap_or_default()
    }
}

/// Filter applied when a view is generated.
///
/// Text and extension matching are case-insensitive. Empty strings disable
/// the corresponding check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Substring the name must contain.
    pub text: String,
    /// Suffix a file name must end with (directories are exempt).
    pub extension: String,
    /// Entry kinds to keep.
    pub kind: FilterKind,
}

impl FilterSpec {
    /// Create a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the substring filter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the extension filter.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the kind filter.
    pub fn with_kind(mut self, kind: FilterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check whether an entry passes the filter.
    ///
    /// The synthetic parent entry is not special-cased here; the lister
    /// always keeps it.
    pub fn matches(&self, entry: &Entry) -> bool {
        match (entry.is_dir, self.kind) {
            (true, FilterKind::Files) | (false, FilterKind::Dirs) => return false,
            _ => {}
        }

        let lower = entry.name.to_lowercase();

        if !entry.is_dir
            && !self.extension.is_empty()
            && !lower.ends_with(&self.extension.to_lowercase())
        {
            return false;
        }

        if !self.text.is_empty() && !lower.contains(&self.text.to_lowercase()) {
            return false;
        }

        true
    }

    /// Check whether the filter keeps everything.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.extension.is_empty() && self.kind == FilterKind::Both
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_cycle() {
        assert_eq!(FilterKind::Files.next(), FilterKind::Dirs);
        assert_eq!(FilterKind::Both.next(), FilterKind::Files);
        assert_eq!(FilterKind::Files.prev(), FilterKind::Both);
        assert_eq!(FilterKind::Dirs.prev(), FilterKind::Files);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FilterKind::Files.to_string(), "files");
        assert_eq!(FilterKind::Dirs.to_string(), "dirs");
        assert_eq!(FilterKind::Both.to_string(), "both");
    }

    #[test]
    fn test_kind_filter() {
        let files = FilterSpec::new().with_kind(FilterKind::Files);
        assert!(files.matches(&Entry::file("a.txt")));
        assert!(!files.matches(&Entry::dir("notes")));

        let dirs = FilterSpec::new().with_kind(FilterKind::Dirs);
        assert!(!dirs.matches(&Entry::file("a.txt")));
        assert!(dirs.matches(&Entry::dir("notes")));
    }

    #[test]
    fn test_extension_only_applies_to_files() {
        let filter = FilterSpec::new().with_extension(".TXT");
        assert!(filter.matches(&Entry::file("a.txt")));
        assert!(filter.matches(&Entry::file("B.Txt")));
        assert!(!filter.matches(&Entry::file("a.md")));
        assert!(filter.matches(&Entry::dir("notes")));
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let filter = FilterSpec::new().with_text("Rep");
        assert!(filter.matches(&Entry::file("report.pdf")));
        assert!(filter.matches(&Entry::dir("REPOS")));
        assert!(!filter.matches(&Entry::file("notes.md")));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(FilterSpec::default().is_empty());
        assert!(!FilterSpec::new().with_text("x").is_empty());
    }
}
