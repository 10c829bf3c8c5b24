//! Directory entries.

/// Name of the synthetic entry that points at the parent directory.
pub const PARENT_NAME: &str = "..";

/// One child of the listed directory, or the synthetic parent reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// File name (a single path component).
    pub name: String,
    /// Whether the entry is a directory (symlinks are followed).
    pub is_dir: bool,
}

impl Entry {
    /// Create a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Create a directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Create the synthetic `..` entry.
    pub fn parent() -> Self {
        Self::dir(PARENT_NAME)
    }

    /// Check if this is the synthetic parent reference.
    pub fn is_parent(&self) -> bool {
        self.is_dir && self.name == PARENT_NAME
    }

    /// Split the name into base and extension.
    pub fn split_name(&self) -> (&str, &str) {
        split_extension(&self.name)
    }
}

/// Split a file name into `(base, extension)`.
///
/// The extension runs from the last `.` to the end of the name and keeps the
/// dot. Leading dots never start an extension, so `.bashrc` and `..x` have
/// none, while `archive.tar.gz` splits into `archive.tar` and `.gz`.
pub fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };

    if name[..dot].bytes().all(|b| b == b'.') {
        return (name, "");
    }

    name.split_at(dot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("a.txt"), ("a", ".txt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension("name."), ("name", "."));
    }

    #[test]
    fn test_split_extension_leading_dots() {
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("..hidden"), ("..hidden", ""));
        assert_eq!(split_extension(".config.toml"), (".config", ".toml"));
        assert_eq!(split_extension(".."), ("..", ""));
        assert_eq!(split_extension(""), ("", ""));
    }

    #[test]
    fn test_parent_entry() {
        assert!(Entry::parent().is_parent());
        assert!(!Entry::file("..").is_parent());
        assert!(!Entry::dir("src").is_parent());
    }
}
