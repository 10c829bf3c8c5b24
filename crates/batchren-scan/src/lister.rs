//! Single-level directory listing.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, warn};

use batchren_core::{Entry, FilterSpec, Generation, ListError, View};

/// List a directory into a filtered, ordered view.
///
/// Only immediate children are read. Symlinks are followed to decide between
/// directory and file; anything that is neither (sockets, dangling links) is
/// left out. The `..` entry is prepended whenever `dir` has a parent and is
/// never subject to the filter, so navigation stays possible.
pub fn list_directory(
    dir: impl AsRef<Path>,
    filter: &FilterSpec,
    generation: Generation,
) -> Result<View, ListError> {
    let dir = dir.as_ref();
    let read_dir = fs::read_dir(dir).map_err(|e| ListError::io(dir, e))?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for dent in read_dir {
        let dent = dent.map_err(|e| ListError::io(dir, e))?;
        let name = match dent.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(name = ?raw, dir = %dir.display(), "skipping entry with non-UTF-8 name");
                continue;
            }
        };

        // fs::metadata follows symlinks
        let Ok(meta) = fs::metadata(dent.path()) else {
            debug!(name = %name, "skipping entry without readable metadata");
            continue;
        };

        if meta.is_dir() {
            dirs.push(Entry::dir(name));
        } else if meta.is_file() {
            files.push(Entry::file(name));
        }
    }

    let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
    if has_parent(dir) {
        entries.push(Entry::parent());
    }
    entries.extend(
        sort_entries(dirs)
            .into_iter()
            .chain(sort_entries(files))
            .filter(|e| filter.matches(e)),
    );

    debug!(
        dir = %dir.display(),
        rows = entries.len(),
        generation = generation.0,
        "listed directory"
    );

    Ok(View::new(dir, entries, generation))
}

/// Sort entries case-insensitively by name.
///
/// Names that only differ in case are ordered by their exact bytes so the
/// order is stable across listings.
pub fn sort_entries(entries: Vec<Entry>) -> Vec<Entry> {
    entries
        .into_iter()
        .sorted_by_cached_key(|e| (e.name.to_lowercase(), e.name.clone()))
        .collect()
}

/// Check whether a directory has a parent different from itself.
pub fn has_parent(dir: &Path) -> bool {
    dir.parent()
        .is_some_and(|p| !p.as_os_str().is_empty() && p != dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_entries_case_insensitive() {
        let sorted = sort_entries(vec![
            Entry::file("b.txt"),
            Entry::file("A.txt"),
            Entry::file("a.txt"),
            Entry::file("C.txt"),
        ]);
        let names: Vec<_> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A.txt", "a.txt", "b.txt", "C.txt"]);
    }

    #[test]
    fn test_has_parent() {
        assert!(has_parent(Path::new("/tmp")));
        assert!(has_parent(Path::new("/tmp/x")));
        assert!(!has_parent(Path::new("/")));
    }
}
