//! Staged rename ledger.

use std::collections::BTreeMap;

use batchren_core::{Generation, View};

/// Pending renames keyed by row in one view.
///
/// The ledger remembers the generation of the view it was staged against.
/// Rebinding to another view discards everything, since row indices do not
/// carry over between listings.
#[derive(Debug, Clone, Default)]
pub struct EditLedger {
    generation: Generation,
    edits: BTreeMap<usize, String>,
}

impl EditLedger {
    /// Create an empty ledger bound to a view.
    pub fn for_view(view: &View) -> Self {
        Self {
            generation: view.generation(),
            edits: BTreeMap::new(),
        }
    }

    /// Generation of the view this ledger is bound to.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Check whether the ledger belongs to a view.
    pub fn is_bound_to(&self, view: &View) -> bool {
        self.generation == view.generation()
    }

    /// Discard all edits and bind to a new view.
    pub fn rebind(&mut self, view: &View) {
        self.edits.clear();
        self.generation = view.generation();
    }

    /// Insert or overwrite the staged name for a row.
    pub fn stage(&mut self, row: usize, new_name: impl Into<String>) {
        self.edits.insert(row, new_name.into());
    }

    /// Drop the staged name for a row, returning it.
    pub fn unstage(&mut self, row: usize) -> Option<String> {
        self.edits.remove(&row)
    }

    /// Remove every staged edit.
    pub fn clear(&mut self) {
        self.edits.clear();
    }

    /// Staged name for a row.
    pub fn get(&self, row: usize) -> Option<&str> {
        self.edits.get(&row).map(String::as_str)
    }

    /// Check if a row has a staged edit.
    pub fn contains(&self, row: usize) -> bool {
        self.edits.contains_key(&row)
    }

    /// Iterate over `(row, new_name)` pairs.
    ///
    /// Callers must not rely on the order; renames of distinct paths are
    /// independent of each other.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> + Clone {
        self.edits.iter().map(|(row, name)| (*row, name.as_str()))
    }

    /// Number of staged edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Check if nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Move surviving edits onto a freshly listed view.
    ///
    /// Each staged row is resolved to its source name in `old` and re-staged
    /// at the row carrying the same name in `new`. Edits whose source is no
    /// longer visible are dropped. Returns the number of edits carried.
    pub fn carry_over(&mut self, old: &View, new: &View) -> usize {
        let edits = std::mem::take(&mut self.edits);
        self.generation = new.generation();

        for (row, name) in edits {
            let Some(entry) = old.get(row) else {
                continue;
            };
            if let Some(new_row) = new.position_of(&entry.name) {
                self.edits.insert(new_row, name);
            }
        }

        self.edits.len()
    }
}
