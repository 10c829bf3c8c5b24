//! Error types for planning and committing renames.

use std::path::PathBuf;

use batchren_core::Generation;
use thiserror::Error;

/// Errors raised when a staging request does not fit the current view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The synthetic `..` entry cannot be renamed.
    #[error("The parent entry cannot be renamed")]
    ParentEntry,

    /// Row index outside the current view.
    #[error("Row {row} is outside the current listing ({len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// Ledger was staged against a different view.
    #[error("Staged edits belong to an outdated listing (generation {ledger}, current {view})")]
    StaleLedger { ledger: u64, view: u64 },
}

impl PlanError {
    pub(crate) fn stale(ledger: Generation, view: Generation) -> Self {
        Self::StaleLedger {
            ledger: ledger.0,
            view: view.0,
        }
    }
}

/// Per-item failure while applying staged renames.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Destination already exists; nothing was renamed.
    #[error("'{name}' already exists")]
    Collision { path: PathBuf, name: String },

    /// Staged name is not a usable file name.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The filesystem rename itself failed.
    #[error("Rename of '{}' failed: {error}", .path.display())]
    Failed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RenameError::Collision {
            path: PathBuf::from("/tmp/a.txt"),
            name: "b.txt".into(),
        };
        assert_eq!(err.to_string(), "'b.txt' already exists");

        let err = PlanError::RowOutOfRange { row: 5, len: 2 };
        assert!(err.to_string().contains("Row 5"));

        let err = PlanError::stale(Generation(1), Generation(2));
        assert_eq!(err, PlanError::StaleLedger { ledger: 1, view: 2 });
    }
}
