//! Applying staged renames to the filesystem.

use std::fs;
use std::path::Path;

use batchren_core::View;
use tracing::{info, warn};

use crate::{EditLedger, PlanError, RenameError, validate_filename};

/// Summary of one commit.
#[derive(Debug, Default)]
pub struct CommitReport {
    /// Number of renames performed.
    pub succeeded: usize,
    /// One error per item that was not renamed.
    pub errors: Vec<RenameError>,
}

impl CommitReport {
    /// Number of items that failed.
    pub fn failed(&self) -> usize {
        self.errors.len()
    }

    /// Check if every staged rename went through.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages, one per failed item.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        match self.errors.first() {
            None => format!("Renamed {} items", self.succeeded),
            Some(first) => format!(
                "Renamed {} items, {} errors (first: {first})",
                self.succeeded,
                self.errors.len()
            ),
        }
    }
}

/// Apply every staged rename in `ledger` to entries of `view` inside `dir`.
///
/// Every staged row is resolved against the view first; a row pointing at
/// `..` or past the end fails the whole commit before anything is renamed.
/// Renames then run one at a time. A destination that already exists is reported
/// as a collision and never overwritten. Successful rows are removed from the
/// ledger; failed rows stay staged. The view is stale afterwards and must be
/// listed again by the caller.
pub fn commit(
    view: &View,
    ledger: &mut EditLedger,
    dir: &Path,
) -> Result<CommitReport, PlanError> {
    if !ledger.is_bound_to(view) {
        return Err(PlanError::stale(ledger.generation(), view.generation()));
    }

    // Resolve every row before the first rename so a bad row leaves the disk untouched.
    let staged = ledger
        .entries()
        .map(|(row, name)| match view.get(row) {
            Some(entry) if !entry.is_parent() => Ok((row, entry, name.to_string())),
            Some(_) => Err(PlanError::ParentEntry),
            None => Err(PlanError::RowOutOfRange {
                row,
                len: view.len(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = CommitReport::default();

    for (row, entry, new_name) in staged {
        let source = dir.join(&entry.name);

        if let Err(reason) = validate_filename(&new_name) {
            warn!(from = %entry.name, to = %new_name, %reason, "rejected staged name");
            report.errors.push(RenameError::InvalidName {
                name: new_name,
                reason,
            });
            continue;
        }

        let destination = dir.join(&new_name);

        // symlink_metadata so a dangling link still counts as occupied
        if fs::symlink_metadata(&destination).is_ok() {
            warn!(from = %entry.name, to = %new_name, "destination exists, skipping");
            report.errors.push(RenameError::Collision {
                path: source,
                name: new_name,
            });
            continue;
        }

        match fs::rename(&source, &destination) {
            Ok(()) => {
                report.succeeded += 1;
                ledger.unstage(row);
            }
            Err(error) => {
                warn!(from = %entry.name, to = %new_name, %error, "rename failed");
                report.errors.push(RenameError::Failed {
                    path: source,
                    error,
                });
            }
        }
    }

    info!(
        dir = %dir.display(),
        succeeded = report.succeeded,
        failed = report.failed(),
        "committed staged renames"
    );

    Ok(report)
}
