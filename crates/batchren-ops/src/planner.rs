//! Rename planning.
//!
//! Computes new names for single entries or whole views and stages them in
//! the ledger. Nothing here touches the filesystem.

use batchren_core::{View, split_extension};
use tracing::debug;

use crate::{EditLedger, PlanError};

/// Outcome of staging a single rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleOutcome {
    /// The rename was staged.
    Staged { from: String, to: String },
    /// The resulting name equals the original; nothing was staged.
    Unchanged,
}

/// Find/replace plus prefix/suffix rewrite applied to base names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    /// Text to look for in the base name. Empty disables replacement.
    pub find: String,
    /// Replacement for every occurrence of `find`.
    pub replace: String,
    /// Prepended to the base name.
    pub prefix: String,
    /// Appended to the base name, before the extension.
    pub suffix: String,
}

impl Pattern {
    /// Create a pattern from its four parts.
    pub fn new(
        find: impl Into<String>,
        replace: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

/// Rewrite one name with a pattern, keeping its extension.
pub fn apply_pattern(name: &str, pattern: &Pattern) -> String {
    let (base, ext) = split_extension(name);
    let base = if pattern.find.is_empty() {
        base.to_string()
    } else {
        base.replace(&pattern.find, &pattern.replace)
    };

    format!("{}{}{}{}", pattern.prefix, base, pattern.suffix, ext)
}

/// Stage a rename for one row.
///
/// When `replacement` has no extension of its own, the original extension is
/// appended, so typing only a new base name keeps the suffix. A blank
/// (empty or whitespace-only) replacement or one that resolves to the original name stages nothing.
pub fn stage_single(
    view: &View,
    ledger: &mut EditLedger,
    row: usize,
    replacement: &str,
) -> Result<SingleOutcome, PlanError> {
    ensure_bound(view, ledger)?;

    let entry = view.get(row).ok_or(PlanError::RowOutOfRange {
        row,
        len: view.len(),
    })?;
    if entry.is_parent() {
        return Err(PlanError::ParentEntry);
    }

    if replacement.trim().is_empty() {
        return Ok(SingleOutcome::Unchanged);
    }

    let (_, original_ext) = entry.split_name();
    let new_name = if split_extension(replacement).1.is_empty() {
        format!("{replacement}{original_ext}")
    } else {
        replacement.to_string()
    };

    if new_name == entry.name {
        return Ok(SingleOutcome::Unchanged);
    }

    debug!(row, from = %entry.name, to = %new_name, "staged rename");
    ledger.stage(row, new_name.clone());

    Ok(SingleOutcome::Staged {
        from: entry.name.clone(),
        to: new_name,
    })
}

/// Stage a pattern rename for every entry in the view.
///
/// The `..` entry is skipped. Rows whose rewritten name equals the original
/// are left alone. Returns the number of rows staged by this call.
pub fn stage_pattern(
    view: &View,
    ledger: &mut EditLedger,
    pattern: &Pattern,
) -> Result<usize, PlanError> {
    ensure_bound(view, ledger)?;

    let mut count = 0;
    for (row, entry) in view.iter().filter(|(_, e)| !e.is_parent()) {
        let new_name = apply_pattern(&entry.name, pattern);
        if new_name != entry.name {
            ledger.stage(row, new_name);
            count += 1;
        }
    }

    debug!(count, ?pattern, "staged pattern rename");
    Ok(count)
}

fn ensure_bound(view: &View, ledger: &EditLedger) -> Result<(), PlanError> {
    if ledger.is_bound_to(view) {
        Ok(())
    } else {
        Err(PlanError::stale(ledger.generation(), view.generation()))
    }
}
