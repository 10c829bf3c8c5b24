//! Rename staging and commit engine for batchren.
//!
//! Renames are staged in an [`EditLedger`] keyed by row within the current
//! [`View`](batchren_core::View). The planner fills the ledger without touching
//! the filesystem; [`commit`] then applies it one rename at a time and reports
//! per-item failures, leaving failed entries staged.

mod commit;
mod error;
mod ledger;
mod planner;
mod validate;

pub use commit::{CommitReport, commit};
pub use error::{PlanError, RenameError};
pub use ledger::EditLedger;
pub use planner::{Pattern, SingleOutcome, apply_pattern, stage_pattern, stage_single};
pub use validate::validate_filename;
