//! Directory listing for batchren.
//!
//! Lists the immediate children of one directory, orders them directories
//! first and case-insensitively by name, applies a [`FilterSpec`] and
//! prepends the synthetic `..` entry whenever a parent exists.
//!
//! # Example
//!
//! ```rust,no_run
//! use batchren_scan::{FilterSpec, Generation, list_directory};
//!
//! let view = list_directory("/tmp", &FilterSpec::new(), Generation::default()).unwrap();
//! for (row, entry) in view.iter() {
//!     println!("{row}: {}", entry.name);
//! }
//! ```

mod lister;

pub use lister::{has_parent, list_directory, sort_entries};

// Re-export core types for convenience
pub use batchren_core::{Entry, FilterKind, FilterSpec, Generation, ListError, View};
