//! Core types for batchren.
//!
//! This crate provides the data model shared by the listing, planning and
//! terminal crates: directory entries, filtered views, filter settings and
//! the listing error type.

mod entry;
mod error;
mod filter;
mod view;

pub use entry::{Entry, PARENT_NAME, split_extension};
pub use error::ListError;
pub use filter::{FilterKind, FilterSpec};
pub use view::{Generation, View};
