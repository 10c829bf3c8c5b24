//! Application constants.

/// Number of rows to move when pressing Page Up/Down.
pub const PAGE_SIZE: usize = 10;

/// List height assumed before the first frame is drawn.
pub const DEFAULT_LIST_HEIGHT: usize = 20;
