//! Render model: what to show where, independent of the terminal.

use batchren_scan::FilterKind;

use super::state::StatusMessage;

/// How a listing row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Selected,
    Staged,
    Directory,
    File,
}

/// One visible row of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    /// Row index in the view.
    pub row: usize,
    pub text: String,
    pub style: RowStyle,
}

/// Text prompt shown on the footer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptLine {
    pub label: String,
    pub buffer: String,
    /// Buffer contents before the cursor, for cursor placement.
    pub before_cursor: String,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub header: String,
    pub rows: Vec<RowModel>,
    pub prompt: Option<PromptLine>,
    /// Filter kind options with the highlighted one flagged.
    pub chooser: Option<Vec<(FilterKind, bool)>>,
    pub footer: &'static str,
    pub status: Option<StatusMessage>,
}

/// Format one listing row.
///
/// Staged rows show the pending change as `old → new`.
pub fn row_text(name: &str, is_dir: bool, staged: Option<&str>, selected: bool) -> String {
    let marker = if selected { '>' } else { ' ' };
    let tag = if is_dir { "[DIR]" } else { "[FILE]" };
    match staged {
        Some(new_name) => format!("{marker} {tag} {name} → {new_name}"),
        None => format!("{marker} {tag} {name}"),
    }
}
