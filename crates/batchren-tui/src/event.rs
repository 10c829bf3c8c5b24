//! Key mapping for browsing mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action that can be performed while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    JumpToTop,
    JumpToBottom,

    // Directory navigation
    Open,
    GoToParent,

    // Staging
    /// Stage a rename for the selected entry.
    RenameSingle,
    /// Stage a find/replace + prefix/suffix rename for every entry.
    BulkPattern,
    /// Drop the staged rename of the selected entry.
    Unstage,
    /// Drop every staged rename.
    ClearStaged,
    /// Apply staged renames to disk.
    ApplyRenames,

    Filter,

    Cancel,
    Quit,

    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            (KeyCode::Esc, _) => KeyAction::Cancel,
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => KeyAction::Cancel,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,

            (KeyCode::Enter, _) => KeyAction::Open,
            (KeyCode::Backspace, _) => KeyAction::GoToParent,
            (KeyCode::Char('-'), KeyModifiers::NONE) => KeyAction::GoToParent,

            (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::RenameSingle,
            (KeyCode::Char('b'), KeyModifiers::NONE) => KeyAction::BulkPattern,
            (KeyCode::Char('u'), KeyModifiers::NONE) => KeyAction::Unstage,
            (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::ClearStaged,
            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::ApplyRenames,
            (KeyCode::Char('f'), KeyModifiers::NONE) => KeyAction::Filter,

            _ => KeyAction::None,
        }
    }
}

/// Key hints shown in the footer while browsing.
pub const FOOTER_HINTS: &str = "↑/↓ Move  Enter Open  Bksp Up  n Rename  b Bulk  u Unstage  \
                                c Clear  r Apply  f Filter  Esc Cancel  q Quit";

/// Key hints shown in the footer while choosing the filter kind.
pub const CHOOSER_HINTS: &str = "←/→ Choose  Enter Confirm  Esc Cancel";
