//! Application state types.

use super::chooser::KindChooser;
use super::prompt::PromptFlow;

/// Controller state.
#[derive(Debug, Clone, Default)]
pub enum AppMode {
    /// Moving around the listing.
    #[default]
    Browsing,
    /// Modal text entry, possibly several prompts long.
    Prompting(PromptFlow),
    /// Picking the kind filter at the end of the filter flow.
    ChoosingFilterKind(KindChooser),
    /// The main loop stops.
    Exiting,
}

impl AppMode {
    pub fn is_exiting(&self) -> bool {
        matches!(self, Self::Exiting)
    }
}

/// Color of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

/// One-line message under the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Error,
        }
    }
}
