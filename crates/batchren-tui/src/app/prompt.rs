//! Multi-step prompt flows.
//!
//! A flow is an ordered list of prompts with the answers collected so far.
//! Cancelling at any step drops the whole flow, so callers only ever see a
//! complete set of answers or nothing.

use std::collections::VecDeque;

use crossterm::event::KeyEvent;

use super::input::{InputResult, InputState};

/// What a completed flow is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowKind {
    /// Rename one row of the current view.
    Rename { row: usize, original: String },
    /// Find/replace plus prefix/suffix over the whole view.
    BulkPattern,
    /// Text and extension filter, followed by the kind chooser.
    Filter,
}

impl FlowKind {
    /// Status message shown when the flow is aborted.
    pub fn canceled_message(&self) -> &'static str {
        match self {
            Self::Rename { .. } => "Rename canceled",
            Self::BulkPattern => "Bulk canceled",
            Self::Filter => "Filter canceled",
        }
    }
}

/// One question in a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    NewName,
    Find,
    Replace,
    Prefix,
    Suffix,
    FilterText,
    FilterExtension,
}

impl PromptStep {
    fn label(self, kind: &FlowKind) -> String {
        match (self, kind) {
            (Self::NewName, FlowKind::Rename { original, .. }) => {
                format!("Rename '{original}' to (omit extension to keep): ")
            }
            (Self::NewName, _) => "New name: ".into(),
            (Self::Find, _) => "Find: ".into(),
            (Self::Replace, _) => "Replace: ".into(),
            (Self::Prefix, _) => "Prefix: ".into(),
            (Self::Suffix, _) => "Suffix: ".into(),
            (Self::FilterText, _) => "Filter text (empty to clear): ".into(),
            (Self::FilterExtension, _) => "Filter ext (e.g. .txt, empty to clear): ".into(),
        }
    }
}

/// Progress of a flow after one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowProgress {
    /// Still collecting input.
    Continue,
    /// Aborted; no answers are returned.
    Canceled,
    /// Every step answered, in order.
    Completed(Vec<String>),
}

/// An in-progress sequence of prompts.
#[derive(Debug, Clone)]
pub struct PromptFlow {
    kind: FlowKind,
    current: PromptStep,
    pending: VecDeque<PromptStep>,
    answers: Vec<String>,
    input: InputState,
}

impl PromptFlow {
    fn new(kind: FlowKind, steps: &[PromptStep], seed: &str) -> Self {
        let mut pending: VecDeque<_> = steps.iter().copied().collect();
        let current = pending.pop_front().unwrap_or(PromptStep::NewName);
        Self {
            kind,
            current,
            pending,
            answers: Vec::with_capacity(steps.len()),
            input: InputState::with_initial(seed),
        }
    }

    /// Single rename, seeded with the entry's base name.
    pub fn rename(row: usize, original: impl Into<String>, base: &str) -> Self {
        Self::new(
            FlowKind::Rename {
                row,
                original: original.into(),
            },
            &[PromptStep::NewName],
            base,
        )
    }

    /// Bulk pattern: find, replace, prefix, suffix.
    pub fn bulk_pattern() -> Self {
        Self::new(
            FlowKind::BulkPattern,
            &[
                PromptStep::Find,
                PromptStep::Replace,
                PromptStep::Prefix,
                PromptStep::Suffix,
            ],
            "",
        )
    }

    /// Filter: text, then extension.
    pub fn filter() -> Self {
        Self::new(
            FlowKind::Filter,
            &[PromptStep::FilterText, PromptStep::FilterExtension],
            "",
        )
    }

    pub fn kind(&self) -> &FlowKind {
        &self.kind
    }

    /// The step currently being asked.
    pub fn step(&self) -> PromptStep {
        self.current
    }

    /// Label for the current prompt.
    pub fn label(&self) -> String {
        self.current.label(&self.kind)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Answers collected so far.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Feed one key to the current prompt.
    pub fn handle_key(&mut self, key: KeyEvent) -> FlowProgress {
        match self.input.handle_key(key) {
            InputResult::Continue => FlowProgress::Continue,
            InputResult::Cancel => FlowProgress::Canceled,
            InputResult::Submit(value) => {
                self.answers.push(value);
                match self.pending.pop_front() {
                    Some(next) => {
                        self.current = next;
                        self.input = InputState::new();
                        FlowProgress::Continue
                    }
                    None => FlowProgress::Completed(std::mem::take(&mut self.answers)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(flow: &mut PromptFlow, s: &str) {
        for c in s.chars() {
            assert_eq!(flow.handle_key(key(KeyCode::Char(c))), FlowProgress::Continue);
        }
    }

    #[test]
    fn test_bulk_flow_collects_all_answers() {
        let mut flow = PromptFlow::bulk_pattern();
        assert_eq!(flow.step(), PromptStep::Find);

        type_str(&mut flow, "a");
        assert_eq!(flow.handle_key(key(KeyCode::Enter)), FlowProgress::Continue);
        assert_eq!(flow.step(), PromptStep::Replace);
        assert_eq!(flow.input().buffer(), "");

        type_str(&mut flow, "_");
        flow.handle_key(key(KeyCode::Enter));
        type_str(&mut flow, "x_");
        flow.handle_key(key(KeyCode::Enter));

        assert_eq!(
            flow.handle_key(key(KeyCode::Enter)),
            FlowProgress::Completed(vec!["a".into(), "_".into(), "x_".into(), String::new()])
        );
    }

    #[test]
    fn test_cancel_midway() {
        let mut flow = PromptFlow::filter();
        type_str(&mut flow, "rep");
        flow.handle_key(key(KeyCode::Enter));
        assert_eq!(flow.answers(), ["rep"]);

        assert_eq!(flow.handle_key(key(KeyCode::Esc)), FlowProgress::Canceled);
    }

    #[test]
    fn test_rename_seeded() {
        let flow = PromptFlow::rename(2, "a.txt", "a");
        assert_eq!(flow.input().buffer(), "a");
        assert!(flow.label().contains("'a.txt'"));
        assert_eq!(flow.kind().canceled_message(), "Rename canceled");
    }
}
