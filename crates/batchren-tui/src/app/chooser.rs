//! Filter kind chooser.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::IntoEnumIterator;

use batchren_scan::{FilterKind, FilterSpec};

/// Result of a key in the chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooserResult {
    Continue,
    Cancel,
    /// The full filter to install.
    Confirm(FilterSpec),
}

/// Last step of the filter flow: pick files, dirs or both.
///
/// Carries the text and extension answered in the preceding prompts so
/// nothing is applied until the kind is confirmed.
#[derive(Debug, Clone)]
pub struct KindChooser {
    text: String,
    extension: String,
    current: FilterKind,
}

impl KindChooser {
    pub fn new(text: String, extension: String, current: FilterKind) -> Self {
        Self {
            text,
            extension,
            current,
        }
    }

    pub fn current(&self) -> FilterKind {
        self.current
    }

    /// All options with a flag marking the highlighted one.
    pub fn options(&self) -> Vec<(FilterKind, bool)> {
        FilterKind::iter().map(|k| (k, k == self.current)).collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ChooserResult {
        match (key.code, key.modifiers) {
            (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                self.current = self.current.prev();
                ChooserResult::Continue
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                self.current = self.current.next();
                ChooserResult::Continue
            }
            (KeyCode::Enter, _) => ChooserResult::Confirm(
                FilterSpec::new()
                    .with_text(self.text.clone())
                    .with_extension(self.extension.clone())
                    .with_kind(self.current),
            ),
            (KeyCode::Esc, _)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => ChooserResult::Cancel,
            _ => ChooserResult::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cycle_and_confirm() {
        let mut chooser = KindChooser::new("rep".into(), ".txt".into(), FilterKind::Both);

        chooser.handle_key(key(KeyCode::Right));
        assert_eq!(chooser.current(), FilterKind::Files);
        chooser.handle_key(key(KeyCode::Char('l')));
        assert_eq!(chooser.current(), FilterKind::Dirs);
        chooser.handle_key(key(KeyCode::Char('h')));
        chooser.handle_key(key(KeyCode::Left));
        assert_eq!(chooser.current(), FilterKind::Both);
        chooser.handle_key(key(KeyCode::Left));

        let expected = FilterSpec::new()
            .with_text("rep")
            .with_extension(".txt")
            .with_kind(FilterKind::Dirs);
        assert_eq!(
            chooser.handle_key(key(KeyCode::Enter)),
            ChooserResult::Confirm(expected)
        );
    }

    #[test]
    fn test_options_mark_current() {
        let chooser = KindChooser::new(String::new(), String::new(), FilterKind::Dirs);
        assert_eq!(
            chooser.options(),
            vec![
                (FilterKind::Files, false),
                (FilterKind::Dirs, true),
                (FilterKind::Both, false)
            ]
        );
    }

    #[test]
    fn test_cancel() {
        let mut chooser = KindChooser::new(String::new(), String::new(), FilterKind::Both);
        assert_eq!(chooser.handle_key(key(KeyCode::Esc)), ChooserResult::Cancel);
    }
}
