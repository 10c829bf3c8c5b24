//! Terminal user interface for batchren.
//!
//! Browse one directory at a time, stage renames and apply them in bulk.
//!
//! # Usage
//!
//! ```rust,no_run
//! use batchren_tui::TuiConfig;
//!
//! let config = TuiConfig::new(std::env::current_dir().unwrap());
//! batchren_tui::run_with_config(config).unwrap();
//! ```
//!
//! # Keyboard
//!
//! - `j`/`k`, `↑`/`↓` - Move
//! - `Enter` - Open directory
//! - `Backspace` - Parent directory
//! - `n` - Rename selected entry
//! - `b` - Bulk find/replace with prefix/suffix
//! - `u`/`c` - Unstage selected / discard all staged renames
//! - `r` - Apply staged renames
//! - `f` - Filter by text, extension and kind
//! - `q` - Quit

pub mod app;
mod event;
mod theme;
mod ui;

use std::path::PathBuf;

use batchren_scan::FilterSpec;

pub use app::{App, AppResult};
pub use event::KeyAction;
pub use theme::{Theme, ThemeVariant};

/// Startup settings for the TUI.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Directory listed first.
    pub start_dir: PathBuf,
    /// Filter active at startup.
    pub filter: FilterSpec,
    /// Color theme.
    pub theme: ThemeVariant,
}

impl TuiConfig {
    /// Start in `start_dir` with no filter and the dark theme.
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            filter: FilterSpec::default(),
            theme: ThemeVariant::default(),
        }
    }

    /// Set the initial filter.
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = theme;
        self
    }
}

/// Run the TUI in a directory with default settings.
pub fn run(path: PathBuf) -> AppResult<()> {
    run_with_config(TuiConfig::new(path))
}

/// Run the TUI with custom settings.
///
/// The starting directory is listed before the terminal is taken over, so an
/// unreadable directory fails without disturbing the screen.
pub fn run_with_config(config: TuiConfig) -> AppResult<()> {
    let app = App::with_config(config)?;

    let terminal = ratatui::try_init()?;
    let result = app.run(terminal);
    ratatui::restore();

    result
}
