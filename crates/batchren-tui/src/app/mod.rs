//! Main application state and logic.

pub mod chooser;
mod constants;
pub mod input;
mod navigation;
pub mod prompt;
pub mod render;
pub mod state;

use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::debug;

use batchren_ops::{EditLedger, Pattern, SingleOutcome, commit, stage_pattern, stage_single};
use batchren_scan::{FilterSpec, Generation, ListError, View, list_directory};

use crate::event::{CHOOSER_HINTS, FOOTER_HINTS, KeyAction};
use crate::theme::Theme;
use crate::ui::{AppLayout, Screen};
use crate::TuiConfig;

use self::chooser::{ChooserResult, KindChooser};
use self::constants::DEFAULT_LIST_HEIGHT;
use self::navigation::{ListNavigator, ScrollNav};
use self::prompt::{FlowKind, FlowProgress, PromptFlow};
use self::render::{PromptLine, RenderModel, RowModel, RowStyle, row_text};
use self::state::{AppMode, StatusMessage};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
///
/// Owns the whole session: working directory, current view, staged edits,
/// selection and filter. Nothing outlives the interactive run.
pub struct App {
    /// Directory being listed.
    working_dir: PathBuf,
    /// Current filtered listing.
    view: View,
    /// Renames staged against `view`.
    ledger: EditLedger,
    /// Selection and scroll window.
    nav: ScrollNav,
    /// Active filter.
    filter: FilterSpec,
    /// Last status message.
    status: Option<StatusMessage>,
    /// Current mode.
    mode: AppMode,
    /// Color theme.
    theme: Theme,
    /// Generation handed to the next listing.
    next_generation: Generation,
}

impl App {
    /// Create the application and list the starting directory.
    pub fn with_config(config: TuiConfig) -> Result<Self, ListError> {
        let working_dir = config
            .start_dir
            .canonicalize()
            .map_err(|e| ListError::io(&config.start_dir, e))?;
        let generation = Generation::default();
        let view = list_directory(&working_dir, &config.filter, generation)?;

        Ok(Self {
            ledger: EditLedger::for_view(&view),
            nav: ScrollNav::new(view.len(), DEFAULT_LIST_HEIGHT),
            working_dir,
            view,
            filter: config.filter,
            status: None,
            mode: AppMode::default(),
            theme: Theme::for_variant(config.theme),
            next_generation: generation.next(),
        })
    }

    /// Run the event loop until the user quits.
    ///
    /// Blocks on one terminal event at a time; every event is fully handled
    /// before the next frame is drawn.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        while !self.mode.is_exiting() {
            terminal.draw(|frame| self.render(frame))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Draw one frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::new(area);
        self.nav.set_height(layout.list.height as usize);

        let model = self.render_model();
        frame.render_widget(Screen::new(&model, &self.theme), area);

        if let Some(position) = layout.cursor_position(&model) {
            frame.set_cursor_position(position);
        }
    }

    /// Build the render model for the visible window.
    pub fn render_model(&self) -> RenderModel {
        let selected = self.nav.selected();
        let rows = self
            .nav
            .visible_range()
            .filter_map(|row| {
                let entry = self.view.get(row)?;
                let staged = self.ledger.get(row);
                let style = if row == selected {
                    RowStyle::Selected
                } else if staged.is_some() {
                    RowStyle::Staged
                } else if entry.is_dir {
                    RowStyle::Directory
                } else {
                    RowStyle::File
                };
                Some(RowModel {
                    row,
                    text: row_text(&entry.name, entry.is_dir, staged, row == selected),
                    style,
                })
            })
            .collect();

        let prompt = match &self.mode {
            AppMode::Prompting(flow) => Some(PromptLine {
                label: flow.label(),
                buffer: flow.input().buffer().to_string(),
                before_cursor: flow.input().before_cursor().to_string(),
            }),
            _ => None,
        };

        let (chooser, footer) = match &self.mode {
            AppMode::ChoosingFilterKind(chooser) => (Some(chooser.options()), CHOOSER_HINTS),
            _ => (None, FOOTER_HINTS),
        };

        RenderModel {
            header: self.header(),
            rows,
            prompt,
            chooser,
            footer,
            status: self.status.clone(),
        }
    }

    fn header(&self) -> String {
        let mut header = format!(
            " Dir: {} | Filter: '{}' Ext: '{}' Type: {} ",
            self.working_dir.display(),
            self.filter.text,
            self.filter.extension,
            self.filter.kind
        );
        if !self.ledger.is_empty() {
            header.push_str(&format!("| Staged: {} ", self.ledger.len()));
        }
        header
    }

    /// Handle one key press in the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match std::mem::take(&mut self.mode) {
            AppMode::Browsing => self.handle_action(KeyAction::from_key_event(key)),
            AppMode::Prompting(mut flow) => match flow.handle_key(key) {
                FlowProgress::Continue => self.mode = AppMode::Prompting(flow),
                FlowProgress::Canceled => {
                    self.set_info(flow.kind().canceled_message());
                }
                FlowProgress::Completed(answers) => {
                    self.finish_flow(flow.kind().clone(), answers);
                }
            },
            AppMode::ChoosingFilterKind(mut chooser) => match chooser.handle_key(key) {
                ChooserResult::Continue => self.mode = AppMode::ChoosingFilterKind(chooser),
                ChooserResult::Cancel => self.set_info("Filter canceled"),
                ChooserResult::Confirm(filter) => self.apply_filter(filter),
            },
            AppMode::Exiting => self.mode = AppMode::Exiting,
        }
    }

    /// Handle a browsing action.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveUp => self.nav.move_up(1),
            KeyAction::MoveDown => self.nav.move_down(1),
            KeyAction::PageUp => self.nav.page_up(),
            KeyAction::PageDown => self.nav.page_down(),
            KeyAction::JumpToTop => self.nav.jump_to_top(),
            KeyAction::JumpToBottom => self.nav.jump_to_bottom(),
            KeyAction::Open => self.open_row(self.nav.selected()),
            KeyAction::GoToParent => self.go_to_parent(),
            KeyAction::RenameSingle => self.start_rename(),
            KeyAction::BulkPattern => self.mode = AppMode::Prompting(PromptFlow::bulk_pattern()),
            KeyAction::Unstage => self.unstage_selected(),
            KeyAction::ClearStaged => self.clear_staged(),
            KeyAction::ApplyRenames => self.apply_renames(),
            KeyAction::Filter => self.mode = AppMode::Prompting(PromptFlow::filter()),
            KeyAction::Cancel => self.set_info("Operation canceled"),
            KeyAction::Quit => self.mode = AppMode::Exiting,
            KeyAction::None => {}
        }
    }

    fn finish_flow(&mut self, kind: FlowKind, answers: Vec<String>) {
        match kind {
            FlowKind::Rename { row, .. } => {
                let replacement = answers.first().map(String::as_str).unwrap_or_default();
                self.stage_rename(row, replacement);
            }
            FlowKind::BulkPattern => {
                let mut parts = answers.into_iter();
                let mut next = || parts.next().unwrap_or_default();
                let pattern = Pattern::new(next(), next(), next(), next());
                self.stage_bulk(&pattern);
            }
            FlowKind::Filter => {
                let mut parts = answers.into_iter();
                let text = parts.next().unwrap_or_default();
                let extension = parts.next().unwrap_or_default();
                self.set_info("Select filter type:");
                self.mode = AppMode::ChoosingFilterKind(KindChooser::new(
                    text,
                    extension,
                    self.filter.kind,
                ));
            }
        }
    }

    fn list(&mut self, dir: &Path, filter: &FilterSpec) -> Result<View, ListError> {
        let generation = self.next_generation;
        self.next_generation = generation.next();
        list_directory(dir, filter, generation)
    }

    /// Swap in a new view after navigation or a filter change.
    ///
    /// Staged edits are row-keyed, so they are all dropped.
    fn install_view(&mut self, view: View) {
        self.ledger.rebind(&view);
        self.nav.reset(view.len());
        self.view = view;
    }

    fn open_row(&mut self, row: usize) {
        let Some(entry) = self.view.get(row) else {
            return;
        };
        if !entry.is_dir {
            return;
        }

        let target = if entry.is_parent() {
            match self.working_dir.parent() {
                Some(parent) => parent.to_path_buf(),
                None => return,
            }
        } else {
            self.working_dir.join(&entry.name)
        };

        let filter = self.filter.clone();
        match self.list(&target, &filter) {
            Ok(view) => {
                debug!(dir = %target.display(), "changed directory");
                self.working_dir = target;
                self.install_view(view);
                self.set_info(format!(
                    "Changed directory to {}",
                    self.working_dir.display()
                ));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn go_to_parent(&mut self) {
        match self.view.parent_row() {
            Some(row) => self.open_row(row),
            None => self.set_info("Already at the filesystem root"),
        }
    }

    fn start_rename(&mut self) {
        let row = self.nav.selected();
        let Some(entry) = self.view.get(row) else {
            self.set_info("Nothing selected");
            return;
        };
        if entry.is_parent() {
            self.set_error("The parent entry cannot be renamed");
            return;
        }

        let (base, _) = entry.split_name();
        self.mode = AppMode::Prompting(PromptFlow::rename(row, entry.name.clone(), base));
    }

    fn stage_rename(&mut self, row: usize, replacement: &str) {
        match stage_single(&self.view, &mut self.ledger, row, replacement) {
            Ok(SingleOutcome::Staged { from, to }) => {
                self.set_success(format!("Scheduled rename: {from} -> {to}"));
            }
            Ok(SingleOutcome::Unchanged) => self.set_info("Rename unchanged"),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn stage_bulk(&mut self, pattern: &Pattern) {
        match stage_pattern(&self.view, &mut self.ledger, pattern) {
            Ok(0) => self.set_info("Bulk scheduled 0 renames"),
            Ok(count) => self.set_success(format!("Bulk scheduled {count} renames")),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn unstage_selected(&mut self) {
        let row = self.nav.selected();
        match self.ledger.unstage(row) {
            Some(name) => self.set_info(format!("Unstaged rename to {name}")),
            None => self.set_info("No staged rename on this row"),
        }
    }

    fn clear_staged(&mut self) {
        let count = self.ledger.len();
        self.ledger.clear();
        self.set_info(format!("Discarded {count} staged renames"));
    }

    fn apply_renames(&mut self) {
        if self.ledger.is_empty() {
            self.set_info("Nothing to rename");
            return;
        }

        let dir = self.working_dir.clone();
        let report = match commit(&self.view, &mut self.ledger, &dir) {
            Ok(report) => report,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };

        // The directory changed; list it again and keep failed edits by name.
        let filter = self.filter.clone();
        match self.list(&dir, &filter) {
            Ok(view) => {
                self.ledger.carry_over(&self.view, &view);
                self.nav.set_count(view.len());
                self.view = view;
            }
            Err(e) => {
                self.set_error(format!("{} ({e})", report.summary()));
                return;
            }
        }

        if report.is_clean() {
            self.set_success(report.summary());
        } else {
            self.set_error(report.summary());
        }
    }

    fn apply_filter(&mut self, filter: FilterSpec) {
        let dir = self.working_dir.clone();
        match self.list(&dir, &filter) {
            Ok(view) => {
                self.set_info(format!(
                    "Filter set: text='{}', ext='{}', type={}",
                    filter.text, filter.extension, filter.kind
                ));
                self.filter = filter;
                self.install_view(view);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }

    fn set_success(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::success(text));
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text));
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn ledger(&self) -> &EditLedger {
        &self.ledger
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn selected(&self) -> usize {
        self.nav.selected()
    }

    pub fn scroll_offset(&self) -> usize {
        self.nav.offset()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.mode.is_exiting()
    }
}
