//! Drawing the render model with ratatui.

use batchren_scan::FilterKind;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::app::render::{RenderModel, RowStyle};
use crate::theme::Theme;

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub top_rule: Rect,
    pub list: Rect,
    pub bottom_rule: Rect,
    pub footer: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let [header, top_rule, list, bottom_rule, footer, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            top_rule,
            list,
            bottom_rule,
            footer,
            status,
        }
    }

    /// Where the terminal cursor goes while a prompt is open.
    pub fn cursor_position(&self, model: &RenderModel) -> Option<Position> {
        let prompt = model.prompt.as_ref()?;
        let column = prompt.label.width() + prompt.before_cursor.width();
        let max = self.footer.width.saturating_sub(1) as usize;
        Some(Position::new(
            self.footer.x + column.min(max) as u16,
            self.footer.y,
        ))
    }
}

/// Full-screen widget for one frame.
pub struct Screen<'a> {
    model: &'a RenderModel,
    theme: &'a Theme,
}

impl<'a> Screen<'a> {
    pub fn new(model: &'a RenderModel, theme: &'a Theme) -> Self {
        Self { model, theme }
    }

    fn row_style(&self, style: RowStyle) -> Style {
        match style {
            RowStyle::Selected => self.theme.selected,
            RowStyle::Staged => self.theme.staged,
            RowStyle::Directory => self.theme.directory,
            RowStyle::File => self.theme.file,
        }
    }

    fn render_rule(&self, area: Rect, buf: &mut Buffer) {
        Line::styled("─".repeat(area.width as usize), self.theme.rule).render(area, buf);
    }

    fn render_chooser(&self, options: &[(FilterKind, bool)], area: Rect, buf: &mut Buffer) {
        let cells = Layout::horizontal(
            options
                .iter()
                .map(|_| Constraint::Ratio(1, options.len() as u32)),
        )
        .split(area);

        for ((kind, active), cell) in options.iter().zip(cells.iter()) {
            let style = if *active {
                self.theme.selected
            } else {
                self.theme.prompt
            };
            buf.set_style(*cell, style);
            Line::styled(kind.to_string(), style)
                .centered()
                .render(*cell, buf);
        }
    }
}

impl Widget for Screen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base_style = Style::default()
            .bg(self.theme.background)
            .fg(self.theme.foreground);
        buf.set_style(area, base_style);

        let layout = AppLayout::new(area);

        Line::styled(self.model.header.as_str(), self.theme.header).render(layout.header, buf);
        self.render_rule(layout.top_rule, buf);

        for (i, row) in self.model.rows.iter().enumerate() {
            if i as u16 >= layout.list.height {
                break;
            }
            let rect = Rect {
                y: layout.list.y + i as u16,
                height: 1,
                ..layout.list
            };
            let style = self.row_style(row.style);
            if row.style == RowStyle::Selected {
                buf.set_style(rect, style);
            }
            Line::styled(row.text.as_str(), style).render(rect, buf);
        }

        match &self.model.chooser {
            Some(options) => self.render_chooser(options, layout.bottom_rule, buf),
            None => self.render_rule(layout.bottom_rule, buf),
        }

        match &self.model.prompt {
            Some(prompt) => Line::from(vec![
                Span::styled(prompt.label.as_str(), self.theme.prompt),
                Span::styled(prompt.buffer.as_str(), self.theme.prompt),
            ])
            .render(layout.footer, buf),
            None => Line::styled(self.model.footer, self.theme.footer).render(layout.footer, buf),
        }

        if let Some(status) = &self.model.status {
            Line::styled(status.text.as_str(), self.theme.status(status.tone))
                .render(layout.status, buf);
        }
    }
}
