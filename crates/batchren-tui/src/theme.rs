//! Color theme for the TUI.
//!
//! Semantic palette: informational, neutral, staged edit, success and error,
//! plus the selected-row and footer styles.

use ratatui::style::{Color, Modifier, Style};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,

    pub selected: Style,

    // Status colors
    pub info: Color,
    pub success: Color,
    pub error: Color,

    // Listing
    pub directory: Style,
    pub file: Style,
    pub staged: Style,

    // Header/Footer
    pub header: Style,
    pub rule: Style,
    pub footer: Style,
    pub prompt: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        // Slate palette (Tailwind CSS)
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_900 = Color::Rgb(15, 23, 42);

        // Accent colors (Tailwind CSS)
        let cyan_400 = Color::Rgb(34, 211, 238);
        let green_500 = Color::Rgb(34, 197, 94);
        let yellow_500 = Color::Rgb(234, 179, 8);
        let red_500 = Color::Rgb(239, 68, 68);

        Self {
            background: slate_900,
            foreground: slate_100,

            selected: Style::new().add_modifier(Modifier::REVERSED),

            info: cyan_400,
            success: green_500,
            error: red_500,

            directory: Style::new().fg(cyan_400),
            file: Style::new().fg(slate_100),
            staged: Style::new().fg(yellow_500),

            header: Style::new().fg(slate_100).add_modifier(Modifier::BOLD),
            rule: Style::new().fg(slate_600),
            footer: Style::new().fg(slate_500).add_modifier(Modifier::DIM),
            prompt: Style::new().fg(slate_100),
        }
    }

    /// Light theme for bright terminals.
    pub fn light() -> Self {
        let white = Color::Rgb(255, 255, 255);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_900 = Color::Rgb(15, 23, 42);

        let cyan_700 = Color::Rgb(14, 116, 144);
        let green_600 = Color::Rgb(22, 163, 74);
        let amber_600 = Color::Rgb(217, 119, 6);
        let red_600 = Color::Rgb(220, 38, 38);

        Self {
            background: white,
            foreground: slate_900,

            selected: Style::new().add_modifier(Modifier::REVERSED),

            info: cyan_700,
            success: green_600,
            error: red_600,

            directory: Style::new().fg(cyan_700),
            file: Style::new().fg(slate_900),
            staged: Style::new().fg(amber_600),

            header: Style::new().fg(slate_900).add_modifier(Modifier::BOLD),
            rule: Style::new().fg(slate_400),
            footer: Style::new().fg(slate_500).add_modifier(Modifier::DIM),
            prompt: Style::new().fg(slate_900),
        }
    }

    /// Build a theme for a variant.
    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Style of the status line for a tone.
    pub fn status(&self, tone: crate::app::state::StatusTone) -> Style {
        use crate::app::state::StatusTone;

        let color = match tone {
            StatusTone::Info => self.info,
            StatusTone::Success => self.success,
            StatusTone::Error => self.error,
        };
        Style::new().fg(color).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
