//! Navy/sky theme tokens for the ClaimView TUI
//!
//! # Color Palette
//! - **Header**: Deep navy band with white labels
//! - **Accent**: Royal blue (focus, buttons, codes)
//! - **Badge**: Pale sky fill with navy text (activity type)
//! - **Panel**: Sky blue borders around the detail card
//! - **Muted**: Slate (placeholders, rejection reason text)

use ratatui::style::{Color, Modifier, Style};

use claimview_core::CodeType;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep navy (header band, active button fill)
    pub header_bg: Color,
    /// White (header text, active button text)
    pub header_fg: Color,
    /// Royal blue (focus border, outlined button, claim ids)
    pub accent: Color,
    /// Navy (code column)
    pub code: Color,
    /// Pale sky (badge fill)
    pub badge_bg: Color,
    /// Navy blue (badge text, detail labels)
    pub badge_fg: Color,
    /// Sky blue (detail card border)
    pub panel_border: Color,
    /// Slate gray (placeholder glyph)
    pub placeholder: Color,
    /// Dark slate (rejection reason)
    pub reason: Color,
    /// Primary text
    pub text_primary: Color,
    /// Cursor row background
    pub cursor_bg: Color,
    /// Warning / error status text
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::navy()
    }
}

impl Theme {
    pub fn navy() -> Self {
        Self {
            header_bg: Color::Rgb(30, 58, 138),
            header_fg: Color::White,
            accent: Color::Rgb(37, 99, 235),
            code: Color::Rgb(96, 165, 250),
            badge_bg: Color::Rgb(219, 234, 254),
            badge_fg: Color::Rgb(30, 64, 175),
            panel_border: Color::Rgb(147, 197, 253),
            placeholder: Color::Rgb(148, 163, 184),
            reason: Color::Rgb(203, 213, 225),
            text_primary: Color::White,
            cursor_bg: Color::Rgb(30, 41, 59),
            warning: Color::Rgb(251, 146, 60),
        }
    }

    pub fn header(&self) -> Style {
        Style::default()
            .bg(self.header_bg)
            .fg(self.header_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn claim_id(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn code(&self) -> Style {
        Style::default().fg(self.code).add_modifier(Modifier::BOLD)
    }

    pub fn badge(&self) -> Style {
        Style::default()
            .bg(self.badge_bg)
            .fg(self.badge_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.placeholder)
    }

    pub fn reason(&self) -> Style {
        Style::default().fg(self.reason)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text_primary).add_modifier(Modifier::BOLD)
    }

    pub fn detail_title(&self) -> Style {
        Style::default()
            .fg(self.panel_border)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.placeholder)
    }

    pub fn cursor_row(&self) -> Style {
        Style::default().bg(self.cursor_bg)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Color for the code-type cell
    pub fn code_type_color(&self, code_type: CodeType) -> Color {
        match code_type {
            CodeType::Icd => self.code,
            CodeType::Activity => self.panel_border,
        }
    }
}
