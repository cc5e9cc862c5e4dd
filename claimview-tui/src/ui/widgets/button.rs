//! Clickable-action primitive: a bracketed label.
//!
//! The button only draws. Its click target is the rect it is rendered into;
//! the caller maps activation back to an action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid navy fill, white text.
    Filled,
    /// Accent-colored text on the row background.
    Outline,
}

pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            variant: ButtonVariant::Outline,
            theme,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    fn style(&self) -> Style {
        match self.variant {
            ButtonVariant::Filled => Style::default()
                .bg(self.theme.header_bg)
                .fg(self.theme.header_fg)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Outline => Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn text(&self) -> String {
        format!("[ {} ]", self.label)
    }
}

impl<'a> Widget for Button<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let span = Span::styled(self.text(), self.style());
        buf.set_span(area.x, area.y, &span, area.width);
    }
}
