//! Bordered-container primitive.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Padding, Widget},
};

use crate::layout::CARD_PADDING_X;
use crate::theme::Theme;

pub struct Card<'a> {
    theme: &'a Theme,
}

impl<'a> Card<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.panel_border))
            .padding(Padding::horizontal(CARD_PADDING_X))
    }
}

impl<'a> Widget for Card<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}
