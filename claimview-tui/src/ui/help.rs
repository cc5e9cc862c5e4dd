//! Help overlay: keyboard and mouse bindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::input::key_bindings_help;
use crate::theme::Theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    for (keys, desc) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>16}  ", keys), theme.detail_title()),
            Span::styled(desc, theme.label()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Esc or ? to close", theme.muted())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.detail_title())
        .title(" Help ")
        .title_style(theme.header());

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
