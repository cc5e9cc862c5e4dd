//! Top-level UI layout: bordered claim table with status bar.

pub mod detail_panel;
pub mod help;
pub mod status_bar;
pub mod table;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::{AppState, Overlay};
use crate::layout::{screen_layout, table_layout};
use table::{ClaimTable, TableHeader};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let screen = screen_layout(f.area());
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme.accent))
        .title(" Claim Rejections ")
        .title_style(theme.label());
    f.render_widget(block, screen.frame);

    let table = app.table();
    f.render_widget(TableHeader::new(&table.header, theme), screen.header);

    if table.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("No claim records.", theme.muted())),
            screen.body,
        );
    } else {
        let slots = table_layout(&table, screen.body, app.scroll);
        f.render_widget(ClaimTable::new(&table, &slots, app.cursor, theme), screen.body);
    }

    status_bar::render(f, screen.status, app);

    if app.overlay == Overlay::Help {
        help::render(f, screen.frame, theme);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
