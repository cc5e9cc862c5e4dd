//! Bottom status bar: key hints, record count, the open row and the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " j/k:Move  Enter:Show/Hide  ?:Help  q:Quit",
        theme.muted(),
    ));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{} claims", app.store.len()),
        theme.label(),
    ));
    if let Some(id) = app.expansion().expanded() {
        spans.push(Span::styled(format!(" (open: {id})"), theme.claim_id()));
    }

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme.detail_title(),
            StatusLevel::Warning => theme.warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
