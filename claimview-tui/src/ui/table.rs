//! Claim table: header line, one line per claim, detail card under the
//! expanded claim.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use claimview_core::{ActivityTypeCell, RowView, TableView};

use crate::layout::{columns, RowSlot};
use crate::theme::Theme;
use crate::ui::detail_panel::DetailCard;
use crate::ui::widgets::{Button, ButtonVariant};

/// Column header line.
pub struct TableHeader<'a> {
    labels: &'a [&'static str; 8],
    theme: &'a Theme,
}

impl<'a> TableHeader<'a> {
    pub fn new(labels: &'a [&'static str; 8], theme: &'a Theme) -> Self {
        Self { labels, theme }
    }
}

impl<'a> Widget for TableHeader<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.header());
        let cols = columns(area);
        for (i, (col, label)) in cols.iter().zip(self.labels.iter()).enumerate() {
            // Actions label sits at the right edge, above the buttons.
            let x = if i == cols.len() - 1 {
                let width = (label.chars().count() as u16).min(col.width);
                col.x + col.width - width
            } else {
                col.x
            };
            buf.set_stringn(x, col.y, label, col.width as usize, self.theme.header());
        }
    }
}

/// Body of the table, drawn into precomputed slots.
pub struct ClaimTable<'a> {
    table: &'a TableView<'a>,
    slots: &'a [RowSlot],
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> ClaimTable<'a> {
    pub fn new(
        table: &'a TableView<'a>,
        slots: &'a [RowSlot],
        cursor: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            table,
            slots,
            cursor,
            theme,
        }
    }

    fn render_row(&self, row: &RowView<'_>, slot: &RowSlot, buf: &mut Buffer) {
        let is_cursor = slot.index == self.cursor;
        if is_cursor {
            buf.set_style(slot.row, self.theme.cursor_row());
        }

        let cols = columns(slot.row);
        let theme = self.theme;
        cell(buf, cols[0], row.claim_id.as_str(), theme.claim_id());
        cell(
            buf,
            cols[1],
            row.code_type.label(),
            Style::default()
                .fg(theme.code_type_color(row.code_type))
                .add_modifier(Modifier::BOLD),
        );
        cell(buf, cols[2], row.code, theme.code());
        match row.activity_type {
            ActivityTypeCell::Badge(activity_type) => {
                cell(buf, cols[3], &format!(" {activity_type} "), theme.badge())
            }
            ActivityTypeCell::Placeholder => {
                cell(buf, cols[3], row.activity_type.text(), theme.placeholder())
            }
        }
        cell(buf, cols[4], row.rejection_reason, theme.reason());
        cell(buf, cols[5], row.relation_type, theme.label());
        cell(buf, cols[6], row.level, theme.label());

        let variant = if row.expanded {
            ButtonVariant::Filled
        } else {
            ButtonVariant::Outline
        };
        Button::new(row.action.label.text(), theme)
            .variant(variant)
            .render(slot.action, buf);

        if is_cursor {
            buf.set_style(slot.row, Style::default().add_modifier(Modifier::BOLD));
        }
    }
}

impl<'a> Widget for ClaimTable<'a> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        for slot in self.slots {
            let Some(entry) = self.table.rows.get(slot.index) else {
                continue;
            };
            self.render_row(&entry.row, slot, buf);
            if let (Some(panel), Some(rect)) = (entry.detail.as_ref(), slot.detail) {
                DetailCard::new(panel, self.theme).render(rect, buf);
            }
        }
    }
}

/// Write `text` into a one-line cell, ending with `…` when it does not fit.
fn cell(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    let width = area.width as usize;
    let span = if text.chars().count() > width {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        Span::styled(format!("{cut}…"), style)
    } else {
        Span::styled(text.to_string(), style)
    };
    buf.set_span(area.x, area.y, &span, area.width);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_truncates_with_ellipsis() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        let area = buf.area;
        cell(&mut buf, area, "Activity Code", Style::default());
        let text: String = (0..6).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(text, "Activ…");
    }

    #[test]
    fn cell_keeps_short_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        let area = buf.area;
        cell(&mut buf, area, "Z23", Style::default());
        let text: String = (0..6).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(text, "Z23   ");
    }

    #[test]
    fn header_draws_all_labels() {
        let theme = Theme::default();
        let labels = claimview_core::TABLE_HEADER;
        let mut buf = Buffer::empty(Rect::new(0, 0, 160, 1));
        TableHeader::new(&labels, &theme).render(buf.area, &mut buf);
        let text: String = (0..160).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.starts_with("Claim ID"));
        assert!(text.trim_end().ends_with("Actions"));
        assert!(text.contains("Main Rejection Reason"));
    }
}
