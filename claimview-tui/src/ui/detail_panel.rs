//! Detail card: the labeled fields revealed under an expanded row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use claimview_core::DetailPanel;

use crate::layout::detail_columns;
use crate::theme::Theme;
use crate::ui::widgets::Card;

pub struct DetailCard<'a> {
    panel: &'a DetailPanel<'a>,
    theme: &'a Theme,
}

impl<'a> DetailCard<'a> {
    pub fn new(panel: &'a DetailPanel<'a>, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }
}

impl<'a> Widget for DetailCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        Card::new(self.theme).render(area, buf);

        for (column, field) in detail_columns(area).into_iter().zip(self.panel.fields.iter()) {
            if column.is_empty() {
                continue;
            }
            let lines = vec![
                Line::from(Span::styled(field.label.to_uppercase(), self.theme.detail_title())),
                Line::from(Span::styled(field.value, self.theme.label())),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimview_core::{render_detail, ClaimRejectionRecord};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn draws_three_labels_in_order() {
        let theme = Theme::default();
        let record = ClaimRejectionRecord::icd("CLM-001", "Z23")
            .with_relation_type("ICD-principal")
            .with_message("Not valid")
            .with_level("Edit");
        let panel = render_detail(&record);

        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 5));
        DetailCard::new(&panel, &theme).render(buf.area, &mut buf);

        let labels = row_text(&buf, 1);
        let relation = labels.find("RELATION TYPE").unwrap();
        let message = labels.find("MESSAGE").unwrap();
        let level = labels.find("LEVEL").unwrap();
        assert!(relation < message && message < level);

        let values = row_text(&buf, 2);
        assert!(values.contains("ICD-principal"));
        assert!(values.contains("Not valid"));
        assert!(values.contains("Edit"));
    }
}
