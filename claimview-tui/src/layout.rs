//! Screen geometry: shared by drawing and mouse hit-testing.
//!
//! Every rect the table widget draws into is computed here, so a click can be
//! mapped back to the row (and the action button) it landed on.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use claimview_core::{DetailPanel, TableView};

/// Width of the actions column; fits `[ Hide Details ]`.
pub const ACTION_COLUMN_WIDTH: u16 = 16;
pub const COLUMN_SPACING: u16 = 1;
/// Border plus horizontal padding on each side of the detail card.
pub const CARD_BORDER: u16 = 1;
pub const CARD_PADDING_X: u16 = 1;
pub const DETAIL_COLUMN_SPACING: u16 = 2;

/// Top-level regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Bordered table frame.
    pub frame: Rect,
    /// Column header line inside the frame.
    pub header: Rect,
    /// Row area below the header.
    pub body: Rect,
    /// One-line status bar.
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [frame, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    let inner = Rect {
        x: frame.x.saturating_add(1),
        y: frame.y.saturating_add(1),
        width: frame.width.saturating_sub(2),
        height: frame.height.saturating_sub(2),
    };
    let [header, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    ScreenLayout {
        frame,
        header,
        body,
        status,
    }
}

/// Column rects for a one-line row, proportioned 1.2 / 1 / 1 / 1.2 / 2 / 1.2 / 1
/// with a fixed actions column.
pub fn columns(row: Rect) -> [Rect; 8] {
    Layout::horizontal([
        Constraint::Fill(6),
        Constraint::Fill(5),
        Constraint::Fill(5),
        Constraint::Fill(6),
        Constraint::Fill(10),
        Constraint::Fill(6),
        Constraint::Fill(5),
        Constraint::Length(ACTION_COLUMN_WIDTH),
    ])
    .spacing(COLUMN_SPACING)
    .areas(row)
}

/// Rendered width of a button label: `[ ` + label + ` ]`.
pub fn button_width(label: &str) -> u16 {
    (label.chars().count() as u16).saturating_add(4)
}

/// The button rect, right-aligned inside the actions column.
pub fn button_rect(column: Rect, label: &str) -> Rect {
    let width = button_width(label).min(column.width);
    Rect {
        x: column.x + column.width - width,
        y: column.y,
        width,
        height: 1,
    }
}

/// The three field columns inside a detail card of the given outer rect.
pub fn detail_columns(card: Rect) -> [Rect; 3] {
    let inner = card_inner(card);
    Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(DETAIL_COLUMN_SPACING)
        .areas(inner)
}

/// Content rect of a card: inside the border and horizontal padding.
pub fn card_inner(card: Rect) -> Rect {
    let dx = CARD_BORDER + CARD_PADDING_X;
    Rect {
        x: card.x.saturating_add(dx),
        y: card.y.saturating_add(CARD_BORDER),
        width: card.width.saturating_sub(2 * dx),
        height: card.height.saturating_sub(2 * CARD_BORDER),
    }
}

/// Height of a detail card at `width`: borders plus the tallest column, where
/// a column is its wrapped uppercase label over its wrapped value.
pub fn detail_height(panel: &DetailPanel<'_>, width: u16) -> u16 {
    let area = Rect::new(0, 0, width, 2 * CARD_BORDER + 1);
    let content = detail_columns(area)
        .iter()
        .zip(panel.fields.iter())
        .map(|(column, field)| {
            wrapped_height(&field.label.to_uppercase(), column.width)
                .saturating_add(wrapped_height(field.value, column.width))
        })
        .max()
        .unwrap_or(2);
    2 * CARD_BORDER + content
}

/// Lines needed to word-wrap `text` at `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines: u16 = 1;
    let mut current = 0usize;

    for word in text.split_whitespace() {
        let mut len = word.chars().count();
        let needed = if current == 0 { len } else { current + 1 + len };
        if needed <= width {
            current = needed;
            continue;
        }
        if current > 0 {
            lines = lines.saturating_add(1);
        }
        // Words longer than a line are broken across lines.
        while len > width {
            len -= width;
            lines = lines.saturating_add(1);
        }
        current = len;
    }
    lines
}

/// Where one visible row (and its detail card) landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    /// Index into the table rows.
    pub index: usize,
    pub row: Rect,
    pub action: Rect,
    pub detail: Option<Rect>,
    /// False when the detail card was clipped by the bottom edge.
    pub fully_visible: bool,
}

/// Lay out rows from `scroll` downward until `body` is full.
pub fn table_layout(table: &TableView<'_>, body: Rect, scroll: usize) -> Vec<RowSlot> {
    let bottom = body.y.saturating_add(body.height);
    let mut y = body.y;
    let mut slots = Vec::new();

    for (index, entry) in table.rows.iter().enumerate().skip(scroll) {
        if y >= bottom {
            break;
        }
        let row = Rect::new(body.x, y, body.width, 1);
        let action = button_rect(columns(row)[7], entry.row.action.label.text());
        y += 1;

        let mut fully_visible = true;
        let detail = entry.detail.as_ref().map(|panel| {
            let wanted = detail_height(panel, body.width);
            let height = wanted.min(bottom.saturating_sub(y));
            fully_visible = height == wanted;
            let rect = Rect::new(body.x, y, body.width, height);
            y = y.saturating_add(height);
            rect
        });

        slots.push(RowSlot {
            index,
            row,
            action,
            detail,
            fully_visible,
        });
    }
    slots
}

/// Smallest scroll offset change that keeps `cursor` fully on screen.
pub fn scroll_to_show(table: &TableView<'_>, body: Rect, scroll: usize, cursor: usize) -> usize {
    if cursor < scroll {
        return cursor;
    }
    let mut scroll = scroll;
    while scroll < cursor {
        let visible = table_layout(table, body, scroll)
            .iter()
            .any(|slot| slot.index == cursor && slot.fully_visible);
        if visible {
            break;
        }
        scroll += 1;
    }
    scroll
}

/// What a mouse position landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Action(usize),
    Row(usize),
}

pub fn hit_test(slots: &[RowSlot], column: u16, row: u16) -> Option<Hit> {
    let position = Position::new(column, row);
    slots.iter().find_map(|slot| {
        if slot.action.contains(position) {
            Some(Hit::Action(slot.index))
        } else if slot.row.contains(position)
            || slot.detail.is_some_and(|d| d.contains(position))
        {
            Some(Hit::Row(slot.index))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimview_core::{
        compose_table, render_detail, ClaimRejectionRecord, ExpansionController, RecordStore,
    };

    #[test]
    fn screen_layout_reserves_status_line() {
        let layout = screen_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.header, Rect::new(1, 1, 98, 1));
        assert_eq!(layout.body, Rect::new(1, 2, 98, 26));
    }

    #[test]
    fn action_column_has_fixed_width() {
        let cols = columns(Rect::new(0, 0, 120, 1));
        assert_eq!(cols[7].width, ACTION_COLUMN_WIDTH);
        assert_eq!(cols[7].x + cols[7].width, 120);
        // Rejection reason gets the widest share.
        assert!(cols[4].width > cols[0].width);
    }

    #[test]
    fn button_is_right_aligned() {
        let column = Rect::new(50, 3, 16, 1);
        let rect = button_rect(column, "Show More");
        assert_eq!(rect.width, 13);
        assert_eq!(rect.x + rect.width, 66);
    }

    #[test]
    fn wrapped_height_counts_word_wrap() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
        assert_eq!(wrapped_height("aaaa bbbb cccc", 9), 2);
        assert_eq!(wrapped_height("aaaa bbbb cccc", 4), 3);
        assert_eq!(wrapped_height("abcdefghij", 4), 3);
    }

    #[test]
    fn detail_height_counts_wrapped_labels() {
        let record = ClaimRejectionRecord::activity("CLM-010", "1230", "CPT")
            .with_relation_type("CPT-ICD")
            .with_message("Bad")
            .with_level("Edit");
        let panel = render_detail(&record);

        // Wide: one label line and one value line per column.
        assert_eq!(detail_height(&panel, 120), 4);
        // Columns narrower than "RELATION TYPE" put "TYPE" on its own line.
        let narrow = detail_columns(Rect::new(0, 0, 42, 4));
        assert!(narrow.iter().all(|c| c.width < 13));
        assert_eq!(detail_height(&panel, 42), 5);
    }

    #[test]
    fn collapsed_rows_are_one_line_each() {
        let store = RecordStore::sample();
        let table = compose_table(&store, &ExpansionController::new());
        let slots = table_layout(&table, Rect::new(0, 0, 120, 20), 0);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].row.y, 0);
        assert_eq!(slots[1].row.y, 1);
        assert!(slots.iter().all(|s| s.detail.is_none()));
    }

    #[test]
    fn detail_card_pushes_next_row_down() {
        let store = RecordStore::sample();
        let mut expansion = ExpansionController::new();
        expansion.toggle("CLM-001");
        let table = compose_table(&store, &expansion);

        let slots = table_layout(&table, Rect::new(0, 0, 120, 20), 0);
        let detail = slots[0].detail.expect("expanded row has a card");
        assert_eq!(detail.y, 1);
        assert!(detail.height >= 4);
        assert_eq!(slots[1].row.y, 1 + detail.height);
    }

    #[test]
    fn scroll_follows_cursor_past_expanded_card() {
        let store = RecordStore::sample();
        let mut expansion = ExpansionController::new();
        expansion.toggle("CLM-001");
        let table = compose_table(&store, &expansion);

        // Only room for row 0 and its card.
        let body = Rect::new(0, 0, 120, 5);
        assert_eq!(scroll_to_show(&table, body, 0, 0), 0);
        assert_eq!(scroll_to_show(&table, body, 0, 1), 1);
        assert_eq!(scroll_to_show(&table, body, 1, 0), 0);
    }

    #[test]
    fn hit_test_distinguishes_button_from_row() {
        let store = RecordStore::sample();
        let table = compose_table(&store, &ExpansionController::new());
        let slots = table_layout(&table, Rect::new(0, 0, 120, 20), 0);

        let button = slots[1].action;
        assert_eq!(hit_test(&slots, button.x, button.y), Some(Hit::Action(1)));
        assert_eq!(hit_test(&slots, 0, 1), Some(Hit::Row(1)));
        assert_eq!(hit_test(&slots, 0, 10), None);
    }
}
