//! Application state: single-owner, main-thread only.
//!
//! `AppState` is the composition root: it owns the record store and the
//! expansion controller, and hands both to the renderers by reference.

use ratatui::layout::Rect;

use claimview_core::{
    compose_table, render_row, ExpansionChange, ExpansionController, RecordStore, TableView,
};

use crate::layout::{screen_layout, scroll_to_show};
use crate::theme::Theme;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

pub struct AppState {
    pub store: RecordStore,
    expansion: ExpansionController,

    // Navigation
    pub cursor: usize,
    pub scroll: usize,
    pub overlay: Overlay,
    pub running: bool,
    pub mouse_enabled: bool,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub theme: Theme,
    /// Frame area from the last draw; used for scrolling and hit-testing.
    pub viewport: Rect,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            expansion: ExpansionController::new(),
            cursor: 0,
            scroll: 0,
            overlay: Overlay::None,
            running: true,
            mouse_enabled: true,
            status_message: None,
            theme: Theme::default(),
            viewport: Rect::default(),
        }
    }

    pub fn expansion(&self) -> &ExpansionController {
        &self.expansion
    }

    /// The table as it should be drawn right now.
    pub fn table(&self) -> TableView<'_> {
        compose_table(&self.store, &self.expansion)
    }

    /// Activate the action control of row `index`.
    pub fn activate(&mut self, index: usize) -> Option<ExpansionChange> {
        let action = {
            let record = self.store.get(index)?;
            let expanded = self.expansion.is_expanded(record.claim_id.as_str());
            render_row(record, expanded).action.on_activate
        };

        let change = self.expansion.apply(&action);
        if let Some(id) = &change.expanded {
            self.set_status(format!("{id} expanded"));
        } else if let Some(id) = &change.collapsed {
            self.set_status(format!("{id} collapsed"));
        }
        self.follow_cursor();
        Some(change)
    }

    pub fn activate_cursor(&mut self) -> Option<ExpansionChange> {
        self.activate(self.cursor)
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.store.len() {
            self.cursor += 1;
        }
        self.follow_cursor();
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor();
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
        self.follow_cursor();
    }

    pub fn select_last(&mut self) {
        self.cursor = self.store.len().saturating_sub(1);
        self.follow_cursor();
    }

    pub fn select(&mut self, index: usize) {
        if index < self.store.len() {
            self.cursor = index;
            self.follow_cursor();
        }
    }

    /// Adjust the scroll offset so the cursor row (and its card) is visible.
    pub fn follow_cursor(&mut self) {
        let body = screen_layout(self.viewport).body;
        if body.height == 0 {
            self.scroll = self.scroll.min(self.cursor);
            return;
        }
        let scroll = scroll_to_show(&self.table(), body, self.scroll, self.cursor);
        self.scroll = scroll;
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            Overlay::None => Overlay::Help,
        };
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        let mut app = AppState::new(RecordStore::sample());
        app.viewport = Rect::new(0, 0, 120, 30);
        app
    }

    #[test]
    fn starts_collapsed_on_first_row() {
        let app = app();
        assert_eq!(app.cursor, 0);
        assert!(app.expansion().expanded().is_none());
        assert!(app.table().rows.iter().all(|r| r.detail.is_none()));
    }

    #[test]
    fn activate_toggles_and_reports() {
        let mut app = app();
        let change = app.activate(0).unwrap();
        assert_eq!(change.expanded.as_ref().map(|id| id.as_str()), Some("CLM-001"));
        assert!(app.expansion().is_expanded("CLM-001"));
        assert_eq!(
            app.status_message,
            Some(("CLM-001 expanded".to_string(), StatusLevel::Info))
        );

        app.activate(0);
        assert!(!app.expansion().is_expanded("CLM-001"));
        assert_eq!(
            app.status_message.as_ref().map(|(m, _)| m.as_str()),
            Some("CLM-001 collapsed")
        );
    }

    #[test]
    fn activate_out_of_range_is_ignored() {
        let mut app = app();
        assert!(app.activate(99).is_none());
        assert!(app.expansion().expanded().is_none());
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        app.select_previous();
        assert_eq!(app.cursor, 0);
        app.select_next();
        app.select_next();
        assert_eq!(app.cursor, 1);
        app.select_first();
        assert_eq!(app.cursor, 0);
        app.select_last();
        assert_eq!(app.cursor, 1);
        app.select(7);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn empty_store_is_navigable() {
        let mut app = AppState::new(RecordStore::default());
        app.select_next();
        app.select_last();
        assert_eq!(app.cursor, 0);
        assert!(app.activate_cursor().is_none());
    }

    #[test]
    fn scroll_follows_cursor_in_short_viewport() {
        let mut app = app();
        // Status line + frame borders + header leave 3 body lines.
        app.viewport = Rect::new(0, 0, 120, 7);
        app.activate(0);
        app.select_next();
        assert_eq!(app.scroll, 1);
        app.select_previous();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn help_overlay_toggles() {
        let mut app = app();
        app.toggle_help();
        assert_eq!(app.overlay, Overlay::Help);
        app.toggle_help();
        assert_eq!(app.overlay, Overlay::None);
    }
}
