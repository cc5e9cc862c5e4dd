//! Input dispatch: overlays first, then global keys, then table keys. Mouse clicks map to rows.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{AppState, Overlay};
use crate::layout::{hit_test, screen_layout, table_layout, Hit};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Ctrl+C always quits.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // 2. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 3. Table keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.activate_cursor().is_none() {
                app.set_warning("No claim records to expand");
            }
        }
        _ => {}
    }
}

/// Handle a mouse event: clicks on a row's button activate it, clicks
/// elsewhere on a row move the cursor there.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if !app.mouse_enabled || app.overlay != Overlay::None {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let body = screen_layout(app.viewport).body;
            let hit = {
                let table = app.table();
                let slots = table_layout(&table, body, app.scroll);
                hit_test(&slots, mouse.column, mouse.row)
            };
            match hit {
                Some(Hit::Action(index)) => {
                    app.select(index);
                    app.activate(index);
                }
                Some(Hit::Row(index)) => app.select(index),
                None => {}
            }
        }
        MouseEventKind::ScrollDown => app.select_next(),
        MouseEventKind::ScrollUp => app.select_previous(),
        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("↑/k, ↓/j", "Move between claims"),
        ("g / G", "First / last claim"),
        ("Enter / Space", "Show more / hide details"),
        ("Mouse click", "Press a row's button"),
        ("?", "Toggle this help"),
        ("Esc", "Close help"),
    ]
}
