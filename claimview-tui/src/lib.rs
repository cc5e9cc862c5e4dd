//! ClaimView TUI: terminal table of claim rejections with expandable rows.
//!
//! Provides:
//! - The claim table with a fixed header and one line per claim
//! - In-place detail cards (Relation Type, Message, Level) under the expanded claim
//! - Keyboard and mouse activation of each row's Show More / Hide Details button
//! - TOML configuration, file logging and terminal setup for the `claimview` binary

pub mod app;
pub mod config;
pub mod input;
pub mod layout;
pub mod logging;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::AppConfig;
pub use input::{handle_key, handle_mouse};
pub use theme::Theme;
