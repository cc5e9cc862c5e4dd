//! ClaimView Core: claim rejection records and the row-expansion model.
//!
//! This crate has no terminal dependency. It contains:
//! - Domain types (claim rejection records, code types, claim ids)
//! - The record store (embedded sample set or a JSON/TOML file)
//! - The ICD / Activity code projection
//! - The single-selection expansion controller
//! - Pure view models for rows, detail panels and the whole table

pub mod expansion;
pub mod projection;
pub mod record;
pub mod store;
pub mod view;

pub use expansion::{ExpansionChange, ExpansionController};
pub use projection::{project_code, CodeProjection};
pub use record::{ClaimId, ClaimRejectionRecord, CodeType};
pub use store::{RecordStore, StoreError};
pub use view::{
    compose_table, render_detail, render_row, ActionControl, ActionLabel, ActivityTypeCell,
    DetailField, DetailPanel, RowAction, RowView, TableRow, TableView, TABLE_HEADER,
};
