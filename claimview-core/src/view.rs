//! Pure view models for the claim table.
//!
//! These functions decide *what* a row, a detail panel and the whole table
//! show. Drawing them is left to the terminal layer.

use crate::expansion::ExpansionController;
use crate::projection::project_code;
use crate::record::{ClaimId, ClaimRejectionRecord, CodeType};
use crate::store::RecordStore;

/// Fixed column labels, independent of the data.
pub const TABLE_HEADER: [&str; 8] = [
    "Claim ID",
    "Code Type",
    "Code",
    "Activity Type",
    "Main Rejection Reason",
    "Relation Type",
    "Level",
    "Actions",
];

/// Glyph drawn in the activity-type column of ICD rows.
pub const PLACEHOLDER_GLYPH: &str = "—";

/// What activating a row's action control does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Toggle(ClaimId),
}

/// Label of the row action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionLabel {
    ShowMore,
    HideDetails,
}

impl ActionLabel {
    pub fn for_state(expanded: bool) -> Self {
        if expanded {
            ActionLabel::HideDetails
        } else {
            ActionLabel::ShowMore
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            ActionLabel::ShowMore => "Show More",
            ActionLabel::HideDetails => "Hide Details",
        }
    }
}

/// A clickable control: a label plus the action it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionControl {
    pub label: ActionLabel,
    pub on_activate: RowAction,
}

/// Activity-type column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTypeCell<'a> {
    Badge(&'a str),
    Placeholder,
}

impl<'a> ActivityTypeCell<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            ActivityTypeCell::Badge(activity_type) => activity_type,
            ActivityTypeCell::Placeholder => PLACEHOLDER_GLYPH,
        }
    }
}

/// One collapsed-or-expanded table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub claim_id: &'a ClaimId,
    pub code_type: CodeType,
    pub code: &'a str,
    pub activity_type: ActivityTypeCell<'a>,
    pub rejection_reason: &'a str,
    pub relation_type: &'a str,
    pub level: &'a str,
    pub expanded: bool,
    pub action: ActionControl,
}

/// A labeled value in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailField<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

/// Extra fields revealed under an expanded row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailPanel<'a> {
    pub fields: [DetailField<'a>; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub row: RowView<'a>,
    /// Present only while the row is expanded.
    pub detail: Option<DetailPanel<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub header: [&'static str; 8],
    pub rows: Vec<TableRow<'a>>,
}

impl<'a> TableView<'a> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Row renderer: one record plus its expansion flag.
pub fn render_row(record: &ClaimRejectionRecord, expanded: bool) -> RowView<'_> {
    let projection = project_code(record);
    let activity_type = match projection.activity_type() {
        Some(activity_type) => ActivityTypeCell::Badge(activity_type),
        None => ActivityTypeCell::Placeholder,
    };

    RowView {
        claim_id: &record.claim_id,
        code_type: record.code_type,
        code: projection.code(),
        activity_type,
        rejection_reason: &record.rejection_reason,
        relation_type: &record.relation_type,
        level: &record.level,
        expanded,
        action: ActionControl {
            label: ActionLabel::for_state(expanded),
            on_activate: RowAction::Toggle(record.claim_id.clone()),
        },
    }
}

/// Detail panel renderer: Relation Type, Message, Level in that order.
pub fn render_detail(record: &ClaimRejectionRecord) -> DetailPanel<'_> {
    DetailPanel {
        fields: [
            DetailField {
                label: "Relation Type",
                value: &record.relation_type,
            },
            DetailField {
                label: "Message",
                value: &record.message,
            },
            DetailField {
                label: "Level",
                value: &record.level,
            },
        ],
    }
}

/// Compose the table in store order, asking the controller about each row.
pub fn compose_table<'a>(
    store: &'a RecordStore,
    expansion: &ExpansionController,
) -> TableView<'a> {
    let rows = store
        .iter()
        .map(|record| {
            let expanded = expansion.is_expanded(record.claim_id.as_str());
            TableRow {
                row: render_row(record, expanded),
                detail: expanded.then(|| render_detail(record)),
            }
        })
        .collect();

    TableView {
        header: TABLE_HEADER,
        rows,
    }
}
