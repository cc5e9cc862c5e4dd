//! Expansion controller: single-selection state for expandable rows.
//!
//! At most one claim id is expanded at a time. The state is created empty,
//! changed only by [`ExpansionController::toggle`] and never persisted.

use crate::record::ClaimId;
use crate::view::RowAction;

/// Rows whose visual state changed because of one toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionChange {
    /// Row that went from expanded to collapsed.
    pub collapsed: Option<ClaimId>,
    /// Row that went from collapsed to expanded.
    pub expanded: Option<ClaimId>,
}

/// Owner of the expanded-row id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionController {
    expanded: Option<ClaimId>,
}

impl ExpansionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `id` is the currently expanded row.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_ref().is_some_and(|current| current.as_str() == id)
    }

    /// The expanded row, if any.
    pub fn expanded(&self) -> Option<&ClaimId> {
        self.expanded.as_ref()
    }

    /// Collapse `id` if it is expanded, otherwise expand it and collapse
    /// whatever was expanded before.
    ///
    /// Accepts any id, including ones no record carries.
    pub fn toggle(&mut self, id: impl Into<ClaimId>) -> ExpansionChange {
        let id = id.into();
        let change = match self.expanded.take() {
            Some(current) if current == id => ExpansionChange {
                collapsed: Some(current),
                expanded: None,
            },
            previous => {
                self.expanded = Some(id.clone());
                ExpansionChange {
                    collapsed: previous,
                    expanded: Some(id),
                }
            }
        };

        tracing::debug!(
            collapsed = change.collapsed.as_ref().map(ClaimId::as_str),
            expanded = change.expanded.as_ref().map(ClaimId::as_str),
            "row expansion toggled"
        );
        change
    }

    /// Run the action carried by a row's action control.
    pub fn apply(&mut self, action: &RowAction) -> ExpansionChange {
        match action {
            RowAction::Toggle(id) => self.toggle(id),
        }
    }
}
