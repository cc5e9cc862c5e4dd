//! Property tests for the expansion controller.
//!
//! Uses proptest to verify:
//! 1. Initial state: nothing is expanded before the first toggle
//! 2. Single selection: at most one id is expanded after any toggle sequence
//! 3. Round trip: toggling the same id twice leaves it collapsed
//! 4. Reference model: the controller matches a plain `Option` model

use proptest::prelude::*;
use claimview_core::{compose_table, ClaimRejectionRecord, ExpansionController, RecordStore};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CLM-001".to_string()),
        Just("CLM-002".to_string()),
        Just("CLM-003".to_string()),
        "[A-Z]{0,4}",
    ]
}

fn arb_toggles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_id(), 0..64)
}

fn store_of(ids: &[&str]) -> RecordStore {
    RecordStore::from_records(
        ids.iter()
            .map(|id| ClaimRejectionRecord::icd(*id, "Z23"))
            .collect(),
    )
}

// ── 1. Initial State ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn nothing_expanded_initially(id in arb_id()) {
        let controller = ExpansionController::new();
        prop_assert!(!controller.is_expanded(&id));
    }
}

// ── 2. Single Selection ──────────────────────────────────────────────

proptest! {
    /// For any toggle sequence, at most one candidate id reports expanded.
    #[test]
    fn at_most_one_expanded(toggles in arb_toggles()) {
        let mut controller = ExpansionController::new();
        for id in &toggles {
            controller.toggle(id.as_str());
            let expanded = toggles.iter()
                .filter(|candidate| controller.is_expanded(candidate))
                .map(String::as_str)
                .collect::<std::collections::HashSet<_>>();
            prop_assert!(expanded.len() <= 1);
        }
    }

    /// A toggle on `x` makes `x` the only expanded id.
    #[test]
    fn toggle_on_new_id_collapses_previous(first in arb_id(), second in arb_id()) {
        prop_assume!(first != second);
        let mut controller = ExpansionController::new();
        controller.toggle(first.as_str());
        controller.toggle(second.as_str());
        prop_assert!(controller.is_expanded(&second));
        prop_assert!(!controller.is_expanded(&first));
    }

    /// The composed table never shows more than one detail panel for
    /// unique ids.
    #[test]
    fn table_shows_at_most_one_detail(toggles in arb_toggles()) {
        let store = store_of(&["CLM-001", "CLM-002", "CLM-003"]);
        let mut controller = ExpansionController::new();
        for id in &toggles {
            controller.toggle(id.as_str());
            let table = compose_table(&store, &controller);
            let open = table.rows.iter().filter(|r| r.detail.is_some()).count();
            prop_assert!(open <= 1);
        }
    }
}

// ── 3. Round Trip ────────────────────────────────────────────────────

proptest! {
    /// Two toggles on the same id, from any starting state, leave it collapsed.
    #[test]
    fn double_toggle_collapses(prefix in arb_toggles(), id in arb_id()) {
        let mut controller = ExpansionController::new();
        for p in &prefix {
            controller.toggle(p.as_str());
        }
        controller.toggle(id.as_str());
        prop_assert!(controller.is_expanded(&id));
        controller.toggle(id.as_str());
        prop_assert!(!controller.is_expanded(&id));
        prop_assert!(controller.expanded().is_none());
    }
}

// ── 4. Reference Model ───────────────────────────────────────────────

proptest! {
    #[test]
    fn matches_reference_model(toggles in arb_toggles()) {
        let mut controller = ExpansionController::new();
        let mut model: Option<String> = None;
        for id in &toggles {
            model = if model.as_deref() == Some(id.as_str()) {
                None
            } else {
                Some(id.clone())
            };
            controller.toggle(id.as_str());
            prop_assert_eq!(
                controller.expanded().map(|c| c.as_str().to_string()),
                model.clone()
            );
        }
    }
}
