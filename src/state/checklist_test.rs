use super::*;

fn ids(state: &ChecklistState) -> Vec<u64> {
    state.items.iter().map(|i| i.id).collect()
}

// =============================================================
// Seeded defaults
// =============================================================

#[test]
fn default_list_has_three_open_items() {
    let state = ChecklistState::default();
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.completed_count(), 0);
    assert_eq!(ids(&state), vec![0, 1, 2]);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_only_the_addressed_item() {
    let mut state = ChecklistState::default();
    let before = ids(&state);

    state.toggle(1);

    assert!(state.is_done(1));
    assert!(!state.is_done(0));
    assert!(!state.is_done(2));
    // Length, order, and identity of every other item unchanged.
    assert_eq!(state.items.len(), 3);
    assert_eq!(ids(&state), before);
}

#[test]
fn toggle_twice_restores_item() {
    let mut state = ChecklistState::default();
    state.toggle(2);
    state.toggle(2);
    assert!(!state.is_done(2));
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut state = ChecklistState::default();
    let before = state.clone();
    state.toggle(99);
    assert_eq!(state, before);
}

// =============================================================
// add / remove
// =============================================================

#[test]
fn add_trims_label_and_appends() {
    let mut state = ChecklistState::default();
    assert!(state.add("  water the plants  "));
    assert_eq!(state.items.len(), 4);
    assert_eq!(state.items[3].label, "water the plants");
    assert!(!state.items[3].done);
}

#[test]
fn add_rejects_blank_labels() {
    let mut state = ChecklistState::default();
    assert!(!state.add(""));
    assert!(!state.add("   "));
    assert_eq!(state.items.len(), 3);
}

#[test]
fn remove_preserves_other_ids_and_order() {
    let mut state = ChecklistState::default();
    state.remove(1);
    assert_eq!(ids(&state), vec![0, 2]);
}

#[test]
fn ids_are_never_reused_after_removal() {
    let mut state = ChecklistState::default();
    state.remove(2);
    state.add("replacement");
    // The freed id 2 is not handed out again.
    assert_eq!(ids(&state), vec![0, 1, 3]);
}

// =============================================================
// completion ratio
// =============================================================

#[test]
fn ratio_is_completed_over_total() {
    let mut state = ChecklistState::default();
    state.toggle(0);
    state.toggle(2);
    assert!((state.completion_ratio() - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn ratio_of_empty_list_is_zero() {
    let mut state = ChecklistState::default();
    for id in [0, 1, 2] {
        state.remove(id);
    }
    assert_eq!(state.completion_ratio(), 0.0);
}
