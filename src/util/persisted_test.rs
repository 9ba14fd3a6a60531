#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrates_default_when_slot_absent() {
    let bound = persisted_signal("persisted-test-absent", || vec!["seed".to_owned()]);
    assert_eq!(bound.get(), vec!["seed".to_owned()]);
}

#[test]
fn hydrates_stored_value_over_default() {
    storage::save_json("persisted-test-stored", &vec!["kept".to_owned()]);
    let bound = persisted_signal::<Vec<String>>("persisted-test-stored", Vec::new);
    assert_eq!(bound.get(), vec!["kept".to_owned()]);
}

#[test]
fn hydrates_default_when_slot_corrupt() {
    storage::save_json("persisted-test-corrupt", &42_u32);
    let bound = persisted_signal::<Vec<String>>("persisted-test-corrupt", Vec::new);
    assert!(bound.get().is_empty());
}

// =============================================================
// Write-through round trip
// =============================================================

#[test]
fn set_then_fresh_binding_round_trips() {
    let first = persisted_signal::<Vec<String>>("persisted-test-roundtrip", Vec::new);
    first.set(vec!["a".to_owned(), "b".to_owned()]);

    // A fresh binding under the same key simulates a reload.
    let second = persisted_signal::<Vec<String>>("persisted-test-roundtrip", Vec::new);
    assert_eq!(second.get(), vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn update_persists_mutated_value() {
    let bound = persisted_signal::<Vec<String>>("persisted-test-update", Vec::new);
    bound.update(|notes| notes.push("appended".to_owned()));
    bound.update(|notes| notes.push("again".to_owned()));

    let rehydrated = persisted_signal::<Vec<String>>("persisted-test-update", Vec::new);
    assert_eq!(rehydrated.get().len(), 2);
    assert_eq!(rehydrated.get()[1], "again");
}

#[test]
fn key_reports_bound_slot() {
    let bound = persisted_signal::<Vec<String>>("persisted-test-key", Vec::new);
    assert_eq!(bound.key(), "persisted-test-key");
}
