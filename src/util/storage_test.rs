#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// load_json
// =============================================================

#[test]
fn load_json_missing_key_is_none() {
    let loaded: Option<Vec<String>> = load_json("storage-test-missing");
    assert!(loaded.is_none());
}

#[test]
fn load_json_incompatible_value_falls_back_to_none() {
    // A plain string does not parse as a string list.
    save_json("storage-test-corrupt", &"not a list".to_owned());
    let loaded: Option<Vec<String>> = load_json("storage-test-corrupt");
    assert!(loaded.is_none());
}

// =============================================================
// save_json + load_json round trip
// =============================================================

#[test]
fn save_then_load_round_trips() {
    let notes = vec!["first".to_owned(), "second".to_owned()];
    save_json("storage-test-roundtrip", &notes);
    let loaded: Option<Vec<String>> = load_json("storage-test-roundtrip");
    assert_eq!(loaded, Some(notes));
}

#[test]
fn save_overwrites_previous_value() {
    save_json("storage-test-overwrite", &1_u32);
    save_json("storage-test-overwrite", &2_u32);
    assert_eq!(load_json::<u32>("storage-test-overwrite"), Some(2));
}
