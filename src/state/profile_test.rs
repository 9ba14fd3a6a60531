use super::*;

// =============================================================
// Outcome resolution
// =============================================================

#[test]
fn roll_below_threshold_fails() {
    assert_eq!(fetch_outcome(0.0), ProfileFetch::Failed);
    assert_eq!(fetch_outcome(0.29), ProfileFetch::Failed);
}

#[test]
fn roll_at_or_above_threshold_loads_demo_profile() {
    assert_eq!(fetch_outcome(0.3), ProfileFetch::Loaded(Profile::demo()));
    assert_eq!(fetch_outcome(0.99), ProfileFetch::Loaded(Profile::demo()));
}

#[test]
fn failure_is_distinct_from_loading() {
    let failed = fetch_outcome(0.1);
    assert!(!failed.is_loading());
    assert_ne!(failed, ProfileFetch::Loading);
}

// =============================================================
// Demo payload
// =============================================================

#[test]
fn demo_profile_fields_are_nonempty() {
    let profile = Profile::demo();
    assert!(!profile.name.is_empty());
    assert!(!profile.role.is_empty());
    assert!(!profile.joined.is_empty());
}
