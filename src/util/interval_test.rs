#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// TickHandle
// =============================================================

#[test]
fn started_interval_is_active() {
    let handle = start_interval(1000, || {});
    assert!(handle.is_active());
}

#[test]
fn cancel_deactivates_interval() {
    let mut handle = start_interval(1000, || {});
    handle.cancel();
    assert!(!handle.is_active());
}

#[test]
fn cancel_twice_is_safe() {
    let mut handle = start_interval(1000, || {});
    handle.cancel();
    handle.cancel();
    assert!(!handle.is_active());
}

// =============================================================
// DelayHandle
// =============================================================

#[test]
fn started_delay_is_active() {
    let handle = start_delay(3000, || {});
    assert!(handle.is_active());
}

#[test]
fn cancel_deactivates_delay() {
    let mut handle = start_delay(3000, || {});
    handle.cancel();
    handle.cancel();
    assert!(!handle.is_active());
}

#[test]
fn forget_consumes_handle() {
    let handle = start_delay(1200, || {});
    handle.forget();
}
