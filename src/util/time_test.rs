#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn time_parts_format_zero_padded() {
    let parts = TimeParts {
        hour: 7,
        minute: 5,
        second: 9,
    };
    assert_eq!(parts.to_string(), "07:05:09");
}

#[test]
fn time_parts_format_two_digit_fields() {
    let parts = TimeParts {
        hour: 23,
        minute: 59,
        second: 58,
    };
    assert_eq!(parts.to_string(), "23:59:58");
}

#[test]
fn now_parts_is_in_range() {
    let parts = now_parts();
    assert!(parts.hour < 24);
    assert!(parts.minute < 60);
    assert!(parts.second < 60);
}
