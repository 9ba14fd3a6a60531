//! Best-effort JSON key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes browser `localStorage` read/write glue so widgets can persist
//! values without repeating web-sys plumbing. Native builds use a
//! process-local map so unit tests can exercise hydration and round-trips.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is strictly best-effort: absence, parse failures, and write
//! failures are logged at `warn` and swallowed. Callers always proceed with
//! their in-memory value.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(not(feature = "csr"))]
use std::collections::HashMap;
#[cfg(not(feature = "csr"))]
use std::sync::{Mutex, OnceLock};

/// In-memory stand-in for `localStorage` on native builds.
#[cfg(not(feature = "csr"))]
fn memory() -> &'static Mutex<HashMap<String, String>> {
    static MAP: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    MAP.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Read the raw string stored under `key`, if any.
fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        match storage.get_item(key) {
            Ok(raw) => raw,
            Err(_) => {
                log::warn!("storage: read of {key:?} failed");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        memory().lock().ok()?.get(key).cloned()
    }
}

/// Write `raw` under `key`, logging on failure.
fn save_raw(key: &str, raw: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("storage: localStorage unavailable, dropping write to {key:?}");
            return;
        };
        if storage.set_item(key, raw).is_err() {
            log::warn!("storage: write to {key:?} failed");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        if let Ok(mut map) = memory().lock() {
            map.insert(key.to_owned(), raw.to_owned());
        }
    }
}

/// Load and deserialize a JSON value stored under `key`.
///
/// Returns `None` when the slot is absent or holds content that does not
/// deserialize as `T`; the caller falls back to its own default.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("storage: stored value for {key:?} did not parse: {err}");
            None
        }
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_raw(key, &raw),
        Err(err) => {
            log::warn!("storage: value for {key:?} did not serialize: {err}");
        }
    }
}
