//! Signal bound to a named storage slot.
//!
//! DESIGN
//! ======
//! Hydration is synchronous: the initial value is computed from storage at
//! binding creation, falling back to the caller's default. There is no late
//! rehydration effect, so no write can be clobbered by a stale hydration
//! read. Writes update the in-memory signal first and then persist
//! best-effort; a failed persist never rolls back the in-memory value.

#[cfg(test)]
#[path = "persisted_test.rs"]
mod persisted_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::storage;

/// An `RwSignal` whose value mirrors a JSON slot in durable storage.
pub struct PersistedSignal<T: Send + Sync + 'static> {
    value: RwSignal<T>,
    key: &'static str,
}

impl<T: Send + Sync + 'static> Clone for PersistedSignal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PersistedSignal<T> {}

/// Bind a signal to the storage slot named `key`.
///
/// A stored value that deserializes as `T` wins over `default_fn`; absence
/// or a parse failure falls back to `default_fn()`.
pub fn persisted_signal<T>(key: &'static str, default_fn: impl FnOnce() -> T) -> PersistedSignal<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let initial = storage::load_json(key).unwrap_or_else(default_fn);
    PersistedSignal {
        value: RwSignal::new(initial),
        key,
    }
}

impl<T> PersistedSignal<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Current value, tracked reactively.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.get()
    }

    /// Replace the value and persist it best-effort.
    pub fn set(&self, value: T) {
        self.value.set(value);
        self.persist();
    }

    /// Mutate the value in place and persist it best-effort.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.value.update(f);
        self.persist();
    }

    /// The storage key this binding writes to.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    fn persist(&self) {
        self.value.with_untracked(|v| storage::save_json(self.key, v));
    }
}
