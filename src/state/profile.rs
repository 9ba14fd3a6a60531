//! Simulated profile fetch with a nondeterministic outcome.
//!
//! DESIGN
//! ======
//! The fetch is a fixed-delay timer plus one uniform roll; the outcome
//! function is pure in the roll so tests pin both branches. Roughly 30% of
//! fetches fail to exercise the three-way loading / error / loaded render.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// Simulated network latency.
pub const FETCH_DELAY_MS: u32 = 1200;

/// Fraction of rolls that come back as a transient failure.
pub const FAILURE_RATE: f64 = 0.3;

/// Fixed demo payload returned by every successful fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub joined: String,
}

impl Profile {
    #[must_use]
    pub fn demo() -> Self {
        Self {
            name: "Ada Lovelace".to_owned(),
            role: "Analytical Engine Programmer".to_owned(),
            joined: "December 1842".to_owned(),
        }
    }
}

/// The three-way fetch state rendered by the profile card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileFetch {
    Loading,
    Loaded(Profile),
    Failed,
}

impl ProfileFetch {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileFetch::Loading)
    }
}

/// Resolve an outcome from a uniform roll in `[0, 1)`.
#[must_use]
pub fn fetch_outcome(roll: f64) -> ProfileFetch {
    if roll < FAILURE_RATE {
        ProfileFetch::Failed
    } else {
        ProfileFetch::Loaded(Profile::demo())
    }
}
