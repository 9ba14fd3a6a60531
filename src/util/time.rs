//! Wall-clock time source.
//!
//! State transitions take explicit [`TimeParts`] so tests control the clock;
//! only the component layer calls [`now_parts`].

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use std::fmt;

/// Hour/minute/second snapshot of the local wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeParts {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Read the current wall-clock time.
///
/// Browser builds use the JS `Date` (local time zone); native builds derive
/// a UTC time-of-day from the system clock, which is enough for tests.
pub fn now_parts() -> TimeParts {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new_0();
        TimeParts {
            hour: date.get_hours(),
            minute: date.get_minutes(),
            second: date.get_seconds(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let day_secs = u32::try_from(secs % 86_400).unwrap_or(0);
        TimeParts {
            hour: day_secs / 3600,
            minute: (day_secs / 60) % 60,
            second: day_secs % 60,
        }
    }
}
