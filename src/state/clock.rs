#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use crate::util::time::TimeParts;

/// Tick period for the live clock display.
pub const TICK_PERIOD_MS: u32 = 1000;

/// State for the lifecycle clock card: the last stamped wall-clock time.
///
/// `tick` takes explicit time parts so tests drive the clock; the component
/// layer feeds it `time::now_parts()` from its interval callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockState {
    pub time: Option<TimeParts>,
    pub ticks: u64,
}

impl ClockState {
    /// Stamp a new wall-clock reading.
    pub fn tick(&mut self, now: TimeParts) {
        self.time = Some(now);
        self.ticks += 1;
    }

    /// Readout string, or a placeholder before the first tick.
    #[must_use]
    pub fn display(&self) -> String {
        match self.time {
            Some(parts) => parts.to_string(),
            None => "--:--:--".to_owned(),
        }
    }
}
