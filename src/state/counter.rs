#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// State for the local-state counter card.
///
/// The value is unbounded in both directions; the displayed number always
/// equals the arithmetic sum of steps since the last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn decrement(&mut self) {
        self.value -= 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
