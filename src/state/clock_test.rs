use super::*;

fn parts(hour: u32, minute: u32, second: u32) -> TimeParts {
    TimeParts {
        hour,
        minute,
        second,
    }
}

#[test]
fn clock_starts_unstamped() {
    let clock = ClockState::default();
    assert_eq!(clock.ticks, 0);
    assert_eq!(clock.display(), "--:--:--");
}

#[test]
fn tick_stamps_injected_time() {
    let mut clock = ClockState::default();
    clock.tick(parts(14, 30, 5));
    assert_eq!(clock.display(), "14:30:05");
    assert_eq!(clock.ticks, 1);
}

#[test]
fn one_state_update_per_tick() {
    let mut clock = ClockState::default();
    for second in 0..5 {
        clock.tick(parts(9, 0, second));
    }
    assert_eq!(clock.ticks, 5);
    assert_eq!(clock.display(), "09:00:04");
}

#[test]
fn no_updates_without_tick_calls() {
    // Cancellation is enforced at the timer layer; once the interval stops
    // calling tick, the state stays frozen.
    let mut clock = ClockState::default();
    clock.tick(parts(9, 0, 0));
    let frozen = clock;
    assert_eq!(clock, frozen);
    assert_eq!(clock.ticks, 1);
}
