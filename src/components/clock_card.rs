//! Lifecycle clock card: a ticking display with mandatory cleanup.
//!
//! The visibility toggle mounts and unmounts [`ClockDisplay`]. Mounting
//! schedules a recurring tick; unmounting cancels it through `on_cleanup`.
//! Re-showing the clock mounts a fresh display with a fresh handle — a
//! leaked interval here is a correctness bug, not cosmetics.

use leptos::prelude::*;

use crate::components::demo_button::{ButtonVariant, DemoButton};
use crate::state::clock::{ClockState, TICK_PERIOD_MS};
use crate::util::interval::start_interval;
use crate::util::time;

/// Visibility toggle around the ticking display.
#[component]
pub fn ClockCard() -> impl IntoView {
    let shown = RwSignal::new(true);
    let on_toggle = Callback::new(move |()| shown.update(|s| *s = !*s));

    view! {
        <div class="clock">
            <Show
                when=move || shown.get()
                fallback=|| view! { <p class="clock__readout clock__readout--off">"Clock unmounted"</p> }
            >
                <ClockDisplay/>
            </Show>
            <div class="card__actions">
                <DemoButton
                    label="Mount / unmount clock"
                    variant=ButtonVariant::Secondary
                    on_press=on_toggle
                />
            </div>
        </div>
    }
}

/// The ticking readout. Owns the interval for exactly its own lifetime.
#[component]
fn ClockDisplay() -> impl IntoView {
    let clock = RwSignal::new(ClockState::default());

    // First stamp immediately so the readout never shows the placeholder
    // while mounted.
    clock.update(|c| c.tick(time::now_parts()));

    let handle = start_interval(TICK_PERIOD_MS, move || {
        clock.update(|c| c.tick(time::now_parts()));
    });
    on_cleanup(move || {
        let mut handle = handle;
        handle.cancel();
    });

    view! { <p class="clock__readout">{move || clock.get().display()}</p> }
}
