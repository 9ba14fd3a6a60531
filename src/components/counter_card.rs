//! Local-state counter card.

use leptos::prelude::*;

use crate::components::demo_button::{ButtonVariant, DemoButton};
use crate::state::counter::CounterState;

/// Unbounded counter with increment, decrement, and reset.
#[component]
pub fn CounterCard() -> impl IntoView {
    let counter = RwSignal::new(CounterState::default());

    let on_increment = Callback::new(move |()| counter.update(CounterState::increment));
    let on_decrement = Callback::new(move |()| counter.update(CounterState::decrement));
    let on_reset = Callback::new(move |()| counter.update(CounterState::reset));

    view! {
        <div class="counter">
            <p class="counter__value">{move || counter.get().value}</p>
            <div class="card__actions">
                <DemoButton label="-1" variant=ButtonVariant::Secondary on_press=on_decrement/>
                <DemoButton label="+1" on_press=on_increment/>
                <DemoButton label="Reset" variant=ButtonVariant::Danger on_press=on_reset/>
            </div>
        </div>
    }
}
