//! Composition showcase: one shared primitive, several configurations.
//!
//! Every button below is the same [`DemoButton`] component parameterized
//! with a different label, variant, and callback; the press log proves the
//! callbacks flow through parameters rather than shared state.

use leptos::prelude::*;

use crate::components::demo_button::{ButtonVariant, DemoButton};

#[component]
pub fn ButtonRow() -> impl IntoView {
    let presses = RwSignal::new(Vec::<String>::new());

    let record = move |what: &'static str| {
        presses.update(|log| log.push(what.to_owned()));
    };

    let on_primary = Callback::new(move |()| record("primary"));
    let on_secondary = Callback::new(move |()| record("secondary"));
    let on_danger = Callback::new(move |()| record("danger"));
    let on_clear = Callback::new(move |()| presses.update(Vec::clear));

    let last_press = move || {
        presses
            .get()
            .last()
            .map_or_else(|| "nothing yet".to_owned(), Clone::clone)
    };

    view! {
        <div class="button-row">
            <div class="card__actions">
                <DemoButton label="Primary" on_press=on_primary/>
                <DemoButton label="Secondary" variant=ButtonVariant::Secondary on_press=on_secondary/>
                <DemoButton label="Danger" variant=ButtonVariant::Danger on_press=on_danger/>
                <DemoButton
                    label="Clear log"
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || presses.get().is_empty())
                    on_press=on_clear
                />
            </div>
            <p class="button-row__log">
                {move || format!("{} presses, last: {}", presses.get().len(), last_press())}
            </p>
        </div>
    }
}
