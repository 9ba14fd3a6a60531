//! Ambient-state card: reads and flips the theme from context.
//!
//! Nothing is threaded through intermediate components; the card reaches
//! the store with `use_theme` and would panic loudly if rendered outside
//! the provider.

use leptos::prelude::*;

use crate::state::theme::{Theme, use_theme};

#[component]
pub fn ThemeCard() -> impl IntoView {
    let store = use_theme();

    let glyph = move || match store.theme() {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    view! {
        <div class="theme">
            <p class="theme__readout">
                "Current theme: "
                <code>{move || store.theme().as_attr()}</code>
            </p>
            <div class="card__actions">
                <button
                    class="btn btn--secondary"
                    title="Toggle theme"
                    on:click=move |_| store.toggle()
                >
                    {glyph}
                    " Toggle"
                </button>
            </div>
            <p class="theme__hint">
                "The whole page restyles because the store mirrors the flag onto "
                <code>"data-theme"</code>
                "."
            </p>
        </div>
    }
}
