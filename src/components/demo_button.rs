//! Shared button primitive used across the cards.

#[cfg(test)]
#[path = "demo_button_test.rs"]
mod demo_button_test;

use leptos::prelude::*;

/// Visual flavors of [`DemoButton`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// CSS class list for a variant.
#[must_use]
pub fn button_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "btn btn--primary",
        ButtonVariant::Secondary => "btn btn--secondary",
        ButtonVariant::Danger => "btn btn--danger",
    }
}

/// A labeled button configured entirely through parameters: variant,
/// optional reactive disabled flag, and a press callback.
#[component]
pub fn DemoButton(
    #[prop(into)] label: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: Signal<bool>,
    on_press: Callback<()>,
) -> impl IntoView {
    view! {
        // Explicit type: inside a form a bare <button> would also submit.
        <button
            type="button"
            class=button_class(variant)
            disabled=move || disabled.get()
            on:click=move |_| on_press.run(())
        >
            {label}
        </button>
    }
}
