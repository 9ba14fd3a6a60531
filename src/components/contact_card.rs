//! Form card: controlled fields, per-field validation, timed confirmation.
//!
//! A successful submission shows a confirmation for a fixed duration, then
//! resets every field. The confirmation timer is owned by the card and
//! cancelled on teardown so a reset never lands on an unmounted form.

use leptos::prelude::*;

use crate::components::demo_button::DemoButton;
use crate::state::contact::{CONFIRMATION_MS, ContactForm};
use crate::util::interval::{DelayHandle, start_delay};

#[component]
pub fn ContactCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let confirm_timer = StoredValue::new(None::<DelayHandle>);

    let on_submit = Callback::new(move |()| {
        let mut accepted = false;
        form.update(|f| accepted = f.submit());
        if !accepted {
            return;
        }
        let handle = start_delay(CONFIRMATION_MS, move || form.update(ContactForm::reset));
        confirm_timer.update_value(|slot| {
            if let Some(mut old) = slot.take() {
                old.cancel();
            }
            *slot = Some(handle);
        });
    });

    on_cleanup(move || {
        confirm_timer.update_value(|slot| {
            if let Some(mut handle) = slot.take() {
                handle.cancel();
            }
        });
    });

    view! {
        <Show
            when=move || !form.get().submitted
            fallback=|| view! {
                <p class="contact__confirmation">"Thanks! Your message was sent."</p>
            }
        >
            <form class="contact" on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <label class="field">
                    "Name"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                    />
                    <FieldError error=Signal::derive(move || form.get().errors.name)/>
                </label>
                <label class="field">
                    "Email"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <FieldError error=Signal::derive(move || form.get().errors.email)/>
                </label>
                <label class="field">
                    "Message"
                    <textarea
                        class="field__input field__input--area"
                        prop:value=move || form.get().message
                        on:input=move |ev| form.update(|f| f.set_message(event_target_value(&ev)))
                    ></textarea>
                    <FieldError error=Signal::derive(move || form.get().errors.message)/>
                </label>
                <div class="card__actions">
                    <DemoButton label="Send" on_press=on_submit/>
                </div>
            </form>
        </Show>
    }
}

/// Inline error slot under a field; renders nothing when the field is clean.
#[component]
fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <span class="field__error">{move || error.get().unwrap_or_default()}</span>
        </Show>
    }
}
