//! Conditional-rendering card: simulated fetch with three-way state.
//!
//! The fetch is a one-shot timer whose callback is deliberately not
//! cancelled on unmount; an alive flag guards against applying a result to
//! a card that is no longer mounted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::demo_button::DemoButton;
use crate::state::profile::{FETCH_DELAY_MS, Profile, ProfileFetch, fetch_outcome};
use crate::util::interval::start_delay;
use crate::util::random;

#[component]
pub fn ProfileCard() -> impl IntoView {
    let fetch = RwSignal::new(ProfileFetch::Loading);
    let alive = Arc::new(AtomicBool::new(true));

    let begin = {
        let alive = Arc::clone(&alive);
        move || {
            fetch.set(ProfileFetch::Loading);
            let alive = Arc::clone(&alive);
            start_delay(FETCH_DELAY_MS, move || {
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let outcome = fetch_outcome(random::roll());
                log::debug!(
                    "profile fetch resolved: {}",
                    if matches!(outcome, ProfileFetch::Failed) { "failed" } else { "loaded" }
                );
                fetch.set(outcome);
            })
            .forget();
        }
    };

    // Kick off the first fetch on mount.
    begin();

    let on_retry = {
        let begin = begin.clone();
        Callback::new(move |()| begin())
    };

    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="profile">
            {move || match fetch.get() {
                ProfileFetch::Loading => view! {
                    <p class="profile__loading">"Loading profile..."</p>
                }
                .into_any(),
                ProfileFetch::Failed => view! {
                    <div class="profile__error">
                        <p>"The simulated request failed. It does that about 30% of the time."</p>
                        <DemoButton label="Retry" on_press=on_retry/>
                    </div>
                }
                .into_any(),
                ProfileFetch::Loaded(profile) => profile_view(&profile).into_any(),
            }}
        </div>
    }
}

fn profile_view(profile: &Profile) -> impl IntoView {
    view! {
        <dl class="profile__fields">
            <dt>"Name"</dt>
            <dd>{profile.name.clone()}</dd>
            <dt>"Role"</dt>
            <dd>{profile.role.clone()}</dd>
            <dt>"Joined"</dt>
            <dd>{profile.joined.clone()}</dd>
        </dl>
    }
}
