//! Persisted notes card with memoized statistics.
//!
//! The list is bound to local storage through `persisted_signal`, so it
//! survives reloads; the statistics line is a `Memo` over the list and
//! recomputes only when the list itself changes, not on unrelated renders.

use leptos::prelude::*;

use crate::state::notes::{LONG_NOTE_THRESHOLD, NOTES_KEY, append_note, note_stats};
use crate::util::persisted::persisted_signal;

#[component]
pub fn NotesCard() -> impl IntoView {
    let notes = persisted_signal::<Vec<String>>(NOTES_KEY, Vec::new);
    let draft = RwSignal::new(String::new());

    let stats = Memo::new(move |_| note_stats(&notes.get()));

    let submit_draft = move || {
        let text = draft.get_untracked();
        let mut added = false;
        notes.update(|list| added = append_note(list, &text));
        if added {
            draft.set(String::new());
        }
    };

    view! {
        <div class="notes">
            <div class="notes__add">
                <input
                    class="field__input"
                    type="text"
                    placeholder="Write a note"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit_draft();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| submit_draft()>
                    "Add note"
                </button>
            </div>
            <Show
                when=move || !notes.get().is_empty()
                fallback=|| view! { <p class="notes__empty">"No notes yet — they survive reloads."</p> }
            >
                <ul class="notes__items">
                    {move || {
                        notes
                            .get()
                            .into_iter()
                            .map(|note| view! { <li class="notes__item">{note}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
            <p class="notes__stats">
                {move || {
                    let s = stats.get();
                    format!(
                        "{} notes, {} longer than {} chars, average length {}",
                        s.total, s.long, LONG_NOTE_THRESHOLD, s.average_len
                    )
                }}
            </p>
        </div>
    }
}
