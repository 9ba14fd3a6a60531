//! Keyed list card: stable row identity across toggles and edits.
//!
//! Rows are keyed on the item id alone, so toggling a flag re-renders the
//! flag readout (a reactive per-row lookup) without recreating the row.

use leptos::prelude::*;

use crate::state::checklist::{ChecklistItem, ChecklistState};

#[component]
pub fn ChecklistCard() -> impl IntoView {
    let list = RwSignal::new(ChecklistState::default());
    let draft = RwSignal::new(String::new());

    let submit_draft = move || {
        let label = draft.get_untracked();
        let mut added = false;
        list.update(|l| added = l.add(&label));
        if added {
            draft.set(String::new());
        }
    };

    let summary = move || {
        let l = list.get();
        format!(
            "{} of {} done ({:.0}%)",
            l.completed_count(),
            l.items.len(),
            l.completion_ratio() * 100.0
        )
    };

    view! {
        <div class="checklist">
            <ul class="checklist__items">
                <For
                    each=move || list.get().items.clone()
                    key=|item| item.id
                    children=move |item: ChecklistItem| {
                        let id = item.id;
                        let done = move || list.with(|l| l.is_done(id));
                        view! {
                            <li class="checklist__item">
                                <label class="checklist__label">
                                    <input
                                        type="checkbox"
                                        prop:checked=done
                                        on:change=move |_| list.update(|l| l.toggle(id))
                                    />
                                    <span class=move || {
                                        if done() {
                                            "checklist__text checklist__text--done"
                                        } else {
                                            "checklist__text"
                                        }
                                    }>
                                        {item.label.clone()}
                                    </span>
                                </label>
                                <button
                                    class="checklist__remove"
                                    title="Remove item"
                                    on:click=move |_| list.update(|l| l.remove(id))
                                >
                                    "✕"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <div class="checklist__add">
                <input
                    class="field__input"
                    type="text"
                    placeholder="New item"
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
                    "Add"
                </button>
            </div>
            <p class="checklist__summary">{summary}</p>
        </div>
    }
}
