//! Numbered section wrapper arranging one card under a heading.

use leptos::prelude::*;

/// One dashboard section: number, title, a one-line lesson caption, and the
/// card it frames.
#[component]
pub fn PatternSection(
    number: u8,
    #[prop(into)] title: String,
    #[prop(into)] lesson: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="section">
            <header class="section__header">
                <span class="section__number">{format!("{number:02}")}</span>
                <h2 class="section__title">{title}</h2>
            </header>
            <p class="section__lesson">{lesson}</p>
            <div class="card">{children()}</div>
        </section>
    }
}
