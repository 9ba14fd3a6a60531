//! Root application component.
//!
//! Provides the ambient theme store and composes the eight numbered
//! sections. Control flow is strictly top-down; no card talks to another
//! except through the theme context.

use leptos::prelude::*;

use crate::components::button_row::ButtonRow;
use crate::components::checklist_card::ChecklistCard;
use crate::components::clock_card::ClockCard;
use crate::components::contact_card::ContactCard;
use crate::components::counter_card::CounterCard;
use crate::components::notes_card::NotesCard;
use crate::components::profile_card::ProfileCard;
use crate::components::section::PatternSection;
use crate::components::theme_card::ThemeCard;
use crate::state::theme::ThemeStore;

#[component]
pub fn App() -> impl IntoView {
    ThemeStore::provide();

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Pattern Board"</h1>
                <p class="page__tagline">
                    "Eight introductory UI patterns, one interactive card each."
                </p>
            </header>
            <main class="page__grid">
                <PatternSection
                    number=1
                    title="Local state"
                    lesson="A widget owns its own value and the handlers that change it."
                >
                    <CounterCard/>
                </PatternSection>
                <PatternSection
                    number=2
                    title="Lifecycle side effects"
                    lesson="Every scheduled tick is cancelled on unmount; re-mounting starts fresh."
                >
                    <ClockCard/>
                </PatternSection>
                <PatternSection
                    number=3
                    title="Composition via parameters"
                    lesson="One button primitive, many configurations; behavior arrives as props."
                >
                    <ButtonRow/>
                </PatternSection>
                <PatternSection
                    number=4
                    title="Conditional rendering"
                    lesson="Loading, error, and loaded are three distinct views of one state."
                >
                    <ProfileCard/>
                </PatternSection>
                <PatternSection
                    number=5
                    title="Lists with stable identity"
                    lesson="Keyed rows keep their identity when siblings change."
                >
                    <ChecklistCard/>
                </PatternSection>
                <PatternSection
                    number=6
                    title="Form handling"
                    lesson="Controlled fields, per-field errors, and a timed confirmation."
                >
                    <ContactCard/>
                </PatternSection>
                <PatternSection
                    number=7
                    title="Ambient state"
                    lesson="Any descendant reads and flips the theme without prop threading."
                >
                    <ThemeCard/>
                </PatternSection>
                <PatternSection
                    number=8
                    title="Persistence and derived state"
                    lesson="Notes hydrate from storage; statistics recompute only when notes change."
                >
                    <NotesCard/>
                </PatternSection>
            </main>
            <footer class="page__footer">
                "State lives in plain Rust structs with unit tests; the cards just render it."
            </footer>
        </div>
    }
}
