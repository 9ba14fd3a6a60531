//! Ambient theme store shared through Leptos context.
//!
//! DESIGN
//! ======
//! The page-wide theme flag is an explicit context object, never a bare
//! mutable global: the root provides [`ThemeStore`] once, descendants reach
//! it with [`use_theme`], and any consumer outside the provider scope gets
//! a loud panic instead of a silent default. Every flag change is mirrored
//! onto the document's `data-theme` attribute by an effect registered at
//! provide time.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::theme_dom;

/// The two page themes. Always exactly one of these; the page starts light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme. Two flips return the original value.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Attribute value written to `data-theme`.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Context handle for the page-wide theme flag.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
}

impl ThemeStore {
    /// Create the store with [`Theme::Light`], register the document
    /// attribute mirror, and provide it to the component tree.
    pub fn provide() -> Self {
        let store = Self {
            theme: RwSignal::new(Theme::Light),
        };
        // Runs once for the initial value and again on every change.
        Effect::new(move || theme_dom::apply(store.theme.get()));
        provide_context(store);
        store
    }

    /// Current theme, tracked reactively.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip `Light <-> Dark`.
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.flipped());
    }
}

/// Reach the ambient theme store from anywhere under the provider.
///
/// # Panics
///
/// Panics when called outside the [`ThemeStore::provide`] scope. That is a
/// usage error in the caller and must surface immediately, not default.
pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>()
        .expect("use_theme must be called inside the ThemeStore provider scope")
}
