//! Mirrors the theme flag onto the document element.
//!
//! Writes a `data-theme` attribute on `<html>` so stylesheet rules can key
//! off the current theme without every consumer re-deriving it. Requires a
//! browser environment; native builds no-op.

use crate::state::theme::Theme;

/// Apply the `data-theme` attribute for `theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_attr());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
