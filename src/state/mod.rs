//! Widget state machines and the ambient theme store.
//!
//! DESIGN
//! ======
//! Each widget owns one plain-Rust state struct whose methods are the only
//! transition surface. Components wrap these structs in `RwSignal` and wire
//! handlers to the methods, so every transition is natively unit-testable
//! without a browser. Nothing here is shared across widgets except the
//! theme store, which crosses widget boundaries via Leptos context.

pub mod checklist;
pub mod clock;
pub mod contact;
pub mod counter;
pub mod notes;
pub mod profile;
pub mod theme;
