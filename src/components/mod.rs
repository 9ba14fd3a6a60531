//! Widget cards and shared visual primitives.
//!
//! SYSTEM CONTEXT
//! ==============
//! One file per card; each card owns its state signal and wires handlers to
//! the plain-Rust transition methods in `crate::state`. Nothing is shared
//! across cards except the ambient theme context.

pub mod button_row;
pub mod checklist_card;
pub mod clock_card;
pub mod contact_card;
pub mod counter_card;
pub mod demo_button;
pub mod notes_card;
pub mod profile_card;
pub mod section;
pub mod theme_card;
