//! Utility helpers isolating browser/environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches the browser (localStorage, timers, the wall
//! clock, `Math.random`, the document element) lives here behind the `csr`
//! feature, with native fallbacks so state logic stays unit-testable off
//! the browser.

pub mod interval;
pub mod persisted;
pub mod random;
pub mod storage;
pub mod theme_dom;
pub mod time;
