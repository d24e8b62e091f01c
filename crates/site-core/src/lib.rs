//! Platform-independent logic for the site frontend.
//!
//! Everything here is pure: no DOM, no timers, no globals. The wasm crate
//! owns the wiring; this crate owns the decisions, so the observable
//! behavior stays testable on the native target.

pub mod analytics;
pub mod contact;
pub mod menu;
pub mod phone;
pub mod scroll;
pub mod slideshow;
