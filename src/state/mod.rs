//! Client-side state with pure transitions.
//!
//! DESIGN
//! ======
//! Catalog, filter, and notice state are plain values mutated through
//! explicit methods, so every transition is unit-testable without a DOM.
//! Components wrap them in `RwSignal`s provided via context and re-render
//! reactively.

pub mod catalog;
pub mod filters;
pub mod notice;
