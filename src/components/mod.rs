//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board chrome (filter toolbar, activity cards,
//! signup form, message area) while reading/writing shared state from
//! Leptos context providers.

pub mod activity_card;
pub mod filters_toolbar;
pub mod message_area;
pub mod signup_form;
