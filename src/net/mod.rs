//! Networking modules for the activities backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and URL construction, `types` defines the wire
//! schema shared with the backend service.

pub mod api;
pub mod types;
