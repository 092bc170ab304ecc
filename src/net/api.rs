//! REST API helpers for the activities backend.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`. Native builds get
//! stubs that error, which keeps URL construction and state logic testable
//! off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Catalog fetch failures collapse to a display string; action failures keep
//! the backend rejection distinct from transport errors so callers can word
//! the notice per action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

#[cfg(feature = "csr")]
use super::types::{ActionRejection, ActionReply};
use super::types::Catalog;

/// Escapes every byte a browser's component encoder would: everything but
/// alphanumerics and the unreserved marks `- _ . ! ~ * ' ( )`.
#[cfg(any(test, feature = "csr"))]
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Failure modes for signup and unregister calls.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The backend answered with a non-success status. Carries its `detail`
    /// field when present, otherwise a generic fallback.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a usable response.
    #[error("transport: {0}")]
    Transport(String),
}

#[cfg(any(test, feature = "csr"))]
fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

#[cfg(any(test, feature = "csr"))]
fn activities_endpoint() -> &'static str {
    "/activities"
}

#[cfg(any(test, feature = "csr"))]
fn signup_endpoint(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

#[cfg(any(test, feature = "csr"))]
fn unregister_endpoint(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

#[cfg(any(test, feature = "csr"))]
fn rejection_message(detail: Option<String>) -> String {
    detail.unwrap_or_else(|| "An error occurred".to_owned())
}

/// Fixed notice copy for a signup that never reached the backend.
pub fn signup_failed_copy() -> &'static str {
    "Failed to sign up. Please try again."
}

/// Fixed notice copy for an unregister that never reached the backend.
pub fn unregister_failed_copy() -> &'static str {
    "Failed to unregister. Please try again."
}

/// Fetch the full activity catalog via `GET /activities`.
///
/// # Errors
///
/// Returns a display string when the request fails, the backend answers with
/// a non-success status, or the body does not parse as a catalog.
pub async fn fetch_activities() -> Result<Catalog, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(activities_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("catalog request failed: {}", resp.status()));
        }
        resp.json::<Catalog>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available off-browser".to_owned())
    }
}

/// Sign an email up via `POST /activities/{name}/signup?email={email}`.
///
/// Returns the backend's confirmation message.
///
/// # Errors
///
/// `ActionError::Rejected` for a non-success status, `ActionError::Transport`
/// when no usable response arrived.
pub async fn signup(activity: &str, email: &str) -> Result<String, ActionError> {
    #[cfg(feature = "csr")]
    {
        send_action(gloo_net::http::Request::post(&signup_endpoint(activity, email))).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (activity, email);
        Err(ActionError::Transport("not available off-browser".to_owned()))
    }
}

/// Remove an email via `DELETE /activities/{name}/unregister?email={email}`.
///
/// Returns the backend's confirmation message.
///
/// # Errors
///
/// Same contract as [`signup`].
pub async fn unregister(activity: &str, email: &str) -> Result<String, ActionError> {
    #[cfg(feature = "csr")]
    {
        send_action(gloo_net::http::Request::delete(&unregister_endpoint(activity, email))).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (activity, email);
        Err(ActionError::Transport("not available off-browser".to_owned()))
    }
}

#[cfg(feature = "csr")]
async fn send_action(request: gloo_net::http::RequestBuilder) -> Result<String, ActionError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ActionError::Transport(e.to_string()))?;
    if resp.ok() {
        let body: ActionReply = resp
            .json()
            .await
            .map_err(|e| ActionError::Transport(e.to_string()))?;
        Ok(body.message)
    } else {
        let detail = resp
            .json::<ActionRejection>()
            .await
            .ok()
            .and_then(|rejection| rejection.detail);
        Err(ActionError::Rejected(rejection_message(detail)))
    }
}
