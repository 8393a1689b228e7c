//! Shared domain types and fullstack server functions for the site.
use dioxus::prelude::*;

pub mod config;
pub mod contact;
pub mod locale;

#[cfg(feature = "server")]
pub mod form_token;

#[cfg(feature = "server")]
pub mod forms;

#[cfg(feature = "server")]
pub mod state;

mod submissions;

#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

pub use contact::{
    BlockReason, ContactDraft, ContactField, ContactGate, ContactRequest, ContactSubmission,
    GateConfig, GateState, SubmissionContext, MESSAGE_MAX_CHARS,
};
pub use locale::Locale;
pub use submissions::{contact_form_token, contact_settings, submit_contact};

#[cfg(feature = "server")]
pub use submissions::server::{forward, ForwardError};
