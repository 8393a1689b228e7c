use crate::contact::{ContactRequest, GateConfig};
use dioxus::prelude::*;

/// Run the contact gate on a posted form and forward it if it passes.
///
/// The browser checks the same rules first for instant feedback; nothing
/// here relies on that having happened.
#[dioxus::prelude::post("/api/contact")]
pub async fn submit_contact(request: ContactRequest) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = request;
        Err(ServerFnError::new("submit_contact is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!(
            "submit_contact: locale={} path={}",
            request.locale,
            request.from_path
        );
        let state = crate::state::AppState::global();
        server::forward(&state, request, chrono::Utc::now())
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}

/// Signed start time for a contact form that just mounted.
#[dioxus::prelude::get("/api/contact/token")]
pub async fn contact_form_token() -> Result<String, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("contact_form_token is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("contact_form_token");
        crate::state::AppState::global()
            .tokens
            .issue(chrono::Utc::now())
            .map_err(|e| {
                tracing::warn!("contact_form_token: {e:#}");
                ServerFnError::new("could not prepare the contact form")
            })
    }
}

/// Gate thresholds the browser should apply.
#[dioxus::prelude::get("/api/contact/settings")]
pub async fn contact_settings() -> Result<GateConfig, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("contact_settings is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("contact_settings");
        Ok(crate::state::AppState::global().config.gate.clone())
    }
}

#[cfg(feature = "server")]
pub mod server {
    use crate::contact::{validate_submission, BlockReason, ContactRequest, FieldError};
    use crate::form_token::TokenError;
    use crate::state::AppState;
    use chrono::{DateTime, Utc};
    use tracing::{info, warn};

    #[derive(Debug, thiserror::Error)]
    pub enum ForwardError {
        #[error("{0}, please reload the page")]
        Token(TokenError),
        #[error("submission rejected")]
        Blocked(BlockReason),
        #[error("invalid submission: {}", join_fields(.0))]
        Invalid(Vec<FieldError>),
        #[error("message could not be delivered, please try again later")]
        Delivery(anyhow::Error),
    }

    fn join_fields(errors: &[FieldError]) -> String {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Token, then honeypot, time-trap and content, then field rules. Only a
    /// request that clears all of them reaches the backend, and the trap
    /// value is dropped on the way.
    pub async fn forward(
        state: &AppState,
        request: ContactRequest,
        now: DateTime<Utc>,
    ) -> Result<(), ForwardError> {
        let started_at = state
            .tokens
            .verify(&request.form_token, now)
            .map_err(|e| {
                info!("submissions.forward: {e}");
                ForwardError::Token(e)
            })?;

        let (draft, context) = request.into_draft(started_at);
        let submission = state.gate().evaluate(&draft, now, context).map_err(|reason| {
            info!("submissions.forward: blocked reason={:?}", reason);
            ForwardError::Blocked(reason)
        })?;

        validate_submission(&submission).map_err(ForwardError::Invalid)?;

        state.forms.deliver(&submission).await.map_err(|e| {
            warn!("submissions.forward: delivery failed: {e:#}");
            ForwardError::Delivery(e)
        })
    }
}
