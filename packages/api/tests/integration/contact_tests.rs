use api::contact::{BlockReason, ContactDraft, ContactField, ContactRequest, SubmissionContext};
use api::form_token::TokenError;
use api::test_utils::{RecordingFormBackend, TestContext};
use api::{forward, ForwardError, Locale};
use chrono::{DateTime, Duration, Utc};

fn filled_draft(message: &str) -> ContactDraft {
    let mut draft = ContactDraft::new(Utc::now());
    draft.set_field(ContactField::FirstName, "Mehmet".into());
    draft.set_field(ContactField::LastName, "Demir".into());
    draft.set_field(ContactField::Email, "mehmet@firma.com.tr".into());
    draft.set_field(ContactField::Message, message.into());
    draft
}

fn context() -> SubmissionContext {
    SubmissionContext {
        subject: "Origami İletişim Formu".into(),
        from_path: "/".into(),
        locale: Locale::Tr,
    }
}

/// Request for a form that was loaded `loaded_ago` before `now`.
fn request(ctx: &TestContext, draft: &ContactDraft, now: DateTime<Utc>, loaded_ago: Duration) -> ContactRequest {
    ContactRequest::new(draft, ctx.form_token(now - loaded_ago), context())
}

#[tokio::test]
async fn test_clean_submission_is_delivered_once() {
    let ctx = TestContext::new();
    ctx.set_global();
    let now = Utc::now();

    let draft = filled_draft("Üretim modülü için teklif rica ederiz.");
    let result = forward(&ctx.state, request(&ctx, &draft, now, Duration::seconds(10)), now).await;

    assert!(result.is_ok(), "Forwarding should succeed: {result:?}");
    let delivered = ctx.forms.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].first_name, "Mehmet");
    assert_eq!(delivered[0].message, draft.message);
    assert_eq!(delivered[0].subject, "Origami İletişim Formu");
}

#[tokio::test]
async fn test_immediate_post_is_too_fast() {
    let ctx = TestContext::new();
    let now = Utc::now();

    // Token fetched and posted straight away, as a script would.
    let draft = filled_draft("Merhaba");
    let result = forward(&ctx.state, request(&ctx, &draft, now, Duration::zero()), now).await;

    assert!(matches!(result, Err(ForwardError::Blocked(BlockReason::TooFast))));
    assert!(ctx.forms.delivered().is_empty());
}

#[tokio::test]
async fn test_filled_trap_is_rejected() {
    let ctx = TestContext::new();
    let now = Utc::now();

    let mut draft = filled_draft("Merhaba");
    draft.set_field(ContactField::Honeypot, "Acme Ltd".into());
    let result = forward(&ctx.state, request(&ctx, &draft, now, Duration::minutes(5)), now).await;

    assert!(matches!(result, Err(ForwardError::Blocked(BlockReason::Honeypot))));
    assert!(ctx.forms.delivered().is_empty());
}

#[tokio::test]
async fn test_post_without_token_is_rejected() {
    let ctx = TestContext::new();
    let now = Utc::now();

    let draft = filled_draft("Merhaba");
    let result = forward(&ctx.state, ContactRequest::new(&draft, "", context()), now).await;
    assert!(matches!(result, Err(ForwardError::Token(TokenError::Missing))));

    let forged = ContactRequest::new(&draft, "eyJhbGciOiJIUzI1NiJ9.e30.c2ln", context());
    let result = forward(&ctx.state, forged, now).await;
    assert!(matches!(result, Err(ForwardError::Token(TokenError::Invalid))));

    assert!(ctx.forms.delivered().is_empty());
}

#[tokio::test]
async fn test_expired_form_asks_for_reload() {
    let ctx = TestContext::new();
    let now = Utc::now();

    let draft = filled_draft("Merhaba");
    let result = forward(&ctx.state, request(&ctx, &draft, now, Duration::hours(3)), now).await;

    let error = result.expect_err("stale form must be rejected");
    assert!(matches!(error, ForwardError::Token(TokenError::Expired)));
    assert!(error.to_string().contains("reload"));
}

#[tokio::test]
async fn test_server_repeats_content_check() {
    let ctx = TestContext::new();
    let now = Utc::now();

    let draft = filled_draft("cheap LOAN offers");
    let result = forward(&ctx.state, request(&ctx, &draft, now, Duration::seconds(30)), now).await;

    assert!(matches!(
        result,
        Err(ForwardError::Blocked(BlockReason::SpamContent))
    ));
    assert!(ctx.forms.delivered().is_empty());
}

#[tokio::test]
async fn test_invalid_fields_are_rejected_before_delivery() {
    let ctx = TestContext::new();
    let now = Utc::now();

    let mut draft = filled_draft("Merhaba");
    draft.set_field(ContactField::Email, "mehmet".into());
    let result = forward(&ctx.state, request(&ctx, &draft, now, Duration::seconds(10)), now).await;

    let error = result.expect_err("invalid email must be rejected");
    assert!(
        error.to_string().contains("email"),
        "Error should mention the email field"
    );
    assert!(ctx.forms.delivered().is_empty());
}

#[tokio::test]
async fn test_oversized_message_is_rejected() {
    let ctx = TestContext::new();
    let now = Utc::now();

    // Bypasses the draft's input clamp.
    let mut request = request(&ctx, &filled_draft("x"), now, Duration::seconds(10));
    request.message = "a".repeat(api::MESSAGE_MAX_CHARS + 1);
    let result = forward(&ctx.state, request, now).await;

    let error = result.expect_err("oversized message must be rejected");
    assert_eq!(error.to_string(), "invalid submission: message is too long");
    assert!(ctx.forms.delivered().is_empty());
}

#[tokio::test]
async fn test_delivery_failure_is_reported() {
    let ctx = TestContext::with_backend(RecordingFormBackend::failing());
    let now = Utc::now();

    let draft = filled_draft("Demo talebi");
    let result = forward(&ctx.state, request(&ctx, &draft, now, Duration::seconds(10)), now).await;
    assert!(matches!(result, Err(ForwardError::Delivery(_))));
    assert!(!result.unwrap_err().to_string().contains("503"));
}

#[tokio::test]
async fn test_global_state_prefers_test_override() {
    let ctx = TestContext::new();
    ctx.set_global();

    let state = api::state::AppState::global();
    assert!(std::sync::Arc::ptr_eq(&state, &ctx.state));
}
