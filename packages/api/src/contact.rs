//! Contact form domain: the editable draft, the anti-abuse gate it has to
//! pass, and the payload that is finally handed to the form backend.
//!
//! Everything here is plain data and synchronous logic so the same code runs
//! in the browser (instant feedback) and on the server, which runs the whole
//! gate again on the posted [`ContactRequest`] before forwarding anything.

use crate::locale::Locale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MESSAGE_MAX_CHARS: usize = 500;
pub const NAME_MAX_CHARS: usize = 60;
pub const EMAIL_MAX_CHARS: usize = 120;

pub const DEFAULT_MIN_ELAPSED_MS: u64 = 3_000;
pub const DEFAULT_MAX_LINKS: usize = 2;

pub const DEFAULT_SPAM_KEYWORDS: &[&str] = &[
    "viagra",
    "loan",
    "casino",
    "crypto airdrop",
    "porn",
    "xxx",
    "sex",
    "visit my site",
    "bit.ly",
    "tinyurl.com",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
    /// Hidden trap input. Humans never see or reach it.
    Honeypot,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Email => "email",
            ContactField::Message => "message",
            ContactField::Honeypot => "honeypot",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// View-local form state, alive from form mount until a successful
/// submission or unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub honeypot: String,
    pub started_at: DateTime<Utc>,
}

impl ContactDraft {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            message: String::new(),
            honeypot: String::new(),
            started_at,
        }
    }

    /// Apply one input event. Returns `false` when the edit was rejected,
    /// which only happens for a message longer than [`MESSAGE_MAX_CHARS`].
    pub fn set_field(&mut self, field: ContactField, value: String) -> bool {
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => {
                if value.chars().count() > MESSAGE_MAX_CHARS {
                    return false;
                }
                self.message = value;
            }
            ContactField::Honeypot => self.honeypot = value,
        }
        true
    }

    pub fn message_len(&self) -> usize {
        self.message.chars().count()
    }

    /// Clear every field and restart the time-trap clock.
    pub fn reset(&mut self, started_at: DateTime<Utc>) {
        *self = Self::new(started_at);
    }

    /// Restart the time-trap clock, keeping what was typed.
    pub fn restart_clock(&mut self, started_at: DateTime<Utc>) {
        self.started_at = started_at;
    }
}

/// Thresholds of the anti-abuse gate. These deter naive scripts; they are
/// not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    pub min_elapsed_ms: u64,
    pub max_links: usize,
    pub spam_keywords: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_elapsed_ms: DEFAULT_MIN_ELAPSED_MS,
            max_links: DEFAULT_MAX_LINKS,
            spam_keywords: DEFAULT_SPAM_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// Why a submission attempt was stopped. Checks run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    Honeypot,
    TooFast,
    TooManyLinks,
    SpamContent,
}

/// Per-attempt state of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Editing,
    Blocked(BlockReason),
    /// Handed to the form backend; delivery is the backend's business.
    Forwarded,
}

impl GateState {
    pub fn from_outcome<T>(outcome: &Result<T, BlockReason>) -> Self {
        match outcome {
            Ok(_) => GateState::Forwarded,
            Err(reason) => GateState::Blocked(*reason),
        }
    }

    /// Any edit after a block puts the form back into editing.
    pub fn on_edit(self) -> Self {
        match self {
            GateState::Blocked(_) => GateState::Editing,
            other => other,
        }
    }
}

/// Data attached to a submission that does not come from the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    pub subject: String,
    pub from_path: String,
    pub locale: Locale,
}

/// Payload forwarded to the form backend. Deliberately has no honeypot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
    pub from_path: String,
    pub locale: Locale,
}

/// What the browser posts to the server: raw input including the trap
/// field, plus the signed token the form received when it mounted. The
/// server recovers the start time from the token and runs the full gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub honeypot: String,
    pub form_token: String,
    pub subject: String,
    pub from_path: String,
    pub locale: Locale,
}

impl ContactRequest {
    pub fn new(draft: &ContactDraft, form_token: impl Into<String>, context: SubmissionContext) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
            honeypot: draft.honeypot.clone(),
            form_token: form_token.into(),
            subject: context.subject,
            from_path: context.from_path,
            locale: context.locale,
        }
    }

    /// Rebuild the draft as the gate sees it. The message is not clamped
    /// here; oversized input is caught by [`validate_submission`].
    pub fn into_draft(self, started_at: DateTime<Utc>) -> (ContactDraft, SubmissionContext) {
        let draft = ContactDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            message: self.message,
            honeypot: self.honeypot,
            started_at,
        };
        let context = SubmissionContext {
            subject: self.subject,
            from_path: self.from_path,
            locale: self.locale,
        };
        (draft, context)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactGate {
    config: GateConfig,
}

impl ContactGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Run honeypot, time-trap and content checks in that order. The first
    /// failing check decides the reason; later checks are not evaluated.
    pub fn evaluate(
        &self,
        draft: &ContactDraft,
        now: DateTime<Utc>,
        context: SubmissionContext,
    ) -> Result<ContactSubmission, BlockReason> {
        if !draft.honeypot.trim().is_empty() {
            return Err(BlockReason::Honeypot);
        }

        let elapsed_ms = (now - draft.started_at).num_milliseconds();
        let min_ms = i64::try_from(self.config.min_elapsed_ms).unwrap_or(i64::MAX);
        if elapsed_ms < min_ms {
            return Err(BlockReason::TooFast);
        }

        self.check_content(&draft.message)?;

        Ok(ContactSubmission {
            first_name: draft.first_name.trim().to_string(),
            last_name: draft.last_name.trim().to_string(),
            email: draft.email.trim().to_string(),
            message: draft.message.clone(),
            subject: context.subject,
            from_path: context.from_path,
            locale: context.locale,
        })
    }

    /// Link count first, then the keyword denylist (case-insensitive).
    pub fn check_content(&self, message: &str) -> Result<(), BlockReason> {
        let lowered = message.to_lowercase();
        if count_links(&lowered) > self.config.max_links {
            return Err(BlockReason::TooManyLinks);
        }
        let spammy = self
            .config
            .spam_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .any(|k| lowered.contains(&k));
        if spammy {
            return Err(BlockReason::SpamContent);
        }
        Ok(())
    }
}

/// Occurrences of `http://` and `https://`, ignoring case.
pub fn count_links(text: &str) -> usize {
    let lowered = text.to_lowercase();
    lowered.matches("http://").count() + lowered.matches("https://").count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(ContactField),
    #[error("{0} is too long")]
    TooLong(ContactField),
    #[error("email is not a valid address")]
    InvalidEmail,
}

/// Server-side field rules, mirroring what the form backend rejects anyway.
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let limits = [
        (ContactField::FirstName, &submission.first_name, NAME_MAX_CHARS),
        (ContactField::LastName, &submission.last_name, NAME_MAX_CHARS),
        (ContactField::Email, &submission.email, EMAIL_MAX_CHARS),
        (ContactField::Message, &submission.message, MESSAGE_MAX_CHARS),
    ];
    for (field, value, max) in limits {
        if value.trim().is_empty() {
            errors.push(FieldError::Missing(field));
        } else if value.chars().count() > max {
            errors.push(FieldError::TooLong(field));
        }
    }

    let email = submission.email.trim();
    if !email.is_empty() && !looks_like_email(email) {
        errors.push(FieldError::InvalidEmail);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
