use crate::contact::ContactSubmission;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

fn submission_label(submission: &ContactSubmission) -> String {
    format!(
        "from_domain={} locale={} path={} message_len={}",
        email_domain(&submission.email),
        submission.locale,
        submission.from_path,
        submission.message.chars().count()
    )
}

/// External collaborator that owns delivery of accepted contact submissions.
#[async_trait]
pub trait FormBackend: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Wire format expected by the hosted form endpoint.
#[derive(Debug, Serialize)]
struct FormspreePayload<'a> {
    #[serde(rename = "firstName")]
    first_name: &'a str,
    #[serde(rename = "lastName")]
    last_name: &'a str,
    email: &'a str,
    message: &'a str,
    #[serde(rename = "_subject")]
    subject: &'a str,
    #[serde(rename = "fromPath")]
    from_path: &'a str,
    locale: &'a str,
}

impl<'a> From<&'a ContactSubmission> for FormspreePayload<'a> {
    fn from(s: &'a ContactSubmission) -> Self {
        Self {
            first_name: &s.first_name,
            last_name: &s.last_name,
            email: &s.email,
            message: &s.message,
            subject: &s.subject,
            from_path: &s.from_path,
            locale: s.locale.code(),
        }
    }
}

/// Formspree-compatible HTTP backend (production)
pub struct FormspreeBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl FormspreeBackend {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("failed to build form backend http client")?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl FormBackend for FormspreeBackend {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        debug!("forms.formspree.deliver: {}", submission_label(submission));

        self.client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&FormspreePayload::from(submission))
            .send()
            .await
            .context("form backend unreachable")?
            .error_for_status()
            .context("form backend rejected the submission")?;

        info!("forms.formspree.deliver: accepted");
        Ok(())
    }
}

/// Console backend (local development): logs instead of delivering.
pub struct ConsoleFormBackend;

#[async_trait]
impl FormBackend for ConsoleFormBackend {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        info!(
            subject = %submission.subject,
            first_name = %submission.first_name,
            last_name = %submission.last_name,
            email = %submission.email,
            from_path = %submission.from_path,
            locale = %submission.locale,
            "forms.console.deliver (local mode, not sent):\n{}",
            submission.message
        );
        Ok(())
    }
}
