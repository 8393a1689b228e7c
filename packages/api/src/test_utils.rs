use crate::config::{AppConfig, AppMode, FormSecret, FormsConfig};
use crate::contact::{ContactSubmission, GateConfig};
use crate::form_token::FormTokens;
use crate::forms::FormBackend;
use crate::state::AppState;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Backend that records every delivery, optionally failing them.
#[derive(Default)]
pub struct RecordingFormBackend {
    delivered: Mutex<Vec<ContactSubmission>>,
    fail: bool,
}

impl RecordingFormBackend {
    pub fn failing() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn delivered(&self) -> Vec<ContactSubmission> {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl FormBackend for RecordingFormBackend {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        if self.fail {
            return Err(anyhow!("backend returned 503"));
        }
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(submission.clone());
        Ok(())
    }
}

pub struct TestContext {
    pub forms: Arc<RecordingFormBackend>,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_backend(RecordingFormBackend::default())
    }

    pub fn with_backend(backend: RecordingFormBackend) -> Self {
        let forms = Arc::new(backend);
        let config = AppConfig {
            mode: AppMode::Local,
            forms: FormsConfig::Console,
            gate: GateConfig::default(),
            form_secret: None,
        };
        let state = Arc::new(AppState {
            forms: forms.clone(),
            tokens: FormTokens::new(&FormSecret::new("test-form-secret")),
            config,
        });
        Self { forms, state }
    }

    /// Token for a form that was handed out at `loaded_at`.
    pub fn form_token(&self, loaded_at: DateTime<Utc>) -> String {
        self.state
            .tokens
            .issue(loaded_at)
            .unwrap_or_else(|e| panic!("test token: {e}"))
    }

    pub fn set_global(&self) {
        // For tests, set thread-local state instead of global state
        // This allows each test to have its own isolated AppState
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = Some(self.state.clone());
        });
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = None;
        });
    }
}
