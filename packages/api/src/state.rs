use crate::config::{AppConfig, AppMode, FormsConfig};
use crate::contact::ContactGate;
use crate::form_token::FormTokens;
use crate::forms::{ConsoleFormBackend, FormBackend, FormspreeBackend};
use anyhow::Result;
use std::sync::{Arc, OnceLock};

/// Global application state containing all service implementations
pub struct AppState {
    pub forms: Arc<dyn FormBackend>,
    pub tokens: FormTokens,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration
    pub fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let forms: Arc<dyn FormBackend> = match &config.forms {
            FormsConfig::Formspree { endpoint } => {
                tracing::info!("   Contact forms: Formspree ({})", endpoint);
                Arc::new(FormspreeBackend::new(endpoint.clone())?)
            }
            FormsConfig::Console => {
                tracing::info!("   Contact forms: Console (not sending)");
                Arc::new(ConsoleFormBackend)
            }
        };

        tracing::info!(
            "   Contact gate: min_delay={}ms max_links={} keywords={}",
            config.gate.min_elapsed_ms,
            config.gate.max_links,
            config.gate.spam_keywords.len()
        );

        let tokens = match &config.form_secret {
            Some(secret) => FormTokens::new(secret),
            None => {
                if config.mode == AppMode::Production {
                    tracing::warn!(
                        "   CONTACT_FORM_SECRET not set: open contact forms stop working after a restart"
                    );
                }
                FormTokens::random()
            }
        };

        Ok(Self {
            forms,
            tokens,
            config,
        })
    }

    pub fn gate(&self) -> ContactGate {
        ContactGate::new(self.config.gate.clone())
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Get the global AppState instance
    ///
    /// Panics if called before set_global.
    pub fn global() -> Arc<Self> {
        // In tests, check thread-local state first
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return test_state;
        }

        STATE
            .get()
            .expect("AppState::global called before set_global")
            .clone()
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
