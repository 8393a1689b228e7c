use crate::contact::GateConfig;

pub const FORMSPREE_BASE_URL: &str = "https://formspree.io/f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Where accepted contact submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormsConfig {
    Formspree { endpoint: String },
    /// Log submissions instead of delivering them (local mode only).
    Console,
}

/// Signing key for contact form tokens. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct FormSecret(String);

impl FormSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for FormSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FormSecret(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub forms: FormsConfig,
    pub gate: GateConfig,
    /// `None`: a random key per process, so tokens die with a restart.
    pub form_secret: Option<FormSecret>,
}

#[cfg(feature = "server")]
pub fn load_dotenv() {
    // Missing .env is normal outside development.
    let _ = dotenvy::dotenv();
}

#[cfg(feature = "server")]
impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        use anyhow::{bail, Context};

        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mode = AppMode::parse(&value("APP_MODE").unwrap_or_default());

        let endpoint = match (value("FORMSPREE_ENDPOINT"), value("FORMSPREE_FORM_ID")) {
            (Some(endpoint), _) => Some(endpoint.trim().to_string()),
            (None, Some(id)) => Some(format!("{FORMSPREE_BASE_URL}/{}", id.trim())),
            (None, None) => None,
        };
        let forms = match (endpoint, mode) {
            (Some(endpoint), _) => FormsConfig::Formspree { endpoint },
            (None, AppMode::Local) => FormsConfig::Console,
            (None, AppMode::Production) => {
                bail!("FORMSPREE_FORM_ID or FORMSPREE_ENDPOINT must be set in production")
            }
        };

        let mut gate = GateConfig::default();
        if let Some(ms) = value("CONTACT_MIN_DELAY_MS") {
            gate.min_elapsed_ms = ms
                .trim()
                .parse()
                .context("CONTACT_MIN_DELAY_MS must be a whole number of milliseconds")?;
        }
        if let Some(links) = value("CONTACT_MAX_LINKS") {
            gate.max_links = links
                .trim()
                .parse()
                .context("CONTACT_MAX_LINKS must be a whole number")?;
        }
        if let Some(words) = value("CONTACT_SPAM_KEYWORDS") {
            gate.spam_keywords = words
                .split(',')
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
        }

        let form_secret = value("CONTACT_FORM_SECRET").map(|s| FormSecret::new(s.trim()));

        Ok(Self {
            mode,
            forms,
            gate,
            form_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_mode_defaults_to_production() {
        assert_eq!(AppMode::parse(""), AppMode::Production);
    }

    #[test]
    fn test_app_mode_local() {
        assert_eq!(AppMode::parse("local"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_case_insensitive() {
        assert_eq!(AppMode::parse("LOCAL"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        assert_eq!(AppMode::parse("invalid"), AppMode::Production);
    }

    #[cfg(feature = "server")]
    mod from_lookup {
        use super::super::*;
        use std::collections::HashMap;

        fn config(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
            let env: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            AppConfig::from_lookup(|key| env.get(key).cloned())
        }

        #[test]
        fn local_mode_without_form_id_logs_to_console() {
            let cfg = config(&[("APP_MODE", "local")]).unwrap();
            assert_eq!(cfg.forms, FormsConfig::Console);
            assert_eq!(cfg.gate, GateConfig::default());
        }

        #[test]
        fn production_requires_a_form_backend() {
            let err = config(&[]).unwrap_err();
            assert!(err.to_string().contains("FORMSPREE_FORM_ID"));
        }

        #[test]
        fn form_id_builds_the_formspree_endpoint() {
            let cfg = config(&[("FORMSPREE_FORM_ID", "mblkbqpz")]).unwrap();
            assert_eq!(
                cfg.forms,
                FormsConfig::Formspree {
                    endpoint: "https://formspree.io/f/mblkbqpz".into()
                }
            );
        }

        #[test]
        fn explicit_endpoint_wins() {
            let cfg = config(&[
                ("FORMSPREE_FORM_ID", "ignored"),
                ("FORMSPREE_ENDPOINT", "http://127.0.0.1:9000/f/test"),
            ])
            .unwrap();
            assert_eq!(
                cfg.forms,
                FormsConfig::Formspree {
                    endpoint: "http://127.0.0.1:9000/f/test".into()
                }
            );
        }

        #[test]
        fn gate_thresholds_are_configurable() {
            let cfg = config(&[
                ("APP_MODE", "local"),
                ("CONTACT_MIN_DELAY_MS", "1500"),
                ("CONTACT_MAX_LINKS", "0"),
                ("CONTACT_SPAM_KEYWORDS", " Casino, ,loan "),
            ])
            .unwrap();
            assert_eq!(cfg.gate.min_elapsed_ms, 1500);
            assert_eq!(cfg.gate.max_links, 0);
            assert_eq!(cfg.gate.spam_keywords, vec!["casino", "loan"]);
        }

        #[test]
        fn form_secret_is_optional_and_redacted() {
            let cfg = config(&[("APP_MODE", "local")]).unwrap();
            assert_eq!(cfg.form_secret, None);

            let cfg = config(&[("APP_MODE", "local"), ("CONTACT_FORM_SECRET", " s3cret ")]).unwrap();
            let secret = cfg.form_secret.expect("secret is read");
            assert_eq!(secret.as_bytes(), b"s3cret");
            assert!(!format!("{cfg:?}").contains("s3cret"));
        }

        #[test]
        fn bad_numbers_are_rejected() {
            let err = config(&[("APP_MODE", "local"), ("CONTACT_MIN_DELAY_MS", "soon")])
                .unwrap_err();
            assert!(err.to_string().contains("CONTACT_MIN_DELAY_MS"));
        }
    }
}
