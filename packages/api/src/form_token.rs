//! Signed, time-stamped tokens handed to the contact form when it mounts.
//!
//! The server reads the form's start time back out of the token, so the
//! time-trap holds even for clients that never ran the form.

use crate::config::FormSecret;
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

const ISSUER: &str = "origami-contact";

/// A form left open longer than this has to be reloaded.
pub const FORM_TOKEN_TTL_HOURS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("form token is missing")]
    Missing,
    #[error("form token is invalid")]
    Invalid,
    #[error("form token has expired")]
    Expired,
}

#[derive(Debug, Serialize, Deserialize)]
struct FormClaims {
    iss: String,
    issued_at_ms: i64,
}

pub struct FormTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for FormTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormTokens")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl FormTokens {
    pub fn new(secret: &FormSecret) -> Self {
        Self::from_key(secret.as_bytes())
    }

    /// Fresh key for this process only.
    pub fn random() -> Self {
        let key: [u8; 32] = rand::thread_rng().gen();
        Self::from_key(&key)
    }

    fn from_key(key: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(key),
            decoding: DecodingKey::from_secret(key),
            ttl: Duration::hours(FORM_TOKEN_TTL_HOURS),
        }
    }

    pub fn issue(&self, now: DateTime<Utc>) -> anyhow::Result<String> {
        let claims = FormClaims {
            iss: ISSUER.to_string(),
            issued_at_ms: now.timestamp_millis(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        debug!("form_token.issue: issued_at_ms={}", claims.issued_at_ms);
        Ok(token)
    }

    /// When the form carrying `token` was handed out.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        // Expiry is checked against `now` below, not the system clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["iss"]);
        validation.set_issuer(&[ISSUER]);

        let data = decode::<FormClaims>(token, &self.decoding, &validation).map_err(|e| {
            debug!("form_token.verify: rejected: {e}");
            TokenError::Invalid
        })?;
        let issued_at = Utc
            .timestamp_millis_opt(data.claims.issued_at_ms)
            .single()
            .ok_or(TokenError::Invalid)?;

        if now - issued_at > self.ttl {
            return Err(TokenError::Expired);
        }
        Ok(issued_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> FormTokens {
        FormTokens::new(&FormSecret::new("test-secret"))
    }

    fn mounted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap()
    }

    #[test]
    fn verify_returns_the_issue_time() {
        let tokens = tokens();
        let token = tokens.issue(mounted_at()).unwrap();
        let later = mounted_at() + Duration::seconds(20);
        assert_eq!(tokens.verify(&token, later), Ok(mounted_at()));
    }

    #[test]
    fn blank_token_is_missing() {
        assert_eq!(tokens().verify("  ", mounted_at()), Err(TokenError::Missing));
    }

    #[test]
    fn token_from_another_key_is_invalid() {
        let foreign = FormTokens::new(&FormSecret::new("other"))
            .issue(mounted_at())
            .unwrap();
        assert_eq!(
            tokens().verify(&foreign, mounted_at()),
            Err(TokenError::Invalid)
        );
        assert_eq!(
            tokens().verify("not.a.token", mounted_at()),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn tampered_token_is_invalid() {
        let tokens = tokens();
        let token = tokens.issue(mounted_at()).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        // Claims from a token issued an hour earlier, original signature.
        let earlier = tokens.issue(mounted_at() - Duration::hours(1)).unwrap();
        parts[1] = earlier.split('.').nth(1).unwrap();
        assert_eq!(
            tokens.verify(&parts.join("."), mounted_at()),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn old_token_expires() {
        let tokens = tokens();
        let token = tokens.issue(mounted_at()).unwrap();
        let edge = mounted_at() + Duration::hours(FORM_TOKEN_TTL_HOURS);
        assert!(tokens.verify(&token, edge).is_ok());
        assert_eq!(
            tokens.verify(&token, edge + Duration::seconds(1)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn random_keys_differ_per_instance() {
        let token = FormTokens::random().issue(mounted_at()).unwrap();
        assert_eq!(
            FormTokens::random().verify(&token, mounted_at()),
            Err(TokenError::Invalid)
        );
    }
}
