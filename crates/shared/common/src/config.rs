//! Shared configuration structures.

use std::env;

use domain::MIN_TOKEN_SECRET_LENGTH;

use crate::error::ConfigError;

/// Environment variables holding the signing secret, in lookup order.
pub const TOKEN_SECRET_VARS: [&str; 2] = ["TOKEN_SECRET", "JWT_SECRET"];

/// Token signing configuration.
#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
}

// Don't expose the secret in debug output
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl AuthConfig {
    /// Build from an explicit secret. An empty secret is accepted here;
    /// token issuance then fails.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = TOKEN_SECRET_VARS
            .iter()
            .find_map(|key| lookup(key).filter(|value| !value.trim().is_empty()))
            .ok_or(ConfigError::MissingSecret)?;

        if secret.chars().count() < MIN_TOKEN_SECRET_LENGTH {
            tracing::warn!(
                "Token secret is shorter than {} characters",
                MIN_TOKEN_SECRET_LENGTH
            );
        }

        Ok(Self { secret })
    }

    /// Get the secret as bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_primary_variable_wins() {
        let config = AuthConfig::from_lookup(lookup(&[
            ("TOKEN_SECRET", "primary-secret"),
            ("JWT_SECRET", "fallback-secret"),
        ]))
        .unwrap();
        assert_eq!(config.secret_bytes(), b"primary-secret");
    }

    #[test]
    fn test_falls_back_to_jwt_secret() {
        let config = AuthConfig::from_lookup(lookup(&[
            ("TOKEN_SECRET", "  "),
            ("JWT_SECRET", "fallback-secret"),
        ]))
        .unwrap();
        assert_eq!(config.secret_bytes(), b"fallback-secret");
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = AuthConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(ConfigError::MissingSecret)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::new("super-secret-value");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_empty_secret_reported() {
        assert!(!AuthConfig::new("").has_secret());
        assert!(AuthConfig::new("x").has_secret());
    }
}
