//! Token minting and validation.
//!
//! Tokens are HS256-signed and carry the fixed issuer, the principal's email
//! as subject, and an issued-at/expiry pair spanning
//! [`TOKEN_VALIDITY_HOURS`]. Validation never errors: anything that is not a
//! well-formed, correctly signed, current token yields `None`.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use common::AuthConfig;
use mockable::{Clock, DefaultClock};
use domain::{
    DomainError, DomainResult, Email, Principal, SECONDS_PER_HOUR, TOKEN_ISSUER,
    TOKEN_TYPE_BEARER, TOKEN_VALIDITY_HOURS,
};

/// Token claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    /// Principal email
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token returned after successful issuance
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Validity in seconds
    pub expires_in: i64,
}

/// Signs and verifies tokens with the configured secret.
#[derive(Clone)]
pub struct Authenticator {
    config: AuthConfig,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Authenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self::with_clock(config, Arc::new(DefaultClock))
    }

    pub fn with_clock(config: AuthConfig, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { config, clock }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["iss", "sub", "exp"]);
        // Time window is checked against the injected clock
        validation.validate_exp = false;
        validation.leeway = 0;
        validation
    }

    /// Issue a token for `principal`.
    ///
    /// # Errors
    /// [`DomainError::TokenIssuance`] when no secret is configured or signing
    /// fails. The underlying cause is logged, not returned.
    pub fn issue_token(&self, principal: &dyn Principal) -> DomainResult<IssuedToken> {
        if !self.config.has_secret() {
            error!("Token issuance failed: signing secret is empty");
            return Err(DomainError::TokenIssuance);
        }

        let now = self.clock.utc();
        let expires_at = now + Duration::hours(TOKEN_VALIDITY_HOURS);

        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: principal.auth_email().as_str().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )
        .map_err(|e| {
            error!(error = %e, "Token issuance failed");
            DomainError::TokenIssuance
        })?;

        Ok(IssuedToken {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: TOKEN_VALIDITY_HOURS * SECONDS_PER_HOUR,
        })
    }

    /// Return the email bound to `token` if it is valid right now.
    pub fn validate_token(&self, token: &str) -> Option<Email> {
        let token = token.trim();
        if token.is_empty() || !self.config.has_secret() {
            return None;
        }

        let data = match decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Self::validation(),
        ) {
            Ok(data) => data,
            Err(e) => {
                debug!(error = %e, "Token rejected");
                return None;
            }
        };

        let claims = data.claims;
        let now = self.clock.utc().timestamp();
        if claims.iat > now || now > claims.exp {
            debug!(iat = claims.iat, exp = claims.exp, now, "Token outside validity window");
            return None;
        }

        Email::parse(&claims.sub).ok()
    }
}
