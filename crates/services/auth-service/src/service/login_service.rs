//! Login and token authentication on top of a [`PrincipalSource`].

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{info, warn};

use domain::{DomainError, DomainResult, Email, EntityKind, IdentityGuard, Principal};

use crate::client::PrincipalSource;
use crate::token::{Authenticator, IssuedToken};

const DUMMY_PASSWORD: &str = "dealer-marketplace-dummy-password";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    type Principal: Principal;

    /// Check credentials and issue a token
    async fn login(&self, email: &str, password: &str) -> DomainResult<IssuedToken>;

    /// Resolve a token to the active principal it was issued for
    async fn authenticate(&self, token: &str) -> DomainResult<Self::Principal>;
}

/// Concrete implementation of AuthService.
pub struct LoginService<S: PrincipalSource> {
    source: Arc<S>,
    authenticator: Authenticator,
    guard: Arc<dyn IdentityGuard>,
    dummy_hash: OnceCell<String>,
}

impl<S: PrincipalSource> LoginService<S> {
    pub fn new(source: Arc<S>, authenticator: Authenticator, guard: Arc<dyn IdentityGuard>) -> Self {
        Self {
            source,
            authenticator,
            guard,
            dummy_hash: OnceCell::new(),
        }
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Hash verified when the email is unknown, so both paths cost the same.
    fn dummy_hash(&self) -> &str {
        self.dummy_hash
            .get_or_init(|| self.guard.hash(DUMMY_PASSWORD).unwrap_or_default())
    }

    fn ensure_active(principal: S::Principal) -> DomainResult<S::Principal> {
        if principal.is_active() {
            return Ok(principal);
        }
        Err(DomainError::Deactivated {
            kind: EntityKind::User,
            id: principal.auth_id().unwrap_or_default(),
        })
    }
}

#[async_trait]
impl<S: PrincipalSource> AuthService for LoginService<S> {
    type Principal = S::Principal;

    async fn login(&self, email: &str, password: &str) -> DomainResult<IssuedToken> {
        let principal = match Email::parse(email) {
            Ok(email) => self.source.find_principal_by_email(&email).await?,
            Err(_) => None,
        };

        let hash = match &principal {
            Some(p) => p.auth_password_hash().to_string(),
            None => self.dummy_hash().to_string(),
        };
        let password_valid = self.guard.verify(password, &hash);

        let principal = match principal {
            Some(p) if password_valid => p,
            _ => {
                warn!("Rejected login attempt");
                return Err(DomainError::InvalidCredentials);
            }
        };

        let principal = Self::ensure_active(principal)?;
        let token = self.authenticator.issue_token(&principal)?;
        info!(email = %principal.auth_email(), "User logged in");
        Ok(token)
    }

    async fn authenticate(&self, token: &str) -> DomainResult<Self::Principal> {
        let email = self
            .authenticator
            .validate_token(token)
            .ok_or(DomainError::Unauthorized)?;

        let principal = self
            .source
            .find_principal_by_email(&email)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        Self::ensure_active(principal)
    }
}
