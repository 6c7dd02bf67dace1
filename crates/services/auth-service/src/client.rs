//! Lookup of principals by email, implemented by the user management side.

use async_trait::async_trait;

use domain::{DomainResult, Email, Principal};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Source of principals needed by the login flow.
#[cfg_attr(any(test, feature = "test-utils"), automock(type Principal = domain::User;))]
#[async_trait]
pub trait PrincipalSource: Send + Sync {
    type Principal: Principal + 'static;

    /// Find a principal by normalized email, active or not
    async fn find_principal_by_email(&self, email: &Email)
        -> DomainResult<Option<Self::Principal>>;
}
