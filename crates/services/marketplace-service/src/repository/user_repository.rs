//! User repository trait.

use async_trait::async_trait;

use domain::{DomainResult, Email, User};

use super::base::Repository;

/// User persistence with the email uniqueness lookup.
#[async_trait]
pub trait UserRepository: Repository<User> {
    /// Find user by normalized email, active or not
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
}
