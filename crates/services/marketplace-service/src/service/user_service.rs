//! User service - Handles user-related business logic.
//!
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use auth_service_lib::PrincipalSource;
use domain::{
    CreateUser, DomainError, DomainResult, Email, EntityKind, IdentityGuard, PasswordSecret,
    PersonName, UpdateUser, User,
};

use super::lifecycle;
use crate::infra::UnitOfWork;
use crate::repository::{Repository, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new active user; the email must be unused
    async fn register_user(&self, input: CreateUser) -> DomainResult<User>;

    /// Get user by ID, active or not
    async fn get_user(&self, id: Uuid) -> DomainResult<User>;

    /// Get user for display (fails if deactivated)
    async fn view_user(&self, id: Uuid) -> DomainResult<User>;

    /// Find user by email, active or not
    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Apply every present field or none
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> DomainResult<User>;

    async fn deactivate_user(&self, id: Uuid) -> DomainResult<User>;

    async fn reactivate_user(&self, id: Uuid) -> DomainResult<User>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
    guard: Arc<dyn IdentityGuard>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>, guard: Arc<dyn IdentityGuard>) -> Self {
        Self { uow, guard }
    }

    /// Fail if `email` belongs to a user other than `owner`.
    async fn ensure_email_free(&self, email: &Email, owner: Option<Uuid>) -> DomainResult<()> {
        match self.uow.users().find_by_email(email).await? {
            Some(existing) if existing.id != owner => {
                warn!(%email, "Email already registered");
                Err(DomainError::duplicate(EntityKind::User, email.as_str()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn register_user(&self, input: CreateUser) -> DomainResult<User> {
        let name = PersonName::new(&input.first_name, &input.last_name)?;
        let email = Email::parse(&input.email)?;
        self.ensure_email_free(&email, None).await?;
        let password = PasswordSecret::new(&input.password, self.guard.as_ref())?;

        let user = self
            .uow
            .users()
            .save(User::new(name, email, password))
            .await?;
        info!(id = ?user.id, email = %user.email, "User registered");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        lifecycle::fetch::<User, _>(&*self.uow.users(), id).await
    }

    async fn view_user(&self, id: Uuid) -> DomainResult<User> {
        lifecycle::view::<User, _>(&*self.uow.users(), id).await
    }

    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let email = Email::parse(email)?;
        self.uow.users().find_by_email(&email).await
    }

    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> DomainResult<User> {
        let mut user = self.get_user(id).await?;

        let mut name = user.name.clone();
        if let Some(first_name) = &changes.first_name {
            name = name.with_first_name(first_name)?;
        }
        if let Some(last_name) = &changes.last_name {
            name = name.with_last_name(last_name)?;
        }

        let email = match &changes.email {
            Some(raw) => {
                let email = user.email.with_value(raw)?;
                self.ensure_email_free(&email, user.id).await?;
                Some(email)
            }
            None => None,
        };

        let password = match &changes.password {
            Some(raw) => Some(user.password.with_raw(raw, self.guard.as_ref())?),
            None => None,
        };

        user.update_name(name);
        if let Some(email) = email {
            user.update_email(email);
        }
        if let Some(password) = password {
            user.update_password(password);
        }

        let user = self.uow.users().save(user).await?;
        info!(%id, "User updated");
        Ok(user)
    }

    async fn deactivate_user(&self, id: Uuid) -> DomainResult<User> {
        let users = self.uow.users();
        let offers = self.uow.offers();
        lifecycle::deactivate::<User, _>(&*users, &*offers, id).await
    }

    async fn reactivate_user(&self, id: Uuid) -> DomainResult<User> {
        lifecycle::reactivate::<User, _>(&*self.uow.users(), id).await
    }
}

#[async_trait]
impl<U: UnitOfWork> PrincipalSource for UserManager<U> {
    type Principal = User;

    async fn find_principal_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.uow.users().find_by_email(email).await
    }
}
