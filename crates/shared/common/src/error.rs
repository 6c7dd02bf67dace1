//! Error helpers shared by the services.

use domain::{DomainError, DomainResult, EntityKind};
use thiserror::Error;
use uuid::Uuid;

/// Configuration loading errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TOKEN_SECRET (or JWT_SECRET) must be set")]
    MissingSecret,
}

/// Extension trait for Option -> DomainError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, kind: EntityKind, id: Uuid) -> DomainResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, kind: EntityKind, id: Uuid) -> DomainResult<T> {
        self.ok_or(DomainError::NotFound { kind, id })
    }
}
