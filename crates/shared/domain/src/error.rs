//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;
use uuid::Uuid;

use crate::lifecycle::EntityKind;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("{kind} with id {id} not found.")]
    NotFound { kind: EntityKind, id: Uuid },

    /// Uniqueness constraint violated
    #[error("{kind} '{value}' is already registered")]
    Duplicate { kind: EntityKind, value: String },

    /// Reactivation of an entity that is already active
    #[error("{kind} with ID {id} is already active.")]
    AlreadyActive { kind: EntityKind, id: Uuid },

    /// Deactivation of an entity that is already inactive
    #[error("{kind} with ID {id} is already deactivated.")]
    AlreadyInactive { kind: EntityKind, id: Uuid },

    /// Deactivation blocked by active dependents
    #[error("{kind} with ID {id} cannot be deactivated because it's being used by other entities")]
    InUse { kind: EntityKind, id: Uuid },

    /// Display read of a soft-deleted entity
    #[error("{kind} with ID {id} is deactivated.")]
    Deactivated { kind: EntityKind, id: Uuid },

    /// Token signing failed; the cause is logged, never exposed
    #[error("Unable to issue authentication token")]
    TokenIssuance,

    /// Invalid credentials provided
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or invalid authentication
    #[error("Unauthorized")]
    Unauthorized,

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(kind: EntityKind, id: Uuid) -> Self {
        DomainError::NotFound { kind, id }
    }

    /// Create a duplicate error
    pub fn duplicate(kind: EntityKind, value: impl Into<String>) -> Self {
        DomainError::Duplicate {
            kind,
            value: value.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }

    /// Whether the caller can fix this error by correcting its input
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
