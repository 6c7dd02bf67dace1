//! Authentication capability.
//!
//! The authenticator works against this surface instead of a concrete
//! user type.

use uuid::Uuid;

use crate::email::Email;

/// Identity that can log in and own tokens.
pub trait Principal: Send + Sync {
    /// Identifier used in error reporting, absent before first save
    fn auth_id(&self) -> Option<Uuid>;

    /// Email bound to issued tokens
    fn auth_email(&self) -> &Email;

    /// Stored password hash
    fn auth_password_hash(&self) -> &str;

    fn is_active(&self) -> bool;
}
