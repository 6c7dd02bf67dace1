//! Password handling: the one-way hashing guard and the password value object.
//!
//! The hashing algorithm is hidden behind [`IdentityGuard`] so that callers
//! only rely on the `hash`/`verify` contract.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way password hashing and verification.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait IdentityGuard: Send + Sync {
    /// Hash a raw secret. The result never equals the input.
    fn hash(&self, raw: &str) -> DomainResult<String>;

    /// Check a raw secret against a stored hash.
    fn verify(&self, raw: &str, hash: &str) -> bool;
}

/// Argon2id implementation of [`IdentityGuard`].
#[derive(Debug, Clone, Default)]
pub struct Argon2Guard;

impl Argon2Guard {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl IdentityGuard for Argon2Guard {
    fn hash(&self, raw: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, raw: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Password value object. Holds only the hash of the raw secret.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordSecret {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for PasswordSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordSecret")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl PasswordSecret {
    /// Validate and hash a raw secret.
    ///
    /// # Errors
    /// Returns a validation error if the secret is shorter than
    /// [`MIN_PASSWORD_LENGTH`] characters. Hashing is not attempted then.
    pub fn new(raw: &str, guard: &dyn IdentityGuard) -> DomainResult<Self> {
        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password should be at least {} characters long.",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = guard.hash(raw)?;
        Ok(Self { hash })
    }

    /// Rebuild from a stored hash.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Replace the secret, re-running the same validation.
    pub fn with_raw(&self, raw: &str, guard: &dyn IdentityGuard) -> DomainResult<Self> {
        Self::new(raw, guard)
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn verify(&self, raw: &str, guard: &dyn IdentityGuard) -> bool {
        guard.verify(raw, &self.hash)
    }
}
