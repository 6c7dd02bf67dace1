//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::email::Email;
use crate::lifecycle::{EntityKind, Lifecycle, Lifecycled, OfferParty, Persistable};
use crate::name::PersonName;
use crate::password::PasswordSecret;
use crate::principal::Principal;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Option<Uuid>,
    pub name: PersonName,
    pub email: Email,
    #[serde(skip_serializing)]
    pub password: PasswordSecret,
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, unsaved, active user
    pub fn new(name: PersonName, email: Email, password: PasswordSecret) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name,
            email,
            password,
            lifecycle: Lifecycle::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Update user's name
    pub fn update_name(&mut self, name: PersonName) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update user's email
    pub fn update_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Update user's password
    pub fn update_password(&mut self, password: PasswordSecret) {
        self.password = password;
        self.updated_at = Utc::now();
    }
}

impl Persistable for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl Lifecycled for User {
    const OFFER_PARTY: Option<OfferParty> = Some(OfferParty::Client);

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        self.updated_at = Utc::now();
        &mut self.lifecycle
    }
}

impl Principal for User {
    fn auth_id(&self) -> Option<Uuid> {
        self.id
    }

    fn auth_email(&self) -> &Email {
        &self.email
    }

    fn auth_password_hash(&self) -> &str {
        self.password.as_str()
    }

    fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }
}

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Raw password (minimum 4 characters)
    pub password: String,
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            PersonName::new("John", "Doe").unwrap(),
            Email::parse("john.doe@example.com").unwrap(),
            PasswordSecret::from_hash("hashed"),
        )
    }

    #[test]
    fn test_new_user_is_active_and_unsaved() {
        let user = user();
        assert!(user.id.is_none());
        assert!(user.is_active());
        assert_eq!(user.full_name(), "John Doe");
    }

    #[test]
    fn test_principal_surface() {
        let user = user();
        assert_eq!(user.auth_email().as_str(), "john.doe@example.com");
        assert_eq!(user.auth_password_hash(), "hashed");
        assert!(Principal::is_active(&user));
    }

    #[test]
    fn test_serialization_skips_password() {
        let json = serde_json::to_value(user()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "john.doe@example.com");
    }

    #[test]
    fn test_display_guard() {
        let mut user = user();
        user.assign_id(Uuid::new_v4());
        assert!(user.clone().ensure_displayable().is_ok());

        let id = user.id.unwrap();
        user.lifecycle_mut().deactivate(EntityKind::User, id).unwrap();
        assert!(matches!(
            user.ensure_displayable(),
            Err(crate::DomainError::Deactivated {
                kind: EntityKind::User,
                ..
            })
        ));
    }
}
