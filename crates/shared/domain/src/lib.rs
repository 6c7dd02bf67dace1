//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Value objects validate on construction, so an invalid instance cannot
//! exist. Entities share one soft-delete [`Lifecycle`].

pub mod constants;
pub mod email;
pub mod error;
pub mod lifecycle;
pub mod name;
pub mod offer;
pub mod password;
pub mod principal;
pub mod store;
pub mod tax_id;
pub mod user;
pub mod vehicle;

pub use constants::*;
pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use lifecycle::{EntityKind, Lifecycle, Lifecycled, OfferParty, Persistable};
pub use name::{CompanyName, PersonName};
pub use offer::{Offer, OfferStatus, UpdateOffer};
pub use password::{Argon2Guard, IdentityGuard, PasswordSecret};
pub use principal::Principal;
pub use store::{CreateStore, Store, UpdateStore};
pub use tax_id::TaxId;
pub use user::{CreateUser, UpdateUser, User};
pub use vehicle::{UpdateVehicle, Vehicle, VehicleAttributes, VehicleRequest, VehicleType};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockIdentityGuard;
