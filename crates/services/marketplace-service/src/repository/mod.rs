//! Repository layer for data access.

mod base;
mod memory;
mod offer_repository;
mod store_repository;
mod user_repository;
mod vehicle_repository;

#[cfg(any(test, feature = "test-utils"))]
mod mocks;

pub use base::Repository;
pub use memory::InMemoryRepository;
pub use offer_repository::OfferRepository;
pub use store_repository::StoreRepository;
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use mocks::{MockOfferRepo, MockStoreRepo, MockUserRepo, MockVehicleRepo};
