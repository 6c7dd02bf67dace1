//! Marketplace Service Library
//!
//! User, store, vehicle and offer management on top of a [`UnitOfWork`]:
//! registration with uniqueness checks, updates, the display guard, and the
//! shared deactivate/reactivate lifecycle with its usage guard.

pub mod infra;
pub mod repository;
pub mod service;

pub use infra::{InMemoryPersistence, UnitOfWork};
pub use service::{
    OfferManager, OfferService, StoreManager, StoreService, UserManager, UserService,
    VehicleManager, VehicleService,
};
