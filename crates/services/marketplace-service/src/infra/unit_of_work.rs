//! Unit of Work: one handle giving services access to every repository.
//!
//! Atomicity across several calls is the backend's concern; services
//! perform one sequential chain of awaited calls per operation.

use std::sync::Arc;

use domain::{Offer, Store, User, Vehicle};

use crate::repository::{
    InMemoryRepository, OfferRepository, StoreRepository, UserRepository, VehicleRepository,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync + 'static {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn stores(&self) -> Arc<dyn StoreRepository>;

    fn offers(&self) -> Arc<dyn OfferRepository>;

    fn vehicles(&self) -> Arc<dyn VehicleRepository>;
}

/// Process-local persistence, one in-memory repository per entity.
#[derive(Default)]
pub struct InMemoryPersistence {
    users: Arc<InMemoryRepository<User>>,
    stores: Arc<InMemoryRepository<Store>>,
    offers: Arc<InMemoryRepository<Offer>>,
    vehicles: Arc<InMemoryRepository<Vehicle>>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UnitOfWork for InMemoryPersistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn stores(&self) -> Arc<dyn StoreRepository> {
        self.stores.clone()
    }

    fn offers(&self) -> Arc<dyn OfferRepository> {
        self.offers.clone()
    }

    fn vehicles(&self) -> Arc<dyn VehicleRepository> {
        self.vehicles.clone()
    }
}
