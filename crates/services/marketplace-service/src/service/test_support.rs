//! Mock-backed Unit of Work and entity builders for service tests.

use std::sync::Arc;
use uuid::Uuid;

use domain::{CompanyName, Email, PasswordSecret, PersonName, Store, TaxId, User};

use crate::infra::UnitOfWork;
use crate::repository::{
    MockOfferRepo, MockStoreRepo, MockUserRepo, MockVehicleRepo, OfferRepository,
    StoreRepository, UserRepository, VehicleRepository,
};

/// Repository mocks, configured before being frozen into a [`TestUnitOfWork`].
#[derive(Default)]
pub(crate) struct MockRepos {
    pub users: MockUserRepo,
    pub stores: MockStoreRepo,
    pub offers: MockOfferRepo,
    pub vehicles: MockVehicleRepo,
}

impl MockRepos {
    pub fn into_uow(self) -> Arc<TestUnitOfWork> {
        Arc::new(TestUnitOfWork {
            users: Arc::new(self.users),
            stores: Arc::new(self.stores),
            offers: Arc::new(self.offers),
            vehicles: Arc::new(self.vehicles),
        })
    }
}

/// Test mock for UnitOfWork that wraps the repository mocks
pub(crate) struct TestUnitOfWork {
    users: Arc<MockUserRepo>,
    stores: Arc<MockStoreRepo>,
    offers: Arc<MockOfferRepo>,
    vehicles: Arc<MockVehicleRepo>,
}

impl UnitOfWork for TestUnitOfWork {
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

pub(crate) fn stored_user(id: Uuid, email: &str) -> User {
    let mut user = User::new(
        PersonName::new("John", "Doe").unwrap(),
        Email::parse(email).unwrap(),
        PasswordSecret::from_hash("hashed:secret"),
    );
    user.id = Some(id);
    user
}

pub(crate) fn stored_store(id: Uuid, tax_id: &str) -> Store {
    let mut store = Store::new(
        CompanyName::new("Auto Center").unwrap(),
        TaxId::parse(tax_id).unwrap(),
    );
    store.id = Some(id);
    store
}
