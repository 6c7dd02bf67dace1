//! Mock repositories for service tests.

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use domain::{DomainResult, Email, Offer, Store, TaxId, User, Vehicle};

use super::{OfferRepository, Repository, StoreRepository, UserRepository, VehicleRepository};

mock! {
    pub UserRepo {}

    #[async_trait]
    impl Repository<User> for UserRepo {
        async fn save(&self, entity: User) -> DomainResult<User>;
        async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;
        async fn find_all(&self) -> DomainResult<Vec<User>>;
    }

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
    }
}

mock! {
    pub StoreRepo {}

    #[async_trait]
    impl Repository<Store> for StoreRepo {
        async fn save(&self, entity: Store) -> DomainResult<Store>;
        async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Store>>;
        async fn find_all(&self) -> DomainResult<Vec<Store>>;
    }

    #[async_trait]
    impl StoreRepository for StoreRepo {
        async fn find_by_tax_id(&self, tax_id: &TaxId) -> DomainResult<Option<Store>>;
    }
}

mock! {
    pub OfferRepo {}

    #[async_trait]
    impl Repository<Offer> for OfferRepo {
        async fn save(&self, entity: Offer) -> DomainResult<Offer>;
        async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Offer>>;
        async fn find_all(&self) -> DomainResult<Vec<Offer>>;
    }

    #[async_trait]
    impl OfferRepository for OfferRepo {
        async fn find_active_by_store(&self, store_id: Uuid) -> DomainResult<Vec<Offer>>;
        async fn find_active_by_client(&self, client_id: Uuid) -> DomainResult<Vec<Offer>>;
    }
}

mock! {
    pub VehicleRepo {}

    #[async_trait]
    impl Repository<Vehicle> for VehicleRepo {
        async fn save(&self, entity: Vehicle) -> DomainResult<Vehicle>;
        async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Vehicle>>;
        async fn find_all(&self) -> DomainResult<Vec<Vehicle>>;
    }

    impl VehicleRepository for VehicleRepo {}
}
