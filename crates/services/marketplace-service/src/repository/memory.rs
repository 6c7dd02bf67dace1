//! In-memory repository backed by a lock-guarded vector.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::{
    DomainResult, Email, Offer, OfferParty, Persistable, Store, TaxId, User, Vehicle,
};

use super::base::Repository;
use super::offer_repository::OfferRepository;
use super::store_repository::StoreRepository;
use super::user_repository::UserRepository;
use super::vehicle_repository::VehicleRepository;

/// Generic in-memory store for any persistable entity.
pub struct InMemoryRepository<E> {
    items: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<E: Persistable> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// First entity matching `predicate`
    async fn find_one<P>(&self, predicate: P) -> Option<E>
    where
        P: Fn(&E) -> bool,
    {
        self.items.read().await.iter().find(|e| predicate(*e)).cloned()
    }

    /// Every entity matching `predicate`
    async fn find_many<P>(&self, predicate: P) -> Vec<E>
    where
        P: Fn(&E) -> bool,
    {
        self.items
            .read()
            .await
            .iter()
            .filter(|e| predicate(*e))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<E: Persistable> Repository<E> for InMemoryRepository<E> {
    async fn save(&self, mut entity: E) -> DomainResult<E> {
        let mut items = self.items.write().await;

        let id = match entity.id() {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4();
                entity.assign_id(id);
                id
            }
        };

        match items.iter_mut().find(|e| e.id() == Some(id)) {
            Some(slot) => *slot = entity.clone(),
            None => items.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<E>> {
        Ok(self.find_one(|e| e.id() == Some(id)).await)
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.items.read().await.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.find_one(|u| &u.email == email).await)
    }
}

#[async_trait]
impl StoreRepository for InMemoryRepository<Store> {
    async fn find_by_tax_id(&self, tax_id: &TaxId) -> DomainResult<Option<Store>> {
        Ok(self.find_one(|s| &s.tax_id == tax_id).await)
    }
}

#[async_trait]
impl OfferRepository for InMemoryRepository<Offer> {
    async fn find_active_by_store(&self, store_id: Uuid) -> DomainResult<Vec<Offer>> {
        Ok(self
            .find_many(|o| o.is_active() && o.references(OfferParty::Store, store_id))
            .await)
    }

    async fn find_active_by_client(&self, client_id: Uuid) -> DomainResult<Vec<Offer>> {
        Ok(self
            .find_many(|o| o.is_active() && o.references(OfferParty::Client, client_id))
            .await)
    }
}

impl VehicleRepository for InMemoryRepository<Vehicle> {}
