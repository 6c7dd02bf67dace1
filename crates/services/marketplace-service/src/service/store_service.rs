//! Store service - registration, lookups, updates and lifecycle of stores.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use domain::{
    CompanyName, CreateStore, DomainError, DomainResult, EntityKind, Store, TaxId, UpdateStore,
};

use super::lifecycle;
use crate::infra::UnitOfWork;
use crate::repository::{Repository, StoreRepository};

/// Store service trait for dependency injection.
#[async_trait]
pub trait StoreService: Send + Sync {
    /// Register a new active store; the tax id must be unused
    async fn register_store(&self, input: CreateStore) -> DomainResult<Store>;

    async fn get_store(&self, id: Uuid) -> DomainResult<Store>;

    /// Get store for display (fails if deactivated)
    async fn view_store(&self, id: Uuid) -> DomainResult<Store>;

    /// Active stores only; deactivated ones are hidden from listings
    async fn list_active_stores(&self) -> DomainResult<Vec<Store>>;

    async fn update_store(&self, id: Uuid, changes: UpdateStore) -> DomainResult<Store>;

    async fn deactivate_store(&self, id: Uuid) -> DomainResult<Store>;

    async fn reactivate_store(&self, id: Uuid) -> DomainResult<Store>;
}

pub struct StoreManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StoreManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_tax_id_free(&self, tax_id: &TaxId, owner: Option<Uuid>) -> DomainResult<()> {
        match self.uow.stores().find_by_tax_id(tax_id).await? {
            Some(existing) if existing.id != owner => {
                warn!(%tax_id, "Tax id already registered");
                Err(DomainError::duplicate(EntityKind::Store, tax_id.formatted()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> StoreService for StoreManager<U> {
    async fn register_store(&self, input: CreateStore) -> DomainResult<Store> {
        let name = CompanyName::new(&input.name)?;
        let tax_id = TaxId::parse(&input.tax_id)?;
        self.ensure_tax_id_free(&tax_id, None).await?;

        let store = self.uow.stores().save(Store::new(name, tax_id)).await?;
        info!(id = ?store.id, tax_id = %store.tax_id, "Store registered");
        Ok(store)
    }

    async fn get_store(&self, id: Uuid) -> DomainResult<Store> {
        lifecycle::fetch::<Store, _>(&*self.uow.stores(), id).await
    }

    async fn view_store(&self, id: Uuid) -> DomainResult<Store> {
        lifecycle::view::<Store, _>(&*self.uow.stores(), id).await
    }

    async fn list_active_stores(&self) -> DomainResult<Vec<Store>> {
        let stores = self.uow.stores().find_all().await?;
        Ok(stores.into_iter().filter(Store::is_active).collect())
    }

    async fn update_store(&self, id: Uuid, changes: UpdateStore) -> DomainResult<Store> {
        let mut store = self.get_store(id).await?;

        let name = changes.name.as_deref().map(CompanyName::new).transpose()?;
        let tax_id = match &changes.tax_id {
            Some(raw) => {
                let tax_id = TaxId::parse(raw)?;
                self.ensure_tax_id_free(&tax_id, store.id).await?;
                Some(tax_id)
            }
            None => None,
        };

        if let Some(name) = name {
            store.update_name(name);
        }
        if let Some(tax_id) = tax_id {
            store.update_tax_id(tax_id);
        }

        let store = self.uow.stores().save(store).await?;
        info!(%id, "Store updated");
        Ok(store)
    }

    async fn deactivate_store(&self, id: Uuid) -> DomainResult<Store> {
        let stores = self.uow.stores();
        let offers = self.uow.offers();
        lifecycle::deactivate::<Store, _>(&*stores, &*offers, id).await
    }

    async fn reactivate_store(&self, id: Uuid) -> DomainResult<Store> {
        lifecycle::reactivate::<Store, _>(&*self.uow.stores(), id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{stored_store, MockRepos};
    use domain::{Lifecycled, Offer};

    fn create_input(tax_id: &str) -> CreateStore {
        CreateStore {
            name: "Auto Center".to_string(),
            tax_id: tax_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_store_normalizes_tax_id() {
        let mut uow = MockRepos::default();
        uow.stores
            .expect_find_by_tax_id()
            .withf(|tax_id| tax_id.digits() == "11222333000181")
            .returning(|_| Ok(None));
        uow.stores.expect_save().times(1).returning(|mut store| {
            store.id = Some(Uuid::new_v4());
            Ok(store)
        });

        let service = StoreManager::new(uow.into_uow());
        let store = service
            .register_store(create_input("11.222.333/0001-81"))
            .await
            .unwrap();

        assert_eq!(store.tax_id.digits(), "11222333000181");
        assert_eq!(store.tax_id.to_string(), "11.222.333/0001-81");
        assert!(store.is_active());
    }

    #[tokio::test]
    async fn test_register_store_invalid_tax_id() {
        let mut uow = MockRepos::default();
        uow.stores.expect_find_by_tax_id().never();
        uow.stores.expect_save().never();

        let service = StoreManager::new(uow.into_uow());
        let err = service
            .register_store(create_input("11.222.333/0001-99"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Please inform a valid tax id.");
    }

    #[tokio::test]
    async fn test_register_store_duplicate_tax_id() {
        let mut uow = MockRepos::default();
        uow.stores
            .expect_find_by_tax_id()
            .returning(|_| Ok(Some(stored_store(Uuid::new_v4(), "11222333000181"))));
        uow.stores.expect_save().never();

        let service = StoreManager::new(uow.into_uow());
        let result = service.register_store(create_input("11222333000181")).await;

        assert!(matches!(
            result,
            Err(DomainError::Duplicate {
                kind: EntityKind::Store,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_list_active_stores_hides_inactive() {
        let mut uow = MockRepos::default();
        uow.stores.expect_find_all().returning(|| {
            let id = Uuid::new_v4();
            let mut inactive = stored_store(id, "11444777000161");
            inactive.lifecycle_mut().deactivate(EntityKind::Store, id).unwrap();
            Ok(vec![stored_store(Uuid::new_v4(), "11222333000181"), inactive])
        });

        let service = StoreManager::new(uow.into_uow());
        let stores = service.list_active_stores().await.unwrap();

        assert_eq!(stores.len(), 1);
        assert!(stores[0].is_active());
        assert_eq!(stores[0].tax_id.digits(), "11222333000181");
    }

    #[tokio::test]
    async fn test_update_store_invalid_name_applies_nothing() {
        let mut uow = MockRepos::default();
        uow.stores
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_store(id, "11222333000181"))));
        uow.stores.expect_find_by_tax_id().returning(|_| Ok(None));
        uow.stores.expect_save().never();

        let service = StoreManager::new(uow.into_uow());
        let changes = UpdateStore {
            name: Some("   ".to_string()),
            tax_id: Some("11444777000161".to_string()),
        };

        let result = service.update_store(Uuid::new_v4(), changes).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_store_tax_id_taken_by_other() {
        let mut uow = MockRepos::default();
        uow.stores
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_store(id, "11222333000181"))));
        uow.stores
            .expect_find_by_tax_id()
            .returning(|_| Ok(Some(stored_store(Uuid::new_v4(), "11444777000161"))));
        uow.stores.expect_save().never();

        let service = StoreManager::new(uow.into_uow());
        let changes = UpdateStore {
            tax_id: Some("11.444.777/0001-61".to_string()),
            ..Default::default()
        };

        let result = service.update_store(Uuid::new_v4(), changes).await;
        assert!(matches!(result, Err(DomainError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn test_deactivate_store_in_use() {
        let mut uow = MockRepos::default();
        uow.stores
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_store(id, "11222333000181"))));
        uow.offers
            .expect_find_active_by_store()
            .returning(|store| Ok(vec![Offer::new(Uuid::new_v4(), Uuid::new_v4(), store)]));
        uow.stores.expect_save().never();

        let service = StoreManager::new(uow.into_uow());
        let id = Uuid::new_v4();
        let result = service.deactivate_store(id).await;

        assert_eq!(
            result.unwrap_err(),
            DomainError::InUse {
                kind: EntityKind::Store,
                id
            }
        );
    }

    #[tokio::test]
    async fn test_deactivate_store_already_inactive_never_saves() {
        let mut uow = MockRepos::default();
        uow.stores.expect_find_by_id().returning(|id| {
            let mut store = stored_store(id, "11222333000181");
            store.lifecycle_mut().deactivate(EntityKind::Store, id).unwrap();
            Ok(Some(store))
        });
        uow.offers.expect_find_active_by_store().never();
        uow.stores.expect_save().never();

        let service = StoreManager::new(uow.into_uow());
        let result = service.deactivate_store(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DomainError::AlreadyInactive { .. })));
    }

    #[tokio::test]
    async fn test_reactivate_inactive_store() {
        let mut uow = MockRepos::default();
        uow.stores.expect_find_by_id().returning(|id| {
            let mut store = stored_store(id, "11222333000181");
            store.lifecycle_mut().deactivate(EntityKind::Store, id).unwrap();
            Ok(Some(store))
        });
        uow.stores
            .expect_save()
            .times(1)
            .withf(|store| store.is_active())
            .returning(Ok);

        let service = StoreManager::new(uow.into_uow());
        let store = service.reactivate_store(Uuid::new_v4()).await.unwrap();
        assert!(store.is_active());
    }
}
