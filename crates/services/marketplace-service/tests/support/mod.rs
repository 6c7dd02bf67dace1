//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use domain::{CreateStore, CreateUser, DomainResult, IdentityGuard, VehicleRequest};
use marketplace_service_lib::{
    InMemoryPersistence, OfferManager, StoreManager, UserManager, VehicleManager,
};

/// Install a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Reversible stand-in for a real hasher, fast enough for bulk tests.
pub struct PrefixGuard;

impl IdentityGuard for PrefixGuard {
    fn hash(&self, raw: &str) -> DomainResult<String> {
        Ok(format!("hashed:{}", raw))
    }

    fn verify(&self, raw: &str, hash: &str) -> bool {
        hash == format!("hashed:{}", raw)
    }
}

/// All services over one shared in-memory persistence.
pub struct Marketplace {
    pub persistence: Arc<InMemoryPersistence>,
    pub users: Arc<UserManager<InMemoryPersistence>>,
    pub stores: StoreManager<InMemoryPersistence>,
    pub offers: OfferManager<InMemoryPersistence>,
    pub vehicles: VehicleManager<InMemoryPersistence>,
}

impl Marketplace {
    pub fn new() -> Self {
        Self::with_guard(Arc::new(PrefixGuard))
    }

    pub fn with_guard(guard: Arc<dyn IdentityGuard>) -> Self {
        init_tracing();
        let persistence = Arc::new(InMemoryPersistence::new());
        Self {
            users: Arc::new(UserManager::new(persistence.clone(), guard)),
            stores: StoreManager::new(persistence.clone()),
            offers: OfferManager::new(persistence.clone()),
            vehicles: VehicleManager::new(persistence.clone()),
            persistence,
        }
    }
}

pub fn new_user(email: &str) -> CreateUser {
    CreateUser {
        first_name: "Maria".to_string(),
        last_name: "Souza".to_string(),
        email: email.to_string(),
        password: "s3cret".to_string(),
    }
}

pub fn new_store(name: &str, tax_id: &str) -> CreateStore {
    CreateStore {
        name: name.to_string(),
        tax_id: tax_id.to_string(),
    }
}

pub fn car() -> VehicleRequest {
    VehicleRequest {
        vehicle_type: "CAR".to_string(),
        model: "Onix".to_string(),
        release_year: 2022,
        color: "Silver".to_string(),
    }
}
