//! Base repository trait shared by every entity store.
//!
//! Concrete repositories extend it with their own lookups, one trait per
//! entity, so services only see the queries they need.

use async_trait::async_trait;
use uuid::Uuid;

use domain::{DomainResult, Persistable};

/// Save and read operations common to all entities.
#[async_trait]
pub trait Repository<E: Persistable>: Send + Sync {
    /// Insert or replace. An entity without id gets one assigned.
    async fn save(&self, entity: E) -> DomainResult<E>;

    /// Find entity by id regardless of its lifecycle state
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<E>>;

    /// Every stored entity, active or not, in insertion order
    async fn find_all(&self) -> DomainResult<Vec<E>>;
}
