//! Offer repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use domain::{DomainResult, Offer};

use super::base::Repository;

/// Offer persistence with the usage queries backing the deactivation guard.
#[async_trait]
pub trait OfferRepository: Repository<Offer> {
    /// Active offers placed at `store_id`
    async fn find_active_by_store(&self, store_id: Uuid) -> DomainResult<Vec<Offer>>;

    /// Active offers made by client `client_id`
    async fn find_active_by_client(&self, client_id: Uuid) -> DomainResult<Vec<Offer>>;
}
