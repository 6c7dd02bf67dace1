//! Store repository trait.

use async_trait::async_trait;

use domain::{DomainResult, Store, TaxId};

use super::base::Repository;

/// Store persistence with the tax id uniqueness lookup.
#[async_trait]
pub trait StoreRepository: Repository<Store> {
    async fn find_by_tax_id(&self, tax_id: &TaxId) -> DomainResult<Option<Store>>;
}
