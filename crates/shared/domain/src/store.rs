//! Store (dealership) domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lifecycle::{EntityKind, Lifecycle, Lifecycled, OfferParty, Persistable};
use crate::name::CompanyName;
use crate::tax_id::TaxId;

/// Store domain entity. The tax id is unique across all stores.
#[derive(Debug, Clone, Serialize)]
pub struct Store {
    pub id: Option<Uuid>,
    pub name: CompanyName,
    pub tax_id: TaxId,
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    pub fn new(name: CompanyName, tax_id: TaxId) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name,
            tax_id,
            lifecycle: Lifecycle::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn update_name(&mut self, name: CompanyName) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn update_tax_id(&mut self, tax_id: TaxId) {
        self.tax_id = tax_id;
        self.updated_at = Utc::now();
    }
}

impl Persistable for Store {
    const KIND: EntityKind = EntityKind::Store;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl Lifecycled for Store {
    const OFFER_PARTY: Option<OfferParty> = Some(OfferParty::Store);

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        self.updated_at = Utc::now();
        &mut self.lifecycle
    }
}

/// Store registration request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStore {
    pub name: String,
    /// Masked or unmasked tax id
    pub tax_id: String,
}

/// Partial store update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStore {
    pub name: Option<String>,
    pub tax_id: Option<String>,
}
