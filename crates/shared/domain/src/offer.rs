//! Offer domain entity: a vehicle sale offer linking a client, a vehicle
//! and a store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::lifecycle::{EntityKind, Lifecycle, Lifecycled, OfferParty, Persistable};
use crate::vehicle::UpdateVehicle;

/// Offer progress. Any status may be set to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferStatus {
    New,
    InProgress,
    Completed,
}

impl OfferStatus {
    /// Localized display label
    pub fn label(&self) -> &'static str {
        match self {
            OfferStatus::New => "nova",
            OfferStatus::InProgress => "em atendimento",
            OfferStatus::Completed => "concluida",
        }
    }
}

impl std::str::FromStr for OfferStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NEW" => Ok(OfferStatus::New),
            "IN_PROGRESS" => Ok(OfferStatus::InProgress),
            "COMPLETED" => Ok(OfferStatus::Completed),
            _ => Err(DomainError::validation(format!(
                "Invalid offer status: '{}'",
                s
            ))),
        }
    }
}

/// Offer domain entity
#[derive(Debug, Clone, Serialize)]
pub struct Offer {
    pub id: Option<Uuid>,
    pub status: OfferStatus,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub store_id: Uuid,
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    /// Create a new offer in status `New`
    pub fn new(client_id: Uuid, vehicle_id: Uuid, store_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            status: OfferStatus::New,
            client_id,
            vehicle_id,
            store_id,
            lifecycle: Lifecycle::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn update_status(&mut self, status: OfferStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Whether this offer points at `id` in the given role
    pub fn references(&self, party: OfferParty, id: Uuid) -> bool {
        match party {
            OfferParty::Client => self.client_id == id,
            OfferParty::Store => self.store_id == id,
        }
    }
}

impl Persistable for Offer {
    const KIND: EntityKind = EntityKind::Offer;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl Lifecycled for Offer {
    const OFFER_PARTY: Option<OfferParty> = None;

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        self.updated_at = Utc::now();
        &mut self.lifecycle
    }
}

/// Partial offer update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOffer {
    pub status: Option<OfferStatus>,
    /// Changes to the offered vehicle
    pub vehicle: Option<UpdateVehicle>,
}
