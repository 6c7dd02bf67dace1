//! Offer service - composes a store, a client and a new vehicle into an
//! offer, and manages the offer's status and lifecycle.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use domain::{DomainError, DomainResult, Offer, Store, UpdateOffer, User, Vehicle, VehicleRequest};

use super::lifecycle;
use crate::infra::UnitOfWork;
use crate::repository::Repository;

/// Offer service trait for dependency injection.
#[async_trait]
pub trait OfferService: Send + Sync {
    /// Register an offer for a new vehicle at `store_id` on behalf of `client_id`.
    async fn register_offer(
        &self,
        store_id: Uuid,
        client_id: Uuid,
        vehicle: VehicleRequest,
    ) -> DomainResult<Offer>;

    async fn get_offer(&self, id: Uuid) -> DomainResult<Offer>;

    /// Get offer for display (fails if deactivated)
    async fn view_offer(&self, id: Uuid) -> DomainResult<Offer>;

    /// Change status and vehicle of an active offer; nothing is saved on failure
    async fn update_offer(&self, id: Uuid, changes: UpdateOffer) -> DomainResult<Offer>;

    async fn deactivate_offer(&self, id: Uuid) -> DomainResult<Offer>;

    async fn reactivate_offer(&self, id: Uuid) -> DomainResult<Offer>;
}

pub struct OfferManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OfferManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> OfferService for OfferManager<U> {
    async fn register_offer(
        &self,
        store_id: Uuid,
        client_id: Uuid,
        vehicle: VehicleRequest,
    ) -> DomainResult<Offer> {
        lifecycle::fetch::<Store, _>(&*self.uow.stores(), store_id).await?;
        lifecycle::fetch::<User, _>(&*self.uow.users(), client_id).await?;
        let attributes = vehicle.validate()?;

        let vehicle = self.uow.vehicles().save(Vehicle::new(attributes)).await?;
        let vehicle_id = vehicle
            .id
            .ok_or_else(|| DomainError::internal("Vehicle persisted without an id"))?;

        let offer = self
            .uow
            .offers()
            .save(Offer::new(client_id, vehicle_id, store_id))
            .await?;
        info!(id = ?offer.id, %store_id, %client_id, %vehicle_id, "Offer registered");
        Ok(offer)
    }

    async fn get_offer(&self, id: Uuid) -> DomainResult<Offer> {
        lifecycle::fetch::<Offer, _>(&*self.uow.offers(), id).await
    }

    async fn view_offer(&self, id: Uuid) -> DomainResult<Offer> {
        lifecycle::view::<Offer, _>(&*self.uow.offers(), id).await
    }

    async fn update_offer(&self, id: Uuid, changes: UpdateOffer) -> DomainResult<Offer> {
        let mut offer = self.view_offer(id).await?;
        let vehicles = self.uow.vehicles();

        let vehicle = match &changes.vehicle {
            Some(vehicle_changes) => {
                let mut vehicle =
                    lifecycle::fetch::<Vehicle, _>(&*vehicles, offer.vehicle_id).await?;
                vehicle.attributes = vehicle_changes.apply(&vehicle.attributes)?;
                Some(vehicle)
            }
            None => None,
        };

        if let Some(vehicle) = vehicle {
            vehicles.save(vehicle).await?;
            info!(%id, vehicle_id = %offer.vehicle_id, "Offer vehicle updated");
        }
        if let Some(status) = changes.status {
            offer.update_status(status);
            info!(%id, status = status.label(), "Offer status changed");
        }
        self.uow.offers().save(offer).await
    }

    async fn deactivate_offer(&self, id: Uuid) -> DomainResult<Offer> {
        let offers = self.uow.offers();
        lifecycle::deactivate::<Offer, _>(&*offers, &*offers, id).await
    }

    async fn reactivate_offer(&self, id: Uuid) -> DomainResult<Offer> {
        lifecycle::reactivate::<Offer, _>(&*self.uow.offers(), id).await
    }
}
