//! Vehicle service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use domain::{DomainResult, UpdateVehicle, Vehicle, VehicleRequest};

use super::lifecycle;
use crate::infra::UnitOfWork;
use crate::repository::Repository;

#[async_trait]
pub trait VehicleService: Send + Sync {
    async fn create_vehicle(&self, request: VehicleRequest) -> DomainResult<Vehicle>;

    async fn get_vehicle(&self, id: Uuid) -> DomainResult<Vehicle>;

    /// Re-validate every present field; nothing changes on failure
    async fn update_vehicle(&self, id: Uuid, changes: UpdateVehicle) -> DomainResult<Vehicle>;
}

pub struct VehicleManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> VehicleManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> VehicleService for VehicleManager<U> {
    async fn create_vehicle(&self, request: VehicleRequest) -> DomainResult<Vehicle> {
        let attributes = request.validate()?;
        let vehicle = self.uow.vehicles().save(Vehicle::new(attributes)).await?;
        info!(id = ?vehicle.id, "Vehicle created");
        Ok(vehicle)
    }

    async fn get_vehicle(&self, id: Uuid) -> DomainResult<Vehicle> {
        lifecycle::fetch::<Vehicle, _>(&*self.uow.vehicles(), id).await
    }

    async fn update_vehicle(&self, id: Uuid, changes: UpdateVehicle) -> DomainResult<Vehicle> {
        let mut vehicle = self.get_vehicle(id).await?;
        vehicle.attributes = changes.apply(&vehicle.attributes)?;
        self.uow.vehicles().save(vehicle).await
    }
}
