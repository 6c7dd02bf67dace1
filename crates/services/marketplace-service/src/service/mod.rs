//! Marketplace business logic.

mod lifecycle;
mod offer_service;
mod store_service;
mod user_service;
mod vehicle_service;

#[cfg(test)]
mod test_support;

pub use offer_service::{OfferManager, OfferService};
pub use store_service::{StoreManager, StoreService};
pub use user_service::{UserManager, UserService};
pub use vehicle_service::{VehicleManager, VehicleService};
