//! Vehicle repository trait.

use domain::Vehicle;

use super::base::Repository;

/// Vehicle persistence. Vehicles have no uniqueness constraint.
pub trait VehicleRepository: Repository<Vehicle> {}
