//! Infrastructure layer - persistence wiring.

mod unit_of_work;

pub use unit_of_work::{InMemoryPersistence, UnitOfWork};
