//! Domain entities.

mod vehicle;

pub use vehicle::{FuelType, Transmission, VehicleRecord};
