//! Read-only vehicle record store loaded once at session start.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};
use validator::Validate;

use crate::domain::entities::VehicleRecord;
use crate::error::AppError;

/// In-memory, read-only collection of vehicle records.
///
/// Built once from an external JSON source and never mutated afterwards;
/// only the selection stores hold mutable references to subsets of it.
pub struct VehicleStore {
    vehicles: Vec<VehicleRecord>,
    index: HashMap<String, usize>,
}

impl VehicleStore {
    /// Builds a store from already-validated records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Catalog`] when two records share an id.
    pub fn from_records(vehicles: Vec<VehicleRecord>) -> Result<Self, AppError> {
        let mut index = HashMap::with_capacity(vehicles.len());
        for (position, vehicle) in vehicles.iter().enumerate() {
            if index.insert(vehicle.id.clone(), position).is_some() {
                return Err(AppError::catalog(format!(
                    "duplicate vehicle id '{}'",
                    vehicle.id
                )));
            }
        }
        Ok(Self { vehicles, index })
    }

    /// Loads and validates the catalog from a JSON file.
    ///
    /// Records failing schema validation (and records duplicating an
    /// earlier id) are dropped with a warning; valid siblings are kept, so
    /// one bad source record never takes down the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Catalog`] when the file cannot be read or is not
    /// a JSON array of records.
    pub fn load_json(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::catalog(format!("cannot read '{}': {e}", path.display()))
        })?;
        let records: Vec<VehicleRecord> = serde_json::from_str(&raw).map_err(|e| {
            AppError::catalog(format!("cannot parse '{}': {e}", path.display()))
        })?;

        let total = records.len();
        let mut vehicles = Vec::with_capacity(total);
        let mut index = HashMap::with_capacity(total);

        for (position, vehicle) in records.into_iter().enumerate() {
            if let Err(e) = vehicle.validate() {
                warn!(
                    index = position,
                    id = %vehicle.id,
                    error = %e,
                    "dropping invalid catalog record"
                );
                continue;
            }
            if index.contains_key(&vehicle.id) {
                warn!(
                    index = position,
                    id = %vehicle.id,
                    "dropping record with duplicate id"
                );
                continue;
            }
            index.insert(vehicle.id.clone(), vehicles.len());
            vehicles.push(vehicle);
        }

        info!(
            loaded = vehicles.len(),
            dropped = total - vehicles.len(),
            "catalog loaded from {}",
            path.display()
        );

        Ok(Self { vehicles, index })
    }

    /// All records, in source order.
    pub fn all(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&VehicleRecord> {
        self.index.get(id).map(|&position| &self.vehicles[position])
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Records flagged for the featured section, in source order.
    pub fn featured(&self) -> Vec<&VehicleRecord> {
        self.vehicles.iter().filter(|v| v.featured).collect()
    }

    /// Records flagged as exclusive offers, in source order.
    pub fn exclusive(&self) -> Vec<&VehicleRecord> {
        self.vehicles.iter().filter(|v| v.is_exclusive()).collect()
    }

    /// Distinct makes, in first-seen order, for the make filter control.
    pub fn makes(&self) -> Vec<&str> {
        let mut makes: Vec<&str> = Vec::new();
        for vehicle in &self.vehicles {
            if !makes.contains(&vehicle.make.as_str()) {
                makes.push(&vehicle.make);
            }
        }
        makes
    }
}
