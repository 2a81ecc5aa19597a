//! Side-by-side comparison selection store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::entities::VehicleRecord;
use crate::domain::repositories::StateStorage;

/// Storage namespace for the comparison list.
pub const COMPARE_NAMESPACE: &str = "compare-storage";

const PAYLOAD_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoredComparison {
    version: u32,
    vehicles: Vec<VehicleRecord>,
}

/// Bounded, deduplicated, order-preserving comparison list.
///
/// Holds at most `capacity` (3 by default) full vehicle records, unique by
/// id. State is loaded once at construction and persisted best-effort after
/// every mutation; a failed write is logged and the in-memory state stays
/// authoritative for the session.
pub struct ComparisonService<S: StateStorage> {
    vehicles: Vec<VehicleRecord>,
    capacity: usize,
    storage: Arc<S>,
}

impl<S: StateStorage> ComparisonService<S> {
    /// Constructs the store, restoring whatever was last persisted under
    /// [`COMPARE_NAMESPACE`]. A missing, corrupt, or version-mismatched
    /// payload starts the list empty.
    pub fn load(storage: Arc<S>, capacity: usize) -> Self {
        let vehicles = match storage.read(COMPARE_NAMESPACE) {
            Ok(Some(payload)) => match serde_json::from_str::<StoredComparison>(&payload) {
                Ok(stored) if stored.version == PAYLOAD_VERSION => stored.vehicles,
                Ok(stored) => {
                    warn!(
                        version = stored.version,
                        "unsupported comparison payload version, starting empty"
                    );
                    Vec::new()
                }
                Err(e) => {
                    warn!(error = %e, "corrupt comparison payload, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read comparison state, starting empty");
                Vec::new()
            }
        };

        let mut service = Self {
            vehicles,
            capacity,
            storage,
        };
        // A restored payload may predate a lowered capacity.
        service.vehicles.truncate(service.capacity);
        service
    }

    /// Appends `vehicle` to the comparison list.
    ///
    /// Returns `false` without mutating when the list is full or already
    /// contains the vehicle's id; the caller surfaces that as user feedback.
    pub fn add(&mut self, vehicle: &VehicleRecord) -> bool {
        if self.vehicles.len() >= self.capacity {
            debug!(id = %vehicle.id, "comparison list full");
            return false;
        }
        if self.contains(&vehicle.id) {
            debug!(id = %vehicle.id, "vehicle already in comparison list");
            return false;
        }

        self.vehicles.push(vehicle.clone());
        self.persist();
        true
    }

    /// Removes the entry with `id`; a no-op when absent.
    pub fn remove(&mut self, id: &str) {
        let before = self.vehicles.len();
        self.vehicles.retain(|v| v.id != id);
        if self.vehicles.len() != before {
            self.persist();
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.vehicles.iter().any(|v| v.id == id)
    }

    /// Empties the list unconditionally.
    pub fn clear(&mut self) {
        self.vehicles.clear();
        self.persist();
    }

    /// Current selection, in insertion order.
    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// True when another vehicle can still be added.
    pub fn has_room(&self) -> bool {
        self.vehicles.len() < self.capacity
    }

    fn persist(&self) {
        let stored = StoredComparison {
            version: PAYLOAD_VERSION,
            vehicles: self.vehicles.clone(),
        };
        let payload = match serde_json::to_string(&stored) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to serialize comparison state");
                return;
            }
        };
        if let Err(e) = self.storage.write(COMPARE_NAMESPACE, &payload) {
            warn!(error = %e, "failed to persist comparison state");
        }
    }
}
