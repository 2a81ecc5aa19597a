//! Favorites selection store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::entities::VehicleRecord;
use crate::domain::repositories::StateStorage;

/// Storage namespace for the favorites list.
pub const FAVORITES_NAMESPACE: &str = "favorites-storage";

const PAYLOAD_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoredFavorites {
    version: u32,
    vehicles: Vec<VehicleRecord>,
}

/// Unbounded, deduplicated favorites list in insertion order.
///
/// Same persisted lifecycle as the comparison store: restored once at
/// construction, written best-effort after every mutation.
pub struct FavoritesService<S: StateStorage> {
    vehicles: Vec<VehicleRecord>,
    storage: Arc<S>,
}

impl<S: StateStorage> FavoritesService<S> {
    /// Constructs the store, restoring whatever was last persisted under
    /// [`FAVORITES_NAMESPACE`]. A missing or unreadable payload starts the
    /// list empty.
    pub fn load(storage: Arc<S>) -> Self {
        let vehicles = match storage.read(FAVORITES_NAMESPACE) {
            Ok(Some(payload)) => match serde_json::from_str::<StoredFavorites>(&payload) {
                Ok(stored) if stored.version == PAYLOAD_VERSION => stored.vehicles,
                Ok(stored) => {
                    warn!(
                        version = stored.version,
                        "unsupported favorites payload version, starting empty"
                    );
                    Vec::new()
                }
                Err(e) => {
                    warn!(error = %e, "corrupt favorites payload, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read favorites state, starting empty");
                Vec::new()
            }
        };

        Self { vehicles, storage }
    }

    /// Appends `vehicle` to the favorites.
    ///
    /// Returns `false` without mutating when the id is already present.
    pub fn add(&mut self, vehicle: &VehicleRecord) -> bool {
        if self.contains(&vehicle.id) {
            debug!(id = %vehicle.id, "vehicle already favorited");
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

    /// Flips the favorited state of `vehicle` and returns the new presence:
    /// `true` = now favorited, `false` = no longer favorited.
    ///
    /// This is the single operation the favorite toggle control binds to;
    /// presence check and mutation happen in one call.
    pub fn toggle(&mut self, vehicle: &VehicleRecord) -> bool {
        if self.contains(&vehicle.id) {
            self.remove(&vehicle.id);
            false
        } else {
            self.add(vehicle);
            true
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

    /// Current favorites, in insertion order.
    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    fn persist(&self) {
        let stored = StoredFavorites {
            version: PAYLOAD_VERSION,
            vehicles: self.vehicles.clone(),
        };
        let payload = match serde_json::to_string(&stored) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to serialize favorites state");
                return;
            }
        };
        if let Err(e) = self.storage.write(FAVORITES_NAMESPACE, &payload) {
            warn!(error = %e, "failed to persist favorites state");
        }
    }
}
