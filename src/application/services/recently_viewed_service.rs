//! Recently-viewed tracker.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::entities::VehicleRecord;
use crate::domain::repositories::StateStorage;
use crate::infrastructure::catalog::VehicleStore;

/// Storage namespace for the recently-viewed log.
pub const RECENTLY_VIEWED_NAMESPACE: &str = "recently-viewed-storage";

const PAYLOAD_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoredLog {
    version: u32,
    ids: Vec<String>,
}

/// Most-recently-viewed vehicle ids, newest first, capped at `capacity`
/// (10 by default).
///
/// Only ids are kept; records are re-resolved against the [`VehicleStore`]
/// at read time, so an id that has since left the catalog silently drops
/// from the materialized view. The log has no remove or clear surface: it
/// only grows and reorders through views.
pub struct RecentlyViewedService<S: StateStorage> {
    ids: Vec<String>,
    capacity: usize,
    storage: Arc<S>,
}

impl<S: StateStorage> RecentlyViewedService<S> {
    /// Constructs the tracker, restoring whatever was last persisted under
    /// [`RECENTLY_VIEWED_NAMESPACE`].
    pub fn load(storage: Arc<S>, capacity: usize) -> Self {
        let ids = match storage.read(RECENTLY_VIEWED_NAMESPACE) {
            Ok(Some(payload)) => match serde_json::from_str::<StoredLog>(&payload) {
                Ok(stored) if stored.version == PAYLOAD_VERSION => stored.ids,
                Ok(stored) => {
                    warn!(
                        version = stored.version,
                        "unsupported recently-viewed payload version, starting empty"
                    );
                    Vec::new()
                }
                Err(e) => {
                    warn!(error = %e, "corrupt recently-viewed payload, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read recently-viewed state, starting empty");
                Vec::new()
            }
        };

        let mut service = Self {
            ids,
            capacity,
            storage,
        };
        service.ids.truncate(service.capacity);
        service
    }

    /// Records a view of `id`: promote-to-front, then truncate to capacity.
    ///
    /// A re-viewed id moves to the front without duplicating.
    pub fn record_view(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(self.capacity);
        self.persist();
    }

    /// Viewed ids, most recent first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Materializes up to `limit` of the logged ids against the record
    /// store, dropping ids that no longer resolve.
    pub fn resolve(&self, vehicles: &VehicleStore, limit: usize) -> Vec<VehicleRecord> {
        self.ids
            .iter()
            .filter_map(|id| vehicles.get(id))
            .take(limit)
            .cloned()
            .collect()
    }

    fn persist(&self) {
        let stored = StoredLog {
            version: PAYLOAD_VERSION,
            ids: self.ids.clone(),
        };
        let payload = match serde_json::to_string(&stored) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to serialize recently-viewed state");
                return;
            }
        };
        if let Err(e) = self.storage.write(RECENTLY_VIEWED_NAMESPACE, &payload) {
            warn!(error = %e, "failed to persist recently-viewed state");
        }
    }
}
