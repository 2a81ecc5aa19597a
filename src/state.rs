//! Session state assembled once at startup.

use std::sync::Arc;

use crate::application::services::{
    ComparisonService, FavoritesService, ListingService, RecentlyViewedService,
};
use crate::config::Config;
use crate::domain::repositories::StateStorage;
use crate::infrastructure::catalog::VehicleStore;

/// All core collaborators, constructed once and injected into the
/// presentation layer.
///
/// The three selection stores are independent pieces of mutable state; the
/// record store and listing pipeline are read-only. Nothing here is an
/// ambient singleton: consumers receive the state they need explicitly.
pub struct AppState<S: StateStorage> {
    pub vehicles: Arc<VehicleStore>,
    pub listing: ListingService,
    pub comparison: ComparisonService<S>,
    pub favorites: FavoritesService<S>,
    pub recently_viewed: RecentlyViewedService<S>,
}

impl<S: StateStorage> AppState<S> {
    /// Wires the services over a loaded record store and a storage backend,
    /// restoring each persisted store from its namespace.
    pub fn initialize(config: &Config, vehicles: VehicleStore, storage: Arc<S>) -> Self {
        let vehicles = Arc::new(vehicles);
        Self {
            listing: ListingService::new(Arc::clone(&vehicles)),
            comparison: ComparisonService::load(Arc::clone(&storage), config.compare_capacity),
            favorites: FavoritesService::load(Arc::clone(&storage)),
            recently_viewed: RecentlyViewedService::load(storage, config.recent_capacity),
            vehicles,
        }
    }
}
