//! # Vehicle Catalog
//!
//! Catalog browsing core for a vehicle dealership: listing, filtering,
//! sorting, side-by-side comparison, favoriting, and recently-viewed
//! tracking over an in-memory collection of vehicle records.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Vehicle records, filter criteria, sort
//!   keys, and the state-storage port
//! - **Application Layer** ([`application`]) - The listing pipeline and the
//!   three persisted selection stores
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON catalog loading
//!   and file-backed state storage
//! - **Query Codec** ([`query`]) - Bidirectional mapping between filter
//!   state and the shareable query-string representation
//!
//! Rendering, routing, and transport are external collaborators: the
//! presentation layer calls the pure listing pipeline and the store
//! mutations, nothing more.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use vehicle_catalog::config;
//! use vehicle_catalog::infrastructure::catalog::VehicleStore;
//! use vehicle_catalog::infrastructure::persistence::JsonFileStorage;
//! use vehicle_catalog::state::AppState;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = config::load_from_env()?;
//! let vehicles = VehicleStore::load_json(&config.catalog_path)?;
//! let storage = Arc::new(JsonFileStorage::new(&config.state_dir));
//! let state = AppState::initialize(&config, vehicles, storage);
//!
//! let (criteria, sort) = vehicle_catalog::query::decode("yearMin=2021&sort=price-asc");
//! let listing = state.listing.browse(&criteria, sort);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Runtime configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod query;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ComparisonService, FavoritesService, ListingService, RecentlyViewedService,
        filter_vehicles, sort_vehicles,
    };
    pub use crate::domain::criteria::{FilterBounds, FilterCriteria, SortKey};
    pub use crate::domain::entities::{FuelType, Transmission, VehicleRecord};
    pub use crate::domain::repositories::StateStorage;
    pub use crate::error::AppError;
    pub use crate::infrastructure::catalog::VehicleStore;
    pub use crate::infrastructure::persistence::{JsonFileStorage, NullStorage};
    pub use crate::state::AppState;
}
