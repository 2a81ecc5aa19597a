//! Application services orchestrating the catalog core.

mod comparison_service;
mod favorites_service;
mod listing_service;
mod recently_viewed_service;

pub use comparison_service::{COMPARE_NAMESPACE, ComparisonService};
pub use favorites_service::{FAVORITES_NAMESPACE, FavoritesService};
pub use listing_service::{ListingService, filter_vehicles, sort_vehicles};
pub use recently_viewed_service::{RECENTLY_VIEWED_NAMESPACE, RecentlyViewedService};
