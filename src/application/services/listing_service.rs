//! Listing pipeline: filtering and ordering of the vehicle collection.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::criteria::{FilterCriteria, SortKey};
use crate::domain::entities::VehicleRecord;
use crate::infrastructure::catalog::VehicleStore;

/// Returns the subset of `records` matching every non-empty criterion.
///
/// Filtering is purely conjunctive and preserves the relative order of the
/// input. Malformed criteria (e.g. `year_min > year_max`) silently yield an
/// empty result rather than failing.
pub fn filter_vehicles(records: &[VehicleRecord], criteria: &FilterCriteria) -> Vec<VehicleRecord> {
    records
        .iter()
        .filter(|v| matches(v, criteria))
        .cloned()
        .collect()
}

fn matches(vehicle: &VehicleRecord, criteria: &FilterCriteria) -> bool {
    if let Some(make) = &criteria.make
        && vehicle.make != *make
    {
        return false;
    }

    // The one disjunctive sub-condition: membership in the fuel set.
    if !criteria.fuel_types.is_empty() && !criteria.fuel_types.contains(&vehicle.fuel_type) {
        return false;
    }

    if let Some(transmission) = criteria.transmission
        && vehicle.transmission != transmission
    {
        return false;
    }

    if let Some(year_min) = criteria.year_min
        && vehicle.year < year_min
    {
        return false;
    }

    if let Some(year_max) = criteria.year_max
        && vehicle.year > year_max
    {
        return false;
    }

    if let Some(price_min) = criteria.price_min
        && vehicle.price < price_min
    {
        return false;
    }

    if let Some(price_max) = criteria.price_max
        && vehicle.price > price_max
    {
        return false;
    }

    if let Some(mileage_max) = criteria.mileage_max
        && vehicle.mileage > mileage_max
    {
        return false;
    }

    true
}

/// Returns `records` ordered by `key`.
///
/// The sort is stable: records equal under the key keep their relative input
/// order, so re-sorting after a filter change does not shuffle equal-valued
/// entries. The input is never mutated.
pub fn sort_vehicles(records: &[VehicleRecord], key: SortKey) -> Vec<VehicleRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

fn compare(a: &VehicleRecord, b: &VehicleRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::PublishedDateDesc => b.published_date.cmp(&a.published_date),
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
        SortKey::YearDesc => b.year.cmp(&a.year),
        SortKey::YearAsc => a.year.cmp(&b.year),
        SortKey::MileageAsc => a.mileage.cmp(&b.mileage),
    }
}

/// Service producing filtered, ordered listing views over the record store.
///
/// The presentation layer calls [`ListingService::browse`] whenever criteria
/// or sort key change; the pipeline recomputes in full on every call, which
/// is fine at catalog sizes of tens of records.
pub struct ListingService {
    vehicles: Arc<VehicleStore>,
}

impl ListingService {
    pub fn new(vehicles: Arc<VehicleStore>) -> Self {
        Self { vehicles }
    }

    /// Applies `criteria` then `key` to the whole collection.
    pub fn browse(&self, criteria: &FilterCriteria, key: SortKey) -> Vec<VehicleRecord> {
        let filtered = filter_vehicles(self.vehicles.all(), criteria);
        sort_vehicles(&filtered, key)
    }

    /// Number of records matching `criteria`, for the results counter.
    pub fn count(&self, criteria: &FilterCriteria) -> usize {
        self.vehicles
            .all()
            .iter()
            .filter(|v| matches(v, criteria))
            .count()
    }
}
