//! Filter criteria, sort keys, and the fixed filter bounds.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{FuelType, Transmission};

/// A user-specified combination of filter constraints.
///
/// Every field is optional; an absent field imposes no constraint on its
/// dimension. All non-empty fields combine conjunctively, with set
/// membership in `fuel_types` as the one disjunctive sub-condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact, case-sensitive make match.
    pub make: Option<String>,
    /// Record matches when its fuel type is a member; empty = unconstrained.
    pub fuel_types: Vec<FuelType>,
    pub transmission: Option<Transmission>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub mileage_max: Option<u32>,
}

impl FilterCriteria {
    /// Returns true when no constraint is set on any dimension.
    pub fn is_empty(&self) -> bool {
        self.make.is_none()
            && self.fuel_types.is_empty()
            && self.transmission.is_none()
            && self.year_min.is_none()
            && self.year_max.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.mileage_max.is_none()
    }

    /// Number of active filter groups, as shown on the filter badge.
    ///
    /// A bound pair (year, price) counts once even when both ends are set.
    pub fn active_count(&self) -> usize {
        [
            self.make.is_some(),
            !self.fuel_types.is_empty(),
            self.transmission.is_some(),
            self.price_min.is_some() || self.price_max.is_some(),
            self.mileage_max.is_some(),
            self.year_min.is_some() || self.year_max.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Ordering applied to a listing view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Newest listings first. Default order.
    #[default]
    PublishedDateDesc,
    PriceAsc,
    PriceDesc,
    YearDesc,
    YearAsc,
    MileageAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::PublishedDateDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::YearDesc,
        SortKey::YearAsc,
        SortKey::MileageAsc,
    ];

    /// Wire representation used in the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PublishedDateDesc => "published-date-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::YearDesc => "year-desc",
            SortKey::YearAsc => "year-asc",
            SortKey::MileageAsc => "mileage-asc",
        }
    }

    /// Parses a wire value; unknown values yield `None`.
    pub fn parse(s: &str) -> Option<SortKey> {
        SortKey::ALL.into_iter().find(|key| key.as_str() == s)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed domain bounds for the range filters.
///
/// These are the slider end-stops of the filter panel, not the extent of the
/// loaded collection: committing a range value at an end-stop means "no
/// constraint", and decoded URL values outside these bounds are dropped.
/// Deliberately fixed configuration rather than derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterBounds {
    pub year_min: i32,
    pub year_max: i32,
    pub price_max: f64,
    pub mileage_max: u32,
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            year_min: 2017,
            year_max: 2025,
            price_max: 100_000.0,
            mileage_max: 200_000,
        }
    }
}

impl FilterBounds {
    /// Normalizes a committed price range: an end at its end-stop becomes
    /// "no constraint".
    pub fn commit_price(&self, low: f64, high: f64) -> (Option<f64>, Option<f64>) {
        (
            (low > 0.0).then_some(low),
            (high < self.price_max).then_some(high),
        )
    }

    /// Normalizes a committed year range.
    pub fn commit_year(&self, low: i32, high: i32) -> (Option<i32>, Option<i32>) {
        (
            (low > self.year_min).then_some(low),
            (high < self.year_max).then_some(high),
        )
    }

    /// Normalizes a committed mileage ceiling.
    pub fn commit_mileage(&self, value: u32) -> Option<u32> {
        (value < self.mileage_max).then_some(value)
    }

    pub fn year_in_range(&self, year: i32) -> bool {
        (self.year_min..=self.year_max).contains(&year)
    }

    pub fn price_in_range(&self, price: f64) -> bool {
        price >= 0.0 && price <= self.price_max
    }

    pub fn mileage_in_range(&self, mileage: u32) -> bool {
        mileage <= self.mileage_max
    }
}
