//! Filter-state query-string codec.
//!
//! Maps a [`FilterCriteria`] + [`SortKey`] pair to and from the listing
//! view's query string, the one wire format kept stable for shareable
//! links. Parameters, in order: `make`, `fuelType` (comma-separated),
//! `transmission`, `yearMin`, `yearMax`, `priceMin`, `priceMax`,
//! `mileageMax`, `sort`. Only non-default values are encoded; the default
//! sort is omitted entirely.
//!
//! Decoding is parse-permissive: missing, malformed, or out-of-range values
//! are treated as absent, never raised as errors. Worst case is an
//! under-filtered list, not a crash.

use url::form_urlencoded;

use crate::domain::criteria::{FilterBounds, FilterCriteria, SortKey};
use crate::domain::entities::{FuelType, Transmission};

/// Encodes `criteria` and `sort` as a query string (no leading `?`).
///
/// Absent fields and the default sort key produce no parameter, keeping
/// shared URLs minimal. An unconstrained view encodes as the empty string.
pub fn encode(criteria: &FilterCriteria, sort: SortKey) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if let Some(make) = &criteria.make {
        query.append_pair("make", make);
    }
    if !criteria.fuel_types.is_empty() {
        let joined = criteria
            .fuel_types
            .iter()
            .map(FuelType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        query.append_pair("fuelType", &joined);
    }
    if let Some(transmission) = criteria.transmission {
        query.append_pair("transmission", transmission.as_str());
    }
    if let Some(year_min) = criteria.year_min {
        query.append_pair("yearMin", &year_min.to_string());
    }
    if let Some(year_max) = criteria.year_max {
        query.append_pair("yearMax", &year_max.to_string());
    }
    if let Some(price_min) = criteria.price_min {
        query.append_pair("priceMin", &format_number(price_min));
    }
    if let Some(price_max) = criteria.price_max {
        query.append_pair("priceMax", &format_number(price_max));
    }
    if let Some(mileage_max) = criteria.mileage_max {
        query.append_pair("mileageMax", &mileage_max.to_string());
    }
    if sort != SortKey::default() {
        query.append_pair("sort", sort.as_str());
    }

    query.finish()
}

/// Decodes a query string with the default [`FilterBounds`].
pub fn decode(query: &str) -> (FilterCriteria, SortKey) {
    decode_with(query, &FilterBounds::default())
}

/// Decodes a query string, dropping numeric values outside `bounds`.
///
/// Duplicate parameters keep the first occurrence. Unknown fuel types are
/// dropped from the set; an unknown sort value falls back to the default.
pub fn decode_with(query: &str, bounds: &FilterBounds) -> (FilterCriteria, SortKey) {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut criteria = FilterCriteria::default();
    let mut sort = SortKey::default();
    let mut sort_seen = false;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "make" if criteria.make.is_none() && !value.is_empty() => {
                criteria.make = Some(value.into_owned());
            }
            "fuelType" if criteria.fuel_types.is_empty() => {
                criteria.fuel_types = parse_fuel_list(&value);
            }
            "transmission" if criteria.transmission.is_none() => {
                criteria.transmission = Transmission::parse(&value);
            }
            "yearMin" if criteria.year_min.is_none() => {
                criteria.year_min = parse_year(&value, bounds);
            }
            "yearMax" if criteria.year_max.is_none() => {
                criteria.year_max = parse_year(&value, bounds);
            }
            "priceMin" if criteria.price_min.is_none() => {
                criteria.price_min = parse_price(&value, bounds);
            }
            "priceMax" if criteria.price_max.is_none() => {
                criteria.price_max = parse_price(&value, bounds);
            }
            "mileageMax" if criteria.mileage_max.is_none() => {
                criteria.mileage_max = parse_mileage(&value, bounds);
            }
            "sort" if !sort_seen => {
                sort = SortKey::parse(&value).unwrap_or_default();
                sort_seen = true;
            }
            _ => {}
        }
    }

    (criteria, sort)
}

fn parse_fuel_list(value: &str) -> Vec<FuelType> {
    let mut fuels = Vec::new();
    for part in value.split(',') {
        if let Some(fuel) = FuelType::parse(part.trim())
            && !fuels.contains(&fuel)
        {
            fuels.push(fuel);
        }
    }
    fuels
}

fn parse_year(value: &str, bounds: &FilterBounds) -> Option<i32> {
    value
        .parse::<i32>()
        .ok()
        .filter(|year| bounds.year_in_range(*year))
}

fn parse_price(value: &str, bounds: &FilterBounds) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && bounds.price_in_range(*price))
}

fn parse_mileage(value: &str, bounds: &FilterBounds) -> Option<u32> {
    value
        .parse::<u32>()
        .ok()
        .filter(|mileage| bounds.mileage_in_range(*mileage))
}

/// Whole numbers print without a fractional part, so slider values come
/// out as integers on the wire.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
