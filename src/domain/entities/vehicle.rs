//! Vehicle record entity and its enumerations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Fuel type of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Hybrid,
        FuelType::Electric,
    ];

    /// Wire representation used in query strings and the source JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Hybrid => "hybrid",
            FuelType::Electric => "electric",
        }
    }

    /// Parses a wire value; unknown values yield `None`.
    pub fn parse(s: &str) -> Option<FuelType> {
        match s {
            "petrol" => Some(FuelType::Petrol),
            "diesel" => Some(FuelType::Diesel),
            "hybrid" => Some(FuelType::Hybrid),
            "electric" => Some(FuelType::Electric),
            _ => None,
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transmission type of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
        }
    }

    /// Parses a wire value; unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Transmission> {
        match s {
            "manual" => Some(Transmission::Manual),
            "automatic" => Some(Transmission::Automatic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vehicle listing.
///
/// Records are sourced externally, validated once at the load boundary, and
/// treated as immutable for the lifetime of a session. Field names follow
/// the camelCase layout of the source JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "make must not be empty"))]
    pub make: String,

    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,

    #[validate(range(min = 1990, max = 2025, message = "year must be between 1990 and 2025"))]
    pub year: i32,

    #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
    pub price: f64,

    /// Previous asking price; when greater than `price` the record counts
    /// as discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_price: Option<f64>,

    pub mileage: u32,

    pub fuel_type: FuelType,

    pub transmission: Transmission,

    #[validate(range(exclusive_min = 0.0, message = "power must be positive"))]
    pub power: f64,

    #[validate(length(min = 1, message = "color must not be empty"))]
    pub color: String,

    #[validate(length(min = 10, message = "description must have at least 10 characters"))]
    pub description: String,

    #[validate(
        length(min = 1, message = "at least one image is required"),
        custom(function = validate_image_urls)
    )]
    pub images: Vec<String>,

    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<bool>,

    pub published_date: NaiveDate,

    #[validate(length(min = 1, message = "at least one feature is required"))]
    pub features: Vec<String>,
}

impl VehicleRecord {
    /// Returns true if the record carries a price drop.
    pub fn is_discounted(&self) -> bool {
        self.previous_price.is_some_and(|prev| prev > self.price)
    }

    /// Absolute price drop, if any.
    pub fn discount_amount(&self) -> Option<f64> {
        self.previous_price
            .filter(|prev| *prev > self.price)
            .map(|prev| prev - self.price)
    }

    /// Returns true if the record is marked as an exclusive offer.
    pub fn is_exclusive(&self) -> bool {
        self.exclusive.unwrap_or(false)
    }
}

fn validate_image_urls(images: &[String]) -> Result<(), ValidationError> {
    for image in images {
        if url::Url::parse(image).is_err() {
            return Err(ValidationError::new("image_url")
                .with_message(format!("'{image}' is not a valid URL").into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> VehicleRecord {
        VehicleRecord {
            id: "v-1".to_string(),
            make: "Audi".to_string(),
            model: "A4".to_string(),
            year: 2021,
            price: 25_000.0,
            previous_price: None,
            mileage: 45_000,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            power: 140.0,
            color: "black".to_string(),
            description: "Well maintained, single owner.".to_string(),
            images: vec!["https://example.com/a4.jpg".to_string()],
            featured: false,
            exclusive: None,
            published_date: NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
            features: vec!["navigation".to_string()],
        }
    }

    #[test]
    fn test_discount_detection() {
        let mut v = record();
        assert!(!v.is_discounted());
        assert_eq!(v.discount_amount(), None);

        v.previous_price = Some(28_000.0);
        assert!(v.is_discounted());
        assert_eq!(v.discount_amount(), Some(3_000.0));

        // A previous price at or below the current one is not a discount.
        v.previous_price = Some(25_000.0);
        assert!(!v.is_discounted());
        assert_eq!(v.discount_amount(), None);
    }

    #[test]
    fn test_exclusive_defaults_to_false() {
        let mut v = record();
        assert!(!v.is_exclusive());
        v.exclusive = Some(true);
        assert!(v.is_exclusive());
    }

    #[test]
    fn test_valid_record_passes_validation() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_year_out_of_range_fails_validation() {
        let mut v = record();
        v.year = 1989;
        assert!(v.validate().is_err());
        v.year = 2026;
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_non_url_image_fails_validation() {
        let mut v = record();
        v.images = vec!["not a url".to_string()];
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_empty_features_fail_validation() {
        let mut v = record();
        v.features.clear();
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let v = record();
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"fuelType\":\"diesel\""));
        assert!(json.contains("\"publishedDate\":\"2024-11-05\""));
        assert!(!json.contains("previousPrice"));

        let back: VehicleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_fuel_type_wire_round_trip() {
        for fuel in FuelType::ALL {
            assert_eq!(FuelType::parse(fuel.as_str()), Some(fuel));
        }
        assert_eq!(FuelType::parse("kerosene"), None);
    }

    #[test]
    fn test_transmission_wire_round_trip() {
        assert_eq!(Transmission::parse("manual"), Some(Transmission::Manual));
        assert_eq!(
            Transmission::parse("automatic"),
            Some(Transmission::Automatic)
        );
        assert_eq!(Transmission::parse("cvt"), None);
    }
}
