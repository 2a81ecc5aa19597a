#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use vehicle_catalog::domain::entities::{FuelType, Transmission, VehicleRecord};
use vehicle_catalog::domain::repositories::StateStorage;
use vehicle_catalog::error::AppError;

/// Builds a valid record with the given distinguishing attributes.
pub fn vehicle(id: &str, year: i32, price: f64) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        make: "Volkswagen".to_string(),
        model: "Golf".to_string(),
        year,
        price,
        previous_price: None,
        mileage: 50_000,
        fuel_type: FuelType::Petrol,
        transmission: Transmission::Manual,
        power: 96.0,
        color: "grey".to_string(),
        description: "Compact hatchback, full service history.".to_string(),
        images: vec!["https://example.com/golf.jpg".to_string()],
        featured: false,
        exclusive: None,
        published_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        features: vec!["parking sensors".to_string()],
    }
}

/// Five-vehicle fleet matching the reference scenario:
/// years [2019..2023], prices [10000, 50000, 20000, 45000, 30000].
pub fn fleet() -> Vec<VehicleRecord> {
    vec![
        vehicle("v2019", 2019, 10_000.0),
        vehicle("v2020", 2020, 50_000.0),
        vehicle("v2021", 2021, 20_000.0),
        vehicle("v2022", 2022, 45_000.0),
        vehicle("v2023", 2023, 30_000.0),
    ]
}

pub fn ids(records: &[VehicleRecord]) -> Vec<&str> {
    records.iter().map(|v| v.id.as_str()).collect()
}

/// In-memory storage shared between store reconstructions, standing in for
/// the durable client storage a browser session would use.
#[derive(Default)]
pub struct MemoryStorage {
    payloads: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self, namespace: &str) -> Result<Option<String>, AppError> {
        Ok(self.payloads.lock().unwrap().get(namespace).cloned())
    }

    fn write(&self, namespace: &str, payload: &str) -> Result<(), AppError> {
        self.payloads
            .lock()
            .unwrap()
            .insert(namespace.to_string(), payload.to_string());
        Ok(())
    }
}

/// Storage whose writes always fail, for best-effort persistence tests.
pub struct FailingStorage;

impl StateStorage for FailingStorage {
    fn read(&self, _namespace: &str) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    fn write(&self, _namespace: &str, _payload: &str) -> Result<(), AppError> {
        Err(AppError::storage("simulated write failure"))
    }
}
