//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any store is
//! constructed.
//!
//! ## Variables
//!
//! All variables are optional and fall back to defaults:
//!
//! - `CATALOG_PATH` - Path to the vehicle catalog JSON file
//!   (default: `data/vehicles.json`)
//! - `STATE_DIR` - Directory for persisted selection state
//!   (default: `.catalog-state`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `COMPARE_CAPACITY` - Maximum comparison list size (default: 3)
//! - `RECENT_CAPACITY` - Maximum recently-viewed log size (default: 10)
//! - `FILTER_YEAR_MIN` / `FILTER_YEAR_MAX` - Year slider end-stops
//!   (default: 2017 / 2025)
//! - `FILTER_PRICE_MAX` - Price slider end-stop (default: 100000)
//! - `FILTER_MILEAGE_MAX` - Mileage slider end-stop (default: 200000)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::domain::criteria::FilterBounds;

/// Catalog configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub state_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of vehicles in the comparison list.
    pub compare_capacity: usize,
    /// Maximum number of ids in the recently-viewed log.
    pub recent_capacity: usize,
    /// Fixed end-stops for the range filters. Not derived from the loaded
    /// collection.
    pub bounds: FilterBounds,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/vehicles.json"));

        let state_dir = env::var("STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".catalog-state"));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let compare_capacity = env::var("COMPARE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let recent_capacity = env::var("RECENT_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let defaults = FilterBounds::default();
        let bounds = FilterBounds {
            year_min: env::var("FILTER_YEAR_MIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.year_min),
            year_max: env::var("FILTER_YEAR_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.year_max),
            price_max: env::var("FILTER_PRICE_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.price_max),
            mileage_max: env::var("FILTER_MILEAGE_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mileage_max),
        };

        Self {
            catalog_path,
            state_dir,
            log_level,
            log_format,
            compare_capacity,
            recent_capacity,
            bounds,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - a capacity is zero
    /// - the filter bounds are inverted or non-positive
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.compare_capacity == 0 {
            anyhow::bail!("COMPARE_CAPACITY must be at least 1");
        }

        if self.recent_capacity == 0 {
            anyhow::bail!("RECENT_CAPACITY must be at least 1");
        }

        if self.bounds.year_min >= self.bounds.year_max {
            anyhow::bail!(
                "FILTER_YEAR_MIN ({}) must be below FILTER_YEAR_MAX ({})",
                self.bounds.year_min,
                self.bounds.year_max
            );
        }

        if self.bounds.price_max <= 0.0 {
            anyhow::bail!("FILTER_PRICE_MAX must be greater than 0");
        }

        if self.bounds.mileage_max == 0 {
            anyhow::bail!("FILTER_MILEAGE_MAX must be greater than 0");
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Catalog path: {}", self.catalog_path.display());
        tracing::info!("  State dir: {}", self.state_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Compare capacity: {}", self.compare_capacity);
        tracing::info!("  Recent capacity: {}", self.recent_capacity);
        tracing::info!(
            "  Filter bounds: year {}-{}, price 0-{}, mileage 0-{}",
            self.bounds.year_min,
            self.bounds.year_max,
            self.bounds.price_max,
            self.bounds.mileage_max
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the binary).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
