//! Error taxonomy for the catalog core.
//!
//! The taxonomy is deliberately narrow: capacity and duplicate-selection
//! failures in the selection stores are boolean results, not errors, and the
//! query-string decoder never fails. What remains is configuration, catalog
//! loading, state storage I/O, and per-record validation.

use thiserror::Error;

/// Unified error type for the catalog core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The vehicle catalog could not be read or parsed.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// A state-storage read or write failed.
    ///
    /// Store mutations treat this as best-effort and only log it; it is
    /// surfaced to callers of the storage port itself.
    #[error("storage error: {0}")]
    Storage(String),

    /// A source record failed schema validation.
    #[error("invalid record '{id}': {reason}")]
    Validation { id: String, reason: String },
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn validation(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = AppError::catalog("missing file");
        assert_eq!(e.to_string(), "catalog error: missing file");

        let e = AppError::validation("v1", "year out of range");
        assert_eq!(e.to_string(), "invalid record 'v1': year out of range");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: AppError = io.into();
        assert!(matches!(e, AppError::Storage(_)));
    }
}
