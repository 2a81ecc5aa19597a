//! Storage port for persisted selection state.

use crate::error::AppError;

/// Durable storage for namespaced selection-state payloads.
///
/// Each selection store persists its serialized state under a fixed
/// namespace and reads it back once at construction. Writes are best-effort
/// from the stores' point of view: a failed write is logged, never surfaced
/// to the user action that triggered it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStorage`] - one JSON file
///   per namespace
/// - [`crate::infrastructure::persistence::NullStorage`] - no-op, for
///   ephemeral sessions and tests
#[cfg_attr(test, mockall::automock)]
pub trait StateStorage: Send + Sync {
    /// Reads the payload last written under `namespace`.
    ///
    /// Returns `Ok(None)` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] when the backing store cannot be read.
    fn read(&self, namespace: &str) -> Result<Option<String>, AppError>;

    /// Writes `payload` under `namespace`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] when the backing store cannot be
    /// written.
    fn write(&self, namespace: &str, payload: &str) -> Result<(), AppError>;
}
