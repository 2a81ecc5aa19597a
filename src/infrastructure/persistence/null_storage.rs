//! No-op state storage for ephemeral sessions and tests.

use tracing::debug;

use crate::domain::repositories::StateStorage;
use crate::error::AppError;

/// A storage implementation that persists nothing.
///
/// All reads see an empty store and all writes succeed immediately, so
/// selection state lives only for the current session.
///
/// # Use Cases
///
/// - Sessions that must not leave state behind
/// - Tests exercising store logic without a filesystem
pub struct NullStorage;

impl NullStorage {
    /// Creates a new NullStorage instance.
    pub fn new() -> Self {
        debug!("Using NullStorage (persistence disabled)");
        Self
    }
}

impl Default for NullStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for NullStorage {
    fn read(&self, _namespace: &str) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    fn write(&self, _namespace: &str, _payload: &str) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_nothing_after_write() {
        let storage = NullStorage::new();
        storage.write("ns", "payload").unwrap();
        assert_eq!(storage.read("ns").unwrap(), None);
    }
}
