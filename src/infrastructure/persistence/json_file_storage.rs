//! File-backed state storage, one JSON file per namespace.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::repositories::StateStorage;
use crate::error::AppError;

/// Stores each namespace as `<dir>/<namespace>.json`.
///
/// The directory is created lazily on the first write. Reads of a namespace
/// that was never written return `Ok(None)`, matching a fresh session.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        debug!("state storage at {}", dir.display());
        Self { dir }
    }

    fn path_for(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{namespace}.json"))
    }
}

impl StateStorage for JsonFileStorage {
    fn read(&self, namespace: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(namespace)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "cannot read namespace '{namespace}': {e}"
            ))),
        }
    }

    fn write(&self, namespace: &str, payload: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::storage(format!("cannot create '{}': {e}", self.dir.display()))
        })?;
        fs::write(self.path_for(namespace), payload).map_err(|e| {
            AppError::storage(format!("cannot write namespace '{namespace}': {e}"))
        })
    }
}
