//! Port traits implemented by the infrastructure layer.

mod state_storage;

pub use state_storage::StateStorage;

#[cfg(test)]
pub use state_storage::MockStateStorage;
