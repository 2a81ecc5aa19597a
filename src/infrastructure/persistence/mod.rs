//! State-storage adapters implementing the domain port.

mod json_file_storage;
mod null_storage;

pub use json_file_storage::JsonFileStorage;
pub use null_storage::NullStorage;
