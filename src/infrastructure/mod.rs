//! Infrastructure layer: catalog source and state-storage adapters.

pub mod catalog;
pub mod persistence;
