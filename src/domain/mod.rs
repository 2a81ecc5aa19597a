//! Domain layer: entities, value objects, and port traits.

pub mod criteria;
pub mod entities;
pub mod repositories;
