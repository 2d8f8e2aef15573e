//! Configuration models for fleet seeding and fares.

pub mod fleet;

pub use fleet::{FleetConfig, ResourceSeed, CONFIG_PATH_ENV, DEFAULT_CAPACITY};
