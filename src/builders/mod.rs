//! Builders to construct dispatch components from configuration.

pub mod engine_builder;

pub use engine_builder::{build_engine, build_engine_with_ids, seed_pool};
