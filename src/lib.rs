//! # Priority Dispatch
//!
//! A priority-ordered, capacity-bounded dispatch core for taxi-style booking
//! workloads.
//!
//! Requests enter a binary-heap queue keyed by (priority rank, arrival
//! sequence). A dispatch pops the next request and reserves a slot on a
//! resource, either one the caller names or the first registered resource
//! serving the request's destination. Successful placements land in an
//! append-only history ledger; failures are reported to the caller and the
//! request is dropped.
//!
//! ## Key Features
//!
//! - **Deterministic ordering**: highest priority first, FIFO within a priority
//! - **Capacity accounting**: lock-free compare-and-swap per resource, never over capacity
//! - **Two placement modes**: targeted by resource id, or route-matched first-fit
//! - **History ledger**: insertion-ordered, filterable, explicitly clearable
//! - **Thread-safe**: pool, queue and ledger are shared behind `Arc` handles
//!
//! ```rust,ignore
//! use priority_dispatch::builders::build_engine;
//! use priority_dispatch::config::FleetConfig;
//! use priority_dispatch::core::{RideRequest, SelectionStrategy};
//! use priority_dispatch::util::{Priority, Route};
//!
//! let engine = build_engine(&FleetConfig::kigali())?;
//! engine.submit(Priority::High, RideRequest::new("0781234567", Route::new("Kigali", "Huye")));
//!
//! let assignment = engine.dispatch(&SelectionStrategy::RouteMatched)?;
//! println!("taxi {} for {} RWF", assignment.resource_id(), assignment.fare());
//! ```
//!
//! For complete scenarios, see `tests/dispatch_scenarios_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core dispatch abstractions and capacity accounting.
pub mod core;
/// Configuration models for fleet seeding and fares.
pub mod config;
/// Builders to construct dispatch components from configuration.
pub mod builders;
/// Infrastructure adapters for pending-request queues.
pub mod infra;
/// Shared utilities.
pub mod util;
