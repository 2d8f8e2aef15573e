//! Error types for dispatch operations.

use thiserror::Error;

use crate::util::types::ResourceId;

/// Errors produced by dispatch components.
///
/// Every failure is reported to the caller as a value; none is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Resource registered with a non-positive capacity.
    #[error("invalid capacity {capacity} for resource {resource_id}")]
    InvalidCapacity {
        /// Resource being registered.
        resource_id: ResourceId,
        /// Rejected capacity value.
        capacity: i64,
    },
    /// Resource id is already registered.
    #[error("resource already registered: {0}")]
    DuplicateResource(ResourceId),
    /// No resource with this id exists.
    #[error("resource not found: {0}")]
    ResourceNotFound(ResourceId),
    /// Resource has no free slot.
    #[error("resource full: {0}")]
    ResourceFull(ResourceId),
    /// No resource serving the destination has a free slot.
    #[error("no available resource for destination {0}")]
    NoAvailableResource(String),
    /// Queue has nothing to return.
    #[error("nothing pending")]
    Empty,
    /// Route missing or unknown to the fare table.
    #[error("invalid route: {0}")]
    InvalidRoute(String),
    /// Region node lookup failed.
    #[error("region not found: {0}")]
    RegionNotFound(String),
    /// Priority score is NaN or infinite.
    #[error("invalid priority score for ride {0}")]
    InvalidScore(String),
}

/// Result alias for core dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
