//! Infrastructure adapters for pending-request queues.

pub mod queue;
pub use queue::InMemoryQueue;
