//! Ride requests, pending queue entries, and the queue abstraction.

use serde::{Deserialize, Serialize};

use crate::core::filter::{FilterTarget, RecordFilter};
use crate::core::DispatchResult;
use crate::util::types::{Priority, RequesterId, Route, Sequence};

/// A booking as submitted by the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideRequest {
    /// Opaque requester id (a phone number in the booking front ends).
    pub requester: RequesterId,
    /// Optional origin and destination.
    pub route: Option<Route>,
}

impl RideRequest {
    /// Request with a route.
    pub fn new(requester: impl Into<RequesterId>, route: Route) -> Self {
        Self {
            requester: requester.into(),
            route: Some(route),
        }
    }

    /// Request without a route, for targeted dispatch.
    pub fn unrouted(requester: impl Into<RequesterId>) -> Self {
        Self {
            requester: requester.into(),
            route: None,
        }
    }
}

impl FilterTarget for RideRequest {
    fn destination(&self) -> Option<&str> {
        self.route.as_ref().map(|r| r.destination.as_str())
    }

    fn requester(&self) -> &RequesterId {
        &self.requester
    }
}

/// A queued payload together with its ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest<P> {
    /// Arrival sequence assigned at submission.
    pub sequence: Sequence,
    /// Named priority level.
    pub priority: Priority,
    /// Caller payload.
    pub payload: P,
}

impl<P> PendingRequest<P> {
    /// Dispatch order: higher rank first, then lower sequence first.
    /// `Less` means `self` is served before `other`.
    pub fn dispatch_order(&self, other: &Self) -> std::cmp::Ordering {
        other
            .priority
            .rank()
            .cmp(&self.priority.rank())
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<P: FilterTarget> FilterTarget for PendingRequest<P> {
    fn destination(&self) -> Option<&str> {
        self.payload.destination()
    }

    fn requester(&self) -> &RequesterId {
        self.payload.requester()
    }
}

/// Abstraction for pending-request queues.
pub trait RequestQueue<P> {
    /// Hand out the next arrival sequence without enqueueing anything.
    fn issue_sequence(&mut self) -> Sequence;
    /// Enqueue `payload` and return its arrival sequence as a receipt.
    fn submit(&mut self, priority: Priority, payload: P) -> Sequence;
    /// Remove the entry that dispatches next, or [`crate::core::DispatchError::Empty`].
    fn pop_highest_priority(&mut self) -> DispatchResult<PendingRequest<P>>;
    /// Copy of every pending entry in dispatch order.
    fn snapshot(&self) -> Vec<PendingRequest<P>>
    where
        P: Clone;
    /// Current depth.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazy iterator over a snapshot in dispatch order, optionally filtered.
    fn peek_all(&self, filter: Option<&RecordFilter>) -> Snapshot<P>
    where
        P: Clone + FilterTarget,
    {
        Snapshot::new(self.snapshot(), filter.cloned())
    }
}

/// Read-only, dispatch-ordered view of the queue at one instant.
///
/// Later pops or submits on the queue do not affect it.
pub struct Snapshot<P> {
    entries: std::vec::IntoIter<PendingRequest<P>>,
    filter: RecordFilter,
}

impl<P> Snapshot<P> {
    /// Wrap already-ordered entries.
    pub fn new(entries: Vec<PendingRequest<P>>, filter: Option<RecordFilter>) -> Self {
        Self {
            entries: entries.into_iter(),
            filter: filter.unwrap_or_default(),
        }
    }
}

impl<P: FilterTarget> Iterator for Snapshot<P> {
    type Item = PendingRequest<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = &self.filter;
        self.entries.find(|entry| filter.matches(entry))
    }
}
