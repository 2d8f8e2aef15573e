//! In-memory queue ordered by priority rank and arrival sequence.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{DispatchError, DispatchResult, PendingRequest, RequestQueue};
use crate::util::types::{Priority, Sequence};

/// Wrapper to make a pending entry orderable by priority (highest first) and FIFO within priority.
struct HeapEntry<P> {
    entry: PendingRequest<P>,
}

impl<P> PartialEq for HeapEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.entry.sequence == other.entry.sequence
    }
}

impl<P> Eq for HeapEntry<P> {}

impl<P> PartialOrd for HeapEntry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for HeapEntry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: the entry that dispatches first must compare greatest.
        self.entry.dispatch_order(&other.entry).reverse()
    }
}

/// In-memory queue storing pending requests in a binary heap.
/// This provides O(log n) submit and O(log n) pop.
pub struct InMemoryQueue<P> {
    /// Last sequence handed out; sequences start at 1.
    last_sequence: Sequence,
    entries: BinaryHeap<HeapEntry<P>>,
}

impl<P> Default for InMemoryQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> InMemoryQueue<P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            last_sequence: 0,
            entries: BinaryHeap::new(),
        }
    }

    /// Create an empty queue with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            last_sequence: 0,
            entries: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Last sequence issued, or 0 if none yet.
    pub const fn last_sequence(&self) -> Sequence {
        self.last_sequence
    }
}

impl<P> RequestQueue<P> for InMemoryQueue<P> {
    fn issue_sequence(&mut self) -> Sequence {
        self.last_sequence += 1;
        self.last_sequence
    }

    fn submit(&mut self, priority: Priority, payload: P) -> Sequence {
        let sequence = self.issue_sequence();
        // O(log n) insertion
        self.entries.push(HeapEntry {
            entry: PendingRequest {
                sequence,
                priority,
                payload,
            },
        });
        tracing::debug!(sequence, %priority, depth = self.entries.len(), "request queued");
        sequence
    }

    fn pop_highest_priority(&mut self) -> DispatchResult<PendingRequest<P>> {
        // O(log n) removal
        self.entries
            .pop()
            .map(|h| h.entry)
            .ok_or(DispatchError::Empty)
    }

    fn snapshot(&self) -> Vec<PendingRequest<P>>
    where
        P: Clone,
    {
        let mut entries: Vec<_> = self.entries.iter().map(|h| h.entry.clone()).collect();
        entries.sort_by(PendingRequest::dispatch_order);
        entries
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
