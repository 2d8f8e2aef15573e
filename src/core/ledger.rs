//! Append-only history of successful dispatches.

use serde::{Deserialize, Serialize};

use crate::core::filter::{FilterTarget, RecordFilter};
use crate::util::types::{Fare, Priority, RequesterId, ResourceId, Route, Sequence};

/// One successful assignment as kept for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Ledger position, strictly increasing and never reset by [`HistoryLedger::clear`].
    pub record_sequence: Sequence,
    /// Arrival sequence of the originating request.
    pub request_sequence: Sequence,
    /// Who booked.
    pub requester: RequesterId,
    /// Resource that took the booking.
    pub resource_id: ResourceId,
    /// Route of the booking, if it had one.
    pub route: Option<Route>,
    /// Fare charged.
    pub fare: Fare,
    /// Priority the request was submitted with.
    pub priority: Priority,
}

impl FilterTarget for HistoryRecord {
    fn destination(&self) -> Option<&str> {
        self.route.as_ref().map(|r| r.destination.as_str())
    }

    fn requester(&self) -> &RequesterId {
        &self.requester
    }

    fn resource_id(&self) -> Option<&ResourceId> {
        Some(&self.resource_id)
    }
}

/// Fields of an assignment about to be recorded; the ledger stamps the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Arrival sequence of the originating request.
    pub request_sequence: Sequence,
    /// Who booked.
    pub requester: RequesterId,
    /// Resource that took the booking.
    pub resource_id: ResourceId,
    /// Route of the booking.
    pub route: Option<Route>,
    /// Fare charged.
    pub fare: Fare,
    /// Submitted priority.
    pub priority: Priority,
}

/// In-memory, unbounded ledger. Entries are never mutated.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
    last_sequence: Sequence,
}

impl HistoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return a copy of it.
    pub fn record(&mut self, new: NewRecord) -> HistoryRecord {
        self.last_sequence += 1;
        let record = HistoryRecord {
            record_sequence: self.last_sequence,
            request_sequence: new.request_sequence,
            requester: new.requester,
            resource_id: new.resource_id,
            route: new.route,
            fare: new.fare,
            priority: new.priority,
        };
        self.records.push(record.clone());
        record
    }

    /// Entries in insertion order, optionally filtered.
    pub fn query<'a>(
        &'a self,
        filter: Option<&'a RecordFilter>,
    ) -> impl Iterator<Item = &'a HistoryRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| filter.is_none_or(|f| f.matches(*r)))
    }

    /// Drop every entry. Sequences keep counting from where they were.
    pub fn clear(&mut self) {
        let dropped = self.records.len();
        self.records.clear();
        tracing::info!(dropped, "history cleared");
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
