//! Dispatch engine: matches queued requests to resource slots.
//!
//! The engine holds shared handles to a [`ResourcePool`], a [`RequestQueue`]
//! and a [`HistoryLedger`]; it owns no domain state itself. The queue and
//! ledger sit behind separate `parking_lot::Mutex`es and the pool reserves
//! with a CAS on each resource, so one engine can be shared across threads.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::fares::FareTable;
use crate::core::filter::RecordFilter;
use crate::core::ledger::{HistoryLedger, HistoryRecord, NewRecord};
use crate::core::request::{PendingRequest, RequestQueue, RideRequest, Snapshot};
use crate::core::resource_pool::{Reservation, ResourcePool, ResourceSnapshot};
use crate::core::{DispatchError, DispatchResult};
use crate::util::types::{Fare, Priority, ResourceId, Sequence};

/// How a popped request picks its resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Reserve on exactly this resource.
    Targeted(ResourceId),
    /// Reserve on the first registered resource whose location equals the
    /// request's destination and which has a free slot.
    RouteMatched,
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The request that was placed.
    pub request: PendingRequest<RideRequest>,
    /// Slot that was taken.
    pub reservation: Reservation,
    /// Ledger entry written for it.
    pub record: HistoryRecord,
}

impl Assignment {
    /// Resource that took the request.
    pub const fn resource_id(&self) -> &ResourceId {
        &self.reservation.resource_id
    }

    /// Location label of that resource.
    pub fn location(&self) -> &str {
        &self.reservation.location
    }

    /// Fare charged.
    pub const fn fare(&self) -> Fare {
        self.record.fare
    }
}

/// Mediates between the queue, the pool and the ledger.
pub struct DispatchEngine<Q> {
    pool: Arc<ResourcePool>,
    queue: Arc<Mutex<Q>>,
    ledger: Arc<Mutex<HistoryLedger>>,
    fares: Option<Arc<FareTable>>,
}

impl<Q> Clone for DispatchEngine<Q> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            queue: Arc::clone(&self.queue),
            ledger: Arc::clone(&self.ledger),
            fares: self.fares.clone(),
        }
    }
}

impl<Q> DispatchEngine<Q>
where
    Q: RequestQueue<RideRequest>,
{
    /// Create an engine over existing components.
    pub fn new(pool: ResourcePool, queue: Q, ledger: HistoryLedger) -> Self {
        Self::from_shared(
            Arc::new(pool),
            Arc::new(Mutex::new(queue)),
            Arc::new(Mutex::new(ledger)),
        )
    }

    /// Create an engine over components already behind shared handles.
    pub const fn from_shared(
        pool: Arc<ResourcePool>,
        queue: Arc<Mutex<Q>>,
        ledger: Arc<Mutex<HistoryLedger>>,
    ) -> Self {
        Self {
            pool,
            queue,
            ledger,
            fares: None,
        }
    }

    /// Price route-matched dispatches from `fares` instead of the resource fare.
    #[must_use]
    pub fn with_fare_table(mut self, fares: FareTable) -> Self {
        self.fares = Some(Arc::new(fares));
        self
    }

    /// Shared resource pool.
    pub const fn pool(&self) -> &Arc<ResourcePool> {
        &self.pool
    }

    /// Shared pending-request queue.
    pub const fn queue(&self) -> &Arc<Mutex<Q>> {
        &self.queue
    }

    /// Shared history ledger.
    pub const fn ledger(&self) -> &Arc<Mutex<HistoryLedger>> {
        &self.ledger
    }

    /// Fare table in use, if any.
    pub fn fare_table(&self) -> Option<&FareTable> {
        self.fares.as_deref()
    }

    /// Queue a request and return its arrival sequence.
    pub fn submit(&self, priority: Priority, request: RideRequest) -> Sequence {
        self.queue.lock().submit(priority, request)
    }

    /// Pop the next request and place it according to `strategy`.
    ///
    /// A request that cannot be placed is discarded; the caller decides
    /// whether to resubmit.
    pub fn dispatch(&self, strategy: &SelectionStrategy) -> DispatchResult<Assignment> {
        let pending = self.queue.lock().pop_highest_priority()?;
        self.place(pending, strategy)
    }

    /// Place `request` immediately without waiting behind queued work.
    ///
    /// It still receives an arrival sequence from the queue. The queue lock is
    /// held until the request is placed or rejected, so no `dispatch` or
    /// `submit` interleaves with a booking.
    pub fn book(
        &self,
        priority: Priority,
        request: RideRequest,
        strategy: &SelectionStrategy,
    ) -> DispatchResult<Assignment> {
        let mut queue = self.queue.lock();
        let sequence = queue.issue_sequence();
        let placed = self.place(
            PendingRequest {
                sequence,
                priority,
                payload: request,
            },
            strategy,
        );
        drop(queue);
        placed
    }

    /// Pop the next request strictly by priority without touching the pool.
    pub fn serve_pending(&self) -> DispatchResult<PendingRequest<RideRequest>> {
        let served = self.queue.lock().pop_highest_priority()?;
        tracing::info!(
            sequence = served.sequence,
            priority = %served.priority,
            requester = %served.payload.requester,
            "serving pending request"
        );
        Ok(served)
    }

    /// Snapshot of pending requests in dispatch order.
    pub fn pending(&self, filter: Option<&RecordFilter>) -> Snapshot<RideRequest> {
        self.queue.lock().peek_all(filter)
    }

    /// Copy of the ledger in insertion order, optionally filtered.
    pub fn history(&self, filter: Option<&RecordFilter>) -> Vec<HistoryRecord> {
        self.ledger.lock().query(filter).cloned().collect()
    }

    /// Empty the ledger.
    pub fn clear_history(&self) {
        self.ledger.lock().clear();
    }

    /// Snapshot of every resource in registration order.
    pub fn resources(&self) -> Vec<ResourceSnapshot> {
        self.pool.list()
    }

    fn place(
        &self,
        pending: PendingRequest<RideRequest>,
        strategy: &SelectionStrategy,
    ) -> DispatchResult<Assignment> {
        let sequence = pending.sequence;
        let (reservation, fare) = self.reserve(&pending, strategy).inspect_err(|err| {
            tracing::warn!(sequence, requester = %pending.payload.requester, error = %err, "dispatch rejected");
        })?;

        let record = self.ledger.lock().record(NewRecord {
            request_sequence: sequence,
            requester: pending.payload.requester.clone(),
            resource_id: reservation.resource_id.clone(),
            route: pending.payload.route.clone(),
            fare,
            priority: pending.priority,
        });
        tracing::info!(
            sequence,
            priority = %pending.priority,
            resource = %reservation.resource_id,
            fare,
            occupants = reservation.occupants,
            "request dispatched"
        );

        Ok(Assignment {
            request: pending,
            reservation,
            record,
        })
    }

    fn reserve(
        &self,
        pending: &PendingRequest<RideRequest>,
        strategy: &SelectionStrategy,
    ) -> DispatchResult<(Reservation, Fare)> {
        match strategy {
            SelectionStrategy::Targeted(resource_id) => {
                let reservation = self.pool.try_reserve(resource_id)?;
                let fare = reservation.fare;
                Ok((reservation, fare))
            }
            SelectionStrategy::RouteMatched => {
                let route = pending
                    .payload
                    .route
                    .as_ref()
                    .ok_or_else(|| DispatchError::InvalidRoute("no route given".into()))?;
                let table_fare = self
                    .fares
                    .as_ref()
                    .map(|table| table.fare_for(route))
                    .transpose()?;
                let reservation = self.pool.reserve_first_matching(&route.destination)?;
                let fare = table_fare.unwrap_or(reservation.fare);
                Ok((reservation, fare))
            }
        }
    }
}
