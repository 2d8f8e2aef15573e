//! Resource pool with per-resource capacity accounting.
//!
//! Each registered resource carries a fixed slot count and a lock-free
//! `AtomicU32` occupant counter. Reservation is a compare-and-swap loop, so
//! concurrent callers can never push a resource past its capacity. The
//! registry itself sits behind a `parking_lot::RwLock`; reservations only take
//! the read side.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::{DispatchError, DispatchResult};
use crate::util::types::{Fare, ResourceId};

/// Registration request for a new resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Pre-generated identifier, stable for the resource lifetime.
    pub id: ResourceId,
    /// Location or route label the resource serves.
    pub location: String,
    /// Fare charged per booking.
    pub fare: Fare,
    /// Slot count; must be positive.
    pub capacity: i64,
}

impl Resource {
    /// Describe a resource to register.
    pub fn new(
        id: impl Into<ResourceId>,
        location: impl Into<String>,
        fare: Fare,
        capacity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            fare,
            capacity,
        }
    }
}

/// Public attributes handed back on a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Reserved resource.
    pub resource_id: ResourceId,
    /// Location label of the resource.
    pub location: String,
    /// Fare of the resource.
    pub fare: Fare,
    /// Occupant count after this reservation.
    pub occupants: u32,
}

/// Point-in-time view of one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    /// Resource identifier.
    pub id: ResourceId,
    /// Location label.
    pub location: String,
    /// Fare.
    pub fare: Fare,
    /// Fixed slot count.
    pub capacity: u32,
    /// Slots in use.
    pub occupants: u32,
    /// `capacity - occupants`.
    pub available_slots: u32,
}

#[derive(Debug)]
struct Slot {
    id: ResourceId,
    location: String,
    fare: Fare,
    capacity: u32,
    occupants: AtomicU32,
}

impl Slot {
    /// Compare-and-increment. Returns the new occupant count, or `None` when full.
    fn try_increment(&self) -> Option<u32> {
        let mut current = self.occupants.load(Ordering::Acquire);
        loop {
            if current >= self.capacity {
                return None;
            }
            match self.occupants.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Some(current + 1),
                Err(actual) => current = actual,
            }
        }
    }

    fn reservation(&self, occupants: u32) -> Reservation {
        Reservation {
            resource_id: self.id.clone(),
            location: self.location.clone(),
            fare: self.fare,
            occupants,
        }
    }

    fn snapshot(&self) -> ResourceSnapshot {
        let occupants = self.occupants.load(Ordering::Acquire);
        ResourceSnapshot {
            id: self.id.clone(),
            location: self.location.clone(),
            fare: self.fare,
            capacity: self.capacity,
            occupants,
            available_slots: self.capacity - occupants,
        }
    }
}

#[derive(Debug, Default)]
struct Registry {
    /// Registration order.
    slots: Vec<Arc<Slot>>,
    index: HashMap<ResourceId, usize>,
}

/// Pool of bounded-capacity resources.
///
/// Resources are never removed once added.
#[derive(Debug, Default)]
pub struct ResourcePool {
    registry: RwLock<Registry>,
}

impl ResourcePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource.
    ///
    /// Fails with [`DispatchError::InvalidCapacity`] when the capacity is not a
    /// positive `u32`, and with [`DispatchError::DuplicateResource`] when the
    /// id is taken.
    pub fn add_resource(&self, resource: Resource) -> DispatchResult<()> {
        let capacity = u32::try_from(resource.capacity)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| DispatchError::InvalidCapacity {
                resource_id: resource.id.clone(),
                capacity: resource.capacity,
            })?;

        let mut registry = self.registry.write();
        if registry.index.contains_key(&resource.id) {
            return Err(DispatchError::DuplicateResource(resource.id));
        }
        let position = registry.slots.len();
        registry.index.insert(resource.id.clone(), position);
        tracing::info!(
            resource = %resource.id,
            location = %resource.location,
            fare = resource.fare,
            capacity,
            "resource registered"
        );
        registry.slots.push(Arc::new(Slot {
            id: resource.id,
            location: resource.location,
            fare: resource.fare,
            capacity,
            occupants: AtomicU32::new(0),
        }));
        Ok(())
    }

    /// Reserve one slot on `resource_id`.
    pub fn try_reserve(&self, resource_id: &ResourceId) -> DispatchResult<Reservation> {
        let slot = self.slot(resource_id)?;
        slot.try_increment().map_or_else(
            || {
                tracing::debug!(resource = %resource_id, "reservation refused: full");
                Err(DispatchError::ResourceFull(resource_id.clone()))
            },
            |occupants| Ok(slot.reservation(occupants)),
        )
    }

    /// Reserve a slot on the first resource, in registration order, whose
    /// location equals `destination` and which still has room.
    pub fn reserve_first_matching(&self, destination: &str) -> DispatchResult<Reservation> {
        let registry = self.registry.read();
        registry
            .slots
            .iter()
            .filter(|slot| slot.location == destination)
            .find_map(|slot| slot.try_increment().map(|n| slot.reservation(n)))
            .ok_or_else(|| DispatchError::NoAvailableResource(destination.to_string()))
    }

    /// Free slots remaining on `resource_id`.
    pub fn available_slots(&self, resource_id: &ResourceId) -> DispatchResult<u32> {
        let slot = self.slot(resource_id)?;
        Ok(slot.capacity - slot.occupants.load(Ordering::Acquire))
    }

    /// Snapshot of every resource in registration order.
    pub fn list(&self) -> Vec<ResourceSnapshot> {
        self.registry.read().slots.iter().map(|s| s.snapshot()).collect()
    }

    /// Snapshot of resources whose id contains `fragment`.
    pub fn find_by_id_fragment(&self, fragment: &str) -> Vec<ResourceSnapshot> {
        self.registry
            .read()
            .slots
            .iter()
            .filter(|s| s.id.as_str().contains(fragment))
            .map(|s| s.snapshot())
            .collect()
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.registry.read().slots.len()
    }

    /// Whether no resource is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, resource_id: &ResourceId) -> DispatchResult<Arc<Slot>> {
        let registry = self.registry.read();
        registry
            .index
            .get(resource_id)
            .map(|&i| Arc::clone(&registry.slots[i]))
            .ok_or_else(|| DispatchError::ResourceNotFound(resource_id.clone()))
    }
}
