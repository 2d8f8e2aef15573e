//! Equality filters shared by queue snapshots and ledger queries.

use serde::{Deserialize, Serialize};

use crate::util::types::{RequesterId, ResourceId};

/// Field accessors a [`RecordFilter`] can match against.
pub trait FilterTarget {
    /// Destination of the route, if any.
    fn destination(&self) -> Option<&str>;
    /// Who submitted the request.
    fn requester(&self) -> &RequesterId;
    /// Resource the item is bound to, if any.
    fn resource_id(&self) -> Option<&ResourceId> {
        None
    }
}

/// Simple equality filter over a single field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "field", content = "value")]
pub enum RecordFilter {
    /// Match everything.
    #[default]
    All,
    /// Route destination equals the value.
    Destination(String),
    /// Requester equals the value.
    Requester(RequesterId),
    /// Bound resource equals the value.
    Resource(ResourceId),
}

impl RecordFilter {
    /// Filter on destination.
    pub fn destination(value: impl Into<String>) -> Self {
        Self::Destination(value.into())
    }

    /// Whether `item` passes this filter.
    pub fn matches<T: FilterTarget + ?Sized>(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::Destination(d) => item.destination() == Some(d.as_str()),
            Self::Requester(r) => item.requester() == r,
            Self::Resource(id) => item.resource_id() == Some(id),
        }
    }
}
