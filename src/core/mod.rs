//! Core dispatch abstractions and capacity accounting.

pub mod dispatch;
pub mod error;
pub mod fares;
pub mod filter;
pub mod ledger;
pub mod region_tree;
pub mod request;
pub mod resource_pool;
pub mod score_board;

pub use dispatch::{Assignment, DispatchEngine, SelectionStrategy};
pub use error::{AppResult, DispatchError, DispatchResult};
pub use fares::FareTable;
pub use filter::{FilterTarget, RecordFilter};
pub use ledger::{HistoryLedger, HistoryRecord, NewRecord};
pub use region_tree::{NodeIndex, NodeKind, RegionNode, RegionTree};
pub use request::{PendingRequest, RequestQueue, RideRequest, Snapshot};
pub use resource_pool::{Reservation, Resource, ResourcePool, ResourceSnapshot};
pub use score_board::{ScoreBoard, ScoredRide};
