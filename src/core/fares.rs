//! Route to fare lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{DispatchError, DispatchResult};
use crate::util::types::{Fare, Route};

/// Fares keyed by `"{origin}-{destination}"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FareTable {
    fares: BTreeMap<String, Fare>,
}

impl FareTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes out of Kigali served by the booking desk.
    pub fn kigali_routes() -> Self {
        [
            (Route::new("Kigali", "Huye"), 3900),
            (Route::new("Kigali", "Musanze"), 3500),
            (Route::new("Kigali", "Nyagatare"), 4000),
            (Route::new("Kigali", "Rusizi"), 9000),
        ]
        .into_iter()
        .collect()
    }

    /// Set the fare for `route`, returning the previous fare if any.
    pub fn insert(&mut self, route: &Route, fare: Fare) -> Option<Fare> {
        self.fares.insert(route.key(), fare)
    }

    /// Fare for `route`, or [`DispatchError::InvalidRoute`] if the table does not know it.
    pub fn fare_for(&self, route: &Route) -> DispatchResult<Fare> {
        let key = route.key();
        self.fares
            .get(&key)
            .copied()
            .ok_or(DispatchError::InvalidRoute(key))
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.fares.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.fares.is_empty()
    }

    /// Route keys and fares in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Fare)> {
        self.fares.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(Route, Fare)> for FareTable {
    fn from_iter<I: IntoIterator<Item = (Route, Fare)>>(iter: I) -> Self {
        Self {
            fares: iter.into_iter().map(|(r, f)| (r.key(), f)).collect(),
        }
    }
}
