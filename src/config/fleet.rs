//! Fleet configuration: resources to seed at startup and the route fare table.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{AppResult, FareTable};
use crate::util::types::{Fare, ResourceId};

/// Environment variable naming the fleet config file.
pub const CONFIG_PATH_ENV: &str = "PRIORITY_DISPATCH_CONFIG";

/// Slots per resource when a seed does not say otherwise.
pub const DEFAULT_CAPACITY: i64 = 5;

const fn default_capacity() -> i64 {
    DEFAULT_CAPACITY
}

/// One resource to register at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSeed {
    /// Pre-generated id; the builder's id factory fills it in when absent.
    #[serde(default)]
    pub id: Option<ResourceId>,
    /// Location or destination served.
    pub location: String,
    /// Fare per booking.
    pub fare: Fare,
    /// Slot count; falls back to [`FleetConfig::default_capacity`].
    #[serde(default)]
    pub capacity: Option<i64>,
}

impl ResourceSeed {
    /// Seed with generated id and default capacity.
    pub fn new(location: impl Into<String>, fare: Fare) -> Self {
        Self {
            id: None,
            location: location.into(),
            fare,
            capacity: None,
        }
    }

    /// Set an explicit id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ResourceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an explicit capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

/// Root fleet configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Capacity used by seeds that omit one.
    #[serde(default = "default_capacity")]
    pub default_capacity: i64,
    /// Resources in registration order.
    pub resources: Vec<ResourceSeed>,
    /// Route fares; route-matched dispatch uses the resource fare when absent.
    #[serde(default)]
    pub fares: Option<FareTable>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::kigali()
    }
}

impl FleetConfig {
    /// The booking desk's standard fleet: one taxi per destination out of Kigali.
    pub fn kigali() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            resources: vec![
                ResourceSeed::new("Huye", 3900),
                ResourceSeed::new("Musanze", 3500),
                ResourceSeed::new("Nyagatare", 4000),
                ResourceSeed::new("Rusizi", 9000),
            ],
            fares: Some(FareTable::kigali_routes()),
        }
    }

    /// Capacity that `seed` will be registered with.
    pub fn capacity_of(&self, seed: &ResourceSeed) -> i64 {
        seed.capacity.unwrap_or(self.default_capacity)
    }

    /// Validate seeds and ensure at least one resource exists.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_capacity <= 0 {
            return Err("default_capacity must be greater than 0".into());
        }
        if self.resources.is_empty() {
            return Err("at least one resource must be defined".into());
        }
        let mut seen = HashSet::new();
        for (position, seed) in self.resources.iter().enumerate() {
            if seed.location.trim().is_empty() {
                return Err(format!("resource #{position}: location must not be empty"));
            }
            if self.capacity_of(seed) <= 0 {
                return Err(format!(
                    "resource #{position} at {}: capacity must be greater than 0",
                    seed.location
                ));
            }
            if let Some(id) = &seed.id {
                if !seen.insert(id) {
                    return Err(format!("resource #{position}: duplicate id `{id}`"));
                }
            }
        }
        Ok(())
    }

    /// Parse fleet configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading fleet config {}", path.display()))?;
        Self::from_json_str(&raw)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading fleet config {}", path.display()))
    }

    /// Load from the file named by [`CONFIG_PATH_ENV`], after applying any
    /// `.env` file. Falls back to [`FleetConfig::kigali`] when the variable is unset.
    pub fn from_env() -> AppResult<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("reading .env");
            }
        }
        Self::from_process_env()
    }

    /// Like [`FleetConfig::from_env`], reading variables from the dotenv file at
    /// `path`. Variables already set in the process take precedence.
    pub fn from_dotenv(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_process_env()
    }

    fn from_process_env() -> AppResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_path(path),
            Err(_) => {
                tracing::debug!("{CONFIG_PATH_ENV} unset, using built-in fleet");
                Ok(Self::kigali())
            }
        }
    }
}
