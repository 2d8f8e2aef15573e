//! Build a ready [`DispatchEngine`] from a [`FleetConfig`].

use anyhow::Context;

use crate::config::{FleetConfig, ResourceSeed};
use crate::core::{
    AppResult, DispatchEngine, HistoryLedger, RequestQueue, Resource, ResourcePool, RideRequest,
};
use crate::infra::queue::InMemoryQueue;
use crate::util::ids::generate_resource_id;
use crate::util::types::ResourceId;

/// Register every seed in `cfg` on a fresh pool, in order.
///
/// Seeds without an id get one from `id_factory`.
pub fn seed_pool<F>(cfg: &FleetConfig, mut id_factory: F) -> AppResult<ResourcePool>
where
    F: FnMut(&ResourceSeed) -> ResourceId,
{
    cfg.validate()
        .map_err(anyhow::Error::msg)
        .context("fleet config invalid")?;

    let pool = ResourcePool::new();
    for seed in &cfg.resources {
        let id = seed.id.clone().unwrap_or_else(|| id_factory(seed));
        pool.add_resource(Resource::new(
            id,
            seed.location.clone(),
            seed.fare,
            cfg.capacity_of(seed),
        ))
        .with_context(|| format!("seeding resource at {}", seed.location))?;
    }
    tracing::info!(resources = pool.len(), "fleet seeded");
    Ok(pool)
}

/// Build an engine over `queue`, with ids for anonymous seeds from `id_factory`.
pub fn build_engine_with_ids<Q, F>(
    cfg: &FleetConfig,
    queue: Q,
    id_factory: F,
) -> AppResult<DispatchEngine<Q>>
where
    Q: RequestQueue<RideRequest>,
    F: FnMut(&ResourceSeed) -> ResourceId,
{
    let pool = seed_pool(cfg, id_factory)?;
    let engine = DispatchEngine::new(pool, queue, HistoryLedger::new());
    Ok(match &cfg.fares {
        Some(fares) => engine.with_fare_table(fares.clone()),
        None => engine,
    })
}

/// Build an in-memory engine, generating `TAXI-…` ids for anonymous seeds.
pub fn build_engine(cfg: &FleetConfig) -> AppResult<DispatchEngine<InMemoryQueue<RideRequest>>> {
    build_engine_with_ids(cfg, InMemoryQueue::new(), |seed| {
        generate_resource_id(&seed.location)
    })
}
