//! Tests for builder modules

use priority_dispatch::builders::{build_engine, build_engine_with_ids, seed_pool};
use priority_dispatch::config::{FleetConfig, ResourceSeed};
use priority_dispatch::core::{RideRequest, SelectionStrategy};
use priority_dispatch::infra::InMemoryQueue;
use priority_dispatch::util::{Priority, ResourceId, Route};

#[test]
fn test_seed_pool_keeps_order_and_ids() {
    let cfg = FleetConfig {
        default_capacity: 3,
        resources: vec![
            ResourceSeed::new("Huye", 3900).with_id("T1"),
            ResourceSeed::new("Musanze", 3500),
        ],
        fares: None,
    };

    let mut generated = 0;
    let pool = seed_pool(&cfg, |_| {
        generated += 1;
        ResourceId::new(format!("GEN-{generated}"))
    })
    .unwrap();

    let listing = pool.list();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].id.as_str(), "T1");
    assert_eq!(listing[1].id.as_str(), "GEN-1");
    assert_eq!(listing[1].capacity, 3);
    assert_eq!(generated, 1);
}

#[test]
fn test_seed_pool_rejects_invalid_config() {
    let cfg = FleetConfig {
        default_capacity: 3,
        resources: Vec::new(),
        fares: None,
    };
    let err = seed_pool(&cfg, |s| ResourceId::new(s.location.clone())).unwrap_err();
    assert!(err.to_string().contains("fleet config invalid"));
}

#[test]
fn test_build_engine_default_fleet() {
    let engine = build_engine(&FleetConfig::kigali()).unwrap();
    let resources = engine.resources();
    assert_eq!(resources.len(), 4);
    assert!(resources.iter().all(|r| r.id.as_str().starts_with("TAXI-")));
    assert!(engine.fare_table().is_some());

    engine.submit(
        Priority::Medium,
        RideRequest::new("0781234567", Route::new("Kigali", "Rusizi")),
    );
    let assignment = engine.dispatch(&SelectionStrategy::RouteMatched).unwrap();
    assert_eq!(assignment.location(), "Rusizi");
    assert_eq!(assignment.fare(), 9000);
}

#[test]
fn test_build_engine_with_custom_queue_and_ids() {
    let cfg = FleetConfig {
        default_capacity: 1,
        resources: vec![ResourceSeed::new("Huye", 3900)],
        fares: None,
    };
    let engine =
        build_engine_with_ids(&cfg, InMemoryQueue::with_capacity(16), |_| "ONLY".into()).unwrap();

    assert!(engine.fare_table().is_none());
    assert_eq!(engine.pool().available_slots(&"ONLY".into()), Ok(1));
}
