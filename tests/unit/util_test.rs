//! Tests for utility functions

use priority_dispatch::util::{
    generate_resource_id, init_tracing, validate_phone, Priority, RequesterId, ResourceId, Route,
};

#[test]
fn test_priority_ordering() {
    assert!(Priority::Emergency > Priority::High);
    assert!(Priority::High > Priority::Medium);
    assert!(Priority::Medium > Priority::Low);
}

#[test]
fn test_priority_reports_name() {
    assert_eq!(Priority::Emergency.to_string(), "emergency");
    assert_eq!(Priority::default(), Priority::Low);
}

#[test]
fn test_ids_are_opaque() {
    let resource = ResourceId::new("RAD 023 H");
    assert_eq!(resource.as_str(), "RAD 023 H");
    let requester: RequesterId = "not-a-phone".into();
    assert_eq!(requester.to_string(), "not-a-phone");
}

#[test]
fn test_route_key() {
    assert_eq!(Route::new("Kigali", "Musanze").key(), "Kigali-Musanze");
}

#[test]
fn test_phone_validation() {
    assert!(validate_phone("0781234567"));
    assert!(!validate_phone("0771234567"));
}

#[test]
fn test_generated_id_shape() {
    let id = generate_resource_id("Rusizi");
    assert!(id.as_str().starts_with("TAXI-RUS-"));
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
}
