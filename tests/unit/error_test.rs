//! Tests for error types

use priority_dispatch::core::DispatchError;

#[test]
fn test_invalid_capacity_error() {
    let err = DispatchError::InvalidCapacity {
        resource_id: "T1".into(),
        capacity: 0,
    };
    assert_eq!(format!("{}", err), "invalid capacity 0 for resource T1");
}

#[test]
fn test_resource_errors_name_the_resource() {
    assert_eq!(
        format!("{}", DispatchError::ResourceFull("TAXI-HUY-01".into())),
        "resource full: TAXI-HUY-01"
    );
    assert_eq!(
        format!("{}", DispatchError::ResourceNotFound("T9".into())),
        "resource not found: T9"
    );
    assert_eq!(
        format!("{}", DispatchError::DuplicateResource("T1".into())),
        "resource already registered: T1"
    );
}

#[test]
fn test_routing_errors() {
    assert_eq!(
        format!("{}", DispatchError::NoAvailableResource("Huye".into())),
        "no available resource for destination Huye"
    );
    assert_eq!(
        format!("{}", DispatchError::InvalidRoute("Huye-Kigali".into())),
        "invalid route: Huye-Kigali"
    );
}

#[test]
fn test_empty_error() {
    assert_eq!(format!("{}", DispatchError::Empty), "nothing pending");
}

#[test]
fn test_errors_convert_into_anyhow() {
    let app: priority_dispatch::core::AppResult<()> = Err(DispatchError::Empty.into());
    assert_eq!(app.unwrap_err().to_string(), "nothing pending");
}
