use crate::service::ServiceStatus;

use easycue_core::ServiceState;
use serde_json::json;

#[test]
fn test_unit_variants_serialize_as_bare_strings() {
    assert_eq!(
        serde_json::to_value(ServiceStatus::Stopped).unwrap(),
        json!("Stopped")
    );
    assert_eq!(
        serde_json::to_value(ServiceStatus::Running).unwrap(),
        json!("Running")
    );
}

#[test]
fn test_error_variant_serializes_as_tagged_object() {
    let value = serde_json::to_value(ServiceStatus::Error("boom".into())).unwrap();
    assert_eq!(value, json!({"Error": "boom"}));
}

#[test]
fn test_panel_normalizes_every_wire_shape() {
    let cases = [
        (ServiceStatus::Stopped, ServiceState::Stopped),
        (ServiceStatus::Starting, ServiceState::Starting),
        (ServiceStatus::Running, ServiceState::Running),
        (ServiceStatus::Stopping, ServiceState::Stopping),
        // Unknown tag degrades to stopped rather than erroring
        (
            ServiceStatus::Error("spawn failed".into()),
            ServiceState::Stopped,
        ),
    ];

    for (status, expected) in cases {
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(
            ServiceState::from_payload(&value),
            expected,
            "wire shape for {status:?}"
        );
    }
}
