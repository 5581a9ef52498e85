use crate::ServiceState;

use serde_json::json;

#[test]
fn test_canonical_strings_map_to_their_state() {
    assert_eq!(
        ServiceState::from_payload(&json!("stopped")),
        ServiceState::Stopped
    );
    assert_eq!(
        ServiceState::from_payload(&json!("starting")),
        ServiceState::Starting
    );
    assert_eq!(
        ServiceState::from_payload(&json!("running")),
        ServiceState::Running
    );
    assert_eq!(
        ServiceState::from_payload(&json!("stopping")),
        ServiceState::Stopping
    );
}

#[test]
fn test_string_matching_is_case_insensitive() {
    assert_eq!(
        ServiceState::from_payload(&json!("Stopped")),
        ServiceState::Stopped
    );
    assert_eq!(
        ServiceState::from_payload(&json!("RUNNING")),
        ServiceState::Running
    );
    assert_eq!(
        ServiceState::from_payload(&json!("StOpPiNg")),
        ServiceState::Stopping
    );
}

#[test]
fn test_tagged_objects_map_to_their_state() {
    assert_eq!(
        ServiceState::from_payload(&json!({"Stopped": true})),
        ServiceState::Stopped
    );
    assert_eq!(
        ServiceState::from_payload(&json!({"Running": true})),
        ServiceState::Running
    );
    assert_eq!(
        ServiceState::from_payload(&json!({"Starting": true})),
        ServiceState::Starting
    );
    assert_eq!(
        ServiceState::from_payload(&json!({"Stopping": true})),
        ServiceState::Stopping
    );
}

#[test]
fn test_falsy_tags_are_skipped() {
    assert_eq!(
        ServiceState::from_payload(&json!({"Stopped": false, "Running": true})),
        ServiceState::Running
    );
    assert_eq!(
        ServiceState::from_payload(&json!({"Starting": 0})),
        ServiceState::Stopped
    );
    assert_eq!(
        ServiceState::from_payload(&json!({"Running": ""})),
        ServiceState::Stopped
    );
}

#[test]
fn test_boolean_ish_tags_count_as_set() {
    assert_eq!(
        ServiceState::from_payload(&json!({"Running": 1})),
        ServiceState::Running
    );
    assert_eq!(
        ServiceState::from_payload(&json!({"Starting": "yes"})),
        ServiceState::Starting
    );
}

#[test]
fn test_unrecognized_shapes_default_to_stopped() {
    let shapes = [
        json!(null),
        json!({}),
        json!("paused"),
        json!(42),
        json!(true),
        json!(["running"]),
        json!({"Error": "spawn failed"}),
    ];
    for payload in shapes {
        assert_eq!(
            ServiceState::from_payload(&payload),
            ServiceState::Stopped,
            "payload {payload} should degrade to Stopped"
        );
    }
}

#[test]
fn test_initial_state_is_stopped() {
    assert_eq!(ServiceState::default(), ServiceState::Stopped);
}

#[test]
fn test_as_str_matches_the_wire_names() {
    for state in [
        ServiceState::Stopped,
        ServiceState::Starting,
        ServiceState::Running,
        ServiceState::Stopping,
    ] {
        assert_eq!(ServiceState::from_payload(&json!(state.as_str())), state);
    }
}
