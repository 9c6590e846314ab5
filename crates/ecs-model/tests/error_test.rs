// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error type tests for ecs-model.

use ecs_model::{
    DockerVolumeConfiguration, LaunchType, ModelError, ServiceError, ServiceErrorKind, WireEnum,
};

#[test]
fn test_invalid_enum_value_display() {
    let err = LaunchType::from_value("MOON").unwrap_err();
    assert_eq!(err.to_string(), r#"invalid value "MOON" for LaunchType"#);
    assert!(err.is_invalid_argument());
}

#[test]
fn test_duplicate_map_key_display() {
    let mut volume = DockerVolumeConfiguration::new();
    volume.add_driver_opts_entry("device", "/dev/xvdf").unwrap();
    let err = volume.add_driver_opts_entry("device", "/dev/xvdg").unwrap_err();

    assert_eq!(err.to_string(), r#"duplicate key "device" in driverOpts"#);
    assert!(err.is_invalid_argument());
}

#[test]
fn test_config_error_display() {
    let err = ModelError::Config("invalid region".to_string());
    assert_eq!(err.to_string(), "configuration error: invalid region");
    assert!(!err.is_invalid_argument());
}

#[test]
fn test_serialization_error_from_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ModelError = json_err.into();

    assert!(matches!(err, ModelError::Serialization(_)));
    assert!(err.to_string().starts_with("serialization error: "));
}

#[test]
fn test_service_error_display() {
    let service_error = ServiceError {
        kind: Some(ServiceErrorKind::ClusterNotFound),
        code: "ClusterNotFoundException".to_string(),
        message: "Cluster not found.".to_string(),
    };
    assert_eq!(
        service_error.to_string(),
        "ClusterNotFoundException: Cluster not found."
    );

    let err: ModelError = service_error.into();
    assert_eq!(
        err.to_string(),
        "service error: ClusterNotFoundException: Cluster not found."
    );
    assert!(!err.is_invalid_argument());
}

#[test]
fn test_service_error_kind_literals() {
    assert_eq!(ServiceErrorKind::Server.as_str(), "ServerException");
    assert_eq!(
        ServiceErrorKind::from_value("TaskSetNotFoundException").unwrap(),
        ServiceErrorKind::TaskSetNotFound
    );
    assert!(ServiceErrorKind::from_value("TaskSetNotFound").is_err());
}

#[test]
fn test_every_error_kind_is_decoded_from_its_code() {
    for kind in ServiceErrorKind::values() {
        let body = format!(r#"{{"__type":"com.amazonaws.ecs#{}","message":"m"}}"#, kind);
        let err = ServiceError::from_body(body.as_bytes()).unwrap();

        assert_eq!(err.kind, Some(kind));
        assert_eq!(err.code, kind.as_str());
        assert!(err.code.ends_with("Exception"));
    }
}
