// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request envelope preparation and response decoding tests for ecs-model.

use ecs_model::{
    CreateClusterRequest, CreateTaskSetRequest, DeleteClusterRequest, JSON_CONTENT_TYPE,
    ListClustersRequest, ModelError, RequestEnvelope, Scale, ScaleUnit, SdkConfig,
    ServiceErrorKind, TARGET_HEADER, UpdateTaskSetRequest, decode_response,
};

#[test]
fn test_prepare_with_default_config() {
    let request = CreateClusterRequest::new().with_cluster_name("production");
    let prepared = RequestEnvelope::new(request).prepare(&SdkConfig::default()).unwrap();

    assert_eq!(prepared.operation, "CreateCluster");
    assert_eq!(prepared.method, "POST");
    assert_eq!(prepared.url, "https://ecs.us-east-1.amazonaws.com/");
    assert_eq!(
        prepared.headers,
        vec![
            (
                TARGET_HEADER.to_string(),
                "AmazonEC2ContainerServiceV20141113.CreateCluster".to_string()
            ),
            ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
        ]
    );
    assert_eq!(prepared.body, br#"{"clusterName":"production"}"#.to_vec());
}

#[test]
fn test_empty_request_serializes_to_empty_object() {
    let prepared = RequestEnvelope::from(ListClustersRequest::new())
        .prepare(&SdkConfig::default())
        .unwrap();

    assert_eq!(prepared.body, b"{}".to_vec());
}

#[test]
fn test_custom_headers_follow_protocol_headers() {
    let envelope = RequestEnvelope::new(DeleteClusterRequest::new().with_cluster("old"))
        .with_custom_header("X-Trace-Id", "first")
        .with_custom_header("X-Trace-Id", "second")
        .with_custom_header("X-Caller", "ops");

    assert_eq!(envelope.custom_headers().len(), 2);

    let prepared = envelope.prepare(&SdkConfig::default()).unwrap();
    assert_eq!(prepared.headers.len(), 4);
    assert_eq!(prepared.headers[0].0, TARGET_HEADER);
    assert_eq!(prepared.header("x-trace-id"), Some("second"));
    assert_eq!(prepared.header("X-CALLER"), Some("ops"));
    assert_eq!(prepared.header("content-type"), Some(JSON_CONTENT_TYPE));
    assert_eq!(prepared.header("missing"), None);
}

#[test]
fn test_custom_query_parameters_are_encoded() {
    let prepared = RequestEnvelope::new(ListClustersRequest::new())
        .with_custom_query_parameter("k", "1")
        .with_custom_query_parameter("k", "2")
        .with_custom_query_parameter("a b", "x/y")
        .prepare(&SdkConfig::default())
        .unwrap();

    assert_eq!(
        prepared.url,
        "https://ecs.us-east-1.amazonaws.com/?a%20b=x%2Fy&k=1&k=2"
    );
}

#[test]
fn test_envelope_metadata_is_not_part_of_record() {
    let request = DeleteClusterRequest::new().with_cluster("old");
    let envelope = RequestEnvelope::new(request.clone()).with_custom_header("X-Trace-Id", "1");

    assert_eq!(envelope.request(), &request);
    assert_eq!(envelope.into_request(), request);
}

#[test]
fn test_prepare_uses_configured_endpoint_and_prefix() {
    let config = SdkConfig::new()
        .with_endpoint("localhost:4566")
        .with_use_https(false)
        .with_target_prefix("Local");

    let prepared = RequestEnvelope::new(ListClustersRequest::new())
        .prepare(&config)
        .unwrap();

    assert_eq!(prepared.url, "http://localhost:4566/");
    assert_eq!(prepared.header(TARGET_HEADER), Some("Local.ListClusters"));
}

#[test]
fn test_decode_response_success() {
    let response = decode_response::<DeleteClusterRequest>(
        200,
        br#"{"cluster":{"clusterName":"old","status":"INACTIVE"}}"#,
    )
    .unwrap();

    let cluster = response.cluster.unwrap();
    assert_eq!(cluster.cluster_name.as_deref(), Some("old"));
    assert_eq!(cluster.status.as_deref(), Some("INACTIVE"));
}

#[test]
fn test_decode_response_service_error() {
    let err = decode_response::<DeleteClusterRequest>(
        400,
        br#"{"__type":"com.amazonaws.ecs#ClusterContainsServicesException","message":"Cluster has services."}"#,
    )
    .unwrap_err();

    match err {
        ModelError::Service(service_error) => {
            assert_eq!(
                service_error.kind,
                Some(ServiceErrorKind::ClusterContainsServices)
            );
            assert_eq!(service_error.message, "Cluster has services.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_decode_response_unreadable_error_body_keeps_status() {
    let err =
        decode_response::<DeleteClusterRequest>(503, b" <html>unavailable</html>\n").unwrap_err();

    match err {
        ModelError::Service(service_error) => {
            assert_eq!(service_error.kind, None);
            assert_eq!(service_error.code, "503");
            assert_eq!(service_error.message, "<html>unavailable</html>");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_decode_response_error_without_body() {
    let err = decode_response::<ListClustersRequest>(500, b"").unwrap_err();

    match err {
        ModelError::Service(service_error) => {
            assert_eq!(service_error.kind, None);
            assert_eq!(service_error.code, "500");
            assert_eq!(service_error.message, "");
            assert_eq!(service_error.to_string(), "500: ");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_prepare_rejects_non_finite_scale() {
    let request = CreateTaskSetRequest::new()
        .with_service("web")
        .with_scale(Scale::new().with_value(f64::NAN).with_unit(ScaleUnit::Percent));

    let err = RequestEnvelope::new(request)
        .prepare(&SdkConfig::default())
        .unwrap_err();

    assert!(matches!(err, ModelError::Serialization(ref message) if message.contains("non-finite")));
}

#[test]
fn test_prepare_sends_finite_scale() {
    let request = UpdateTaskSetRequest::new()
        .with_task_set("ecs-svc/1")
        .with_scale(Scale::new().with_value(25.5).with_unit(ScaleUnit::Percent));

    let prepared = RequestEnvelope::new(request)
        .prepare(&SdkConfig::default())
        .unwrap();

    assert_eq!(
        prepared.body,
        br#"{"taskSet":"ecs-svc/1","scale":{"value":25.5,"unit":"PERCENT"}}"#.to_vec()
    );
    assert_eq!(
        prepared.header(TARGET_HEADER),
        Some("AmazonEC2ContainerServiceV20141113.UpdateTaskSet")
    );
}

#[test]
fn test_decode_response_malformed_success_body() {
    let err = decode_response::<ListClustersRequest>(200, br#"{"clusterArns":"nope"}"#).unwrap_err();
    assert!(matches!(err, ModelError::Serialization(_)));
}
