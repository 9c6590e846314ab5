// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration tests for ecs-model.

use ecs_model::{DEFAULT_REGION, DEFAULT_TARGET_PREFIX, ModelError, SdkConfig};

#[test]
fn test_new_matches_default() {
    let config = SdkConfig::new();
    assert_eq!(config, SdkConfig::default());
    assert_eq!(config.region, DEFAULT_REGION);
    assert_eq!(config.target_prefix, DEFAULT_TARGET_PREFIX);
}

#[test]
fn test_from_lookup_with_nothing_set() {
    let config = SdkConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, SdkConfig::default());
}

#[test]
fn test_from_lookup_reads_every_variable() {
    let config = SdkConfig::from_lookup(|name| match name {
        "ECS_REGION" => Some("eu-central-1".to_string()),
        "ECS_ENDPOINT" => Some("ecs.internal:8080".to_string()),
        "ECS_USE_HTTPS" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.region, "eu-central-1");
    assert_eq!(config.endpoint.as_deref(), Some("ecs.internal:8080"));
    assert!(!config.use_https);
    assert_eq!(config.endpoint_url(), "http://ecs.internal:8080");
}

#[test]
fn test_from_lookup_accepts_uppercase_boolean() {
    let config = SdkConfig::from_lookup(|name| match name {
        "ECS_USE_HTTPS" => Some("TRUE".to_string()),
        _ => None,
    })
    .unwrap();
    assert!(config.use_https);
}

#[test]
fn test_from_lookup_rejects_empty_region() {
    let err = SdkConfig::from_lookup(|name| match name {
        "ECS_REGION" => Some(String::new()),
        _ => None,
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Config(_)));
}

#[test]
fn test_region_derived_endpoint() {
    let config = SdkConfig::new().with_region("ap-southeast-2");
    assert_eq!(config.endpoint_url(), "https://ecs.ap-southeast-2.amazonaws.com");

    let config = config.with_use_https(false);
    assert_eq!(config.endpoint_url(), "http://ecs.ap-southeast-2.amazonaws.com");
}
