// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Record construction, equality, rendering and wire shape tests for ecs-model.

use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{TimeZone, Utc};
use ecs_model::{
    AssignPublicIp, Attachment, AwsVpcConfiguration, ContainerDefinition, DockerVolumeConfiguration,
    KeyValuePair, LaunchType, LogConfiguration, LogDriver, ModelError, NetworkBinding,
    NetworkConfiguration, PlatformDevice, PlatformDeviceType, PortMapping, Resource, Scale,
    ScaleUnit, Scope, Service, Setting, SettingName, Tag, Task, TaskSet, TransportProtocol,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_volume() -> DockerVolumeConfiguration {
    let mut volume = DockerVolumeConfiguration::new()
        .with_scope(Scope::Shared)
        .with_autoprovision(true)
        .with_driver("local");
    volume.add_driver_opts_entry("type", "nfs").unwrap();
    volume.add_labels_entry("team", "storage").unwrap();
    volume
}

#[test]
fn test_field_copied_record_is_equal_with_equal_hash() {
    let original = sample_volume();
    let copy = DockerVolumeConfiguration {
        scope: original.scope,
        autoprovision: original.autoprovision,
        driver: original.driver.clone(),
        driver_opts: original.driver_opts.clone(),
        labels: original.labels.clone(),
    };

    assert_eq!(copy, original);
    assert_eq!(hash_of(&copy), hash_of(&original));
}

#[test]
fn test_nested_records_take_part_in_equality() {
    let a = Service::new()
        .with_service_name("web")
        .with_network_configuration(NetworkConfiguration::new().with_awsvpc_configuration(
            AwsVpcConfiguration::new().with_subnets(["subnet-1"]),
        ));
    let b = Service::new()
        .with_service_name("web")
        .with_network_configuration(NetworkConfiguration::new().with_awsvpc_configuration(
            AwsVpcConfiguration::new().with_subnets(["subnet-2"]),
        ));

    assert_ne!(a, b);
    assert_ne!(a, Service::new().with_service_name("web"));
}

#[test]
fn test_absent_field_differs_from_present_field() {
    assert_ne!(Tag::new(), Tag::new().with_value(""));
    assert_eq!(Tag::new(), Tag::default());
    assert_eq!(hash_of(&Tag::new()), hash_of(&Tag::default()));
}

#[test]
fn test_assigned_collection_is_owned_by_record() {
    let mut subnets = vec!["subnet-1".to_string()];
    let mut config = AwsVpcConfiguration::new();
    config.subnets = Some(subnets.clone());

    subnets.push("subnet-2".to_string());

    assert_eq!(config.subnets, Some(vec!["subnet-1".to_string()]));
}

#[test]
fn test_map_builder_keeps_its_own_copy() {
    let mut options = BTreeMap::new();
    options.insert("awslogs-group".to_string(), "/ecs/web".to_string());
    let log = LogConfiguration::new()
        .with_log_driver(LogDriver::Awslogs)
        .with_options(options.clone());

    options.insert("awslogs-region".to_string(), "eu-west-1".to_string());

    assert_eq!(log.options.as_ref().map(BTreeMap::len), Some(1));
}

#[test]
fn test_fluent_chain_matches_field_assignment() {
    let fluent = PortMapping::new()
        .with_container_port(8080)
        .with_host_port(0)
        .with_protocol(TransportProtocol::Tcp);

    let mut assigned = PortMapping::new();
    assigned.container_port = Some(8080);
    assigned.host_port = Some(0);
    assigned.protocol = Some(TransportProtocol::Tcp);

    assert_eq!(fluent, assigned);
    assert_eq!(hash_of(&fluent), hash_of(&assigned));
}

#[test]
fn test_assigning_none_clears_field() {
    let mut tag = Tag::new().with_key("env").with_value("prod");
    tag.value = None;

    assert_eq!(tag, Tag::new().with_key("env"));
}

#[test]
fn test_enum_field_stores_canonical_literal() {
    let service = Service::new().with_launch_type(LaunchType::Fargate);

    assert_eq!(service.launch_type, Some(LaunchType::Fargate));
    assert_eq!(service.launch_type.unwrap().to_string(), "FARGATE");
    assert_eq!(
        serde_json::to_value(&service).unwrap(),
        serde_json::json!({"launchType": "FARGATE"})
    );
}

#[test]
fn test_duplicate_map_key_is_rejected_and_map_unchanged() {
    let mut volume = sample_volume();
    let before = volume.clone();

    let err = volume.add_labels_entry("team", "compute").unwrap_err();

    assert!(matches!(
        err,
        ModelError::DuplicateMapKey { field: "labels", ref key } if key == "team"
    ));
    assert_eq!(volume, before);
    assert_eq!(volume.labels.as_ref().unwrap()["team"], "storage");
}

#[test]
fn test_map_entries_chain_and_clear() {
    let mut definition = ContainerDefinition::new().with_name("web");
    definition
        .add_docker_labels_entry("a", "1")
        .unwrap()
        .add_docker_labels_entry("b", "2")
        .unwrap();

    assert_eq!(definition.docker_labels.as_ref().map(BTreeMap::len), Some(2));

    definition.clear_docker_labels_entries();
    assert!(definition.docker_labels.is_none());

    definition.add_docker_labels_entry("a", "3").unwrap();
    assert_eq!(definition.docker_labels.as_ref().unwrap()["a"], "3");
}

#[test]
fn test_display_omits_absent_fields() {
    assert_eq!(Tag::new().to_string(), "{}");
    assert_eq!(Tag::new().with_key("team").to_string(), "{key: team}");
    assert_eq!(
        KeyValuePair::new().with_name("PORT").with_value("80").to_string(),
        "{name: PORT, value: 80}"
    );
}

#[test]
fn test_display_renders_nested_records_and_lists() {
    let network = NetworkConfiguration::new().with_awsvpc_configuration(
        AwsVpcConfiguration::new()
            .with_subnets(["subnet-1", "subnet-2"])
            .with_assign_public_ip(AssignPublicIp::Enabled),
    );

    assert_eq!(
        network.to_string(),
        "{awsvpcConfiguration: {subnets: [subnet-1, subnet-2], assignPublicIp: ENABLED}}"
    );
}

#[test]
fn test_list_builders_append() {
    let config = AwsVpcConfiguration::new()
        .with_subnets(["subnet-1"])
        .with_subnets(["subnet-2", "subnet-3"]);

    assert_eq!(
        config.subnets,
        Some(vec![
            "subnet-1".to_string(),
            "subnet-2".to_string(),
            "subnet-3".to_string()
        ])
    );
}

#[test]
fn test_empty_list_is_sent_and_absent_list_is_omitted() {
    let absent = AwsVpcConfiguration::new();
    let empty = AwsVpcConfiguration::new().with_security_groups(Vec::<String>::new());

    assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
    assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"securityGroups":[]}"#);
    assert_ne!(absent, empty);
}

#[test]
fn test_renamed_wire_fields() {
    let service = Service::new().with_enable_ecs_managed_tags(true);
    let attachment = Attachment::new().with_attachment_type("ElasticNetworkInterface");
    let binding = NetworkBinding::new().with_bind_ip("0.0.0.0");

    assert_eq!(
        serde_json::to_value(&service).unwrap(),
        serde_json::json!({"enableECSManagedTags": true})
    );
    assert_eq!(
        serde_json::to_value(&attachment).unwrap(),
        serde_json::json!({"type": "ElasticNetworkInterface"})
    );
    assert_eq!(
        serde_json::to_value(&binding).unwrap(),
        serde_json::json!({"bindIP": "0.0.0.0"})
    );
}

#[test]
fn test_timestamps_use_epoch_seconds() {
    let created = Utc.timestamp_millis_opt(1_600_000_000_500).unwrap();
    let task = Task::new().with_task_arn("arn:task/1").with_created_at(created);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"createdAt": 1_600_000_000.5, "taskArn": "arn:task/1"})
    );

    let decoded: Task = serde_json::from_str(r#"{"createdAt":1600000000}"#).unwrap();
    assert_eq!(
        decoded.created_at,
        Some(Utc.timestamp_opt(1_600_000_000, 0).unwrap())
    );
}

#[test]
fn test_unknown_response_fields_are_ignored() {
    let tag: Tag = serde_json::from_str(r#"{"key":"a","value":"b","extra":1}"#).unwrap();
    assert_eq!(tag, Tag::new().with_key("a").with_value("b"));
}

#[test]
fn test_unknown_enum_literal_fails_decoding() {
    let result = serde_json::from_str::<Service>(r#"{"launchType":"MOON"}"#);
    assert!(result.is_err());
}

#[test]
fn test_float_fields_compare_by_bit_pattern() {
    let nan = Scale::new().with_value(f64::NAN).with_unit(ScaleUnit::Percent);
    assert_eq!(nan, nan.clone());
    assert_eq!(hash_of(&nan), hash_of(&nan.clone()));

    assert_ne!(Scale::new().with_value(0.0), Scale::new().with_value(-0.0));

    let a = Resource::new().with_name("CPU").with_double_value(0.5);
    let b = Resource::new().with_name("CPU").with_double_value(0.5);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_task_set_embeds_scale() {
    let task_set = TaskSet::new()
        .with_id("ecs-svc/1")
        .with_scale(Scale::new().with_value(50.0).with_unit(ScaleUnit::Percent));

    assert_eq!(
        task_set.to_string(),
        "{id: ecs-svc/1, scale: {value: 50.0, unit: PERCENT}}"
    );
}

#[test]
fn test_display_shows_non_finite_doubles() {
    let scale = Scale::new().with_value(f64::NAN).with_unit(ScaleUnit::Percent);
    assert_eq!(scale.to_string(), "{value: NaN, unit: PERCENT}");

    let resource = Resource::new()
        .with_name("CPU")
        .with_double_value(f64::NEG_INFINITY);
    assert_eq!(resource.to_string(), "{name: CPU, doubleValue: -inf}");
}

#[test]
fn test_non_finite_doubles_are_not_serialized() {
    let scale = Scale::new().with_value(f64::INFINITY);
    assert!(serde_json::to_string(&scale).is_err());
    assert!(serde_json::to_value(&scale).is_err());

    let decoded: Scale = serde_json::from_str(r#"{"value":12.5}"#).unwrap();
    assert_eq!(decoded, Scale::new().with_value(12.5));
    let decoded: Scale = serde_json::from_str(r#"{"unit":"PERCENT"}"#).unwrap();
    assert_eq!(decoded.value, None);
}

#[test]
fn test_setting_and_platform_device_wire_shape() {
    let setting = Setting::new()
        .with_name(SettingName::AwsvpcTrunking)
        .with_value("enabled");
    let device = PlatformDevice::new()
        .with_id("GPU-0")
        .with_device_type(PlatformDeviceType::Gpu);

    assert_eq!(
        serde_json::to_value(&setting).unwrap(),
        serde_json::json!({"name": "awsvpcTrunking", "value": "enabled"})
    );
    assert_eq!(
        serde_json::to_value(&device).unwrap(),
        serde_json::json!({"id": "GPU-0", "type": "GPU"})
    );
    assert_eq!(device.to_string(), "{id: GPU-0, type: GPU}");
}
