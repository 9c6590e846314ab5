// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Operation request/response shape tests for ecs-model.

use chrono::{TimeZone, Utc};
use ecs_model::{
    Attribute, AutoScalingGroupProvider, CapacityProviderStrategyItem, ClusterField, ClusterSetting,
    ClusterSettingName, Compatibility, ContainerDefinition, ContainerInstanceStatus,
    CreateCapacityProviderRequest, CreateClusterRequest, CreateServiceRequest, CreateTaskSetRequest,
    DeleteAccountSettingRequest, DeleteAttributesRequest, DeleteClusterRequest,
    DeleteServiceRequest, DeleteTaskSetRequest, DeploymentConfiguration, DeploymentController,
    DeploymentControllerType, DeregisterContainerInstanceRequest, DeregisterTaskDefinitionRequest,
    DescribeCapacityProvidersRequest, DescribeClustersRequest, DescribeClustersResponse,
    DescribeContainerInstancesRequest, DescribeContainerInstancesResponse, DescribeServicesRequest,
    DescribeServicesResponse, DescribeTaskDefinitionRequest, DescribeTaskSetsRequest,
    DescribeTaskSetsResponse, DescribeTasksRequest, DesiredStatus, LaunchType,
    ListAccountSettingsRequest, ListAccountSettingsResponse, ListAttributesRequest,
    ListAttributesResponse, ListClustersRequest, ListContainerInstancesRequest, ListServicesRequest,
    ListTagsForResourceRequest, ListTagsForResourceResponse, ListTaskDefinitionFamiliesRequest,
    ListTaskDefinitionsRequest, ListTasksRequest, ListTasksResponse, ManagedScaling,
    ManagedScalingStatus, ManagedTerminationProtection, NetworkMode, OperationRequest,
    PlatformDevice, PlatformDeviceType, PortMapping, PutAccountSettingDefaultRequest,
    PutAccountSettingRequest, PutAttributesRequest, PutClusterCapacityProvidersRequest,
    RegisterContainerInstanceRequest, RegisterTaskDefinitionRequest, Resource, RunTaskRequest,
    Scale, ScaleUnit, SchedulingStrategy, SettingName, SortOrder, StartTaskRequest, StopTaskRequest,
    Tag, TagResourceRequest, TagResourceResponse, TargetType, TaskDefinitionFamilyStatus,
    TaskSetField, UntagResourceRequest, UpdateClusterSettingsRequest, UpdateContainerAgentRequest,
    UpdateContainerInstancesStateRequest, UpdateServicePrimaryTaskSetRequest, UpdateServiceRequest,
    UpdateTaskSetRequest, VersionInfo, parse_response,
};
use serde_json::json;

#[test]
fn test_operation_names() {
    assert_eq!(CreateCapacityProviderRequest::OPERATION, "CreateCapacityProvider");
    assert_eq!(DescribeCapacityProvidersRequest::OPERATION, "DescribeCapacityProviders");
    assert_eq!(CreateClusterRequest::OPERATION, "CreateCluster");
    assert_eq!(DeleteClusterRequest::OPERATION, "DeleteCluster");
    assert_eq!(DescribeClustersRequest::OPERATION, "DescribeClusters");
    assert_eq!(ListClustersRequest::OPERATION, "ListClusters");
    assert_eq!(PutClusterCapacityProvidersRequest::OPERATION, "PutClusterCapacityProviders");
    assert_eq!(UpdateClusterSettingsRequest::OPERATION, "UpdateClusterSettings");
    assert_eq!(CreateServiceRequest::OPERATION, "CreateService");
    assert_eq!(UpdateServiceRequest::OPERATION, "UpdateService");
    assert_eq!(DeleteServiceRequest::OPERATION, "DeleteService");
    assert_eq!(DescribeServicesRequest::OPERATION, "DescribeServices");
    assert_eq!(RegisterTaskDefinitionRequest::OPERATION, "RegisterTaskDefinition");
    assert_eq!(DeregisterTaskDefinitionRequest::OPERATION, "DeregisterTaskDefinition");
    assert_eq!(DescribeTaskDefinitionRequest::OPERATION, "DescribeTaskDefinition");
    assert_eq!(RunTaskRequest::OPERATION, "RunTask");
    assert_eq!(StartTaskRequest::OPERATION, "StartTask");
    assert_eq!(StopTaskRequest::OPERATION, "StopTask");
    assert_eq!(DescribeTasksRequest::OPERATION, "DescribeTasks");
    assert_eq!(CreateTaskSetRequest::OPERATION, "CreateTaskSet");
    assert_eq!(DescribeContainerInstancesRequest::OPERATION, "DescribeContainerInstances");
    assert_eq!(TagResourceRequest::OPERATION, "TagResource");
    assert_eq!(UntagResourceRequest::OPERATION, "UntagResource");
    assert_eq!(ListTagsForResourceRequest::OPERATION, "ListTagsForResource");
    assert_eq!(DescribeTaskSetsRequest::OPERATION, "DescribeTaskSets");
    assert_eq!(UpdateTaskSetRequest::OPERATION, "UpdateTaskSet");
    assert_eq!(DeleteTaskSetRequest::OPERATION, "DeleteTaskSet");
    assert_eq!(UpdateServicePrimaryTaskSetRequest::OPERATION, "UpdateServicePrimaryTaskSet");
    assert_eq!(ListServicesRequest::OPERATION, "ListServices");
    assert_eq!(ListTasksRequest::OPERATION, "ListTasks");
    assert_eq!(ListContainerInstancesRequest::OPERATION, "ListContainerInstances");
    assert_eq!(ListTaskDefinitionsRequest::OPERATION, "ListTaskDefinitions");
    assert_eq!(ListTaskDefinitionFamiliesRequest::OPERATION, "ListTaskDefinitionFamilies");
    assert_eq!(PutAttributesRequest::OPERATION, "PutAttributes");
    assert_eq!(DeleteAttributesRequest::OPERATION, "DeleteAttributes");
    assert_eq!(ListAttributesRequest::OPERATION, "ListAttributes");
    assert_eq!(PutAccountSettingRequest::OPERATION, "PutAccountSetting");
    assert_eq!(PutAccountSettingDefaultRequest::OPERATION, "PutAccountSettingDefault");
    assert_eq!(DeleteAccountSettingRequest::OPERATION, "DeleteAccountSetting");
    assert_eq!(ListAccountSettingsRequest::OPERATION, "ListAccountSettings");
    assert_eq!(RegisterContainerInstanceRequest::OPERATION, "RegisterContainerInstance");
    assert_eq!(DeregisterContainerInstanceRequest::OPERATION, "DeregisterContainerInstance");
    assert_eq!(UpdateContainerInstancesStateRequest::OPERATION, "UpdateContainerInstancesState");
    assert_eq!(UpdateContainerAgentRequest::OPERATION, "UpdateContainerAgent");
}

#[test]
fn test_target_joins_prefix_and_operation() {
    assert_eq!(
        StopTaskRequest::target("AmazonEC2ContainerServiceV20141113"),
        "AmazonEC2ContainerServiceV20141113.StopTask"
    );
}

#[test]
fn test_create_capacity_provider_request_shape() {
    let request = CreateCapacityProviderRequest::new()
        .with_name("spot")
        .with_auto_scaling_group_provider(
            AutoScalingGroupProvider::new()
                .with_auto_scaling_group_arn("arn:aws:autoscaling:asg/spot")
                .with_managed_scaling(
                    ManagedScaling::new()
                        .with_status(ManagedScalingStatus::Enabled)
                        .with_target_capacity(90),
                )
                .with_managed_termination_protection(ManagedTerminationProtection::Disabled),
        );

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "spot",
            "autoScalingGroupProvider": {
                "autoScalingGroupArn": "arn:aws:autoscaling:asg/spot",
                "managedScaling": {"status": "ENABLED", "targetCapacity": 90},
                "managedTerminationProtection": "DISABLED"
            }
        })
    );
}

#[test]
fn test_create_cluster_request_shape() {
    let request = CreateClusterRequest::new()
        .with_cluster_name("production")
        .with_settings([ClusterSetting::new()
            .with_name(ClusterSettingName::ContainerInsights)
            .with_value("enabled")])
        .with_capacity_providers(["FARGATE", "FARGATE_SPOT"])
        .with_default_capacity_provider_strategy([CapacityProviderStrategyItem::new()
            .with_capacity_provider("FARGATE")
            .with_weight(1)
            .with_base(2)]);

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "clusterName": "production",
            "settings": [{"name": "containerInsights", "value": "enabled"}],
            "capacityProviders": ["FARGATE", "FARGATE_SPOT"],
            "defaultCapacityProviderStrategy": [
                {"capacityProvider": "FARGATE", "weight": 1, "base": 2}
            ]
        })
    );
}

#[test]
fn test_describe_clusters_include_uses_literals() {
    let request = DescribeClustersRequest::new()
        .with_clusters(["default"])
        .with_include([ClusterField::Settings, ClusterField::Tags]);

    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"clusters":["default"],"include":["SETTINGS","TAGS"]}"#
    );
}

#[test]
fn test_create_service_request_shape() {
    let request = CreateServiceRequest::new()
        .with_cluster("production")
        .with_service_name("web")
        .with_task_definition("web:3")
        .with_desired_count(2)
        .with_launch_type(LaunchType::Ec2)
        .with_scheduling_strategy(SchedulingStrategy::Replica)
        .with_deployment_configuration(
            DeploymentConfiguration::new()
                .with_maximum_percent(200)
                .with_minimum_healthy_percent(50),
        )
        .with_deployment_controller(
            DeploymentController::new().with_controller_type(DeploymentControllerType::Ecs),
        )
        .with_enable_ecs_managed_tags(true);

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "cluster": "production",
            "serviceName": "web",
            "taskDefinition": "web:3",
            "desiredCount": 2,
            "launchType": "EC2",
            "deploymentConfiguration": {"maximumPercent": 200, "minimumHealthyPercent": 50},
            "schedulingStrategy": "REPLICA",
            "deploymentController": {"type": "ECS"},
            "enableECSManagedTags": true
        })
    );
}

#[test]
fn test_register_task_definition_request_shape() {
    let mut container = ContainerDefinition::new()
        .with_name("web")
        .with_image("nginx:1.25")
        .with_essential(true)
        .with_port_mappings([PortMapping::new().with_container_port(80)]);
    container.add_docker_labels_entry("tier", "frontend").unwrap();

    let request = RegisterTaskDefinitionRequest::new()
        .with_family("web")
        .with_network_mode(NetworkMode::Awsvpc)
        .with_requires_compatibilities([Compatibility::Fargate])
        .with_cpu("256")
        .with_memory("512")
        .with_container_definitions([container]);

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "family": "web",
            "networkMode": "awsvpc",
            "containerDefinitions": [{
                "name": "web",
                "image": "nginx:1.25",
                "portMappings": [{"containerPort": 80}],
                "essential": true,
                "dockerLabels": {"tier": "frontend"}
            }],
            "requiresCompatibilities": ["FARGATE"],
            "cpu": "256",
            "memory": "512"
        })
    );
}

#[test]
fn test_create_task_set_request_shape() {
    let request = CreateTaskSetRequest::new()
        .with_service("web")
        .with_cluster("production")
        .with_task_definition("web:4")
        .with_scale(Scale::new().with_value(25.0).with_unit(ScaleUnit::Percent));

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "service": "web",
            "cluster": "production",
            "taskDefinition": "web:4",
            "scale": {"value": 25.0, "unit": "PERCENT"}
        })
    );
}

#[test]
fn test_untag_resource_request_shape() {
    let request = UntagResourceRequest::new()
        .with_resource_arn("arn:aws:ecs:cluster/production")
        .with_tag_keys(["team"])
        .with_tag_keys(["env"]);

    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"resourceArn":"arn:aws:ecs:cluster/production","tagKeys":["team","env"]}"#
    );
}

#[test]
fn test_describe_clusters_response_decoding() {
    let body = br#"{
        "clusters": [{
            "clusterArn": "arn:aws:ecs:us-east-1:123:cluster/default",
            "clusterName": "default",
            "status": "ACTIVE",
            "runningTasksCount": 3,
            "settings": [{"name": "containerInsights", "value": "disabled"}],
            "tags": [{"key": "env", "value": "prod"}]
        }],
        "failures": [{"arn": "arn:aws:ecs:us-east-1:123:cluster/gone", "reason": "MISSING"}]
    }"#;

    let response: DescribeClustersResponse = parse_response::<DescribeClustersRequest>(body).unwrap();

    let clusters = response.clusters.unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].cluster_name.as_deref(), Some("default"));
    assert_eq!(clusters[0].running_tasks_count, Some(3));
    assert_eq!(
        clusters[0].settings.as_ref().unwrap()[0].name,
        Some(ClusterSettingName::ContainerInsights)
    );
    assert_eq!(
        clusters[0].tags,
        Some(vec![Tag::new().with_key("env").with_value("prod")])
    );

    let failures = response.failures.unwrap();
    assert_eq!(failures[0].reason.as_deref(), Some("MISSING"));
}

#[test]
fn test_describe_services_response_decoding() {
    let body = br#"{
        "services": [{
            "serviceName": "web",
            "launchType": "FARGATE",
            "desiredCount": 2,
            "createdAt": 1700000000.25,
            "deployments": [{"id": "ecs-svc/1", "status": "PRIMARY", "runningCount": 2}],
            "events": [{"id": "e1", "createdAt": 1700000100, "message": "steady state"}],
            "enableECSManagedTags": false
        }],
        "failures": []
    }"#;

    let response: DescribeServicesResponse = parse_response::<DescribeServicesRequest>(body).unwrap();
    let service = &response.services.as_ref().unwrap()[0];

    assert_eq!(service.launch_type, Some(LaunchType::Fargate));
    assert_eq!(
        service.created_at,
        Some(Utc.timestamp_millis_opt(1_700_000_000_250).unwrap())
    );
    assert_eq!(service.enable_ecs_managed_tags, Some(false));
    assert_eq!(
        service.deployments.as_ref().unwrap()[0].running_count,
        Some(2)
    );
    assert_eq!(
        service.events.as_ref().unwrap()[0].message.as_deref(),
        Some("steady state")
    );
    assert_eq!(response.failures, Some(Vec::new()));
}

#[test]
fn test_describe_container_instances_response_decoding() {
    let body = br#"{
        "containerInstances": [{
            "ec2InstanceId": "i-0abc",
            "agentConnected": true,
            "registeredResources": [
                {"name": "CPU", "type": "INTEGER", "integerValue": 2048},
                {"name": "PORTS", "type": "STRINGSET", "stringSetValue": ["22", "2376"]}
            ],
            "versionInfo": {"agentVersion": "1.80.0"}
        }]
    }"#;

    let response: DescribeContainerInstancesResponse =
        parse_response::<DescribeContainerInstancesRequest>(body).unwrap();
    let instance = &response.container_instances.as_ref().unwrap()[0];

    assert_eq!(instance.ec2_instance_id.as_deref(), Some("i-0abc"));
    let resources = instance.registered_resources.as_ref().unwrap();
    assert_eq!(resources[0].resource_type.as_deref(), Some("INTEGER"));
    assert_eq!(resources[0].integer_value, Some(2048));
    assert_eq!(
        resources[1].string_set_value,
        Some(vec!["22".to_string(), "2376".to_string()])
    );
    assert!(response.failures.is_none());
}

#[test]
fn test_empty_body_decodes_to_empty_response() {
    let response = parse_response::<TagResourceRequest>(b"").unwrap();
    assert_eq!(response, TagResourceResponse::new());
    assert_eq!(response.to_string(), "{}");

    let response: ListTagsForResourceResponse =
        parse_response::<ListTagsForResourceRequest>(b"{}").unwrap();
    assert!(response.tags.is_none());
}

#[test]
fn test_request_display() {
    let request = StopTaskRequest::new()
        .with_cluster("production")
        .with_task("abc123")
        .with_reason("redeploy");

    assert_eq!(
        request.to_string(),
        "{cluster: production, task: abc123, reason: redeploy}"
    );
}

#[test]
fn test_task_set_lifecycle_request_shapes() {
    let describe = DescribeTaskSetsRequest::new()
        .with_cluster("production")
        .with_service("web")
        .with_task_sets(["ecs-svc/1", "ecs-svc/2"])
        .with_include([TaskSetField::Tags]);
    let delete = DeleteTaskSetRequest::new()
        .with_service("web")
        .with_task_set("ecs-svc/1")
        .with_force(true);
    let promote = UpdateServicePrimaryTaskSetRequest::new()
        .with_service("web")
        .with_primary_task_set("ecs-svc/2");

    assert_eq!(
        serde_json::to_value(&describe).unwrap(),
        json!({
            "cluster": "production",
            "service": "web",
            "taskSets": ["ecs-svc/1", "ecs-svc/2"],
            "include": ["TAGS"]
        })
    );
    assert_eq!(
        serde_json::to_value(&delete).unwrap(),
        json!({"service": "web", "taskSet": "ecs-svc/1", "force": true})
    );
    assert_eq!(
        serde_json::to_value(&promote).unwrap(),
        json!({"service": "web", "primaryTaskSet": "ecs-svc/2"})
    );
}

#[test]
fn test_describe_task_sets_response_parses() {
    let response = parse_response::<DescribeTaskSetsRequest>(
        br#"{"taskSets":[{"id":"ecs-svc/1","scale":{"value":100.0,"unit":"PERCENT"}}],"failures":[]}"#,
    )
    .unwrap();

    let response: DescribeTaskSetsResponse = response;
    assert_eq!(response.failures, Some(vec![]));
    let task_set = &response.task_sets.unwrap()[0];
    assert_eq!(task_set.id.as_deref(), Some("ecs-svc/1"));
    assert_eq!(
        task_set.scale,
        Some(Scale::new().with_value(100.0).with_unit(ScaleUnit::Percent))
    );
}

#[test]
fn test_list_requests_use_filter_literals() {
    let tasks = ListTasksRequest::new()
        .with_cluster("production")
        .with_service_name("web")
        .with_desired_status(DesiredStatus::Stopped)
        .with_launch_type(LaunchType::Fargate)
        .with_max_results(50);
    let services = ListServicesRequest::new().with_scheduling_strategy(SchedulingStrategy::Daemon);
    let instances = ListContainerInstancesRequest::new()
        .with_filter("attribute:ecs.instance-type == t3.micro")
        .with_status(ContainerInstanceStatus::RegistrationFailed);
    let definitions = ListTaskDefinitionsRequest::new()
        .with_family_prefix("web")
        .with_sort(SortOrder::Desc);
    let families =
        ListTaskDefinitionFamiliesRequest::new().with_status(TaskDefinitionFamilyStatus::All);

    assert_eq!(
        serde_json::to_value(&tasks).unwrap(),
        json!({
            "cluster": "production",
            "maxResults": 50,
            "serviceName": "web",
            "desiredStatus": "STOPPED",
            "launchType": "FARGATE"
        })
    );
    assert_eq!(
        serde_json::to_value(&services).unwrap(),
        json!({"schedulingStrategy": "DAEMON"})
    );
    assert_eq!(
        serde_json::to_value(&instances).unwrap(),
        json!({
            "filter": "attribute:ecs.instance-type == t3.micro",
            "status": "REGISTRATION_FAILED"
        })
    );
    assert_eq!(
        serde_json::to_value(&definitions).unwrap(),
        json!({"familyPrefix": "web", "sort": "DESC"})
    );
    assert_eq!(serde_json::to_value(&families).unwrap(), json!({"status": "ALL"}));
}

#[test]
fn test_list_tasks_response_carries_next_token() {
    let response: ListTasksResponse = parse_response::<ListTasksRequest>(
        br#"{"taskArns":["arn:task/1","arn:task/2"],"nextToken":"abc"}"#,
    )
    .unwrap();

    assert_eq!(
        response.task_arns,
        Some(vec!["arn:task/1".to_string(), "arn:task/2".to_string()])
    );
    assert_eq!(response.next_token.as_deref(), Some("abc"));
}

#[test]
fn test_attribute_requests() {
    let attribute = Attribute::new()
        .with_name("stack")
        .with_value("prod")
        .with_target_type(TargetType::ContainerInstance)
        .with_target_id("arn:container-instance/1");
    let put = PutAttributesRequest::new()
        .with_cluster("production")
        .with_attributes([attribute.clone()]);
    let list = ListAttributesRequest::new()
        .with_target_type(TargetType::ContainerInstance)
        .with_attribute_name("stack");

    assert_eq!(
        serde_json::to_value(&put).unwrap(),
        json!({
            "cluster": "production",
            "attributes": [{
                "name": "stack",
                "value": "prod",
                "targetType": "container-instance",
                "targetId": "arn:container-instance/1"
            }]
        })
    );
    assert_eq!(
        serde_json::to_value(&list).unwrap(),
        json!({"targetType": "container-instance", "attributeName": "stack"})
    );

    let delete = DeleteAttributesRequest::new().with_attributes([Attribute::new()
        .with_name("stack")
        .with_target_id("arn:container-instance/1")]);
    assert_eq!(
        serde_json::to_value(&delete).unwrap(),
        json!({"attributes": [{"name": "stack", "targetId": "arn:container-instance/1"}]})
    );

    let response: ListAttributesResponse = parse_response::<ListAttributesRequest>(
        br#"{"attributes":[{"name":"stack","value":"prod","targetType":"container-instance","targetId":"arn:container-instance/1"}]}"#,
    )
    .unwrap();
    assert_eq!(response.attributes, Some(vec![attribute]));
    assert_eq!(response.next_token, None);
}

#[test]
fn test_account_setting_requests() {
    let put = PutAccountSettingRequest::new()
        .with_name(SettingName::ContainerInsights)
        .with_value("enabled")
        .with_principal_arn("arn:aws:iam::123456789012:role/ops");
    let fallback = PutAccountSettingDefaultRequest::new()
        .with_name(SettingName::TaskLongArnFormat)
        .with_value("enabled");
    let list = ListAccountSettingsRequest::new()
        .with_name(SettingName::ServiceLongArnFormat)
        .with_effective_settings(true);

    assert_eq!(
        serde_json::to_value(&put).unwrap(),
        json!({
            "name": "containerInsights",
            "value": "enabled",
            "principalArn": "arn:aws:iam::123456789012:role/ops"
        })
    );
    assert_eq!(
        serde_json::to_value(&fallback).unwrap(),
        json!({"name": "taskLongArnFormat", "value": "enabled"})
    );
    assert_eq!(
        serde_json::to_value(&list).unwrap(),
        json!({"name": "serviceLongArnFormat", "effectiveSettings": true})
    );

    let response: ListAccountSettingsResponse = parse_response::<ListAccountSettingsRequest>(
        br#"{"settings":[{"name":"serviceLongArnFormat","value":"enabled","principalArn":"arn:aws:iam::123456789012:root"}]}"#,
    )
    .unwrap();
    let settings = response.settings.unwrap();
    assert_eq!(settings[0].name, Some(SettingName::ServiceLongArnFormat));
    assert_eq!(settings[0].value.as_deref(), Some("enabled"));

    let unknown = parse_response::<DeleteAccountSettingRequest>(
        br#"{"setting":{"name":"fargateFipsMode"}}"#,
    );
    assert!(unknown.is_err());
}

#[test]
fn test_container_instance_lifecycle_requests() {
    let register = RegisterContainerInstanceRequest::new()
        .with_cluster("production")
        .with_total_resources([Resource::new()
            .with_name("CPU")
            .with_resource_type("INTEGER")
            .with_integer_value(2048)])
        .with_version_info(VersionInfo::new().with_agent_version("1.40.0"))
        .with_platform_devices([PlatformDevice::new()
            .with_id("GPU-0")
            .with_device_type(PlatformDeviceType::Gpu)]);
    let drain = UpdateContainerInstancesStateRequest::new()
        .with_container_instances(["ci-1", "ci-2"])
        .with_status(ContainerInstanceStatus::Draining);
    let deregister = DeregisterContainerInstanceRequest::new()
        .with_container_instance("ci-1")
        .with_force(true);
    let update_agent = UpdateContainerAgentRequest::new()
        .with_cluster("production")
        .with_container_instance("ci-2");

    assert_eq!(
        serde_json::to_value(&register).unwrap(),
        json!({
            "cluster": "production",
            "totalResources": [{"name": "CPU", "type": "INTEGER", "integerValue": 2048}],
            "versionInfo": {"agentVersion": "1.40.0"},
            "platformDevices": [{"id": "GPU-0", "type": "GPU"}]
        })
    );
    assert_eq!(
        serde_json::to_value(&drain).unwrap(),
        json!({"containerInstances": ["ci-1", "ci-2"], "status": "DRAINING"})
    );
    assert_eq!(
        serde_json::to_value(&deregister).unwrap(),
        json!({"containerInstance": "ci-1", "force": true})
    );
    assert_eq!(
        serde_json::to_value(&update_agent).unwrap(),
        json!({"cluster": "production", "containerInstance": "ci-2"})
    );
}
