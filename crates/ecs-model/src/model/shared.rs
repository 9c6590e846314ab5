// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Small records shared across clusters, services and tasks.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::wire::record_display;
use super::enums::{
    AssignPublicIp, ClusterSettingName, PlacementConstraintType, PlacementStrategyType, ScaleUnit,
    SettingName, TargetType,
};

/// Metadata label applied to a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag key (up to 128 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Tag value (up to 256 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Create an empty `Tag`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A name/value pair, used for environment variables and statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    /// Name of the pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value of the pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl KeyValuePair {
    /// Create an empty `KeyValuePair`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// An attribute attached to a target resource, used by placement constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Attribute value; omitted for presence-only attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Type of the target the attribute is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    /// ID of the target (ARN or short ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

impl Attribute {
    /// Create an empty `Attribute`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the target type.
    pub fn with_target_type(mut self, target_type: TargetType) -> Self {
        self.target_type = Some(target_type);
        self
    }

    /// Set the target ID.
    pub fn with_target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }
}

/// An elastic network interface or other resource attached to a task or instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique identifier of the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Attachment type, e.g. `ElasticNetworkInterface`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<String>,
    /// Attachment status (PRECREATED, CREATED, ATTACHING, ATTACHED, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Details such as subnet ID or private IPv4 address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<KeyValuePair>>,
}

impl Attachment {
    /// Create an empty `Attachment`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the attachment type.
    pub fn with_attachment_type(mut self, attachment_type: impl Into<String>) -> Self {
        self.attachment_type = Some(attachment_type.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Append details, keeping any already present.
    pub fn with_details(mut self, details: impl IntoIterator<Item = KeyValuePair>) -> Self {
        self.details.get_or_insert_with(Vec::new).extend(details);
        self
    }
}

/// A per-resource failure returned alongside partial results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    /// ARN of the failed resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Reason for the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Additional detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Failure {
    /// Create an empty `Failure`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ARN.
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    /// Set the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set the detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// VPC subnets and security groups for tasks using the `awsvpc` network mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsVpcConfiguration {
    /// Subnet IDs (at most 16).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<String>>,
    /// Security group IDs (at most 5).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    /// Whether the task's interface receives a public IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assign_public_ip: Option<AssignPublicIp>,
}

impl AwsVpcConfiguration {
    /// Create an empty `AwsVpcConfiguration`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append subnets, keeping any already present.
    pub fn with_subnets(mut self, subnets: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.subnets
            .get_or_insert_with(Vec::new)
            .extend(subnets.into_iter().map(Into::into));
        self
    }

    /// Append security groups, keeping any already present.
    pub fn with_security_groups(
        mut self,
        security_groups: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .extend(security_groups.into_iter().map(Into::into));
        self
    }

    /// Set the assign public IP.
    pub fn with_assign_public_ip(mut self, assign_public_ip: AssignPublicIp) -> Self {
        self.assign_public_ip = Some(assign_public_ip);
        self
    }
}

/// Network configuration of a task or service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfiguration {
    /// VPC settings for the `awsvpc` network mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awsvpc_configuration: Option<AwsVpcConfiguration>,
}

impl NetworkConfiguration {
    /// Create an empty `NetworkConfiguration`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the awsvpc configuration.
    pub fn with_awsvpc_configuration(mut self, awsvpc_configuration: AwsVpcConfiguration) -> Self {
        self.awsvpc_configuration = Some(awsvpc_configuration);
        self
    }
}

/// One capacity provider entry of a capacity provider strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityProviderStrategyItem {
    /// Short name of the capacity provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider: Option<String>,
    /// Relative share of tasks placed on this provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    /// Minimum number of tasks placed on this provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<i32>,
}

impl CapacityProviderStrategyItem {
    /// Create an empty `CapacityProviderStrategyItem`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity provider.
    pub fn with_capacity_provider(mut self, capacity_provider: impl Into<String>) -> Self {
        self.capacity_provider = Some(capacity_provider.into());
        self
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the base.
    pub fn with_base(mut self, base: i32) -> Self {
        self.base = Some(base);
        self
    }
}

/// A rule restricting where tasks may be placed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConstraint {
    /// Kind of constraint.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub constraint_type: Option<PlacementConstraintType>,
    /// Cluster query language expression (for `memberOf`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl PlacementConstraint {
    /// Create an empty `PlacementConstraint`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the constraint type.
    pub fn with_constraint_type(mut self, constraint_type: PlacementConstraintType) -> Self {
        self.constraint_type = Some(constraint_type);
        self
    }

    /// Set the expression.
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }
}

/// A rule ordering candidate instances during task placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementStrategy {
    /// Kind of strategy.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<PlacementStrategyType>,
    /// Field the strategy applies to, e.g. `memory` or `attribute:ecs.availability-zone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl PlacementStrategy {
    /// Create an empty `PlacementStrategy`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy type.
    pub fn with_strategy_type(mut self, strategy_type: PlacementStrategyType) -> Self {
        self.strategy_type = Some(strategy_type);
        self
    }

    /// Set the field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Load balancer target registered for a service or task set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancer {
    /// Target group ARN (Application and Network Load Balancers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// Name of a Classic Load Balancer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
    /// Container to register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// Container port to register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_port: Option<i32>,
}

impl LoadBalancer {
    /// Create an empty `LoadBalancer`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target group ARN.
    pub fn with_target_group_arn(mut self, target_group_arn: impl Into<String>) -> Self {
        self.target_group_arn = Some(target_group_arn.into());
        self
    }

    /// Set the load balancer name.
    pub fn with_load_balancer_name(mut self, load_balancer_name: impl Into<String>) -> Self {
        self.load_balancer_name = Some(load_balancer_name.into());
        self
    }

    /// Set the container name.
    pub fn with_container_name(mut self, container_name: impl Into<String>) -> Self {
        self.container_name = Some(container_name.into());
        self
    }

    /// Set the container port.
    pub fn with_container_port(mut self, container_port: i32) -> Self {
        self.container_port = Some(container_port);
        self
    }
}

/// Service discovery registry of a service or task set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRegistry {
    /// ARN of the service registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_arn: Option<String>,
    /// Port for SRV records when using `awsvpc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Container name for SRV records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// Container port for SRV records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_port: Option<i32>,
}

impl ServiceRegistry {
    /// Create an empty `ServiceRegistry`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry ARN.
    pub fn with_registry_arn(mut self, registry_arn: impl Into<String>) -> Self {
        self.registry_arn = Some(registry_arn.into());
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the container name.
    pub fn with_container_name(mut self, container_name: impl Into<String>) -> Self {
        self.container_name = Some(container_name.into());
        self
    }

    /// Set the container port.
    pub fn with_container_port(mut self, container_port: i32) -> Self {
        self.container_port = Some(container_port);
        self
    }
}

/// Portion of a service's desired count a task set should run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    /// Scale value (0 to 100).
    #[serde(default, with = "crate::wire::double", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Unit of the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<ScaleUnit>,
}

impl Scale {
    /// Create an empty `Scale`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: ScaleUnit) -> Self {
        self.unit = Some(unit);
        self
    }
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.value.map(f64::to_bits) == other.value.map(f64::to_bits)
            && self.unit == other.unit
    }
}

impl Eq for Scale {}

impl Hash for Scale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.map(f64::to_bits).hash(state);
        self.unit.hash(state);
    }
}

/// A resource registered with or remaining on a container instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Resource name: CPU, MEMORY, PORTS, PORTS_UDP or a custom name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value type: INTEGER, DOUBLE, LONG or STRINGSET.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Value for DOUBLE resources.
    #[serde(default, with = "crate::wire::double", skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
    /// Value for LONG resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_value: Option<i64>,
    /// Value for INTEGER resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<i32>,
    /// Value for STRINGSET resources such as port lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_set_value: Option<Vec<String>>,
}

impl Resource {
    /// Create an empty `Resource`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the resource type.
    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    /// Set the double value.
    pub fn with_double_value(mut self, double_value: f64) -> Self {
        self.double_value = Some(double_value);
        self
    }

    /// Set the long value.
    pub fn with_long_value(mut self, long_value: i64) -> Self {
        self.long_value = Some(long_value);
        self
    }

    /// Set the integer value.
    pub fn with_integer_value(mut self, integer_value: i32) -> Self {
        self.integer_value = Some(integer_value);
        self
    }

    /// Append string set value, keeping any already present.
    pub fn with_string_set_value(
        mut self,
        string_set_value: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.string_set_value
            .get_or_insert_with(Vec::new)
            .extend(string_set_value.into_iter().map(Into::into));
        self
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.resource_type == other.resource_type
            && self.double_value.map(f64::to_bits) == other.double_value.map(f64::to_bits)
            && self.long_value == other.long_value
            && self.integer_value == other.integer_value
            && self.string_set_value == other.string_set_value
    }
}

impl Eq for Resource {}

impl Hash for Resource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.resource_type.hash(state);
        self.double_value.map(f64::to_bits).hash(state);
        self.long_value.hash(state);
        self.integer_value.hash(state);
        self.string_set_value.hash(state);
    }
}

/// Versions of the agent and Docker running on a container instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_version: Option<String>,
}

impl VersionInfo {
    /// Create an empty `VersionInfo`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agent_version(mut self, agent_version: impl Into<String>) -> Self {
        self.agent_version = Some(agent_version.into());
        self
    }

    pub fn with_agent_hash(mut self, agent_hash: impl Into<String>) -> Self {
        self.agent_hash = Some(agent_hash.into());
        self
    }

    pub fn with_docker_version(mut self, docker_version: impl Into<String>) -> Self {
        self.docker_version = Some(docker_version.into());
        self
    }
}

/// An account setting, for the caller or for one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    /// Name of the setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<SettingName>,
    /// Value of the setting, `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// IAM user, role or root user the setting applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_arn: Option<String>,
}

impl Setting {
    /// Create an empty `Setting`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: SettingName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the principal ARN.
    pub fn with_principal_arn(mut self, principal_arn: impl Into<String>) -> Self {
        self.principal_arn = Some(principal_arn.into());
        self
    }
}

/// A setting applied to a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSetting {
    /// Setting name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ClusterSettingName>,
    /// Setting value, `enabled` or `disabled` for Container Insights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ClusterSetting {
    /// Create an empty `ClusterSetting`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: ClusterSettingName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// An Elastic Inference accelerator available to a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceAccelerator {
    /// Accelerator name referenced by container definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// Accelerator type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

impl InferenceAccelerator {
    /// Create an empty `InferenceAccelerator`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the device name.
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    /// Set the device type.
    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }
}

/// Override of an Elastic Inference accelerator for one task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceAcceleratorOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

impl InferenceAcceleratorOverride {
    /// Create an empty `InferenceAcceleratorOverride`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }
}

record_display!(
    Tag,
    KeyValuePair,
    Attribute,
    Attachment,
    Failure,
    AwsVpcConfiguration,
    NetworkConfiguration,
    CapacityProviderStrategyItem,
    PlacementConstraint,
    PlacementStrategy,
    LoadBalancer,
    ServiceRegistry,
    Scale,
    Resource,
    VersionInfo,
    Setting,
    ClusterSetting,
    InferenceAccelerator,
    InferenceAcceleratorOverride,
);
