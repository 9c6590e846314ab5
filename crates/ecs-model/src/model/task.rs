// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tasks, their containers and per-task overrides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::record_display;
use super::enums::{Connectivity, HealthStatus, LaunchType, TaskStopCode, TransportProtocol};
use super::shared::{
    Attachment, Attribute, InferenceAccelerator, InferenceAcceleratorOverride, KeyValuePair, Tag,
};
use super::task_definition::{EnvironmentFile, ResourceRequirement};

/// A task as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Elastic network interfaces attached to the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_name: Option<String>,
    /// ARN of the cluster running the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<Connectivity>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub connectivity_at: Option<DateTime<Utc>>,
    /// Container instance hosting the task (EC2 launch type).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance_arn: Option<String>,
    /// Containers of the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<Container>>,
    /// Task-level CPU units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    /// When the task was created (entered PENDING).
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Desired status: RUNNING, PENDING or STOPPED.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<String>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub execution_stopped_at: Option<DateTime<Utc>>,
    /// Task group, e.g. `service:my-service`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Aggregated health of essential containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_accelerators: Option<Vec<InferenceAccelerator>>,
    /// Last status reported by the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    /// Task-level memory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    /// Overrides applied when the task was started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<TaskOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub pull_started_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub pull_stopped_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Tag identifying who started the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_code: Option<TaskStopCode>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub stopped_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_reason: Option<String>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub stopping_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Full ARN of the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
    /// Task definition the task was started from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_arn: Option<String>,
    /// Version counter, incremented on every change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl Task {
    /// Create an empty `Task`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append attachments, keeping any already present.
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .extend(attachments);
        self
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .extend(attributes);
        self
    }

    pub fn with_availability_zone(mut self, availability_zone: impl Into<String>) -> Self {
        self.availability_zone = Some(availability_zone.into());
        self
    }

    pub fn with_capacity_provider_name(
        mut self,
        capacity_provider_name: impl Into<String>,
    ) -> Self {
        self.capacity_provider_name = Some(capacity_provider_name.into());
        self
    }

    /// Set the cluster ARN.
    pub fn with_cluster_arn(mut self, cluster_arn: impl Into<String>) -> Self {
        self.cluster_arn = Some(cluster_arn.into());
        self
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    pub fn with_connectivity_at(mut self, connectivity_at: DateTime<Utc>) -> Self {
        self.connectivity_at = Some(connectivity_at);
        self
    }

    /// Set the container instance ARN.
    pub fn with_container_instance_arn(
        mut self,
        container_instance_arn: impl Into<String>,
    ) -> Self {
        self.container_instance_arn = Some(container_instance_arn.into());
        self
    }

    /// Append containers, keeping any already present.
    pub fn with_containers(mut self, containers: impl IntoIterator<Item = Container>) -> Self {
        self.containers
            .get_or_insert_with(Vec::new)
            .extend(containers);
        self
    }

    /// Set the CPU.
    pub fn with_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    /// Set the created at.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the desired status.
    pub fn with_desired_status(mut self, desired_status: impl Into<String>) -> Self {
        self.desired_status = Some(desired_status.into());
        self
    }

    pub fn with_execution_stopped_at(mut self, execution_stopped_at: DateTime<Utc>) -> Self {
        self.execution_stopped_at = Some(execution_stopped_at);
        self
    }

    /// Set the group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the health status.
    pub fn with_health_status(mut self, health_status: HealthStatus) -> Self {
        self.health_status = Some(health_status);
        self
    }

    pub fn with_inference_accelerators(
        mut self,
        inference_accelerators: impl IntoIterator<Item = InferenceAccelerator>,
    ) -> Self {
        self.inference_accelerators
            .get_or_insert_with(Vec::new)
            .extend(inference_accelerators);
        self
    }

    /// Set the last status.
    pub fn with_last_status(mut self, last_status: impl Into<String>) -> Self {
        self.last_status = Some(last_status.into());
        self
    }

    pub fn with_launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
        self
    }

    /// Set the memory.
    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    /// Set the overrides.
    pub fn with_overrides(mut self, overrides: TaskOverride) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_platform_version(mut self, platform_version: impl Into<String>) -> Self {
        self.platform_version = Some(platform_version.into());
        self
    }

    pub fn with_pull_started_at(mut self, pull_started_at: DateTime<Utc>) -> Self {
        self.pull_started_at = Some(pull_started_at);
        self
    }

    pub fn with_pull_stopped_at(mut self, pull_stopped_at: DateTime<Utc>) -> Self {
        self.pull_stopped_at = Some(pull_stopped_at);
        self
    }

    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Set the started by.
    pub fn with_started_by(mut self, started_by: impl Into<String>) -> Self {
        self.started_by = Some(started_by.into());
        self
    }

    pub fn with_stop_code(mut self, stop_code: TaskStopCode) -> Self {
        self.stop_code = Some(stop_code);
        self
    }

    pub fn with_stopped_at(mut self, stopped_at: DateTime<Utc>) -> Self {
        self.stopped_at = Some(stopped_at);
        self
    }

    pub fn with_stopped_reason(mut self, stopped_reason: impl Into<String>) -> Self {
        self.stopped_reason = Some(stopped_reason.into());
        self
    }

    pub fn with_stopping_at(mut self, stopping_at: DateTime<Utc>) -> Self {
        self.stopping_at = Some(stopping_at);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    /// Set the task ARN.
    pub fn with_task_arn(mut self, task_arn: impl Into<String>) -> Self {
        self.task_arn = Some(task_arn.into());
        self
    }

    /// Set the task definition ARN.
    pub fn with_task_definition_arn(mut self, task_definition_arn: impl Into<String>) -> Self {
        self.task_definition_arn = Some(task_definition_arn.into());
        self
    }

    /// Set the version.
    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }
}

/// Status snapshot of one container within a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_digest: Option<String>,
    /// Docker container ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// Why the container is in its current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_bindings: Option<Vec<NetworkBinding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterface>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_reservation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_ids: Option<Vec<String>>,
}

impl Container {
    /// Create an empty `Container`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_arn(mut self, container_arn: impl Into<String>) -> Self {
        self.container_arn = Some(container_arn.into());
        self
    }

    pub fn with_task_arn(mut self, task_arn: impl Into<String>) -> Self {
        self.task_arn = Some(task_arn.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_image_digest(mut self, image_digest: impl Into<String>) -> Self {
        self.image_digest = Some(image_digest.into());
        self
    }

    /// Set the runtime ID.
    pub fn with_runtime_id(mut self, runtime_id: impl Into<String>) -> Self {
        self.runtime_id = Some(runtime_id.into());
        self
    }

    pub fn with_last_status(mut self, last_status: impl Into<String>) -> Self {
        self.last_status = Some(last_status.into());
        self
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = Some(exit_code);
        self
    }

    /// Set the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_network_bindings(
        mut self,
        network_bindings: impl IntoIterator<Item = NetworkBinding>,
    ) -> Self {
        self.network_bindings
            .get_or_insert_with(Vec::new)
            .extend(network_bindings);
        self
    }

    pub fn with_network_interfaces(
        mut self,
        network_interfaces: impl IntoIterator<Item = NetworkInterface>,
    ) -> Self {
        self.network_interfaces
            .get_or_insert_with(Vec::new)
            .extend(network_interfaces);
        self
    }

    pub fn with_health_status(mut self, health_status: HealthStatus) -> Self {
        self.health_status = Some(health_status);
        self
    }

    pub fn with_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    pub fn with_memory_reservation(mut self, memory_reservation: impl Into<String>) -> Self {
        self.memory_reservation = Some(memory_reservation.into());
        self
    }

    pub fn with_gpu_ids(mut self, gpu_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.gpu_ids
            .get_or_insert_with(Vec::new)
            .extend(gpu_ids.into_iter().map(Into::into));
        self
    }
}

/// A port binding between a container and its host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkBinding {
    #[serde(rename = "bindIP", skip_serializing_if = "Option::is_none")]
    pub bind_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<TransportProtocol>,
}

impl NetworkBinding {
    /// Create an empty `NetworkBinding`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind_ip(mut self, bind_ip: impl Into<String>) -> Self {
        self.bind_ip = Some(bind_ip.into());
        self
    }

    pub fn with_container_port(mut self, container_port: i32) -> Self {
        self.container_port = Some(container_port);
        self
    }

    pub fn with_host_port(mut self, host_port: i32) -> Self {
        self.host_port = Some(host_port);
        self
    }

    pub fn with_protocol(mut self, protocol: TransportProtocol) -> Self {
        self.protocol = Some(protocol);
        self
    }
}

/// An elastic network interface of a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ipv4_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
}

impl NetworkInterface {
    /// Create an empty `NetworkInterface`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attachment_id(mut self, attachment_id: impl Into<String>) -> Self {
        self.attachment_id = Some(attachment_id.into());
        self
    }

    pub fn with_private_ipv4_address(mut self, private_ipv4_address: impl Into<String>) -> Self {
        self.private_ipv4_address = Some(private_ipv4_address.into());
        self
    }

    pub fn with_ipv6_address(mut self, ipv6_address: impl Into<String>) -> Self {
        self.ipv6_address = Some(ipv6_address.into());
        self
    }
}

/// Overrides applied to a task at start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOverride {
    /// Per-container overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_overrides: Option<Vec<ContainerOverride>>,
    /// Task-level CPU override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_accelerator_overrides: Option<Vec<InferenceAcceleratorOverride>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    /// Task-level memory override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_role_arn: Option<String>,
}

impl TaskOverride {
    /// Create an empty `TaskOverride`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append container overrides, keeping any already present.
    pub fn with_container_overrides(
        mut self,
        container_overrides: impl IntoIterator<Item = ContainerOverride>,
    ) -> Self {
        self.container_overrides
            .get_or_insert_with(Vec::new)
            .extend(container_overrides);
        self
    }

    /// Set the CPU.
    pub fn with_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn with_inference_accelerator_overrides(
        mut self,
        inference_accelerator_overrides: impl IntoIterator<Item = InferenceAcceleratorOverride>,
    ) -> Self {
        self.inference_accelerator_overrides
            .get_or_insert_with(Vec::new)
            .extend(inference_accelerator_overrides);
        self
    }

    pub fn with_execution_role_arn(mut self, execution_role_arn: impl Into<String>) -> Self {
        self.execution_role_arn = Some(execution_role_arn.into());
        self
    }

    /// Set the memory.
    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    pub fn with_task_role_arn(mut self, task_role_arn: impl Into<String>) -> Self {
        self.task_role_arn = Some(task_role_arn.into());
        self
    }
}

/// Overrides applied to one container at task start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOverride {
    /// Name of the container to override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Vec<KeyValuePair>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_files: Option<Vec<EnvironmentFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_reservation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_requirements: Option<Vec<ResourceRequirement>>,
}

impl ContainerOverride {
    /// Create an empty `ContainerOverride`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_command(mut self, command: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.command
            .get_or_insert_with(Vec::new)
            .extend(command.into_iter().map(Into::into));
        self
    }

    pub fn with_environment(mut self, environment: impl IntoIterator<Item = KeyValuePair>) -> Self {
        self.environment
            .get_or_insert_with(Vec::new)
            .extend(environment);
        self
    }

    pub fn with_environment_files(
        mut self,
        environment_files: impl IntoIterator<Item = EnvironmentFile>,
    ) -> Self {
        self.environment_files
            .get_or_insert_with(Vec::new)
            .extend(environment_files);
        self
    }

    pub fn with_cpu(mut self, cpu: i32) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn with_memory(mut self, memory: i32) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_memory_reservation(mut self, memory_reservation: i32) -> Self {
        self.memory_reservation = Some(memory_reservation);
        self
    }

    pub fn with_resource_requirements(
        mut self,
        resource_requirements: impl IntoIterator<Item = ResourceRequirement>,
    ) -> Self {
        self.resource_requirements
            .get_or_insert_with(Vec::new)
            .extend(resource_requirements);
        self
    }
}

record_display!(Task, Container, NetworkBinding, NetworkInterface, TaskOverride, ContainerOverride);
