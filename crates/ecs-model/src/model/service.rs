// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Services and their deployments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::record_display;
use super::enums::{DeploymentControllerType, LaunchType, PropagateTags, SchedulingStrategy};
use super::shared::{
    CapacityProviderStrategyItem, LoadBalancer, NetworkConfiguration, PlacementConstraint,
    PlacementStrategy, ServiceRegistry, Tag,
};
use super::task_set::TaskSet;

/// A service as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Full ARN of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_arn: Option<String>,
    /// Service name, unique within the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// ARN of the cluster hosting the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arn: Option<String>,
    /// Load balancers the service registers tasks with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancer>>,
    /// Service discovery registries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_registries: Option<Vec<ServiceRegistry>>,
    /// ACTIVE, DRAINING or INACTIVE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Number of tasks to keep running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<i32>,
    /// Tasks in the RUNNING state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_count: Option<i32>,
    /// Tasks in the PENDING state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<i32>,
    /// Launch type the service runs on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    /// Capacity provider strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
    /// Fargate platform version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    /// Task definition in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
    /// Rolling update limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_configuration: Option<DeploymentConfiguration>,
    /// Task sets (EXTERNAL and CODE_DEPLOY controllers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_sets: Option<Vec<TaskSet>>,
    /// Current deployments (ECS controller).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployments: Option<Vec<Deployment>>,
    /// IAM role used for load balancer registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Most recent service events (up to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<ServiceEvent>>,
    /// When the service was created.
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<Vec<PlacementConstraint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_strategy: Option<Vec<PlacementStrategy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,
    /// Seconds load balancer health checks are ignored after a task starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduling_strategy: Option<SchedulingStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_controller: Option<DeploymentController>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Principal that created the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Whether managed tags are applied to the service's tasks.
    #[serde(rename = "enableECSManagedTags", skip_serializing_if = "Option::is_none")]
    pub enable_ecs_managed_tags: Option<bool>,
    /// Where task tags are copied from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagate_tags: Option<PropagateTags>,
}

impl Service {
    /// Create an empty `Service`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service ARN.
    pub fn with_service_arn(mut self, service_arn: impl Into<String>) -> Self {
        self.service_arn = Some(service_arn.into());
        self
    }

    /// Set the service name.
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    /// Set the cluster ARN.
    pub fn with_cluster_arn(mut self, cluster_arn: impl Into<String>) -> Self {
        self.cluster_arn = Some(cluster_arn.into());
        self
    }

    /// Append load balancers, keeping any already present.
    pub fn with_load_balancers(
        mut self,
        load_balancers: impl IntoIterator<Item = LoadBalancer>,
    ) -> Self {
        self.load_balancers
            .get_or_insert_with(Vec::new)
            .extend(load_balancers);
        self
    }

    /// Append service registries, keeping any already present.
    pub fn with_service_registries(
        mut self,
        service_registries: impl IntoIterator<Item = ServiceRegistry>,
    ) -> Self {
        self.service_registries
            .get_or_insert_with(Vec::new)
            .extend(service_registries);
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the desired count.
    pub fn with_desired_count(mut self, desired_count: i32) -> Self {
        self.desired_count = Some(desired_count);
        self
    }

    /// Set the running count.
    pub fn with_running_count(mut self, running_count: i32) -> Self {
        self.running_count = Some(running_count);
        self
    }

    /// Set the pending count.
    pub fn with_pending_count(mut self, pending_count: i32) -> Self {
        self.pending_count = Some(pending_count);
        self
    }

    /// Set the launch type.
    pub fn with_launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
        self
    }

    /// Append capacity provider strategy, keeping any already present.
    pub fn with_capacity_provider_strategy(
        mut self,
        capacity_provider_strategy: impl IntoIterator<Item = CapacityProviderStrategyItem>,
    ) -> Self {
        self.capacity_provider_strategy
            .get_or_insert_with(Vec::new)
            .extend(capacity_provider_strategy);
        self
    }

    /// Set the platform version.
    pub fn with_platform_version(mut self, platform_version: impl Into<String>) -> Self {
        self.platform_version = Some(platform_version.into());
        self
    }

    /// Set the task definition.
    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
        self
    }

    /// Set the deployment configuration.
    pub fn with_deployment_configuration(
        mut self,
        deployment_configuration: DeploymentConfiguration,
    ) -> Self {
        self.deployment_configuration = Some(deployment_configuration);
        self
    }

    /// Append task sets, keeping any already present.
    pub fn with_task_sets(mut self, task_sets: impl IntoIterator<Item = TaskSet>) -> Self {
        self.task_sets
            .get_or_insert_with(Vec::new)
            .extend(task_sets);
        self
    }

    /// Append deployments, keeping any already present.
    pub fn with_deployments(mut self, deployments: impl IntoIterator<Item = Deployment>) -> Self {
        self.deployments
            .get_or_insert_with(Vec::new)
            .extend(deployments);
        self
    }

    /// Set the role ARN.
    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    /// Append events, keeping any already present.
    pub fn with_events(mut self, events: impl IntoIterator<Item = ServiceEvent>) -> Self {
        self.events.get_or_insert_with(Vec::new).extend(events);
        self
    }

    /// Set the created at.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_placement_constraints(
        mut self,
        placement_constraints: impl IntoIterator<Item = PlacementConstraint>,
    ) -> Self {
        self.placement_constraints
            .get_or_insert_with(Vec::new)
            .extend(placement_constraints);
        self
    }

    pub fn with_placement_strategy(
        mut self,
        placement_strategy: impl IntoIterator<Item = PlacementStrategy>,
    ) -> Self {
        self.placement_strategy
            .get_or_insert_with(Vec::new)
            .extend(placement_strategy);
        self
    }

    pub fn with_network_configuration(
        mut self,
        network_configuration: NetworkConfiguration,
    ) -> Self {
        self.network_configuration = Some(network_configuration);
        self
    }

    /// Set the health check grace period seconds.
    pub fn with_health_check_grace_period_seconds(
        mut self,
        health_check_grace_period_seconds: i32,
    ) -> Self {
        self.health_check_grace_period_seconds = Some(health_check_grace_period_seconds);
        self
    }

    pub fn with_scheduling_strategy(mut self, scheduling_strategy: SchedulingStrategy) -> Self {
        self.scheduling_strategy = Some(scheduling_strategy);
        self
    }

    pub fn with_deployment_controller(
        mut self,
        deployment_controller: DeploymentController,
    ) -> Self {
        self.deployment_controller = Some(deployment_controller);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    /// Set the created by.
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    /// Set the enable ECS managed tags.
    pub fn with_enable_ecs_managed_tags(mut self, enable_ecs_managed_tags: bool) -> Self {
        self.enable_ecs_managed_tags = Some(enable_ecs_managed_tags);
        self
    }

    /// Set the propagate tags.
    pub fn with_propagate_tags(mut self, propagate_tags: PropagateTags) -> Self {
        self.propagate_tags = Some(propagate_tags);
        self
    }
}

/// One deployment of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Deployment ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// PRIMARY, ACTIVE or INACTIVE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Task definition deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_count: Option<i32>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,
}

impl Deployment {
    /// Create an empty `Deployment`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the task definition.
    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
        self
    }

    pub fn with_desired_count(mut self, desired_count: i32) -> Self {
        self.desired_count = Some(desired_count);
        self
    }

    pub fn with_pending_count(mut self, pending_count: i32) -> Self {
        self.pending_count = Some(pending_count);
        self
    }

    pub fn with_running_count(mut self, running_count: i32) -> Self {
        self.running_count = Some(running_count);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn with_capacity_provider_strategy(
        mut self,
        capacity_provider_strategy: impl IntoIterator<Item = CapacityProviderStrategyItem>,
    ) -> Self {
        self.capacity_provider_strategy
            .get_or_insert_with(Vec::new)
            .extend(capacity_provider_strategy);
        self
    }

    pub fn with_launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
        self
    }

    pub fn with_platform_version(mut self, platform_version: impl Into<String>) -> Self {
        self.platform_version = Some(platform_version.into());
        self
    }

    pub fn with_network_configuration(
        mut self,
        network_configuration: NetworkConfiguration,
    ) -> Self {
        self.network_configuration = Some(network_configuration);
        self
    }
}

/// Limits applied while a service rolls out a new deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfiguration {
    /// Upper limit of running tasks, as a percentage of the desired count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_percent: Option<i32>,
    /// Lower limit of healthy tasks, as a percentage of the desired count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_healthy_percent: Option<i32>,
}

impl DeploymentConfiguration {
    /// Create an empty `DeploymentConfiguration`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum percent.
    pub fn with_maximum_percent(mut self, maximum_percent: i32) -> Self {
        self.maximum_percent = Some(maximum_percent);
        self
    }

    /// Set the minimum healthy percent.
    pub fn with_minimum_healthy_percent(mut self, minimum_healthy_percent: i32) -> Self {
        self.minimum_healthy_percent = Some(minimum_healthy_percent);
        self
    }
}

/// Deployment controller of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentController {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub controller_type: Option<DeploymentControllerType>,
}

impl DeploymentController {
    /// Create an empty `DeploymentController`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_controller_type(mut self, controller_type: DeploymentControllerType) -> Self {
        self.controller_type = Some(controller_type);
        self
    }
}

/// An event recorded for a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ServiceEvent {
    /// Create an empty `ServiceEvent`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

record_display!(Service, Deployment, DeploymentConfiguration, DeploymentController, ServiceEvent);
