// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Task sets of services using the EXTERNAL or CODE_DEPLOY controller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::record_display;
use super::enums::{LaunchType, StabilityStatus};
use super::shared::{
    CapacityProviderStrategyItem, LoadBalancer, NetworkConfiguration, Scale, ServiceRegistry, Tag,
};

/// A set of tasks of a service running the same task definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSet {
    /// Task set ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Full ARN of the task set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_set_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arn: Option<String>,
    /// `CODE_DEPLOY` or the ID supplied by an external controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    /// ID assigned by an external controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// PRIMARY, ACTIVE or DRAINING.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
    /// Desired count derived from the service and the scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_desired_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_count: Option<i32>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_registries: Option<Vec<ServiceRegistry>>,
    /// Share of the service's desired count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability_status: Option<StabilityStatus>,
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub stability_status_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl TaskSet {
    /// Create an empty `TaskSet`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the task set ARN.
    pub fn with_task_set_arn(mut self, task_set_arn: impl Into<String>) -> Self {
        self.task_set_arn = Some(task_set_arn.into());
        self
    }

    pub fn with_service_arn(mut self, service_arn: impl Into<String>) -> Self {
        self.service_arn = Some(service_arn.into());
        self
    }

    pub fn with_cluster_arn(mut self, cluster_arn: impl Into<String>) -> Self {
        self.cluster_arn = Some(cluster_arn.into());
        self
    }

    /// Set the started by.
    pub fn with_started_by(mut self, started_by: impl Into<String>) -> Self {
        self.started_by = Some(started_by.into());
        self
    }

    /// Set the external ID.
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
        self
    }

    /// Set the computed desired count.
    pub fn with_computed_desired_count(mut self, computed_desired_count: i32) -> Self {
        self.computed_desired_count = Some(computed_desired_count);
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

    pub fn with_launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
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

    pub fn with_load_balancers(
        mut self,
        load_balancers: impl IntoIterator<Item = LoadBalancer>,
    ) -> Self {
        self.load_balancers
            .get_or_insert_with(Vec::new)
            .extend(load_balancers);
        self
    }

    pub fn with_service_registries(
        mut self,
        service_registries: impl IntoIterator<Item = ServiceRegistry>,
    ) -> Self {
        self.service_registries
            .get_or_insert_with(Vec::new)
            .extend(service_registries);
        self
    }

    /// Set the scale.
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_stability_status(mut self, stability_status: StabilityStatus) -> Self {
        self.stability_status = Some(stability_status);
        self
    }

    pub fn with_stability_status_at(mut self, stability_status_at: DateTime<Utc>) -> Self {
        self.stability_status_at = Some(stability_status_at);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

record_display!(TaskSet);
