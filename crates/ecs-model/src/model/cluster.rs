// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Clusters.

use serde::{Deserialize, Serialize};

use crate::wire::record_display;
use super::shared::{Attachment, CapacityProviderStrategyItem, ClusterSetting, KeyValuePair, Tag};

/// A cluster as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Full ARN of the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arn: Option<String>,
    /// User-generated name of the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    /// ACTIVE, PROVISIONING, DEPROVISIONING, FAILED or INACTIVE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Container instances registered in the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_container_instances_count: Option<i32>,
    /// Tasks in the RUNNING state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_tasks_count: Option<i32>,
    /// Tasks in the PENDING state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_tasks_count: Option<i32>,
    /// Services in the ACTIVE state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_services_count: Option<i32>,
    /// Additional statistics, included on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Vec<KeyValuePair>>,
    /// Tags applied to the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Cluster settings, included on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<ClusterSetting>>,
    /// Capacity providers associated with the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_providers: Option<Vec<String>>,
    /// Default strategy for new tasks and services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
    /// Resources attached to the cluster, such as Auto Scaling plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Status of the capacity providers associated with the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments_status: Option<String>,
}

impl Cluster {
    /// Create an empty `Cluster`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster ARN.
    pub fn with_cluster_arn(mut self, cluster_arn: impl Into<String>) -> Self {
        self.cluster_arn = Some(cluster_arn.into());
        self
    }

    /// Set the cluster name.
    pub fn with_cluster_name(mut self, cluster_name: impl Into<String>) -> Self {
        self.cluster_name = Some(cluster_name.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the registered container instances count.
    pub fn with_registered_container_instances_count(
        mut self,
        registered_container_instances_count: i32,
    ) -> Self {
        self.registered_container_instances_count = Some(registered_container_instances_count);
        self
    }

    /// Set the running tasks count.
    pub fn with_running_tasks_count(mut self, running_tasks_count: i32) -> Self {
        self.running_tasks_count = Some(running_tasks_count);
        self
    }

    /// Set the pending tasks count.
    pub fn with_pending_tasks_count(mut self, pending_tasks_count: i32) -> Self {
        self.pending_tasks_count = Some(pending_tasks_count);
        self
    }

    /// Set the active services count.
    pub fn with_active_services_count(mut self, active_services_count: i32) -> Self {
        self.active_services_count = Some(active_services_count);
        self
    }

    /// Append statistics, keeping any already present.
    pub fn with_statistics(mut self, statistics: impl IntoIterator<Item = KeyValuePair>) -> Self {
        self.statistics
            .get_or_insert_with(Vec::new)
            .extend(statistics);
        self
    }

    /// Append tags, keeping any already present.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    /// Append settings, keeping any already present.
    pub fn with_settings(mut self, settings: impl IntoIterator<Item = ClusterSetting>) -> Self {
        self.settings.get_or_insert_with(Vec::new).extend(settings);
        self
    }

    /// Append capacity providers, keeping any already present.
    pub fn with_capacity_providers(
        mut self,
        capacity_providers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.capacity_providers
            .get_or_insert_with(Vec::new)
            .extend(capacity_providers.into_iter().map(Into::into));
        self
    }

    /// Append default capacity provider strategy, keeping any already present.
    pub fn with_default_capacity_provider_strategy(
        mut self,
        default_capacity_provider_strategy: impl IntoIterator<Item = CapacityProviderStrategyItem>,
    ) -> Self {
        self.default_capacity_provider_strategy
            .get_or_insert_with(Vec::new)
            .extend(default_capacity_provider_strategy);
        self
    }

    /// Append attachments, keeping any already present.
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .extend(attachments);
        self
    }

    /// Set the attachments status.
    pub fn with_attachments_status(mut self, attachments_status: impl Into<String>) -> Self {
        self.attachments_status = Some(attachments_status.into());
        self
    }
}

record_display!(Cluster);
