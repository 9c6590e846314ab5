// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Cluster operations.

use serde::{Deserialize, Serialize};

use crate::model::{
    CapacityProviderStrategyItem, Cluster, ClusterField, ClusterSetting, Failure, Tag,
};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `CreateCluster`: create a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterRequest {
    /// Cluster name; `default` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<ClusterSetting>>,
    /// Capacity providers to associate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_providers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
}

impl CreateClusterRequest {
    /// Create an empty `CreateClusterRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster name.
    pub fn with_cluster_name(mut self, cluster_name: impl Into<String>) -> Self {
        self.cluster_name = Some(cluster_name.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

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

    pub fn with_default_capacity_provider_strategy(
        mut self,
        default_capacity_provider_strategy: impl IntoIterator<Item = CapacityProviderStrategyItem>,
    ) -> Self {
        self.default_capacity_provider_strategy
            .get_or_insert_with(Vec::new)
            .extend(default_capacity_provider_strategy);
        self
    }
}

impl OperationRequest for CreateClusterRequest {
    const OPERATION: &'static str = "CreateCluster";
    type Response = CreateClusterResponse;
}

/// Output of `CreateCluster`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
}

impl CreateClusterResponse {
    /// Create an empty `CreateClusterResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = Some(cluster);
        self
    }
}

/// Input of `DeleteCluster`: delete an empty cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteClusterRequest {
    /// Short name or full ARN of the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
}

impl DeleteClusterRequest {
    /// Create an empty `DeleteClusterRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }
}

impl OperationRequest for DeleteClusterRequest {
    const OPERATION: &'static str = "DeleteCluster";
    type Response = DeleteClusterResponse;
}

/// Output of `DeleteCluster`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteClusterResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
}

impl DeleteClusterResponse {
    /// Create an empty `DeleteClusterResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = Some(cluster);
        self
    }
}

/// Input of `DescribeClusters`: describe one or more clusters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeClustersRequest {
    /// Names or ARNs of the clusters (up to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<String>>,
    /// Optional fields to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<ClusterField>>,
}

impl DescribeClustersRequest {
    /// Create an empty `DescribeClustersRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append clusters, keeping any already present.
    pub fn with_clusters(mut self, clusters: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.clusters
            .get_or_insert_with(Vec::new)
            .extend(clusters.into_iter().map(Into::into));
        self
    }

    /// Append include, keeping any already present.
    pub fn with_include(mut self, include: impl IntoIterator<Item = ClusterField>) -> Self {
        self.include.get_or_insert_with(Vec::new).extend(include);
        self
    }
}

impl OperationRequest for DescribeClustersRequest {
    const OPERATION: &'static str = "DescribeClusters";
    type Response = DescribeClustersResponse;
}

/// Output of `DescribeClusters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeClustersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<Cluster>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

impl DescribeClustersResponse {
    /// Create an empty `DescribeClustersResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clusters(mut self, clusters: impl IntoIterator<Item = Cluster>) -> Self {
        self.clusters.get_or_insert_with(Vec::new).extend(clusters);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }
}

/// Input of `ListClusters`: list cluster ARNs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClustersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size (1 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListClustersRequest {
    /// Create an empty `ListClustersRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Set the max results.
    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl OperationRequest for ListClustersRequest {
    const OPERATION: &'static str = "ListClusters";
    type Response = ListClustersResponse;
}

/// Output of `ListClusters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClustersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListClustersResponse {
    /// Create an empty `ListClustersResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster_arns(
        mut self,
        cluster_arns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.cluster_arns
            .get_or_insert_with(Vec::new)
            .extend(cluster_arns.into_iter().map(Into::into));
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Input of `PutClusterCapacityProviders`: replace the capacity providers associated with a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutClusterCapacityProvidersRequest {
    /// Short name or full ARN of the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Complete set of capacity providers; an empty list removes all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_providers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
}

impl PutClusterCapacityProvidersRequest {
    /// Create an empty `PutClusterCapacityProvidersRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
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

    pub fn with_default_capacity_provider_strategy(
        mut self,
        default_capacity_provider_strategy: impl IntoIterator<Item = CapacityProviderStrategyItem>,
    ) -> Self {
        self.default_capacity_provider_strategy
            .get_or_insert_with(Vec::new)
            .extend(default_capacity_provider_strategy);
        self
    }
}

impl OperationRequest for PutClusterCapacityProvidersRequest {
    const OPERATION: &'static str = "PutClusterCapacityProviders";
    type Response = PutClusterCapacityProvidersResponse;
}

/// Output of `PutClusterCapacityProviders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutClusterCapacityProvidersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
}

impl PutClusterCapacityProvidersResponse {
    /// Create an empty `PutClusterCapacityProvidersResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = Some(cluster);
        self
    }
}

/// Input of `UpdateClusterSettings`: change the settings of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClusterSettingsRequest {
    /// Short name or full ARN of the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<ClusterSetting>>,
}

impl UpdateClusterSettingsRequest {
    /// Create an empty `UpdateClusterSettingsRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    pub fn with_settings(mut self, settings: impl IntoIterator<Item = ClusterSetting>) -> Self {
        self.settings.get_or_insert_with(Vec::new).extend(settings);
        self
    }
}

impl OperationRequest for UpdateClusterSettingsRequest {
    const OPERATION: &'static str = "UpdateClusterSettings";
    type Response = UpdateClusterSettingsResponse;
}

/// Output of `UpdateClusterSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClusterSettingsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
}

impl UpdateClusterSettingsResponse {
    /// Create an empty `UpdateClusterSettingsResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = Some(cluster);
        self
    }
}

record_display!(
    CreateClusterRequest,
    CreateClusterResponse,
    DeleteClusterRequest,
    DeleteClusterResponse,
    DescribeClustersRequest,
    DescribeClustersResponse,
    ListClustersRequest,
    ListClustersResponse,
    PutClusterCapacityProvidersRequest,
    PutClusterCapacityProvidersResponse,
    UpdateClusterSettingsRequest,
    UpdateClusterSettingsResponse,
);
