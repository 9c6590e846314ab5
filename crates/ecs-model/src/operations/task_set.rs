// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Task set operations.

use serde::{Deserialize, Serialize};

use crate::model::{
    CapacityProviderStrategyItem, Failure, LaunchType, LoadBalancer, NetworkConfiguration, Scale,
    ServiceRegistry, Tag, TaskSet, TaskSetField,
};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `CreateTaskSet`: create a task set in a service using the EXTERNAL deployment controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskSetRequest {
    /// Name or ARN of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Short name or full ARN of the cluster hosting the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_registries: Option<Vec<ServiceRegistry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    /// Idempotency token (up to 32 ASCII characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateTaskSetRequest {
    /// Create an empty `CreateTaskSetRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
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

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the client token.
    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

impl OperationRequest for CreateTaskSetRequest {
    const OPERATION: &'static str = "CreateTaskSet";
    type Response = CreateTaskSetResponse;
}

/// Output of `CreateTaskSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskSetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_set: Option<TaskSet>,
}

impl CreateTaskSetResponse {
    /// Create an empty `CreateTaskSetResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_set(mut self, task_set: TaskSet) -> Self {
        self.task_set = Some(task_set);
        self
    }
}

/// Input of `DescribeTaskSets`: describe task sets of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTaskSetsRequest {
    /// Short name or full ARN of the cluster hosting the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Name or ARN of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// IDs or ARNs of the task sets; all task sets when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_sets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<TaskSetField>>,
}

impl DescribeTaskSetsRequest {
    /// Create an empty `DescribeTaskSetsRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Append task sets, keeping any already present.
    pub fn with_task_sets(
        mut self,
        task_sets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.task_sets
            .get_or_insert_with(Vec::new)
            .extend(task_sets.into_iter().map(Into::into));
        self
    }

    pub fn with_include(mut self, include: impl IntoIterator<Item = TaskSetField>) -> Self {
        self.include.get_or_insert_with(Vec::new).extend(include);
        self
    }
}

impl OperationRequest for DescribeTaskSetsRequest {
    const OPERATION: &'static str = "DescribeTaskSets";
    type Response = DescribeTaskSetsResponse;
}

/// Output of `DescribeTaskSets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTaskSetsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_sets: Option<Vec<TaskSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

impl DescribeTaskSetsResponse {
    /// Create an empty `DescribeTaskSetsResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_sets(mut self, task_sets: impl IntoIterator<Item = TaskSet>) -> Self {
        self.task_sets
            .get_or_insert_with(Vec::new)
            .extend(task_sets);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }
}

/// Input of `UpdateTaskSet`: change the scale of a task set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskSetRequest {
    /// Short name or full ARN of the cluster hosting the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Name or ARN of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// ID or ARN of the task set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

impl UpdateTaskSetRequest {
    /// Create an empty `UpdateTaskSetRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the task set.
    pub fn with_task_set(mut self, task_set: impl Into<String>) -> Self {
        self.task_set = Some(task_set.into());
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }
}

impl OperationRequest for UpdateTaskSetRequest {
    const OPERATION: &'static str = "UpdateTaskSet";
    type Response = UpdateTaskSetResponse;
}

/// Output of `UpdateTaskSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskSetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_set: Option<TaskSet>,
}

impl UpdateTaskSetResponse {
    /// Create an empty `UpdateTaskSetResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_set(mut self, task_set: TaskSet) -> Self {
        self.task_set = Some(task_set);
        self
    }
}

/// Input of `DeleteTaskSet`: delete a task set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskSetRequest {
    /// Short name or full ARN of the cluster hosting the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Name or ARN of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// ID or ARN of the task set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_set: Option<String>,
    /// Delete even if the task set has not been scaled down to zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

impl DeleteTaskSetRequest {
    /// Create an empty `DeleteTaskSetRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the task set.
    pub fn with_task_set(mut self, task_set: impl Into<String>) -> Self {
        self.task_set = Some(task_set.into());
        self
    }

    /// Set the force.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
}

impl OperationRequest for DeleteTaskSetRequest {
    const OPERATION: &'static str = "DeleteTaskSet";
    type Response = DeleteTaskSetResponse;
}

/// Output of `DeleteTaskSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskSetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_set: Option<TaskSet>,
}

impl DeleteTaskSetResponse {
    /// Create an empty `DeleteTaskSetResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_set(mut self, task_set: TaskSet) -> Self {
        self.task_set = Some(task_set);
        self
    }
}

/// Input of `UpdateServicePrimaryTaskSet`: make a task set the primary task set of its service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicePrimaryTaskSetRequest {
    /// Short name or full ARN of the cluster hosting the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Name or ARN of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// ID or ARN of the task set to promote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_task_set: Option<String>,
}

impl UpdateServicePrimaryTaskSetRequest {
    /// Create an empty `UpdateServicePrimaryTaskSetRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the primary task set.
    pub fn with_primary_task_set(mut self, primary_task_set: impl Into<String>) -> Self {
        self.primary_task_set = Some(primary_task_set.into());
        self
    }
}

impl OperationRequest for UpdateServicePrimaryTaskSetRequest {
    const OPERATION: &'static str = "UpdateServicePrimaryTaskSet";
    type Response = UpdateServicePrimaryTaskSetResponse;
}

/// Output of `UpdateServicePrimaryTaskSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicePrimaryTaskSetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_set: Option<TaskSet>,
}

impl UpdateServicePrimaryTaskSetResponse {
    /// Create an empty `UpdateServicePrimaryTaskSetResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_set(mut self, task_set: TaskSet) -> Self {
        self.task_set = Some(task_set);
        self
    }
}

record_display!(
    CreateTaskSetRequest,
    CreateTaskSetResponse,
    DescribeTaskSetsRequest,
    DescribeTaskSetsResponse,
    UpdateTaskSetRequest,
    UpdateTaskSetResponse,
    DeleteTaskSetRequest,
    DeleteTaskSetResponse,
    UpdateServicePrimaryTaskSetRequest,
    UpdateServicePrimaryTaskSetResponse,
);
