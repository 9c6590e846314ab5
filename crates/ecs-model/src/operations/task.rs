// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Task operations.

use serde::{Deserialize, Serialize};

use crate::model::{
    CapacityProviderStrategyItem, DesiredStatus, Failure, LaunchType, NetworkConfiguration,
    PlacementConstraint, PlacementStrategy, PropagateTags, Tag, Task, TaskField, TaskOverride,
};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `RunTask`: start tasks, letting the scheduler place them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Number of tasks to start (up to 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(rename = "enableECSManagedTags", skip_serializing_if = "Option::is_none")]
    pub enable_ecs_managed_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<TaskOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<Vec<PlacementConstraint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_strategy: Option<Vec<PlacementStrategy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagate_tags: Option<PropagateTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Tag identifying the caller (up to 36 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl RunTaskRequest {
    /// Create an empty `RunTaskRequest`.
    pub fn new() -> Self {
        Self::default()
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

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the count.
    pub fn with_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_enable_ecs_managed_tags(mut self, enable_ecs_managed_tags: bool) -> Self {
        self.enable_ecs_managed_tags = Some(enable_ecs_managed_tags);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
        self
    }

    pub fn with_network_configuration(
        mut self,
        network_configuration: NetworkConfiguration,
    ) -> Self {
        self.network_configuration = Some(network_configuration);
        self
    }

    pub fn with_overrides(mut self, overrides: TaskOverride) -> Self {
        self.overrides = Some(overrides);
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

    pub fn with_platform_version(mut self, platform_version: impl Into<String>) -> Self {
        self.platform_version = Some(platform_version.into());
        self
    }

    pub fn with_propagate_tags(mut self, propagate_tags: PropagateTags) -> Self {
        self.propagate_tags = Some(propagate_tags);
        self
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    /// Set the started by.
    pub fn with_started_by(mut self, started_by: impl Into<String>) -> Self {
        self.started_by = Some(started_by.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
        self
    }
}

impl OperationRequest for RunTaskRequest {
    const OPERATION: &'static str = "RunTask";
    type Response = RunTaskResponse;
}

/// Output of `RunTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTaskResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

impl RunTaskResponse {
    /// Create an empty `RunTaskResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.get_or_insert_with(Vec::new).extend(tasks);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }
}

/// Input of `StartTask`: start tasks on specific container instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTaskRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Container instances to start on (up to 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instances: Option<Vec<String>>,
    #[serde(rename = "enableECSManagedTags", skip_serializing_if = "Option::is_none")]
    pub enable_ecs_managed_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<TaskOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagate_tags: Option<PropagateTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl StartTaskRequest {
    /// Create an empty `StartTaskRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Append container instances, keeping any already present.
    pub fn with_container_instances(
        mut self,
        container_instances: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.container_instances
            .get_or_insert_with(Vec::new)
            .extend(container_instances.into_iter().map(Into::into));
        self
    }

    pub fn with_enable_ecs_managed_tags(mut self, enable_ecs_managed_tags: bool) -> Self {
        self.enable_ecs_managed_tags = Some(enable_ecs_managed_tags);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_network_configuration(
        mut self,
        network_configuration: NetworkConfiguration,
    ) -> Self {
        self.network_configuration = Some(network_configuration);
        self
    }

    pub fn with_overrides(mut self, overrides: TaskOverride) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_propagate_tags(mut self, propagate_tags: PropagateTags) -> Self {
        self.propagate_tags = Some(propagate_tags);
        self
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    pub fn with_started_by(mut self, started_by: impl Into<String>) -> Self {
        self.started_by = Some(started_by.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
        self
    }
}

impl OperationRequest for StartTaskRequest {
    const OPERATION: &'static str = "StartTask";
    type Response = StartTaskResponse;
}

/// Output of `StartTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTaskResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

impl StartTaskResponse {
    /// Create an empty `StartTaskResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.get_or_insert_with(Vec::new).extend(tasks);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }
}

/// Input of `StopTask`: stop a running task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTaskRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Task ID or full ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// Message shown in later descriptions of the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StopTaskRequest {
    /// Create an empty `StopTaskRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the task.
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Set the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl OperationRequest for StopTaskRequest {
    const OPERATION: &'static str = "StopTask";
    type Response = StopTaskResponse;
}

/// Output of `StopTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTaskResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl StopTaskResponse {
    /// Create an empty `StopTaskResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.task = Some(task);
        self
    }
}

/// Input of `DescribeTasks`: describe tasks of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTasksRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Task IDs or ARNs (up to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<TaskField>>,
}

impl DescribeTasksRequest {
    /// Create an empty `DescribeTasksRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Append tasks, keeping any already present.
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tasks
            .get_or_insert_with(Vec::new)
            .extend(tasks.into_iter().map(Into::into));
        self
    }

    pub fn with_include(mut self, include: impl IntoIterator<Item = TaskField>) -> Self {
        self.include.get_or_insert_with(Vec::new).extend(include);
        self
    }
}

impl OperationRequest for DescribeTasksRequest {
    const OPERATION: &'static str = "DescribeTasks";
    type Response = DescribeTasksResponse;
}

/// Output of `DescribeTasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTasksResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

impl DescribeTasksResponse {
    /// Create an empty `DescribeTasksResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.get_or_insert_with(Vec::new).extend(tasks);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }
}

/// Input of `ListTasks`: list task ARNs of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Only tasks on this container instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<String>,
    /// Only tasks of this task definition family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size (1 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Only tasks started with this `startedBy` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    /// Only tasks belonging to this service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<DesiredStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
}

impl ListTasksRequest {
    /// Create an empty `ListTasksRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the container instance.
    pub fn with_container_instance(mut self, container_instance: impl Into<String>) -> Self {
        self.container_instance = Some(container_instance.into());
        self
    }

    /// Set the family.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
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

    /// Set the started by.
    pub fn with_started_by(mut self, started_by: impl Into<String>) -> Self {
        self.started_by = Some(started_by.into());
        self
    }

    /// Set the service name.
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn with_desired_status(mut self, desired_status: DesiredStatus) -> Self {
        self.desired_status = Some(desired_status);
        self
    }

    pub fn with_launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
        self
    }
}

impl OperationRequest for ListTasksRequest {
    const OPERATION: &'static str = "ListTasks";
    type Response = ListTasksResponse;
}

/// Output of `ListTasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListTasksResponse {
    /// Create an empty `ListTasksResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_arns(
        mut self,
        task_arns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.task_arns
            .get_or_insert_with(Vec::new)
            .extend(task_arns.into_iter().map(Into::into));
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

record_display!(
    RunTaskRequest,
    RunTaskResponse,
    StartTaskRequest,
    StartTaskResponse,
    StopTaskRequest,
    StopTaskResponse,
    DescribeTasksRequest,
    DescribeTasksResponse,
    ListTasksRequest,
    ListTasksResponse,
);
