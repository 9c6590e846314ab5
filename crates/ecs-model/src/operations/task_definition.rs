// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Task definition operations.

use serde::{Deserialize, Serialize};

use crate::model::{
    Compatibility, ContainerDefinition, InferenceAccelerator, IpcMode, NetworkMode, PidMode,
    ProxyConfiguration, SortOrder, Tag, TaskDefinition, TaskDefinitionFamilyStatus,
    TaskDefinitionField, TaskDefinitionPlacementConstraint, TaskDefinitionStatus, Volume,
};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `RegisterTaskDefinition`: register a new task definition revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTaskDefinitionRequest {
    /// Family name; a new revision is added on every registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_mode: Option<NetworkMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_definitions: Option<Vec<ContainerDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<Vec<TaskDefinitionPlacementConstraint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_compatibilities: Option<Vec<Compatibility>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid_mode: Option<PidMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipc_mode: Option<IpcMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_configuration: Option<ProxyConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_accelerators: Option<Vec<InferenceAccelerator>>,
}

impl RegisterTaskDefinitionRequest {
    /// Create an empty `RegisterTaskDefinitionRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the family.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn with_task_role_arn(mut self, task_role_arn: impl Into<String>) -> Self {
        self.task_role_arn = Some(task_role_arn.into());
        self
    }

    pub fn with_execution_role_arn(mut self, execution_role_arn: impl Into<String>) -> Self {
        self.execution_role_arn = Some(execution_role_arn.into());
        self
    }

    pub fn with_network_mode(mut self, network_mode: NetworkMode) -> Self {
        self.network_mode = Some(network_mode);
        self
    }

    pub fn with_container_definitions(
        mut self,
        container_definitions: impl IntoIterator<Item = ContainerDefinition>,
    ) -> Self {
        self.container_definitions
            .get_or_insert_with(Vec::new)
            .extend(container_definitions);
        self
    }

    pub fn with_volumes(mut self, volumes: impl IntoIterator<Item = Volume>) -> Self {
        self.volumes.get_or_insert_with(Vec::new).extend(volumes);
        self
    }

    pub fn with_placement_constraints(
        mut self,
        placement_constraints: impl IntoIterator<Item = TaskDefinitionPlacementConstraint>,
    ) -> Self {
        self.placement_constraints
            .get_or_insert_with(Vec::new)
            .extend(placement_constraints);
        self
    }

    pub fn with_requires_compatibilities(
        mut self,
        requires_compatibilities: impl IntoIterator<Item = Compatibility>,
    ) -> Self {
        self.requires_compatibilities
            .get_or_insert_with(Vec::new)
            .extend(requires_compatibilities);
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

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    pub fn with_pid_mode(mut self, pid_mode: PidMode) -> Self {
        self.pid_mode = Some(pid_mode);
        self
    }

    pub fn with_ipc_mode(mut self, ipc_mode: IpcMode) -> Self {
        self.ipc_mode = Some(ipc_mode);
        self
    }

    pub fn with_proxy_configuration(mut self, proxy_configuration: ProxyConfiguration) -> Self {
        self.proxy_configuration = Some(proxy_configuration);
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
}

impl OperationRequest for RegisterTaskDefinitionRequest {
    const OPERATION: &'static str = "RegisterTaskDefinition";
    type Response = RegisterTaskDefinitionResponse;
}

/// Output of `RegisterTaskDefinition`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTaskDefinitionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl RegisterTaskDefinitionResponse {
    /// Create an empty `RegisterTaskDefinitionResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_definition(mut self, task_definition: TaskDefinition) -> Self {
        self.task_definition = Some(task_definition);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

/// Input of `DeregisterTaskDefinition`: mark a task definition revision INACTIVE.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeregisterTaskDefinitionRequest {
    /// `family:revision` or full ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl DeregisterTaskDefinitionRequest {
    /// Create an empty `DeregisterTaskDefinitionRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the task definition.
    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
        self
    }
}

impl OperationRequest for DeregisterTaskDefinitionRequest {
    const OPERATION: &'static str = "DeregisterTaskDefinition";
    type Response = DeregisterTaskDefinitionResponse;
}

/// Output of `DeregisterTaskDefinition`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeregisterTaskDefinitionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinition>,
}

impl DeregisterTaskDefinitionResponse {
    /// Create an empty `DeregisterTaskDefinitionResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_definition(mut self, task_definition: TaskDefinition) -> Self {
        self.task_definition = Some(task_definition);
        self
    }
}

/// Input of `DescribeTaskDefinition`: describe a task definition revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTaskDefinitionRequest {
    /// `family`, `family:revision` or full ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<TaskDefinitionField>>,
}

impl DescribeTaskDefinitionRequest {
    /// Create an empty `DescribeTaskDefinitionRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the task definition.
    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
        self
    }

    pub fn with_include(mut self, include: impl IntoIterator<Item = TaskDefinitionField>) -> Self {
        self.include.get_or_insert_with(Vec::new).extend(include);
        self
    }
}

impl OperationRequest for DescribeTaskDefinitionRequest {
    const OPERATION: &'static str = "DescribeTaskDefinition";
    type Response = DescribeTaskDefinitionResponse;
}

/// Output of `DescribeTaskDefinition`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTaskDefinitionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl DescribeTaskDefinitionResponse {
    /// Create an empty `DescribeTaskDefinitionResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_definition(mut self, task_definition: TaskDefinition) -> Self {
        self.task_definition = Some(task_definition);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

/// Input of `ListTaskDefinitions`: list task definition revision ARNs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionsRequest {
    /// Only revisions of this family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskDefinitionStatus>,
    /// Order by family name, then revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size (1 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListTaskDefinitionsRequest {
    /// Create an empty `ListTaskDefinitionsRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the family prefix.
    pub fn with_family_prefix(mut self, family_prefix: impl Into<String>) -> Self {
        self.family_prefix = Some(family_prefix.into());
        self
    }

    pub fn with_status(mut self, status: TaskDefinitionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the sort.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
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
}

impl OperationRequest for ListTaskDefinitionsRequest {
    const OPERATION: &'static str = "ListTaskDefinitions";
    type Response = ListTaskDefinitionsResponse;
}

/// Output of `ListTaskDefinitions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListTaskDefinitionsResponse {
    /// Create an empty `ListTaskDefinitionsResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_definition_arns(
        mut self,
        task_definition_arns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.task_definition_arns
            .get_or_insert_with(Vec::new)
            .extend(task_definition_arns.into_iter().map(Into::into));
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Input of `ListTaskDefinitionFamilies`: list task definition family names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionFamiliesRequest {
    /// Only families starting with this prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskDefinitionFamilyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size (1 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListTaskDefinitionFamiliesRequest {
    /// Create an empty `ListTaskDefinitionFamiliesRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the family prefix.
    pub fn with_family_prefix(mut self, family_prefix: impl Into<String>) -> Self {
        self.family_prefix = Some(family_prefix.into());
        self
    }

    pub fn with_status(mut self, status: TaskDefinitionFamilyStatus) -> Self {
        self.status = Some(status);
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
}

impl OperationRequest for ListTaskDefinitionFamiliesRequest {
    const OPERATION: &'static str = "ListTaskDefinitionFamilies";
    type Response = ListTaskDefinitionFamiliesResponse;
}

/// Output of `ListTaskDefinitionFamilies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionFamiliesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub families: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListTaskDefinitionFamiliesResponse {
    /// Create an empty `ListTaskDefinitionFamiliesResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_families(mut self, families: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.families
            .get_or_insert_with(Vec::new)
            .extend(families.into_iter().map(Into::into));
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

record_display!(
    RegisterTaskDefinitionRequest,
    RegisterTaskDefinitionResponse,
    DeregisterTaskDefinitionRequest,
    DeregisterTaskDefinitionResponse,
    DescribeTaskDefinitionRequest,
    DescribeTaskDefinitionResponse,
    ListTaskDefinitionsRequest,
    ListTaskDefinitionsResponse,
    ListTaskDefinitionFamiliesRequest,
    ListTaskDefinitionFamiliesResponse,
);
