// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Container instance operations.

use serde::{Deserialize, Serialize};

use crate::model::{
    Attribute, ContainerInstance, ContainerInstanceField, ContainerInstanceStatus, Failure,
    PlatformDevice, Resource, Tag, VersionInfo,
};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `DescribeContainerInstances`: describe container instances of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeContainerInstancesRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Container instance IDs or ARNs (up to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<ContainerInstanceField>>,
}

impl DescribeContainerInstancesRequest {
    /// Create an empty `DescribeContainerInstancesRequest`.
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

    pub fn with_include(
        mut self,
        include: impl IntoIterator<Item = ContainerInstanceField>,
    ) -> Self {
        self.include.get_or_insert_with(Vec::new).extend(include);
        self
    }
}

impl OperationRequest for DescribeContainerInstancesRequest {
    const OPERATION: &'static str = "DescribeContainerInstances";
    type Response = DescribeContainerInstancesResponse;
}

/// Output of `DescribeContainerInstances`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeContainerInstancesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instances: Option<Vec<ContainerInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

impl DescribeContainerInstancesResponse {
    /// Create an empty `DescribeContainerInstancesResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_instances(
        mut self,
        container_instances: impl IntoIterator<Item = ContainerInstance>,
    ) -> Self {
        self.container_instances
            .get_or_insert_with(Vec::new)
            .extend(container_instances);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }
}

/// Input of `ListContainerInstances`: list container instance ARNs of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerInstancesRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Cluster query language expression, e.g. `attribute:ecs.instance-type == t2.micro`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size (1 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Only instances in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContainerInstanceStatus>,
}

impl ListContainerInstancesRequest {
    /// Create an empty `ListContainerInstancesRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
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

    /// Set the status.
    pub fn with_status(mut self, status: ContainerInstanceStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl OperationRequest for ListContainerInstancesRequest {
    const OPERATION: &'static str = "ListContainerInstances";
    type Response = ListContainerInstancesResponse;
}

/// Output of `ListContainerInstances`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerInstancesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListContainerInstancesResponse {
    /// Create an empty `ListContainerInstancesResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_instance_arns(
        mut self,
        container_instance_arns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.container_instance_arns
            .get_or_insert_with(Vec::new)
            .extend(container_instance_arns.into_iter().map(Into::into));
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Input of `RegisterContainerInstance`: register an EC2 instance with a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterContainerInstanceRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Instance identity document from the EC2 metadata service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_identity_document: Option<String>,
    /// Signature of the instance identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_identity_document_signature: Option<String>,
    /// Resources available on the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_resources: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_info: Option<VersionInfo>,
    /// ARN of an earlier registration to resume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    /// Devices such as GPUs available to tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_devices: Option<Vec<PlatformDevice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl RegisterContainerInstanceRequest {
    /// Create an empty `RegisterContainerInstanceRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the instance identity document.
    pub fn with_instance_identity_document(
        mut self,
        instance_identity_document: impl Into<String>,
    ) -> Self {
        self.instance_identity_document = Some(instance_identity_document.into());
        self
    }

    /// Set the instance identity document signature.
    pub fn with_instance_identity_document_signature(
        mut self,
        instance_identity_document_signature: impl Into<String>,
    ) -> Self {
        self.instance_identity_document_signature = Some(instance_identity_document_signature.into());
        self
    }

    /// Append total resources, keeping any already present.
    pub fn with_total_resources(
        mut self,
        total_resources: impl IntoIterator<Item = Resource>,
    ) -> Self {
        self.total_resources
            .get_or_insert_with(Vec::new)
            .extend(total_resources);
        self
    }

    pub fn with_version_info(mut self, version_info: VersionInfo) -> Self {
        self.version_info = Some(version_info);
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

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .extend(attributes);
        self
    }

    /// Append platform devices, keeping any already present.
    pub fn with_platform_devices(
        mut self,
        platform_devices: impl IntoIterator<Item = PlatformDevice>,
    ) -> Self {
        self.platform_devices
            .get_or_insert_with(Vec::new)
            .extend(platform_devices);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

impl OperationRequest for RegisterContainerInstanceRequest {
    const OPERATION: &'static str = "RegisterContainerInstance";
    type Response = RegisterContainerInstanceResponse;
}

/// Output of `RegisterContainerInstance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterContainerInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<ContainerInstance>,
}

impl RegisterContainerInstanceResponse {
    /// Create an empty `RegisterContainerInstanceResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_instance(mut self, container_instance: ContainerInstance) -> Self {
        self.container_instance = Some(container_instance);
        self
    }
}

/// Input of `DeregisterContainerInstance`: remove a container instance from a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeregisterContainerInstanceRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Container instance ID or full ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<String>,
    /// Deregister even if tasks are still running on the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

impl DeregisterContainerInstanceRequest {
    /// Create an empty `DeregisterContainerInstanceRequest`.
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

    /// Set the force.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
}

impl OperationRequest for DeregisterContainerInstanceRequest {
    const OPERATION: &'static str = "DeregisterContainerInstance";
    type Response = DeregisterContainerInstanceResponse;
}

/// Output of `DeregisterContainerInstance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeregisterContainerInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<ContainerInstance>,
}

impl DeregisterContainerInstanceResponse {
    /// Create an empty `DeregisterContainerInstanceResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_instance(mut self, container_instance: ContainerInstance) -> Self {
        self.container_instance = Some(container_instance);
        self
    }
}

/// Input of `UpdateContainerInstancesState`: set the status of container instances, e.g. to drain them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContainerInstancesStateRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Container instance IDs or ARNs (up to 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instances: Option<Vec<String>>,
    /// ACTIVE or DRAINING.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContainerInstanceStatus>,
}

impl UpdateContainerInstancesStateRequest {
    /// Create an empty `UpdateContainerInstancesStateRequest`.
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

    /// Set the status.
    pub fn with_status(mut self, status: ContainerInstanceStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl OperationRequest for UpdateContainerInstancesStateRequest {
    const OPERATION: &'static str = "UpdateContainerInstancesState";
    type Response = UpdateContainerInstancesStateResponse;
}

/// Output of `UpdateContainerInstancesState`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContainerInstancesStateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instances: Option<Vec<ContainerInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

impl UpdateContainerInstancesStateResponse {
    /// Create an empty `UpdateContainerInstancesStateResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_instances(
        mut self,
        container_instances: impl IntoIterator<Item = ContainerInstance>,
    ) -> Self {
        self.container_instances
            .get_or_insert_with(Vec::new)
            .extend(container_instances);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }
}

/// Input of `UpdateContainerAgent`: update the container agent on a container instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContainerAgentRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Container instance ID or full ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<String>,
}

impl UpdateContainerAgentRequest {
    /// Create an empty `UpdateContainerAgentRequest`.
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
}

impl OperationRequest for UpdateContainerAgentRequest {
    const OPERATION: &'static str = "UpdateContainerAgent";
    type Response = UpdateContainerAgentResponse;
}

/// Output of `UpdateContainerAgent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContainerAgentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<ContainerInstance>,
}

impl UpdateContainerAgentResponse {
    /// Create an empty `UpdateContainerAgentResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_instance(mut self, container_instance: ContainerInstance) -> Self {
        self.container_instance = Some(container_instance);
        self
    }
}

record_display!(
    DescribeContainerInstancesRequest,
    DescribeContainerInstancesResponse,
    ListContainerInstancesRequest,
    ListContainerInstancesResponse,
    RegisterContainerInstanceRequest,
    RegisterContainerInstanceResponse,
    DeregisterContainerInstanceRequest,
    DeregisterContainerInstanceResponse,
    UpdateContainerInstancesStateRequest,
    UpdateContainerInstancesStateResponse,
    UpdateContainerAgentRequest,
    UpdateContainerAgentResponse,
);
