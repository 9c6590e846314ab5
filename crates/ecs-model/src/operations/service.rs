// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Service operations.

use serde::{Deserialize, Serialize};

use crate::model::{
    CapacityProviderStrategyItem, DeploymentConfiguration, DeploymentController, Failure,
    LaunchType, LoadBalancer, NetworkConfiguration, PlacementConstraint, PlacementStrategy,
    PropagateTags, SchedulingStrategy, Service, ServiceField, ServiceRegistry, Tag,
};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `CreateService`: create a service that keeps a number of tasks running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Service name, unique within the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// `family:revision` or full ARN; latest ACTIVE revision when no revision is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_registries: Option<Vec<ServiceRegistry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<i32>,
    /// Idempotency token (up to 32 ASCII characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    /// IAM role for load balancer registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_configuration: Option<DeploymentConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<Vec<PlacementConstraint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_strategy: Option<Vec<PlacementStrategy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduling_strategy: Option<SchedulingStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_controller: Option<DeploymentController>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "enableECSManagedTags", skip_serializing_if = "Option::is_none")]
    pub enable_ecs_managed_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagate_tags: Option<PropagateTags>,
}

impl CreateServiceRequest {
    /// Create an empty `CreateServiceRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set the service name.
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    /// Set the task definition.
    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
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

    pub fn with_desired_count(mut self, desired_count: i32) -> Self {
        self.desired_count = Some(desired_count);
        self
    }

    /// Set the client token.
    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
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

    /// Set the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_deployment_configuration(
        mut self,
        deployment_configuration: DeploymentConfiguration,
    ) -> Self {
        self.deployment_configuration = Some(deployment_configuration);
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

    pub fn with_enable_ecs_managed_tags(mut self, enable_ecs_managed_tags: bool) -> Self {
        self.enable_ecs_managed_tags = Some(enable_ecs_managed_tags);
        self
    }

    pub fn with_propagate_tags(mut self, propagate_tags: PropagateTags) -> Self {
        self.propagate_tags = Some(propagate_tags);
        self
    }
}

impl OperationRequest for CreateServiceRequest {
    const OPERATION: &'static str = "CreateService";
    type Response = CreateServiceResponse;
}

/// Output of `CreateService`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

impl CreateServiceResponse {
    /// Create an empty `CreateServiceResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.service = Some(service);
        self
    }
}

/// Input of `UpdateService`: change the desired count, task definition or deployment settings of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Name of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_strategy: Option<Vec<CapacityProviderStrategyItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_configuration: Option<DeploymentConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<Vec<PlacementConstraint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_strategy: Option<Vec<PlacementStrategy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    /// Start a new deployment even if nothing changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_new_deployment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period_seconds: Option<i32>,
}

impl UpdateServiceRequest {
    /// Create an empty `UpdateServiceRequest`.
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

    pub fn with_desired_count(mut self, desired_count: i32) -> Self {
        self.desired_count = Some(desired_count);
        self
    }

    pub fn with_task_definition(mut self, task_definition: impl Into<String>) -> Self {
        self.task_definition = Some(task_definition.into());
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

    pub fn with_deployment_configuration(
        mut self,
        deployment_configuration: DeploymentConfiguration,
    ) -> Self {
        self.deployment_configuration = Some(deployment_configuration);
        self
    }

    pub fn with_network_configuration(
        mut self,
        network_configuration: NetworkConfiguration,
    ) -> Self {
        self.network_configuration = Some(network_configuration);
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

    /// Set the force new deployment.
    pub fn with_force_new_deployment(mut self, force_new_deployment: bool) -> Self {
        self.force_new_deployment = Some(force_new_deployment);
        self
    }

    pub fn with_health_check_grace_period_seconds(
        mut self,
        health_check_grace_period_seconds: i32,
    ) -> Self {
        self.health_check_grace_period_seconds = Some(health_check_grace_period_seconds);
        self
    }
}

impl OperationRequest for UpdateServiceRequest {
    const OPERATION: &'static str = "UpdateService";
    type Response = UpdateServiceResponse;
}

/// Output of `UpdateService`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

impl UpdateServiceResponse {
    /// Create an empty `UpdateServiceResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.service = Some(service);
        self
    }
}

/// Input of `DeleteService`: delete a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Name or ARN of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Delete even if the service still has running tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

impl DeleteServiceRequest {
    /// Create an empty `DeleteServiceRequest`.
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

    /// Set the force.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
}

impl OperationRequest for DeleteServiceRequest {
    const OPERATION: &'static str = "DeleteService";
    type Response = DeleteServiceResponse;
}

/// Output of `DeleteService`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

impl DeleteServiceResponse {
    /// Create an empty `DeleteServiceResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.service = Some(service);
        self
    }
}

/// Input of `DescribeServices`: describe services of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeServicesRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Service names or ARNs (up to 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<ServiceField>>,
}

impl DescribeServicesRequest {
    /// Create an empty `DescribeServicesRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Append services, keeping any already present.
    pub fn with_services(mut self, services: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.services
            .get_or_insert_with(Vec::new)
            .extend(services.into_iter().map(Into::into));
        self
    }

    pub fn with_include(mut self, include: impl IntoIterator<Item = ServiceField>) -> Self {
        self.include.get_or_insert_with(Vec::new).extend(include);
        self
    }
}

impl OperationRequest for DescribeServicesRequest {
    const OPERATION: &'static str = "DescribeServices";
    type Response = DescribeServicesResponse;
}

/// Output of `DescribeServices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeServicesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

impl DescribeServicesResponse {
    /// Create an empty `DescribeServicesResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(mut self, services: impl IntoIterator<Item = Service>) -> Self {
        self.services.get_or_insert_with(Vec::new).extend(services);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }
}

/// Input of `ListServices`: list service ARNs of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size (1 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduling_strategy: Option<SchedulingStrategy>,
}

impl ListServicesRequest {
    /// Create an empty `ListServicesRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
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

    pub fn with_launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
        self
    }

    pub fn with_scheduling_strategy(mut self, scheduling_strategy: SchedulingStrategy) -> Self {
        self.scheduling_strategy = Some(scheduling_strategy);
        self
    }
}

impl OperationRequest for ListServicesRequest {
    const OPERATION: &'static str = "ListServices";
    type Response = ListServicesResponse;
}

/// Output of `ListServices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListServicesResponse {
    /// Create an empty `ListServicesResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service_arns(
        mut self,
        service_arns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.service_arns
            .get_or_insert_with(Vec::new)
            .extend(service_arns.into_iter().map(Into::into));
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

record_display!(
    CreateServiceRequest,
    CreateServiceResponse,
    UpdateServiceRequest,
    UpdateServiceResponse,
    DeleteServiceRequest,
    DeleteServiceResponse,
    DescribeServicesRequest,
    DescribeServicesResponse,
    ListServicesRequest,
    ListServicesResponse,
);
