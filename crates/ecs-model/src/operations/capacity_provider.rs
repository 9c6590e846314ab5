// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Capacity provider operations.

use serde::{Deserialize, Serialize};

use crate::model::{AutoScalingGroupProvider, CapacityProvider, CapacityProviderField, Failure, Tag};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `CreateCapacityProvider`: create a capacity provider backed by an Auto Scaling group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCapacityProviderRequest {
    /// Name of the capacity provider (up to 255 characters, no `aws`/`ecs`/`fargate` prefix).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Backing Auto Scaling group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_provider: Option<AutoScalingGroupProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateCapacityProviderRequest {
    /// Create an empty `CreateCapacityProviderRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the auto scaling group provider.
    pub fn with_auto_scaling_group_provider(
        mut self,
        auto_scaling_group_provider: AutoScalingGroupProvider,
    ) -> Self {
        self.auto_scaling_group_provider = Some(auto_scaling_group_provider);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

impl OperationRequest for CreateCapacityProviderRequest {
    const OPERATION: &'static str = "CreateCapacityProvider";
    type Response = CreateCapacityProviderResponse;
}

/// Output of `CreateCapacityProvider`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCapacityProviderResponse {
    /// The created capacity provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider: Option<CapacityProvider>,
}

impl CreateCapacityProviderResponse {
    /// Create an empty `CreateCapacityProviderResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity provider.
    pub fn with_capacity_provider(mut self, capacity_provider: CapacityProvider) -> Self {
        self.capacity_provider = Some(capacity_provider);
        self
    }
}

/// Input of `DescribeCapacityProviders`: describe one or more capacity providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeCapacityProvidersRequest {
    /// Names or ARNs of the capacity providers (up to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_providers: Option<Vec<String>>,
    /// Optional fields to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<CapacityProviderField>>,
    /// Page size (1 to 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Token returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeCapacityProvidersRequest {
    /// Create an empty `DescribeCapacityProvidersRequest`.
    pub fn new() -> Self {
        Self::default()
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

    /// Append include, keeping any already present.
    pub fn with_include(
        mut self,
        include: impl IntoIterator<Item = CapacityProviderField>,
    ) -> Self {
        self.include.get_or_insert_with(Vec::new).extend(include);
        self
    }

    /// Set the max results.
    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the next token.
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl OperationRequest for DescribeCapacityProvidersRequest {
    const OPERATION: &'static str = "DescribeCapacityProviders";
    type Response = DescribeCapacityProvidersResponse;
}

/// Output of `DescribeCapacityProviders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeCapacityProvidersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_providers: Option<Vec<CapacityProvider>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
    /// Token for the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeCapacityProvidersResponse {
    /// Create an empty `DescribeCapacityProvidersResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_providers(
        mut self,
        capacity_providers: impl IntoIterator<Item = CapacityProvider>,
    ) -> Self {
        self.capacity_providers
            .get_or_insert_with(Vec::new)
            .extend(capacity_providers);
        self
    }

    pub fn with_failures(mut self, failures: impl IntoIterator<Item = Failure>) -> Self {
        self.failures.get_or_insert_with(Vec::new).extend(failures);
        self
    }

    /// Set the next token.
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

record_display!(
    CreateCapacityProviderRequest,
    CreateCapacityProviderResponse,
    DescribeCapacityProvidersRequest,
    DescribeCapacityProvidersResponse,
);
