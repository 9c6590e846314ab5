// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Capacity providers and their Auto Scaling group settings.

use serde::{Deserialize, Serialize};

use crate::wire::record_display;
use super::enums::{CapacityProviderStatus, ManagedScalingStatus, ManagedTerminationProtection};
use super::shared::Tag;

/// Auto Scaling group backing a capacity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScalingGroupProvider {
    /// ARN or short name of the Auto Scaling group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_arn: Option<String>,
    /// Managed scaling settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_scaling: Option<ManagedScaling>,
    /// Whether instances running tasks are protected from scale-in. Requires managed scaling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_termination_protection: Option<ManagedTerminationProtection>,
}

impl AutoScalingGroupProvider {
    /// Create an empty `AutoScalingGroupProvider`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the auto scaling group ARN.
    pub fn with_auto_scaling_group_arn(
        mut self,
        auto_scaling_group_arn: impl Into<String>,
    ) -> Self {
        self.auto_scaling_group_arn = Some(auto_scaling_group_arn.into());
        self
    }

    /// Set the managed scaling.
    pub fn with_managed_scaling(mut self, managed_scaling: ManagedScaling) -> Self {
        self.managed_scaling = Some(managed_scaling);
        self
    }

    /// Set the managed termination protection.
    pub fn with_managed_termination_protection(
        mut self,
        managed_termination_protection: ManagedTerminationProtection,
    ) -> Self {
        self.managed_termination_protection = Some(managed_termination_protection);
        self
    }
}

/// Managed scaling settings of an Auto Scaling group provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedScaling {
    /// Whether managed scaling is turned on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ManagedScalingStatus>,
    /// Target utilization, as a percentage (1 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_capacity: Option<i32>,
    /// Minimum instances added or removed at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_scaling_step_size: Option<i32>,
    /// Maximum instances added or removed at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_scaling_step_size: Option<i32>,
}

impl ManagedScaling {
    /// Create an empty `ManagedScaling`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status.
    pub fn with_status(mut self, status: ManagedScalingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the target capacity.
    pub fn with_target_capacity(mut self, target_capacity: i32) -> Self {
        self.target_capacity = Some(target_capacity);
        self
    }

    /// Set the minimum scaling step size.
    pub fn with_minimum_scaling_step_size(mut self, minimum_scaling_step_size: i32) -> Self {
        self.minimum_scaling_step_size = Some(minimum_scaling_step_size);
        self
    }

    /// Set the maximum scaling step size.
    pub fn with_maximum_scaling_step_size(mut self, maximum_scaling_step_size: i32) -> Self {
        self.maximum_scaling_step_size = Some(maximum_scaling_step_size);
        self
    }
}

/// A capacity provider as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityProvider {
    /// Full ARN of the capacity provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_arn: Option<String>,
    /// Name of the capacity provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CapacityProviderStatus>,
    /// Backing Auto Scaling group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_provider: Option<AutoScalingGroupProvider>,
    /// Tags applied to the capacity provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CapacityProvider {
    /// Create an empty `CapacityProvider`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity provider ARN.
    pub fn with_capacity_provider_arn(mut self, capacity_provider_arn: impl Into<String>) -> Self {
        self.capacity_provider_arn = Some(capacity_provider_arn.into());
        self
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: CapacityProviderStatus) -> Self {
        self.status = Some(status);
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

    /// Append tags, keeping any already present.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

record_display!(AutoScalingGroupProvider, ManagedScaling, CapacityProvider);
