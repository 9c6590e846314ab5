// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Container instances registered in a cluster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::record_display;
use super::enums::{AgentUpdateStatus, PlatformDeviceType};
use super::shared::{Attachment, Attribute, Resource, Tag, VersionInfo};

/// An EC2 instance running the container agent and registered in a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInstance {
    /// Full ARN of the container instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance_arn: Option<String>,
    /// EC2 instance ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec2_instance_id: Option<String>,
    /// Capacity provider the instance belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_provider_name: Option<String>,
    /// Version counter, incremented on every change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Agent and Docker versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_info: Option<VersionInfo>,
    /// Resources not yet allocated to tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_resources: Option<Vec<Resource>>,
    /// Resources registered by the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_resources: Option<Vec<Resource>>,
    /// ACTIVE, DRAINING, REGISTERING, DEREGISTERING or REGISTRATION_FAILED.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Reason for the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    /// Whether the agent is connected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_connected: Option<bool>,
    /// Tasks in the RUNNING state on this instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_tasks_count: Option<i32>,
    /// Tasks in the PENDING state on this instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_tasks_count: Option<i32>,
    /// Status of the most recent agent update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_update_status: Option<AgentUpdateStatus>,
    /// Attributes set on the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    /// When the instance was registered.
    #[serde(default, with = "crate::wire::epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
    /// Trunk interfaces attached to the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Tags applied to the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ContainerInstance {
    /// Create an empty `ContainerInstance`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container instance ARN.
    pub fn with_container_instance_arn(
        mut self,
        container_instance_arn: impl Into<String>,
    ) -> Self {
        self.container_instance_arn = Some(container_instance_arn.into());
        self
    }

    /// Set the EC2 instance ID.
    pub fn with_ec2_instance_id(mut self, ec2_instance_id: impl Into<String>) -> Self {
        self.ec2_instance_id = Some(ec2_instance_id.into());
        self
    }

    /// Set the capacity provider name.
    pub fn with_capacity_provider_name(
        mut self,
        capacity_provider_name: impl Into<String>,
    ) -> Self {
        self.capacity_provider_name = Some(capacity_provider_name.into());
        self
    }

    /// Set the version.
    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    /// Set the version info.
    pub fn with_version_info(mut self, version_info: VersionInfo) -> Self {
        self.version_info = Some(version_info);
        self
    }

    /// Append remaining resources, keeping any already present.
    pub fn with_remaining_resources(
        mut self,
        remaining_resources: impl IntoIterator<Item = Resource>,
    ) -> Self {
        self.remaining_resources
            .get_or_insert_with(Vec::new)
            .extend(remaining_resources);
        self
    }

    /// Append registered resources, keeping any already present.
    pub fn with_registered_resources(
        mut self,
        registered_resources: impl IntoIterator<Item = Resource>,
    ) -> Self {
        self.registered_resources
            .get_or_insert_with(Vec::new)
            .extend(registered_resources);
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the status reason.
    pub fn with_status_reason(mut self, status_reason: impl Into<String>) -> Self {
        self.status_reason = Some(status_reason.into());
        self
    }

    /// Set the agent connected.
    pub fn with_agent_connected(mut self, agent_connected: bool) -> Self {
        self.agent_connected = Some(agent_connected);
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

    /// Set the agent update status.
    pub fn with_agent_update_status(mut self, agent_update_status: AgentUpdateStatus) -> Self {
        self.agent_update_status = Some(agent_update_status);
        self
    }

    /// Append attributes, keeping any already present.
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .extend(attributes);
        self
    }

    /// Set the registered at.
    pub fn with_registered_at(mut self, registered_at: DateTime<Utc>) -> Self {
        self.registered_at = Some(registered_at);
        self
    }

    /// Append attachments, keeping any already present.
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .extend(attachments);
        self
    }

    /// Append tags, keeping any already present.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

/// A device on a container instance that tasks can use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDevice {
    /// ID of the device, e.g. a GPU ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Kind of device.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<PlatformDeviceType>,
}

impl PlatformDevice {
    /// Create an empty `PlatformDevice`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the device type.
    pub fn with_device_type(mut self, device_type: PlatformDeviceType) -> Self {
        self.device_type = Some(device_type);
        self
    }
}

record_display!(ContainerInstance, PlatformDevice);
