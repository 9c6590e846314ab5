// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Custom attribute operations.

use serde::{Deserialize, Serialize};

use crate::model::{Attribute, TargetType};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `PutAttributes`: create or update attributes on resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAttributesRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Attributes to apply (up to 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl PutAttributesRequest {
    /// Create an empty `PutAttributesRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Append attributes, keeping any already present.
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .extend(attributes);
        self
    }
}

impl OperationRequest for PutAttributesRequest {
    const OPERATION: &'static str = "PutAttributes";
    type Response = PutAttributesResponse;
}

/// Output of `PutAttributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAttributesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl PutAttributesResponse {
    /// Create an empty `PutAttributesResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .extend(attributes);
        self
    }
}

/// Input of `DeleteAttributes`: delete attributes from resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAttributesRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Attributes to delete; `targetId` is required on each.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl DeleteAttributesRequest {
    /// Create an empty `DeleteAttributesRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Append attributes, keeping any already present.
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .extend(attributes);
        self
    }
}

impl OperationRequest for DeleteAttributesRequest {
    const OPERATION: &'static str = "DeleteAttributes";
    type Response = DeleteAttributesResponse;
}

/// Output of `DeleteAttributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAttributesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl DeleteAttributesResponse {
    /// Create an empty `DeleteAttributesResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .extend(attributes);
        self
    }
}

/// Input of `ListAttributes`: list attributes of a target type in a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAttributesRequest {
    /// Short name or full ARN of the cluster; the default cluster when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    /// Only attributes with this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    /// Only attributes with this value; requires `attributeName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size (1 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListAttributesRequest {
    /// Create an empty `ListAttributesRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    pub fn with_target_type(mut self, target_type: TargetType) -> Self {
        self.target_type = Some(target_type);
        self
    }

    /// Set the attribute name.
    pub fn with_attribute_name(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    /// Set the attribute value.
    pub fn with_attribute_value(mut self, attribute_value: impl Into<String>) -> Self {
        self.attribute_value = Some(attribute_value.into());
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

impl OperationRequest for ListAttributesRequest {
    const OPERATION: &'static str = "ListAttributes";
    type Response = ListAttributesResponse;
}

/// Output of `ListAttributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAttributesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListAttributesResponse {
    /// Create an empty `ListAttributesResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes
            .get_or_insert_with(Vec::new)
            .extend(attributes);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

record_display!(
    PutAttributesRequest,
    PutAttributesResponse,
    DeleteAttributesRequest,
    DeleteAttributesResponse,
    ListAttributesRequest,
    ListAttributesResponse,
);
