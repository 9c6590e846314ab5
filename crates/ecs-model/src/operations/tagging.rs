// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Resource tagging operations.

use serde::{Deserialize, Serialize};

use crate::model::Tag;
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `TagResource`: add tags to a resource, overwriting values of existing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    /// ARN of the resource to tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl TagResourceRequest {
    /// Create an empty `TagResourceRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resource ARN.
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

impl OperationRequest for TagResourceRequest {
    const OPERATION: &'static str = "TagResource";
    type Response = TagResourceResponse;
}

/// Output of `TagResource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceResponse {}

impl TagResourceResponse {
    /// Create an empty `TagResourceResponse`.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Input of `UntagResource`: remove tags from a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceRequest {
    /// ARN of the resource to untag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Keys of the tags to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl UntagResourceRequest {
    /// Create an empty `UntagResourceRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resource ARN.
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }

    /// Append tag keys, keeping any already present.
    pub fn with_tag_keys(mut self, tag_keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tag_keys
            .get_or_insert_with(Vec::new)
            .extend(tag_keys.into_iter().map(Into::into));
        self
    }
}

impl OperationRequest for UntagResourceRequest {
    const OPERATION: &'static str = "UntagResource";
    type Response = UntagResourceResponse;
}

/// Output of `UntagResource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceResponse {}

impl UntagResourceResponse {
    /// Create an empty `UntagResourceResponse`.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Input of `ListTagsForResource`: list the tags of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceRequest {
    /// ARN of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl ListTagsForResourceRequest {
    /// Create an empty `ListTagsForResourceRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resource ARN.
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }
}

impl OperationRequest for ListTagsForResourceRequest {
    const OPERATION: &'static str = "ListTagsForResource";
    type Response = ListTagsForResourceResponse;
}

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ListTagsForResourceResponse {
    /// Create an empty `ListTagsForResourceResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

record_display!(
    TagResourceRequest,
    TagResourceResponse,
    UntagResourceRequest,
    UntagResourceResponse,
    ListTagsForResourceRequest,
    ListTagsForResourceResponse,
);
