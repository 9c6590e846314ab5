// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error responses returned by the remote service.
//!
//! The transport hands the raw body of a failed call to
//! [`ServiceError::from_body`]; the error code is matched against the closed
//! [`ServiceErrorKind`] set and kept verbatim when it is not recognized.

use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};
use thiserror::Error;
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::wire::{WireEnum, impl_wire_enum};

/// Error codes the service is known to return.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    VariantNames,
)]
pub enum ServiceErrorKind {
    #[strum(serialize = "AccessDeniedException")]
    AccessDenied,
    #[strum(serialize = "AttributeLimitExceededException")]
    AttributeLimitExceeded,
    #[strum(serialize = "BlockedException")]
    Blocked,
    #[strum(serialize = "ClientException")]
    Client,
    #[strum(serialize = "ClusterContainsContainerInstancesException")]
    ClusterContainsContainerInstances,
    #[strum(serialize = "ClusterContainsServicesException")]
    ClusterContainsServices,
    #[strum(serialize = "ClusterContainsTasksException")]
    ClusterContainsTasks,
    #[strum(serialize = "ClusterNotFoundException")]
    ClusterNotFound,
    #[strum(serialize = "InvalidParameterException")]
    InvalidParameter,
    #[strum(serialize = "LimitExceededException")]
    LimitExceeded,
    #[strum(serialize = "MissingVersionException")]
    MissingVersion,
    #[strum(serialize = "NoUpdateAvailableException")]
    NoUpdateAvailable,
    #[strum(serialize = "PlatformTaskDefinitionIncompatibilityException")]
    PlatformTaskDefinitionIncompatibility,
    #[strum(serialize = "PlatformUnknownException")]
    PlatformUnknown,
    #[strum(serialize = "ResourceInUseException")]
    ResourceInUse,
    #[strum(serialize = "ResourceNotFoundException")]
    ResourceNotFound,
    #[strum(serialize = "ServerException")]
    Server,
    #[strum(serialize = "ServiceNotActiveException")]
    ServiceNotActive,
    #[strum(serialize = "ServiceNotFoundException")]
    ServiceNotFound,
    #[strum(serialize = "TargetNotFoundException")]
    TargetNotFound,
    #[strum(serialize = "TaskSetNotFoundException")]
    TaskSetNotFound,
    #[strum(serialize = "UnsupportedFeatureException")]
    UnsupportedFeature,
    #[strum(serialize = "UpdateInProgressException")]
    UpdateInProgress,
}

impl_wire_enum!(ServiceErrorKind);

/// A decoded error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ServiceError {
    /// Recognized error code, if any.
    pub kind: Option<ServiceErrorKind>,
    /// Error code as sent by the service, namespace stripped.
    pub code: String,
    /// Human-readable message (may be empty).
    pub message: String,
}

/// `message` and `Message` are both seen in the wild, sometimes together.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    message: Option<String>,
    #[serde(rename = "Message")]
    capitalized_message: Option<String>,
}

impl ServiceError {
    /// Decode a JSON error body.
    ///
    /// `__type` may look like `ClusterNotFoundException`,
    /// `com.amazonaws.ecs#ClusterNotFoundException` or carry a trailing
    /// `:<uri>`; only the bare code is kept.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let parsed: ErrorBody = serde_json::from_slice(body)?;
        let raw = parsed.error_type.ok_or_else(|| {
            ModelError::Serialization("error body has no __type field".to_string())
        })?;

        let code = raw.rsplit('#').next().unwrap_or(&raw);
        let code = code.split(':').next().unwrap_or(code).to_string();
        let kind = ServiceErrorKind::from_value(&code).ok();

        debug!(code = %code, recognized = kind.is_some(), "Decoded service error");

        Ok(Self {
            kind,
            code,
            message: parsed
                .message
                .or(parsed.capitalized_message)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_strips_namespace_and_suffix() {
        let body = br#"{"__type":"com.amazonaws.ecs#ClusterNotFoundException:http://internal/","message":"Cluster not found."}"#;
        let err = ServiceError::from_body(body).unwrap();

        assert_eq!(err.kind, Some(ServiceErrorKind::ClusterNotFound));
        assert_eq!(err.code, "ClusterNotFoundException");
        assert_eq!(err.message, "Cluster not found.");
    }

    #[test]
    fn test_from_body_accepts_capitalized_message() {
        let body = br#"{"__type":"ServerException","Message":"boom"}"#;
        let err = ServiceError::from_body(body).unwrap();

        assert_eq!(err.kind, Some(ServiceErrorKind::Server));
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn test_from_body_with_both_message_spellings() {
        let body = br#"{"__type":"ServerException","message":"a","Message":"b"}"#;
        let err = ServiceError::from_body(body).unwrap();

        assert_eq!(err.kind, Some(ServiceErrorKind::Server));
        assert_eq!(err.message, "a");

        let body = br#"{"__type":"ServerException","message":null,"Message":"b"}"#;
        assert_eq!(ServiceError::from_body(body).unwrap().message, "b");
    }

    #[test]
    fn test_from_body_keeps_unknown_code() {
        let body = br#"{"__type":"ThrottlingException"}"#;
        let err = ServiceError::from_body(body).unwrap();

        assert_eq!(err.kind, None);
        assert_eq!(err.code, "ThrottlingException");
        assert_eq!(err.message, "");
    }

    #[test]
    fn test_from_body_requires_type() {
        let err = ServiceError::from_body(br#"{"message":"x"}"#).unwrap_err();
        assert!(matches!(err, ModelError::Serialization(_)));
    }
}
