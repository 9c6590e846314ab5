// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for ecs-model.

use thiserror::Error;

use crate::service_error::ServiceError;

/// Result type using ModelError.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building, preparing or decoding model records.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A literal that is not part of a closed enum.
    #[error("invalid value {value:?} for {type_name}")]
    InvalidEnumValue {
        /// Name of the enum type that rejected the literal.
        type_name: &'static str,
        /// The rejected literal.
        value: String,
    },

    /// A map entry was added under a key the record already holds.
    #[error("duplicate key {key:?} in {field}")]
    DuplicateMapKey {
        /// Wire name of the map field.
        field: &'static str,
        /// The key that was already present.
        key: String,
    },

    /// Configuration error (missing or invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Error response returned by the remote service.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),
}

impl ModelError {
    /// True for the two locally detected argument errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ModelError::InvalidEnumValue { .. } | ModelError::DuplicateMapKey { .. }
        )
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_classification() {
        let enum_err = ModelError::InvalidEnumValue {
            type_name: "LaunchType",
            value: "bogus".to_string(),
        };
        let key_err = ModelError::DuplicateMapKey {
            field: "driverOpts",
            key: "k".to_string(),
        };
        assert!(enum_err.is_invalid_argument());
        assert!(key_err.is_invalid_argument());
        assert!(!ModelError::Config("bad".to_string()).is_invalid_argument());
    }
}
