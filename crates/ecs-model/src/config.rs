// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration handed to the transport along with prepared requests.

use crate::error::{ModelError, Result};

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Prefix of the `X-Amz-Target` header value.
pub const DEFAULT_TARGET_PREFIX: &str = "AmazonEC2ContainerServiceV20141113";

/// Endpoint and protocol settings for the container service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Region the requests are addressed to.
    pub region: String,
    /// Explicit endpoint, overriding the one derived from the region.
    pub endpoint: Option<String>,
    /// Use `https` when the endpoint carries no scheme.
    pub use_https: bool,
    /// Prefix of the `X-Amz-Target` header value.
    pub target_prefix: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            use_https: true,
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
        }
    }
}

impl SdkConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ECS_REGION`, then `AWS_REGION`: region (default: "us-east-1")
    /// - `ECS_ENDPOINT`: endpoint override (default: derived from the region)
    /// - `ECS_USE_HTTPS`: "true"/"1" or "false"/"0" (default: "true")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let region = lookup("ECS_REGION")
            .or_else(|| lookup("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        validate_region(&region)?;

        let endpoint = lookup("ECS_ENDPOINT").filter(|e| !e.trim().is_empty());

        let use_https = match lookup("ECS_USE_HTTPS") {
            None => true,
            Some(v) => match v.to_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ModelError::Config(format!(
                        "invalid ECS_USE_HTTPS: {}",
                        v
                    )));
                }
            },
        };

        Ok(Self {
            region,
            endpoint,
            use_https,
            ..Self::default()
        })
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set an explicit endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Choose between `https` and `http` for scheme-less endpoints.
    pub fn with_use_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Set the `X-Amz-Target` prefix.
    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = prefix.into();
        self
    }

    /// Resolve the endpoint URL requests are posted to.
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        match &self.endpoint {
            Some(endpoint) if endpoint.contains("://") => {
                endpoint.trim_end_matches('/').to_string()
            }
            Some(endpoint) => format!("{}://{}", scheme, endpoint.trim_end_matches('/')),
            None => {
                let suffix = if self.region.starts_with("cn-") {
                    "amazonaws.com.cn"
                } else {
                    "amazonaws.com"
                };
                format!("{}://ecs.{}.{}", scheme, self.region, suffix)
            }
        }
    }
}

fn validate_region(region: &str) -> Result<()> {
    if region.is_empty()
        || !region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ModelError::Config(format!("invalid region: {:?}", region)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SdkConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert!(config.endpoint.is_none());
        assert!(config.use_https);
        assert_eq!(config.endpoint_url(), "https://ecs.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_builder_methods() {
        let config = SdkConfig::new()
            .with_region("eu-west-1")
            .with_endpoint("localhost:4566")
            .with_use_https(false)
            .with_target_prefix("Custom");

        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint_url(), "http://localhost:4566");
        assert_eq!(config.target_prefix, "Custom");
    }

    #[test]
    fn test_endpoint_with_scheme_is_kept() {
        let config = SdkConfig::new().with_endpoint("http://127.0.0.1:4566/");
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:4566");
    }

    #[test]
    fn test_china_region_suffix() {
        let config = SdkConfig::new().with_region("cn-north-1");
        assert_eq!(config.endpoint_url(), "https://ecs.cn-north-1.amazonaws.com.cn");
    }

    #[test]
    fn test_from_lookup_prefers_ecs_region() {
        let config =
            SdkConfig::from_lookup(lookup_from(&[("ECS_REGION", "ap-south-1"), ("AWS_REGION", "us-west-2")]))
                .unwrap();
        assert_eq!(config.region, "ap-south-1");

        let config = SdkConfig::from_lookup(lookup_from(&[("AWS_REGION", "us-west-2")])).unwrap();
        assert_eq!(config.region, "us-west-2");
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err = SdkConfig::from_lookup(lookup_from(&[("ECS_USE_HTTPS", "maybe")])).unwrap_err();
        assert!(matches!(err, ModelError::Config(_)));

        let err = SdkConfig::from_lookup(lookup_from(&[("ECS_REGION", "US EAST")])).unwrap_err();
        assert!(matches!(err, ModelError::Config(_)));
    }

    #[test]
    fn test_from_lookup_ignores_blank_endpoint() {
        let config = SdkConfig::from_lookup(lookup_from(&[("ECS_ENDPOINT", "  ")])).unwrap();
        assert!(config.endpoint.is_none());
    }
}
