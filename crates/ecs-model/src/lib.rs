// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! ECS Model
//!
//! Typed request, response and value records for the Amazon ECS container
//! orchestration API.
//!
//! The crate is data only. It builds the records a client sends, decodes the
//! records the service answers with, and prepares the JSON protocol envelope
//! (target header, content type, body) for a transport that lives elsewhere.
//!
//! # Overview
//!
//! - [`model`]: clusters, services, tasks, task definitions and their nested records
//! - [`operations`]: one `*Request`/`*Response` pair per operation
//! - [`WireEnum`]: strict literal lookup for every closed value set
//! - [`RequestEnvelope`]: custom headers and query parameters, and the hand-off to the transport
//!
//! # Example
//!
//! ```
//! use ecs_model::{
//!     AssignPublicIp, AwsVpcConfiguration, LaunchType, NetworkConfiguration, RequestEnvelope,
//!     RunTaskRequest, SdkConfig, Tag,
//! };
//!
//! let request = RunTaskRequest::new()
//!     .with_cluster("production")
//!     .with_task_definition("web:7")
//!     .with_launch_type(LaunchType::Fargate)
//!     .with_network_configuration(
//!         NetworkConfiguration::new().with_awsvpc_configuration(
//!             AwsVpcConfiguration::new()
//!                 .with_subnets(["subnet-1", "subnet-2"])
//!                 .with_assign_public_ip(AssignPublicIp::Disabled),
//!         ),
//!     )
//!     .with_tags([Tag::new().with_key("team").with_value("edge")]);
//!
//! let prepared = RequestEnvelope::new(request)
//!     .with_custom_header("X-Trace", "abc")
//!     .prepare(&SdkConfig::default())?;
//!
//! assert_eq!(
//!     prepared.header("x-amz-target"),
//!     Some("AmazonEC2ContainerServiceV20141113.RunTask")
//! );
//! # Ok::<(), ecs_model::ModelError>(())
//! ```

mod config;
mod error;
mod request;
mod service_error;
mod wire;

pub mod model;
pub mod operations;

pub use config::{DEFAULT_REGION, DEFAULT_TARGET_PREFIX, SdkConfig};
pub use error::{ModelError, Result};
pub use model::*;
pub use operations::*;
pub use request::{
    JSON_CONTENT_TYPE, OperationRequest, PreparedRequest, RequestEnvelope, TARGET_HEADER,
    decode_response, parse_response,
};
pub use service_error::{ServiceError, ServiceErrorKind};
pub use wire::WireEnum;
