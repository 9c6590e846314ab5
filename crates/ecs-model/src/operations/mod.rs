// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request and response records, one pair per service operation.
//!
//! Each `*Request` implements [`OperationRequest`](crate::OperationRequest),
//! naming the operation and the `*Response` record it is answered with.

mod account_setting;
mod attribute;
mod capacity_provider;
mod cluster;
mod container_instance;
mod service;
mod tagging;
mod task;
mod task_definition;
mod task_set;

pub use account_setting::*;
pub use attribute::*;
pub use capacity_provider::*;
pub use cluster::*;
pub use container_instance::*;
pub use service::*;
pub use tagging::*;
pub use task::*;
pub use task_definition::*;
pub use task_set::*;
