// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Records and enums exchanged with the container service.
//!
//! Records are plain data: every field is optional, public and serialized
//! under its camelCase wire name, and absent fields are left out of the JSON.
//! `with_*` builders set a field and return the record; on list fields they
//! append instead of replacing.

mod capacity;
mod cluster;
mod container_instance;
mod enums;
mod service;
mod shared;
mod task;
mod task_definition;
mod task_set;

pub use capacity::*;
pub use cluster::*;
pub use container_instance::*;
pub use enums::*;
pub use service::*;
pub use shared::*;
pub use task::*;
pub use task_definition::*;
pub use task_set::*;
