// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Account setting operations.

use serde::{Deserialize, Serialize};

use crate::model::{Setting, SettingName};
use crate::request::OperationRequest;
use crate::wire::record_display;

/// Input of `PutAccountSetting`: change an account setting for the caller or one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAccountSettingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<SettingName>,
    /// `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Principal to change the setting for; the caller when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_arn: Option<String>,
}

impl PutAccountSettingRequest {
    /// Create an empty `PutAccountSettingRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: SettingName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the principal ARN.
    pub fn with_principal_arn(mut self, principal_arn: impl Into<String>) -> Self {
        self.principal_arn = Some(principal_arn.into());
        self
    }
}

impl OperationRequest for PutAccountSettingRequest {
    const OPERATION: &'static str = "PutAccountSetting";
    type Response = PutAccountSettingResponse;
}

/// Output of `PutAccountSetting`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAccountSettingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<Setting>,
}

impl PutAccountSettingResponse {
    /// Create an empty `PutAccountSettingResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(mut self, setting: Setting) -> Self {
        self.setting = Some(setting);
        self
    }
}

/// Input of `PutAccountSettingDefault`: change the default of an account setting for every principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAccountSettingDefaultRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<SettingName>,
    /// `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl PutAccountSettingDefaultRequest {
    /// Create an empty `PutAccountSettingDefaultRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: SettingName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl OperationRequest for PutAccountSettingDefaultRequest {
    const OPERATION: &'static str = "PutAccountSettingDefault";
    type Response = PutAccountSettingDefaultResponse;
}

/// Output of `PutAccountSettingDefault`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAccountSettingDefaultResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<Setting>,
}

impl PutAccountSettingDefaultResponse {
    /// Create an empty `PutAccountSettingDefaultResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(mut self, setting: Setting) -> Self {
        self.setting = Some(setting);
        self
    }
}

/// Input of `DeleteAccountSetting`: drop an account setting override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountSettingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<SettingName>,
    /// Principal to drop the override for; the caller when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_arn: Option<String>,
}

impl DeleteAccountSettingRequest {
    /// Create an empty `DeleteAccountSettingRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: SettingName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the principal ARN.
    pub fn with_principal_arn(mut self, principal_arn: impl Into<String>) -> Self {
        self.principal_arn = Some(principal_arn.into());
        self
    }
}

impl OperationRequest for DeleteAccountSettingRequest {
    const OPERATION: &'static str = "DeleteAccountSetting";
    type Response = DeleteAccountSettingResponse;
}

/// Output of `DeleteAccountSetting`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountSettingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<Setting>,
}

impl DeleteAccountSettingResponse {
    /// Create an empty `DeleteAccountSettingResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(mut self, setting: Setting) -> Self {
        self.setting = Some(setting);
        self
    }
}

/// Input of `ListAccountSettings`: list account settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccountSettingsRequest {
    /// Only this setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<SettingName>,
    /// Only settings with this value; requires `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_arn: Option<String>,
    /// Return the effective value instead of explicit overrides only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size (1 to 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListAccountSettingsRequest {
    /// Create an empty `ListAccountSettingsRequest`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: SettingName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_principal_arn(mut self, principal_arn: impl Into<String>) -> Self {
        self.principal_arn = Some(principal_arn.into());
        self
    }

    /// Set the effective settings.
    pub fn with_effective_settings(mut self, effective_settings: bool) -> Self {
        self.effective_settings = Some(effective_settings);
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

impl OperationRequest for ListAccountSettingsRequest {
    const OPERATION: &'static str = "ListAccountSettings";
    type Response = ListAccountSettingsResponse;
}

/// Output of `ListAccountSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccountSettingsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<Setting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListAccountSettingsResponse {
    /// Create an empty `ListAccountSettingsResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: impl IntoIterator<Item = Setting>) -> Self {
        self.settings.get_or_insert_with(Vec::new).extend(settings);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

record_display!(
    PutAccountSettingRequest,
    PutAccountSettingResponse,
    PutAccountSettingDefaultRequest,
    PutAccountSettingDefaultResponse,
    DeleteAccountSettingRequest,
    DeleteAccountSettingResponse,
    ListAccountSettingsRequest,
    ListAccountSettingsResponse,
);
