// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request envelope: the hand-off point to the external transport.
//!
//! Every `*Request` record implements [`OperationRequest`], which ties it to
//! its operation name and response record. [`RequestEnvelope`] carries the
//! cross-cutting request metadata (custom headers and query parameters) next
//! to the record without becoming part of the record's equality, and
//! [`RequestEnvelope::prepare`] turns both into a [`PreparedRequest`] that a
//! transport can sign and send.

use std::collections::BTreeMap;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::SdkConfig;
use crate::error::Result;
use crate::service_error::ServiceError;

/// Content type of the JSON protocol.
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header naming the invoked operation.
pub const TARGET_HEADER: &str = "X-Amz-Target";

/// A request record bound to one service operation.
pub trait OperationRequest: Serialize {
    /// Wire name of the operation (e.g. `CreateCluster`).
    const OPERATION: &'static str;

    /// Record the service answers with.
    type Response: DeserializeOwned;

    /// Value of the `X-Amz-Target` header for the given prefix.
    fn target(prefix: &str) -> String {
        format!("{}.{}", prefix, Self::OPERATION)
    }
}

/// A request record plus per-call metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope<R> {
    request: R,
    custom_headers: BTreeMap<String, String>,
    custom_query_parameters: BTreeMap<String, Vec<String>>,
}

impl<R: OperationRequest> RequestEnvelope<R> {
    /// Wrap a request record.
    pub fn new(request: R) -> Self {
        Self {
            request,
            custom_headers: BTreeMap::new(),
            custom_query_parameters: BTreeMap::new(),
        }
    }

    /// The wrapped request record.
    pub fn request(&self) -> &R {
        &self.request
    }

    /// Unwrap the request record.
    pub fn into_request(self) -> R {
        self.request
    }

    /// Set a custom header. A later value for the same name replaces the earlier one.
    pub fn with_custom_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(name.into(), value.into());
        self
    }

    /// Add a custom query parameter. Repeated names keep every value.
    pub fn with_custom_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.custom_query_parameters
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Custom headers set so far.
    pub fn custom_headers(&self) -> &BTreeMap<String, String> {
        &self.custom_headers
    }

    /// Custom query parameters set so far.
    pub fn custom_query_parameters(&self) -> &BTreeMap<String, Vec<String>> {
        &self.custom_query_parameters
    }

    /// Serialize the record and assemble everything the transport needs.
    #[instrument(skip_all, fields(operation = R::OPERATION))]
    pub fn prepare(&self, config: &SdkConfig) -> Result<PreparedRequest> {
        let body = serde_json::to_vec(&self.request)?;

        let mut url = format!("{}/", config.endpoint_url());
        if !self.custom_query_parameters.is_empty() {
            let query: Vec<String> = self
                .custom_query_parameters
                .iter()
                .flat_map(|(name, values)| {
                    values.iter().map(move |value| {
                        format!(
                            "{}={}",
                            utf8_percent_encode(name, NON_ALPHANUMERIC),
                            utf8_percent_encode(value, NON_ALPHANUMERIC)
                        )
                    })
                })
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }

        let mut headers = vec![
            (TARGET_HEADER.to_string(), R::target(&config.target_prefix)),
            ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
        ];
        headers.extend(
            self.custom_headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        debug!(url = %url, body_len = body.len(), "Prepared request");

        Ok(PreparedRequest {
            operation: R::OPERATION,
            method: "POST",
            url,
            headers,
            body,
        })
    }
}

impl<R: OperationRequest> From<R> for RequestEnvelope<R> {
    fn from(request: R) -> Self {
        Self::new(request)
    }
}

/// A serialized request, ready for signing and sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Operation name.
    pub operation: &'static str,
    /// HTTP method (always `POST` for the JSON protocol).
    pub method: &'static str,
    /// Full URL including custom query parameters.
    pub url: String,
    /// Protocol headers followed by custom headers.
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: Vec<u8>,
}

impl PreparedRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Decode a successful response body into the operation's response record.
///
/// An empty body decodes like `{}`.
pub fn parse_response<R: OperationRequest>(body: &[u8]) -> Result<R::Response> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    Ok(serde_json::from_slice(body)?)
}

/// Decode a response by HTTP status: 2xx bodies become the response record,
/// anything else is decoded as a [`ServiceError`].
///
/// An error body that is not a JSON error document (a proxy page, an empty
/// body) still yields a [`ServiceError`], with the status as its code and the
/// body text as its message.
pub fn decode_response<R: OperationRequest>(status: u16, body: &[u8]) -> Result<R::Response> {
    if (200..300).contains(&status) {
        return parse_response::<R>(body);
    }

    let service_error = ServiceError::from_body(body).unwrap_or_else(|err| {
        debug!(status, error = %err, "Error body is not a service error document");
        ServiceError {
            kind: None,
            code: status.to_string(),
            message: String::from_utf8_lossy(body).trim().to_string(),
        }
    });
    Err(service_error.into())
}
