// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Normalized request outcomes

use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

/// A response body, decoded as JSON when possible.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    /// The body was not valid JSON; the raw text is passed through.
    Text(String),
}

impl ResponseBody {
    /// Decode raw response text. Empty bodies have no representation.
    pub fn parse(text: String) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        match serde_json::from_str(&text) {
            Ok(value) => Some(Self::Json(value)),
            Err(_) => Some(Self::Text(text)),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ResponseBody {
    /// Raw text as-is, JSON in compact form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Why a request did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response arrived within the configured timeout
    Timeout,
    /// The request could not be sent or the connection failed
    Network,
    /// The server answered with a non-2xx status
    Http,
    /// The server answered 2xx but the body is not what the caller needs
    Rejected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Timeout => "timeout",
            Self::Network => "network",
            Self::Http => "http",
            Self::Rejected => "rejected",
        };
        write!(f, "{}", name)
    }
}

/// Uniform result of [`crate::HttpClient::request`].
///
/// `status_code` is 0 when no HTTP response was received.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<ResponseBody>,
    pub error: Option<String>,
    pub status_code: u16,
    /// Set exactly when `success` is false
    pub failure: Option<FailureKind>,
}

impl ApiResponse {
    pub fn ok(status_code: u16, data: Option<ResponseBody>) -> Self {
        Self {
            success: true,
            data,
            error: None,
            status_code,
            failure: None,
        }
    }

    pub fn failed(kind: FailureKind, status_code: u16, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status_code,
            failure: Some(kind),
        }
    }

    /// Split into the body on success or a [`RequestFailure`].
    pub fn into_result(self) -> Result<Option<ResponseBody>, RequestFailure> {
        if self.success {
            return Ok(self.data);
        }
        Err(RequestFailure {
            kind: self.failure.unwrap_or(FailureKind::Network),
            status_code: self.status_code,
            message: self
                .error
                .unwrap_or_else(|| "Unknown error".to_string()),
        })
    }

    /// Decode a successful JSON body into `T`.
    ///
    /// A successful response whose body is missing, not JSON, or not shaped
    /// like `T` becomes a [`FailureKind::Rejected`] failure.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, RequestFailure> {
        let status_code = self.status_code;
        match self.into_result()? {
            Some(ResponseBody::Json(value)) => serde_json::from_value(value).map_err(|e| {
                RequestFailure::new(
                    FailureKind::Rejected,
                    status_code,
                    format!("Unexpected response shape: {}", e),
                )
            }),
            Some(ResponseBody::Text(text)) => Err(RequestFailure::new(
                FailureKind::Rejected,
                status_code,
                format!("Expected JSON response, got: {}", text),
            )),
            None => Err(RequestFailure::new(
                FailureKind::Rejected,
                status_code,
                "Empty response body",
            )),
        }
    }
}

/// A failed request, as handed to callers that work with `Result`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailure {
    pub kind: FailureKind,
    pub status_code: u16,
    pub message: String,
}

impl RequestFailure {
    pub fn new(kind: FailureKind, status_code: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            status_code,
            message: message.into(),
        }
    }
}
