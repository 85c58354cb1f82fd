// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Generic JSON-over-HTTP client with timeout and response caching

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

pub use reqwest::Method;

use crate::cache::ResponseCache;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::response::{ApiResponse, FailureKind, ResponseBody};

/// Per-request options
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers; these override the JSON defaults
    pub headers: Vec<(String, String)>,
    /// JSON body, serialized as-is
    pub body: Option<serde_json::Value>,
    /// Overrides the client's timeout for this request
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client for the agent-management backend.
///
/// Cloning is cheap; clones share the connection pool and the cache.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    cache: ResponseCache,
}

impl HttpClient {
    /// Create a client with a fresh cache using the configured TTL.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_cache(config, ResponseCache::new(config.cache_ttl))
    }

    /// Create a client around an existing cache.
    pub fn with_cache(config: &ClientConfig, cache: ResponseCache) -> Result<Self, ClientError> {
        url::Url::parse(&config.base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        // reqwest is built without a bundled crypto provider; install ring
        // once per process. Later calls find it installed and are no-ops.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .user_agent(concat!("agent-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Drop cached responses, all of them or those whose URL contains
    /// `pattern`.
    pub fn clear_cache(&self, pattern: Option<&str>) {
        let removed = self.cache.clear(pattern);
        debug!(?pattern, removed, "Cleared response cache");
    }

    /// Issue a request and normalize the outcome. Never fails.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ApiResponse {
        let url = format!("{}{}", self.base_url, endpoint);
        let timeout = options.timeout.unwrap_or(self.timeout);
        let is_get = options.method == Method::GET;

        if is_get {
            if let Some(body) = self.cache.get(&url) {
                debug!(%url, "Cache hit");
                return ApiResponse::ok(200, Some(body));
            }
        }

        let headers = match build_headers(&options.headers) {
            Ok(headers) => headers,
            Err(message) => {
                warn!(%url, %message, "Request not sent");
                return ApiResponse::failed(FailureKind::Network, 0, message);
            }
        };

        debug!(method = %options.method, %url, body = ?options.body, "Sending request");

        let mut builder = self.http.request(options.method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        // The deadline covers the whole exchange, body included.
        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        };

        let (status, text) = match tokio::time::timeout(timeout, exchange).await {
            Err(_) => return timeout_failure(&url, timeout),
            Ok(Err(e)) if e.is_timeout() => return timeout_failure(&url, timeout),
            Ok(Err(e)) => {
                warn!(%url, error = %e, "Request failed");
                return ApiResponse::failed(FailureKind::Network, 0, e.to_string());
            }
            Ok(Ok(exchange)) => exchange,
        };

        let body = ResponseBody::parse(text);
        debug!(%url, status = status.as_u16(), body = ?body, "Response");

        if !status.is_success() {
            let detail = body
                .as_ref()
                .map(ResponseBody::to_string)
                .unwrap_or_else(|| "null".to_string());
            let message = format!("HTTP {}: {}", status.as_u16(), detail);
            warn!(%url, %message, "Request returned an error status");
            return ApiResponse::failed(FailureKind::Http, status.as_u16(), message);
        }

        if is_get {
            if let Some(body) = &body {
                self.cache.insert(url, body.clone());
            }
        }

        ApiResponse::ok(status.as_u16(), body)
    }

    pub async fn get(&self, endpoint: &str, options: RequestOptions) -> ApiResponse {
        self.request(
            endpoint,
            RequestOptions {
                method: Method::GET,
                ..options
            },
        )
        .await
    }

    pub async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
        options: RequestOptions,
    ) -> ApiResponse {
        self.request(
            endpoint,
            RequestOptions {
                method: Method::POST,
                body: Some(body),
                ..options
            },
        )
        .await
    }

    pub async fn put(
        &self,
        endpoint: &str,
        body: serde_json::Value,
        options: RequestOptions,
    ) -> ApiResponse {
        self.request(
            endpoint,
            RequestOptions {
                method: Method::PUT,
                body: Some(body),
                ..options
            },
        )
        .await
    }

    pub async fn delete(&self, endpoint: &str, options: RequestOptions) -> ApiResponse {
        self.request(
            endpoint,
            RequestOptions {
                method: Method::DELETE,
                ..options
            },
        )
        .await
    }
}

fn timeout_failure(url: &str, timeout: Duration) -> ApiResponse {
    let message = format!("Request timeout ({}ms)", timeout.as_millis());
    warn!(%url, %message, "Request timed out");
    ApiResponse::failed(FailureKind::Timeout, 0, message)
}

/// JSON defaults first, caller headers on top.
fn build_headers(extra: &[(String, String)]) -> Result<HeaderMap, String> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| format!("Invalid header name '{}': {}", name, e))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| format!("Invalid header value for '{}': {}", name, e))?;
        headers.insert(name, value);
    }

    Ok(headers)
}
