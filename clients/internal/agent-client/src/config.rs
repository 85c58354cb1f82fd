// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration

use std::time::Duration;

use agent_api::DEFAULT_APP_ID;

use crate::cache::DEFAULT_CACHE_TTL;

/// Default backend URL (the stub server's default bind address)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9090";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL that endpoint paths are appended to
    pub base_url: String,
    /// Time allowed for a request, including reading the response body
    pub timeout: Duration,
    /// How long a cached `GET` response stays fresh
    pub cache_ttl: Duration,
    /// Application the agents belong to
    pub app_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            app_id: DEFAULT_APP_ID.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `AGENT_API_URL`, `AGENT_API_TIMEOUT_MS`,
    /// `AGENT_API_CACHE_TTL_SECS` and `AGENT_APP_ID`. Missing or
    /// unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup("AGENT_API_URL").unwrap_or(defaults.base_url);

        let timeout = lookup("AGENT_API_TIMEOUT_MS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.timeout);

        let cache_ttl = lookup("AGENT_API_CACHE_TTL_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_ttl);

        let app_id = lookup("AGENT_APP_ID").unwrap_or(defaults.app_id);

        Self {
            base_url,
            timeout,
            cache_ttl,
            app_id,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }
}
