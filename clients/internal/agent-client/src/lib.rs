// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Agent-management Client Library
//!
//! Two layers:
//!
//! - [`HttpClient`] is a generic JSON-over-HTTP client. It applies a
//!   per-request timeout, caches `GET` responses for a fixed TTL in an
//!   explicit [`ResponseCache`], and never fails: every outcome, including
//!   timeouts, transport errors and non-2xx statuses, is folded into an
//!   [`ApiResponse`].
//! - [`AgentClient`] builds the agent-management payloads on top of it and
//!   decodes the responses into the types from `agent-api`.
//!
//! ## Usage
//!
//! ```ignore
//! use agent_client::{AgentClient, ClientConfig};
//! use agent_api::ListAgentsRequest;
//!
//! let client = AgentClient::new(&ClientConfig::from_env())?;
//! let page = client.list_agents(&ListAgentsRequest::default()).await?;
//! println!("{} agents", page.total_agents.unwrap_or(0));
//! ```
//!
//! The client performs no retries; callers decide on retry policy from
//! the [`FailureKind`] of a failed response.

mod agents;
mod cache;
mod config;
mod error;
mod http;
mod response;

pub use agents::AgentClient;
pub use cache::{Clock, DEFAULT_CACHE_TTL, ManualClock, ResponseCache, SystemClock};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use http::{HttpClient, Method, RequestOptions};
pub use response::{ApiResponse, FailureKind, RequestFailure, ResponseBody};

// Re-export the wire types so consumers need only one dependency
pub use agent_api as types;
