// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Agent records as the backend returns them
//!
//! The backend is loose about field names and presence: the identifier may
//! arrive as `agent_id` or `id`, contact details under either the backend
//! or the UI name, and metrics may be missing entirely. These types accept
//! all of it and leave normalization to the consumer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{AgentKey, lenient_f64, null_as_default};

/// One agent as it appears in a list response
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AgentRecord {
    /// Backend key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<AgentKey>,
    /// Alternate identifier field used by some responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AgentKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    /// Account status as stored by the backend (case not guaranteed)
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_status: String,
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub performance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Timestamp of last activity; absent for agents that never logged in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets_count: Option<u64>,
    #[serde(
        default,
        rename = "avgResponseTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_response_time: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub specialties: Vec<String>,
}

impl AgentRecord {
    /// The backend key, preferring `agent_id` over `id`.
    pub fn key(&self) -> Option<&AgentKey> {
        self.agent_id.as_ref().or(self.id.as_ref())
    }
}

/// Response from the agent listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AgentListResponse {
    /// Agents on the requested page
    #[serde(default, deserialize_with = "null_as_default")]
    pub agents: Vec<AgentRecord>,
    /// Number of agents matching the filters across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_agents: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Extended agent profile from the detail endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AgentDetailRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<AgentKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AgentKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_status: String,
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tickets: Option<u64>,
    /// Average response time in minutes
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_response_time: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub performance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
}

impl AgentDetailRecord {
    pub fn key(&self) -> Option<&AgentKey> {
        self.agent_id.as_ref().or(self.id.as_ref())
    }
}
