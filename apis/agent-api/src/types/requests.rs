// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request bodies
//!
//! Every field is always sent, using empty strings and arrays for absent
//! filters; the backend does not accept missing keys.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{AgentKey, DEFAULT_APP_ID, SortOrder};

/// Body for `POST /agent/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListAgentsRequest {
    #[serde(default)]
    pub search: String,
    /// Account statuses to include; empty means all
    #[serde(default)]
    pub account_status: Vec<String>,
    pub app_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
    #[serde(default = "default_ticket_page")]
    pub ticket_page: u32,
    #[serde(default = "default_ticket_limit")]
    pub ticket_limit: u32,
}

fn default_ticket_page() -> u32 {
    1
}

fn default_ticket_limit() -> u32 {
    10
}

impl Default for ListAgentsRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            account_status: Vec::new(),
            app_id: DEFAULT_APP_ID.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            sort_order: SortOrder::Asc,
            page: 1,
            limit: 10,
            ticket_page: default_ticket_page(),
            ticket_limit: default_ticket_limit(),
        }
    }
}

/// Body for `POST /agent/detail/page`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AgentDetailRequest {
    pub agent_id: AgentKey,
    pub app_id: String,
}

/// Body for `POST /tickets/agent/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AgentTicketsRequest {
    #[serde(default)]
    pub search: String,
    pub app_id: String,
    pub agent_id: AgentKey,
    /// Id of the user issuing the request
    #[serde(default = "default_user_id")]
    pub user_id: u64,
    #[serde(default = "default_user_role")]
    pub user_role: String,
    #[serde(default)]
    pub priority: Vec<String>,
    #[serde(default)]
    pub account_status: Vec<String>,
    /// Ticket category ids; sent as `[]` when unfiltered
    #[serde(default)]
    pub category: Vec<u64>,
    #[serde(default)]
    pub sort_by: String,
    #[serde(default = "default_ticket_sort")]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    pub page: u32,
    pub limit: u32,
}

fn default_user_id() -> u64 {
    1
}

fn default_user_role() -> String {
    "agent".to_string()
}

fn default_ticket_sort() -> SortOrder {
    SortOrder::Desc
}

impl AgentTicketsRequest {
    /// First page of an agent's tickets with the backend's default filters.
    pub fn new(agent_id: AgentKey, app_id: impl Into<String>) -> Self {
        Self {
            search: String::new(),
            app_id: app_id.into(),
            agent_id,
            user_id: default_user_id(),
            user_role: default_user_role(),
            priority: Vec::new(),
            account_status: Vec::new(),
            category: Vec::new(),
            sort_by: String::new(),
            sort_order: default_ticket_sort(),
            start_date: String::new(),
            end_date: String::new(),
            page: 1,
            limit: 10,
        }
    }
}

/// Body for `PUT /agent/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UpdateStatusRequest {
    pub app_id: String,
    pub agent_id: AgentKey,
    pub status: String,
}

/// Body for `POST /agent/delete`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeleteAgentRequest {
    pub app_id: String,
    pub agent_id: AgentKey,
}

/// Acknowledgement returned by the mutation endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MutationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
