// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Ticket types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{AgentKey, null_as_default};

/// A support ticket assigned to an agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ticket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticket_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Ticket state (open, pending, resolved, ...)
    #[serde(default, alias = "account_status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Owning agent, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<AgentKey>,
}

/// Response from the agent tickets endpoint
///
/// Depending on the backend version the ticket list arrives as `tickets` or
/// `data`, and the total as `total_records`, `total` or `total_tickets`.
/// Use [`AgentTicketsResponse::into_page`] rather than reading the fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AgentTicketsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<Ticket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Ticket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tickets: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl AgentTicketsResponse {
    /// Resolve the alternate field names into the ticket list and total.
    ///
    /// Zero totals are treated as absent so that a later field, or the
    /// length of the list, can supply the count.
    pub fn into_page(self) -> (Vec<Ticket>, u64) {
        let total = [self.total_records, self.total, self.total_tickets]
            .into_iter()
            .flatten()
            .find(|t| *t > 0);
        let tickets = self.tickets.or(self.data).unwrap_or_default();
        let total = total.unwrap_or(tickets.len() as u64);
        (tickets, total)
    }
}
