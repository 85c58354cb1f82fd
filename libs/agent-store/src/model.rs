// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Agent records as held by the store
//!
//! Backend records are normalized exactly once, on the way in. Each record
//! gets a single canonical string `id` derived from whichever identifier
//! field the backend supplied; all matching inside the store uses that id.
//! The key as received is kept in `backend_key` so requests echo it back in
//! the form the backend sent it.

use agent_api::{AgentDetailRecord, AgentKey, AgentRecord};
use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::status::StatusKind;

const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?img=";
const AVATAR_COUNT: u64 = 70;

const DEFAULT_ROLE: &str = "Agent";
const DEFAULT_TEAM: &str = "Unassigned";
const DEFAULT_RESPONSE_TIME: &str = "0m 0s";

/// Derived presence indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    Online,
    Offline,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "Online"),
            Self::Offline => write!(f, "Offline"),
        }
    }
}

/// One row of the agent list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    pub id: String,
    pub backend_key: AgentKey,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub role: String,
    pub team: String,
    /// As returned by the backend; compare through [`Agent::status_kind`]
    pub account_status: String,
    pub tickets_closed: u64,
    pub avg_response_time: String,
    /// 0..=100
    pub performance_score: u8,
    pub avatar: String,
    pub last_active: Option<String>,
    pub specialties: Vec<String>,
}

impl Agent {
    /// Normalize a list record. Records without any identifier cannot be
    /// addressed by later mutations and are dropped.
    pub fn from_record(record: AgentRecord) -> Option<Self> {
        let Some(key) = record.key().cloned() else {
            warn!(name = %record.name, "Dropping agent record without an identifier");
            return None;
        };

        Some(Self {
            id: key.to_string(),
            avatar: avatar_for(record.profile_picture.as_deref(), &key),
            backend_key: key,
            name: record.name,
            email: record.email,
            phone: first_non_empty(&[record.contact_no.as_deref(), record.phone.as_deref()])
                .unwrap_or_default(),
            location: first_non_empty(&[record.address.as_deref(), record.location.as_deref()])
                .unwrap_or_default(),
            role: first_non_empty(&[record.role.as_deref()])
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            team: first_non_empty(&[record.team.as_deref()])
                .unwrap_or_else(|| DEFAULT_TEAM.to_string()),
            account_status: record.account_status,
            tickets_closed: record.tickets_count.unwrap_or(0),
            avg_response_time: first_non_empty(&[record.avg_response_time.as_deref()])
                .unwrap_or_else(|| DEFAULT_RESPONSE_TIME.to_string()),
            performance_score: clamp_score(record.performance_score),
            last_active: record.last_active.filter(|s| !s.trim().is_empty()),
            specialties: record.specialties,
        })
    }

    pub fn availability(&self) -> Availability {
        if self.last_active.is_some() {
            Availability::Online
        } else {
            Availability::Offline
        }
    }

    pub fn status_kind(&self) -> StatusKind {
        StatusKind::classify(&self.account_status)
    }
}

/// Extended profile shown on the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDetail {
    pub id: String,
    pub backend_key: AgentKey,
    pub app_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub role: String,
    pub team: String,
    pub account_status: String,
    /// One decimal place, "0.0" when unrated
    pub agent_rating: String,
    pub avatar: String,
    pub tickets_closed: u64,
    /// Whole minutes
    pub avg_response_time: String,
    pub performance_score: u8,
    pub last_active: Option<String>,
}

impl AgentDetail {
    /// Normalize a detail record. `requested` stands in for the identifier
    /// when the backend omits it.
    pub fn from_record(record: AgentDetailRecord, requested: &AgentKey) -> Self {
        let key = record.key().cloned().unwrap_or_else(|| requested.clone());

        let agent_rating = match record.agent_rating {
            Some(rating) if rating != 0.0 => format!("{:.1}", rating),
            _ => "0.0".to_string(),
        };
        let avg_response_time = match record.avg_response_time {
            Some(minutes) if minutes != 0.0 => format!("{}", minutes.floor() as i64),
            _ => "0".to_string(),
        };

        Self {
            id: key.to_string(),
            avatar: avatar_for(record.profile_picture.as_deref(), &key),
            backend_key: key,
            app_id: record.app_id,
            name: first_non_empty(&[record.agent_name.as_deref(), record.name.as_deref()])
                .unwrap_or_default(),
            email: record.email,
            phone: first_non_empty(&[record.contact_no.as_deref(), record.phone.as_deref()])
                .unwrap_or_default(),
            location: first_non_empty(&[record.address.as_deref(), record.location.as_deref()])
                .unwrap_or_default(),
            role: first_non_empty(&[record.role.as_deref()])
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            team: first_non_empty(&[record.team.as_deref()])
                .unwrap_or_else(|| DEFAULT_TEAM.to_string()),
            account_status: record.account_status,
            agent_rating,
            tickets_closed: record.total_tickets.unwrap_or(0),
            avg_response_time,
            performance_score: clamp_score(record.performance_score),
            last_active: record.last_active.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn status_kind(&self) -> StatusKind {
        StatusKind::classify(&self.account_status)
    }
}

/// Placeholder avatar for an agent, stable for a given key.
pub fn avatar_url(key: &AgentKey) -> String {
    let seed = match key.as_u64() {
        Some(n) => n,
        None => key.to_string().bytes().map(u64::from).sum(),
    };
    format!("{}{}", AVATAR_BASE_URL, seed % AVATAR_COUNT + 1)
}

fn avatar_for(profile_picture: Option<&str>, key: &AgentKey) -> String {
    first_non_empty(&[profile_picture]).unwrap_or_else(|| avatar_url(key))
}

fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
}

fn clamp_score(score: Option<f64>) -> u8 {
    match score {
        Some(s) if s.is_finite() => s.clamp(0.0, 100.0).round() as u8,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: serde_json::Value) -> AgentRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_list_record_defaults() {
        let agent = Agent::from_record(record(json!({
            "agent_id": 7,
            "name": "Sarah Chen",
            "email": "sarah@example.com",
            "account_status": "Active"
        })))
        .unwrap();

        assert_eq!(agent.id, "7");
        assert_eq!(agent.backend_key, AgentKey::Numeric(7));
        assert_eq!(agent.role, "Agent");
        assert_eq!(agent.team, "Unassigned");
        assert_eq!(agent.phone, "");
        assert_eq!(agent.avg_response_time, "0m 0s");
        assert_eq!(agent.performance_score, 0);
        assert_eq!(agent.tickets_closed, 0);
        assert_eq!(agent.avatar, "https://i.pravatar.cc/150?img=8");
        assert_eq!(agent.availability(), Availability::Offline);
        assert_eq!(agent.status_kind(), StatusKind::Active);
    }

    #[test]
    fn test_list_record_field_mapping() {
        let agent = Agent::from_record(record(json!({
            "id": "12",
            "name": "Marcus",
            "email": "marcus@example.com",
            "contact_no": "",
            "phone": "+1 555 0100",
            "address": "Austin, TX",
            "role": "Senior Agent",
            "account_status": "blocked",
            "performance_score": "104.2",
            "profile_picture": "https://cdn.example.com/m.png",
            "last_active": "2024-05-01T10:00:00Z",
            "tickets_count": 88,
            "avgResponseTime": "2m 10s"
        })))
        .unwrap();

        assert_eq!(agent.id, "12");
        assert_eq!(agent.phone, "+1 555 0100");
        assert_eq!(agent.location, "Austin, TX");
        assert_eq!(agent.role, "Senior Agent");
        assert_eq!(agent.performance_score, 100);
        assert_eq!(agent.avatar, "https://cdn.example.com/m.png");
        assert_eq!(agent.tickets_closed, 88);
        assert_eq!(agent.avg_response_time, "2m 10s");
        assert_eq!(agent.availability(), Availability::Online);
        assert_eq!(agent.status_kind(), StatusKind::Blocked);
        assert_eq!(agent.account_status, "blocked");
    }

    #[test]
    fn test_record_without_id_is_dropped() {
        assert!(Agent::from_record(record(json!({"name": "Ghost"}))).is_none());
    }

    #[test]
    fn test_avatar_is_stable_per_key() {
        assert_eq!(avatar_url(&AgentKey::Numeric(69)), "https://i.pravatar.cc/150?img=70");
        assert_eq!(avatar_url(&AgentKey::Numeric(70)), "https://i.pravatar.cc/150?img=1");
        assert_eq!(
            avatar_url(&AgentKey::Text("70".to_string())),
            avatar_url(&AgentKey::Numeric(70))
        );
        // "ab" = 97 + 98 = 195; 195 % 70 + 1 = 56
        assert_eq!(
            avatar_url(&AgentKey::Text("ab".to_string())),
            "https://i.pravatar.cc/150?img=56"
        );
    }

    #[test]
    fn test_detail_mapping() {
        let detail: AgentDetailRecord = serde_json::from_value(json!({
            "agent_id": 5,
            "agent_name": "Priya",
            "name": "ignored",
            "email": "priya@example.com",
            "contact_no": "+44 20 7946 0000",
            "address": "London",
            "account_status": "Inactive",
            "agent_rating": 4.26,
            "total_tickets": 31,
            "avg_response_time": 12.9,
            "performance_score": 77
        }))
        .unwrap();

        let detail = AgentDetail::from_record(detail, &AgentKey::Numeric(5));

        assert_eq!(detail.id, "5");
        assert_eq!(detail.name, "Priya");
        assert_eq!(detail.phone, "+44 20 7946 0000");
        assert_eq!(detail.location, "London");
        assert_eq!(detail.agent_rating, "4.3");
        assert_eq!(detail.tickets_closed, 31);
        assert_eq!(detail.avg_response_time, "12");
        assert_eq!(detail.performance_score, 77);
        assert_eq!(detail.avatar, "https://i.pravatar.cc/150?img=6");
    }

    #[test]
    fn test_detail_defaults_and_requested_key() {
        let detail = AgentDetail::from_record(AgentDetailRecord::default(), &AgentKey::Numeric(3));

        assert_eq!(detail.id, "3");
        assert_eq!(detail.role, "Agent");
        assert_eq!(detail.team, "Unassigned");
        assert_eq!(detail.agent_rating, "0.0");
        assert_eq!(detail.avg_response_time, "0");
        assert_eq!(detail.tickets_closed, 0);
        assert_eq!(detail.performance_score, 0);
    }
}
