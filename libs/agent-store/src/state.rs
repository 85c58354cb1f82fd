// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Store state and per-family request tracking

use agent_api::Ticket;
use serde::Serialize;
use std::fmt;

use crate::model::{Agent, AgentDetail};
use crate::pagination::Pagination;

/// One logical request/response relationship with its own loading and
/// error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestFamily {
    List,
    Detail,
    Tickets,
    Status,
    Delete,
}

impl RequestFamily {
    pub const ALL: [RequestFamily; 5] = [
        RequestFamily::List,
        RequestFamily::Detail,
        RequestFamily::Tickets,
        RequestFamily::Status,
        RequestFamily::Delete,
    ];

    fn index(self) -> usize {
        match self {
            Self::List => 0,
            Self::Detail => 1,
            Self::Tickets => 2,
            Self::Status => 3,
            Self::Delete => 4,
        }
    }
}

impl fmt::Display for RequestFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Detail => "detail",
            Self::Tickets => "tickets",
            Self::Status => "status",
            Self::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}

/// Loading and error flags for a request family.
///
/// Idle: not loading, no error. Pending: loading, error cleared.
/// Fulfilled: not loading, no error. Rejected: not loading, error set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestState {
    pub loading: bool,
    pub error: Option<String>,
}

/// Snapshot of everything the store holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentState {
    /// Current page only, never an accumulation
    pub agents: Vec<Agent>,
    pub pagination: Pagination,
    pub search: String,
    /// Account statuses to include; empty means all
    pub status_filter: Vec<String>,
    pub list: RequestState,

    pub detail: Option<AgentDetail>,
    pub detail_request: RequestState,

    pub tickets: Vec<Ticket>,
    pub tickets_total: u64,
    pub tickets_request: RequestState,

    pub status_request: RequestState,
    pub delete_request: RequestState,
}

impl AgentState {
    pub fn request(&self, family: RequestFamily) -> &RequestState {
        match family {
            RequestFamily::List => &self.list,
            RequestFamily::Detail => &self.detail_request,
            RequestFamily::Tickets => &self.tickets_request,
            RequestFamily::Status => &self.status_request,
            RequestFamily::Delete => &self.delete_request,
        }
    }

    pub(crate) fn request_mut(&mut self, family: RequestFamily) -> &mut RequestState {
        match family {
            RequestFamily::List => &mut self.list,
            RequestFamily::Detail => &mut self.detail_request,
            RequestFamily::Tickets => &mut self.tickets_request,
            RequestFamily::Status => &mut self.status_request,
            RequestFamily::Delete => &mut self.delete_request,
        }
    }

    /// Find a loaded agent by canonical id.
    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub(crate) fn agent_mut(&mut self, id: &str) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id == id)
    }
}

/// Monotonic sequence numbers, one counter per family.
///
/// A response is current only if no newer request of the same family was
/// issued after it.
#[derive(Debug, Default)]
pub(crate) struct Sequencer {
    latest: [u64; 5],
}

impl Sequencer {
    pub(crate) fn issue(&mut self, family: RequestFamily) -> u64 {
        let slot = &mut self.latest[family.index()];
        *slot += 1;
        *slot
    }

    pub(crate) fn is_current(&self, family: RequestFamily, seq: u64) -> bool {
        self.latest[family.index()] == seq
    }
}
