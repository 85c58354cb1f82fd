// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! The agent store: request orchestration and reconciliation
//!
//! Every operation moves its request family through
//! idle -> pending -> fulfilled | rejected. Each request is tagged with a
//! per-family sequence number when issued; a response that arrives after
//! a newer request of the same family was issued is discarded without
//! touching state.
//!
//! Listing keeps the current page visible while a fetch is pending and
//! after it fails. Detail and ticket views clear on pending.
//!
//! Status updates are optimistic: the record is patched before the request
//! is sent. While updates to an agent are in flight the store remembers the
//! last status the backend confirmed; when the last of them settles the
//! record shows that status, so a failure never leaves behind a status
//! the backend did not accept. Deletion is not optimistic;
//! the record is removed only once the backend confirms. Mutations never
//! refetch the list.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use agent_api::{AgentKey, AgentTicketsRequest, ListAgentsRequest};
use agent_client::FailureKind;
use tracing::{debug, info, warn};

use crate::model::{Agent, AgentDetail};
use crate::pagination::Pagination;
use crate::service::{AgentService, ServiceError};
use crate::state::{AgentState, RequestFamily, RequestState, Sequencer};
use crate::status::{active_status, next_block_status};

/// Result of a store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The response was reconciled into the store
    Applied,
    /// A newer request of the same family was issued first; the response
    /// was discarded. Only reads can be stale.
    Stale,
    /// The request failed; the error is also recorded on the family
    Failed(ServiceError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

struct Inner {
    state: AgentState,
    seq: Sequencer,
    /// Agents with status updates in flight, by canonical id
    pending_status: HashMap<String, PendingStatus>,
}

struct PendingStatus {
    /// Last status known to be held by the backend
    confirmed: String,
    in_flight: u32,
}

/// In-memory view of the current agent page and its satellites.
pub struct AgentStore<S> {
    service: S,
    inner: Mutex<Inner>,
}

impl<S: AgentService> AgentStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            inner: Mutex::new(Inner {
                state: AgentState::default(),
                seq: Sequencer::default(),
                pending_status: HashMap::new(),
            }),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AgentState {
        self.lock().state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::error!("Agent store mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Issue a request for `family`: mark it pending and run `prepare`
    /// under the same lock.
    fn begin<T>(&self, family: RequestFamily, prepare: impl FnOnce(&mut Inner) -> T) -> (u64, T) {
        let mut inner = self.lock();
        let seq = inner.seq.issue(family);
        *inner.state.request_mut(family) = RequestState {
            loading: true,
            error: None,
        };
        let prepared = prepare(&mut *inner);
        (seq, prepared)
    }

    /// Reconcile a read response, unless a newer request superseded it.
    fn settle<T>(
        &self,
        family: RequestFamily,
        seq: u64,
        result: Result<T, ServiceError>,
        apply: impl FnOnce(&mut Inner, T),
    ) -> Outcome {
        let mut inner = self.lock();
        if !inner.seq.is_current(family, seq) {
            warn!(%family, seq, "Discarding stale response");
            return Outcome::Stale;
        }

        inner.state.request_mut(family).loading = false;
        match result {
            Ok(value) => {
                apply(&mut *inner, value);
                Outcome::Applied
            }
            Err(e) => {
                warn!(%family, error = %e, "Request failed");
                inner.state.request_mut(family).error = Some(e.message.clone());
                Outcome::Failed(e)
            }
        }
    }

    /// Listing request for the current search, filter and position.
    pub fn list_request(&self) -> ListAgentsRequest {
        let inner = self.lock();
        let state = &inner.state;
        ListAgentsRequest {
            search: state.search.clone(),
            account_status: state.status_filter.clone(),
            app_id: self.service.app_id().to_string(),
            page: state.pagination.page,
            limit: state.pagination.limit,
            ..Default::default()
        }
    }

    /// Fetch a page of agents and replace the collection with it.
    pub async fn fetch_agents(&self, request: ListAgentsRequest) -> Outcome {
        let (seq, ()) = self.begin(RequestFamily::List, |_| ());
        debug!(seq, page = request.page, limit = request.limit, "Fetching agents");

        let result = self.service.list_agents(&request).await;

        self.settle(RequestFamily::List, seq, result, |inner, response| {
            let limit = response
                .limit
                .filter(|l| *l > 0)
                .unwrap_or_else(|| request.limit.max(1));
            let page = response
                .page
                .filter(|p| *p > 0)
                .unwrap_or_else(|| request.page.max(1));

            let mut agents: Vec<Agent> = response
                .agents
                .into_iter()
                .filter_map(Agent::from_record)
                .collect();
            if agents.len() > limit as usize {
                warn!(
                    received = agents.len(),
                    limit, "Backend returned more agents than requested, truncating"
                );
                agents.truncate(limit as usize);
            }

            let total = response
                .total_agents
                .unwrap_or(0)
                .max(agents.len() as u64);

            // A fetched record is what the backend holds now
            for agent in &agents {
                if let Some(pending) = inner.pending_status.get_mut(&agent.id) {
                    pending.confirmed = agent.account_status.clone();
                }
            }

            inner.state.agents = agents;
            inner.state.pagination = Pagination { page, limit, total };
        })
    }

    /// Fetch using the current search, filter and pagination.
    pub async fn refresh(&self) -> Outcome {
        let request = self.list_request();
        self.fetch_agents(request).await
    }

    pub async fn fetch_agent_detail(&self, agent_id: &AgentKey) -> Outcome {
        let (seq, ()) = self.begin(RequestFamily::Detail, |inner| inner.state.detail = None);

        let result = self.service.agent_detail(agent_id).await;

        self.settle(RequestFamily::Detail, seq, result, |inner, record| {
            inner.state.detail = Some(AgentDetail::from_record(record, agent_id));
        })
    }

    pub async fn fetch_agent_tickets(&self, request: AgentTicketsRequest) -> Outcome {
        let (seq, ()) = self.begin(RequestFamily::Tickets, |inner| {
            inner.state.tickets.clear();
            inner.state.tickets_total = 0;
        });

        let result = self.service.agent_tickets(&request).await;

        self.settle(RequestFamily::Tickets, seq, result, |inner, response| {
            let (tickets, total) = response.into_page();
            inner.state.tickets = tickets;
            inner.state.tickets_total = total;
        })
    }

    /// Set an agent's account status, showing the change immediately.
    ///
    /// The loaded record is patched before the request is sent. When the
    /// last in-flight update for the agent settles, the record shows the
    /// last status the backend confirmed: the new one on success, the
    /// earlier one on failure. An id that is not loaded still issues the
    /// request but changes nothing locally until it succeeds.
    pub async fn update_agent_status(&self, id: &str, new_status: &str) -> Outcome {
        let (seq, key) = self.begin(RequestFamily::Status, |inner| {
            match inner.state.agent_mut(id) {
                Some(agent) => {
                    let pending = inner
                        .pending_status
                        .entry(id.to_string())
                        .or_insert_with(|| PendingStatus {
                            confirmed: agent.account_status.clone(),
                            in_flight: 0,
                        });
                    pending.in_flight += 1;
                    agent.account_status = new_status.to_string();
                    agent.backend_key.clone()
                }
                None => AgentKey::parse(id),
            }
        });

        let result = self.service.update_status(&key, new_status).await;

        let mut guard = self.lock();
        let inner = &mut *guard;
        let current = inner.seq.is_current(RequestFamily::Status, seq);
        if current {
            inner.state.status_request.loading = false;
        }

        // (last to settle, confirmed status) for a tracked agent
        let settled = inner.pending_status.get_mut(id).map(|pending| {
            pending.in_flight = pending.in_flight.saturating_sub(1);
            if result.is_ok() {
                pending.confirmed = new_status.to_string();
            }
            (pending.in_flight == 0, pending.confirmed.clone())
        });
        if matches!(settled, Some((true, _))) {
            inner.pending_status.remove(id);
        }

        match result {
            Ok(_) => {
                let last = settled.as_ref().is_none_or(|(last, _)| *last);
                if let Some(agent) = inner.state.agent_mut(id).filter(|_| last) {
                    agent.account_status = new_status.to_string();
                }
                if let Some(detail) = inner.state.detail.as_mut().filter(|d| d.id == id) {
                    detail.account_status = new_status.to_string();
                }
                info!(agent = id, status = new_status, "Updated agent status");
                Outcome::Applied
            }
            Err(e) => {
                if let (Some((true, confirmed)), Some(agent)) =
                    (settled, inner.state.agent_mut(id))
                {
                    agent.account_status = confirmed;
                }
                if current {
                    inner.state.status_request.error = Some(e.message.clone());
                }
                warn!(agent = id, status = new_status, error = %e, "Status update failed");
                Outcome::Failed(e)
            }
        }
    }

    pub async fn set_agent_active(&self, id: &str, active: bool) -> Outcome {
        self.update_agent_status(id, active_status(active)).await
    }

    /// Block an agent, or unblock one that is currently blocked.
    ///
    /// The current status is taken from the loaded page, or from the detail
    /// view when it shows this agent.
    pub async fn toggle_block(&self, id: &str) -> Outcome {
        let current = {
            let inner = self.lock();
            let state = &inner.state;
            state
                .agent(id)
                .map(|a| a.account_status.clone())
                .or_else(|| {
                    state
                        .detail
                        .as_ref()
                        .filter(|d| d.id == id)
                        .map(|d| d.account_status.clone())
                })
        };

        match current {
            Some(status) => self.update_agent_status(id, next_block_status(&status)).await,
            None => Outcome::Failed(ServiceError::new(
                FailureKind::Rejected,
                0,
                format!("Agent {} is not loaded", id),
            )),
        }
    }

    /// Delete an agent. The record and one unit of `total` are removed only
    /// after the backend confirms.
    pub async fn delete_agent(&self, id: &str) -> Outcome {
        let (seq, key) = self.begin(RequestFamily::Delete, |inner| {
            inner
                .state
                .agent(id)
                .map(|a| a.backend_key.clone())
                .unwrap_or_else(|| AgentKey::parse(id))
        });

        let result = self.service.delete_agent(&key).await;

        let mut inner = self.lock();
        let current = inner.seq.is_current(RequestFamily::Delete, seq);
        if current {
            inner.state.delete_request.loading = false;
        }

        match result {
            Ok(_) => {
                let state = &mut inner.state;
                let before = state.agents.len();
                state.agents.retain(|a| a.id != id);
                if state.agents.len() < before {
                    state.pagination.total = state.pagination.total.saturating_sub(1);
                }
                if state.detail.as_ref().is_some_and(|d| d.id == id) {
                    state.detail = None;
                }
                info!(agent = id, "Deleted agent");
                Outcome::Applied
            }
            Err(e) => {
                if current {
                    inner.state.delete_request.error = Some(e.message.clone());
                }
                warn!(agent = id, error = %e, "Delete failed");
                Outcome::Failed(e)
            }
        }
    }

    /// Set the search string and return to the first page.
    pub fn set_search(&self, search: impl Into<String>) {
        let mut inner = self.lock();
        inner.state.search = search.into();
        inner.state.pagination.page = 1;
    }

    pub fn set_page(&self, page: u32) {
        self.lock().state.pagination.page = page.max(1);
    }

    /// Set the page size and return to the first page.
    pub fn set_limit(&self, limit: u32) {
        let mut inner = self.lock();
        inner.state.pagination.limit = limit.max(1);
        inner.state.pagination.page = 1;
    }

    /// Set the account statuses to show and return to the first page.
    pub fn set_status_filter(&self, statuses: Vec<String>) {
        let mut inner = self.lock();
        inner.state.status_filter = statuses;
        inner.state.pagination.page = 1;
    }
}
