// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Stub agent-management backend
//!
//! A Dropshot server implementing [`agent_api::AgentManagementApi`] over
//! fixture data held in memory. It is used for:
//!
//! - End-to-end tests of agent-client and agent-store
//! - CLI tests
//! - Local development without the real backend
//!
//! Status changes and deletions mutate the in-memory table, so a change made
//! through one request is visible to the next. Nothing is persisted.

use anyhow::{Context, Result};
use dropshot::{
    ConfigDropshot, ConfigLogging, ConfigLoggingLevel, HttpError, HttpResponseOk, HttpServer,
    HttpServerStarter, RequestContext, TypedBody,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use agent_api::{
    AgentDetailRecord, AgentDetailRequest, AgentKey, AgentListResponse, AgentRecord,
    AgentTicketsRequest, AgentTicketsResponse, DeleteAgentRequest, ListAgentsRequest,
    MutationResponse, SortOrder, Ticket, UpdateStatusRequest,
};

// ============================================================================
// Fixture Data Types
// ============================================================================

/// One agent as stored in `fixtures/agents.json`
#[derive(Debug, Clone, Deserialize)]
struct FixtureAgent {
    agent_id: u64,
    name: String,
    email: String,
    #[serde(default)]
    contact_no: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    team: Option<String>,
    account_status: String,
    #[serde(default)]
    performance_score: f64,
    #[serde(default)]
    last_active: Option<String>,
    #[serde(default)]
    tickets_count: u64,
    /// Average first response in minutes
    #[serde(default)]
    avg_response_minutes: f64,
    #[serde(default)]
    agent_rating: f64,
    #[serde(default)]
    specialties: Vec<String>,
}

impl FixtureAgent {
    fn key(&self) -> AgentKey {
        AgentKey::Numeric(self.agent_id)
    }

    fn to_record(&self, app_id: &str) -> AgentRecord {
        AgentRecord {
            agent_id: Some(self.key()),
            app_id: Some(app_id.to_string()),
            name: self.name.clone(),
            email: self.email.clone(),
            contact_no: self.contact_no.clone(),
            address: self.address.clone(),
            role: self.role.clone(),
            team: self.team.clone(),
            account_status: self.account_status.clone(),
            performance_score: Some(self.performance_score),
            last_active: self.last_active.clone(),
            tickets_count: Some(self.tickets_count),
            avg_response_time: Some(format_minutes(self.avg_response_minutes)),
            specialties: self.specialties.clone(),
            ..Default::default()
        }
    }

    fn to_detail(&self, app_id: &str) -> AgentDetailRecord {
        AgentDetailRecord {
            agent_id: Some(self.key()),
            app_id: Some(app_id.to_string()),
            agent_name: Some(self.name.clone()),
            email: self.email.clone(),
            contact_no: self.contact_no.clone(),
            address: self.address.clone(),
            role: self.role.clone(),
            team: self.team.clone(),
            account_status: self.account_status.clone(),
            agent_rating: Some(self.agent_rating),
            total_tickets: Some(self.tickets_count),
            avg_response_time: Some(self.avg_response_minutes),
            performance_score: Some(self.performance_score),
            last_active: self.last_active.clone(),
            ..Default::default()
        }
    }
}

/// "4.5" minutes -> "4m 30s"
fn format_minutes(minutes: f64) -> String {
    let total_secs = (minutes.max(0.0) * 60.0).round() as u64;
    format!("{}m {}s", total_secs / 60, total_secs % 60)
}

// ============================================================================
// Server Context
// ============================================================================

#[derive(Debug, Default)]
struct Tables {
    agents: Vec<FixtureAgent>,
    tickets: Vec<Ticket>,
}

/// In-memory backend state shared by all handlers
#[derive(Debug)]
pub struct StubContext {
    tables: Mutex<Tables>,
}

/// Directory holding the bundled fixtures
pub fn default_fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

impl StubContext {
    /// Load `agents.json` and, if present, `tickets.json` from a directory.
    pub fn from_fixtures(fixtures_dir: &Path) -> Result<Self> {
        let agents_path = fixtures_dir.join("agents.json");
        let agents_json = std::fs::read_to_string(&agents_path)
            .with_context(|| format!("Failed to read {}", agents_path.display()))?;
        let agents: Vec<FixtureAgent> = serde_json::from_str(&agents_json)
            .with_context(|| format!("Failed to parse {}", agents_path.display()))?;

        let tickets_path = fixtures_dir.join("tickets.json");
        let tickets: Vec<Ticket> = if tickets_path.exists() {
            let tickets_json = std::fs::read_to_string(&tickets_path)
                .with_context(|| format!("Failed to read {}", tickets_path.display()))?;
            serde_json::from_str(&tickets_json)
                .with_context(|| format!("Failed to parse {}", tickets_path.display()))?
        } else {
            Vec::new()
        };

        tracing::info!(
            agents = agents.len(),
            tickets = tickets.len(),
            "Loaded fixtures from {}",
            fixtures_dir.display()
        );

        Ok(Self {
            tables: Mutex::new(Tables { agents, tickets }),
        })
    }

    /// Load the bundled fixtures.
    pub fn with_default_fixtures() -> Result<Self> {
        Self::from_fixtures(&default_fixtures_dir())
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| {
            tracing::error!("Stub tables mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub fn agent_count(&self) -> usize {
        self.tables().agents.len()
    }

    /// Current account status of an agent, if it exists.
    pub fn agent_status(&self, agent_id: u64) -> Option<String> {
        self.tables()
            .agents
            .iter()
            .find(|a| a.agent_id == agent_id)
            .map(|a| a.account_status.clone())
    }

    fn list(&self, request: &ListAgentsRequest) -> AgentListResponse {
        let tables = self.tables();
        let search = request.search.trim().to_lowercase();
        let statuses: Vec<String> = request
            .account_status
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let mut matching: Vec<&FixtureAgent> = tables
            .agents
            .iter()
            .filter(|a| {
                search.is_empty()
                    || a.name.to_lowercase().contains(&search)
                    || a.email.to_lowercase().contains(&search)
            })
            .filter(|a| statuses.is_empty() || statuses.contains(&a.account_status.to_lowercase()))
            .collect();

        matching.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        if request.sort_order == SortOrder::Desc {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let agents = paginate(&matching, request.page, request.limit)
            .iter()
            .map(|a| a.to_record(&request.app_id))
            .collect();

        AgentListResponse {
            agents,
            total_agents: Some(total),
            page: Some(request.page.max(1)),
            limit: Some(request.limit),
        }
    }

    fn detail(&self, request: &AgentDetailRequest) -> Option<AgentDetailRecord> {
        self.tables()
            .agents
            .iter()
            .find(|a| a.key().same_as(&request.agent_id))
            .map(|a| a.to_detail(&request.app_id))
    }

    fn tickets(&self, request: &AgentTicketsRequest) -> Option<AgentTicketsResponse> {
        let tables = self.tables();
        if !tables.agents.iter().any(|a| a.key().same_as(&request.agent_id)) {
            return None;
        }

        let search = request.search.trim().to_lowercase();
        let priorities: Vec<String> = request.priority.iter().map(|p| p.to_lowercase()).collect();
        let statuses: Vec<String> = request
            .account_status
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        let mut matching: Vec<&Ticket> = tables
            .tickets
            .iter()
            .filter(|t| {
                t.agent_id
                    .as_ref()
                    .is_some_and(|owner| owner.same_as(&request.agent_id))
            })
            .filter(|t| search.is_empty() || t.title.to_lowercase().contains(&search))
            .filter(|t| {
                priorities.is_empty()
                    || t.priority
                        .as_ref()
                        .is_some_and(|p| priorities.contains(&p.to_lowercase()))
            })
            .filter(|t| {
                statuses.is_empty()
                    || t.status
                        .as_ref()
                        .is_some_and(|s| statuses.contains(&s.to_lowercase()))
            })
            .collect();

        matching.sort_by(|a, b| (&a.created_at, a.ticket_id).cmp(&(&b.created_at, b.ticket_id)));
        if request.sort_order == SortOrder::Desc {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let tickets = paginate(&matching, request.page, request.limit)
            .iter()
            .map(|t| (*t).clone())
            .collect();

        Some(AgentTicketsResponse {
            tickets: Some(tickets),
            total_records: Some(total),
            page: Some(request.page.max(1)),
            limit: Some(request.limit),
            ..Default::default()
        })
    }

    fn set_status(&self, agent_id: &AgentKey, status: &str) -> bool {
        let mut tables = self.tables();
        match tables.agents.iter_mut().find(|a| a.key().same_as(agent_id)) {
            Some(agent) => {
                agent.account_status = status.to_string();
                true
            }
            None => false,
        }
    }

    fn delete(&self, agent_id: &AgentKey) -> bool {
        let mut tables = self.tables();
        let before = tables.agents.len();
        tables.agents.retain(|a| !a.key().same_as(agent_id));
        tables.agents.len() < before
    }
}

/// 1-based page of `items`. A zero limit yields an empty page.
fn paginate<T>(items: &[T], page: u32, limit: u32) -> &[T] {
    let limit = limit as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(limit);
    if limit == 0 || start >= items.len() {
        return &[];
    }
    let end = std::cmp::min(start + limit, items.len());
    &items[start..end]
}

// ============================================================================
// API Implementation
// ============================================================================

/// Marker type for the stub API implementation
pub enum StubAgentApi {}

impl agent_api::AgentManagementApi for StubAgentApi {
    type Context = Arc<StubContext>;

    async fn list_agents(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<ListAgentsRequest>,
    ) -> Result<HttpResponseOk<AgentListResponse>, HttpError> {
        let request = body.into_inner();
        Ok(HttpResponseOk(rqctx.context().list(&request)))
    }

    async fn get_agent_detail(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<AgentDetailRequest>,
    ) -> Result<HttpResponseOk<AgentDetailRecord>, HttpError> {
        let request = body.into_inner();
        rqctx
            .context()
            .detail(&request)
            .map(HttpResponseOk)
            .ok_or_else(|| agent_not_found(&request.agent_id))
    }

    async fn list_agent_tickets(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<AgentTicketsRequest>,
    ) -> Result<HttpResponseOk<AgentTicketsResponse>, HttpError> {
        let request = body.into_inner();
        rqctx
            .context()
            .tickets(&request)
            .map(HttpResponseOk)
            .ok_or_else(|| agent_not_found(&request.agent_id))
    }

    async fn update_agent_status(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<UpdateStatusRequest>,
    ) -> Result<HttpResponseOk<MutationResponse>, HttpError> {
        let request = body.into_inner();
        let status = request.status.trim();
        if status.is_empty() {
            return Err(HttpError::for_bad_request(
                None,
                "status must not be empty".to_string(),
            ));
        }

        if !rqctx.context().set_status(&request.agent_id, status) {
            return Err(agent_not_found(&request.agent_id));
        }

        tracing::info!(agent = %request.agent_id, status, "Status updated");
        Ok(HttpResponseOk(MutationResponse {
            success: Some(true),
            message: Some(format!("Agent {} status set to {}", request.agent_id, status)),
        }))
    }

    async fn delete_agent(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<DeleteAgentRequest>,
    ) -> Result<HttpResponseOk<MutationResponse>, HttpError> {
        let request = body.into_inner();
        if !rqctx.context().delete(&request.agent_id) {
            return Err(agent_not_found(&request.agent_id));
        }

        tracing::info!(agent = %request.agent_id, "Agent deleted");
        Ok(HttpResponseOk(MutationResponse {
            success: Some(true),
            message: Some(format!("Agent {} deleted", request.agent_id)),
        }))
    }
}

fn agent_not_found(agent_id: &AgentKey) -> HttpError {
    HttpError::for_not_found(None, format!("Agent not found: {}", agent_id))
}

/// Create the Dropshot API description for the stub server
pub fn api_description() -> Result<dropshot::ApiDescription<Arc<StubContext>>, String> {
    agent_api::agent_management_api_mod::api_description::<StubAgentApi>()
        .map_err(|e| e.to_string())
}

/// Start serving `context` on `bind_address`. Port 0 picks a free port;
/// read it back with `server.local_addr()`.
pub fn start(
    context: StubContext,
    bind_address: SocketAddr,
    log_level: ConfigLoggingLevel,
) -> Result<HttpServer<Arc<StubContext>>> {
    let config = ConfigDropshot {
        bind_address,
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    let log = ConfigLogging::StderrTerminal { level: log_level }
        .to_logger("agent-stub-server")
        .map_err(|e| anyhow::anyhow!("failed to create logger: {}", e))?;

    let api = api_description().map_err(|e| anyhow::anyhow!(e))?;
    let server = HttpServerStarter::new(&config, api, Arc::new(context), &log)
        .map_err(|e| anyhow::anyhow!("Failed to create server: {}", e))?
        .start();

    Ok(server)
}

// ============================================================================
// Tests
// ============================================================================
