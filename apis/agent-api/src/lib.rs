// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Agent-management API trait definition
//!
//! This crate describes the subset of the support-desk backend that the
//! agent administration tooling depends on. The backend itself is not
//! ours; the trait exists to:
//! 1. Document the exact endpoint surface and payload shapes we rely on
//! 2. Let the stub server implement the same surface for tests and demos
//! 3. Keep request/response types shared between client and server
//!
//! Note that the backend uses `POST` for several read-only operations
//! (listing, detail, tickets) and for deletion. Those verbs are part of
//! the contract and are kept as-is.
//!
//! The backend's list and ticket paths carry a trailing slash. Dropshot
//! ignores empty path segments when routing, so the routes below are
//! declared without it and still match the slashed form clients send.
//!
//! ## Endpoints
//!
//! - `POST /agent/` - List agents (filtered, paginated)
//! - `POST /agent/detail/page` - Extended profile for one agent
//! - `POST /tickets/agent/` - Ticket page scoped to one agent
//! - `PUT /agent/status` - Change an agent's account status
//! - `POST /agent/delete` - Delete an agent

use dropshot::{HttpError, HttpResponseOk, RequestContext, TypedBody};

pub mod form;
pub mod types;

pub use form::*;
pub use types::*;

/// Agent-management API (subset)
#[dropshot::api_description]
pub trait AgentManagementApi {
    /// Context type for request handlers
    type Context: Send + Sync + 'static;

    /// List agents
    ///
    /// Returns one page of agents matching the search string and account
    /// status filter, along with the total number of matching agents.
    #[endpoint {
        method = POST,
        path = "/agent",
        tags = ["agents"],
    }]
    async fn list_agents(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<ListAgentsRequest>,
    ) -> Result<HttpResponseOk<AgentListResponse>, HttpError>;

    /// Get agent detail
    ///
    /// Returns the extended profile and metrics for a single agent.
    /// Returns 404 if the agent does not exist.
    #[endpoint {
        method = POST,
        path = "/agent/detail/page",
        tags = ["agents"],
    }]
    async fn get_agent_detail(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<AgentDetailRequest>,
    ) -> Result<HttpResponseOk<AgentDetailRecord>, HttpError>;

    /// List tickets assigned to an agent
    #[endpoint {
        method = POST,
        path = "/tickets/agent",
        tags = ["tickets"],
    }]
    async fn list_agent_tickets(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<AgentTicketsRequest>,
    ) -> Result<HttpResponseOk<AgentTicketsResponse>, HttpError>;

    /// Update an agent's account status
    ///
    /// The status is free text; the backend understands `active`,
    /// `inactive` and `block`. Returns 404 if the agent does not exist.
    #[endpoint {
        method = PUT,
        path = "/agent/status",
        tags = ["agents"],
    }]
    async fn update_agent_status(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<UpdateStatusRequest>,
    ) -> Result<HttpResponseOk<MutationResponse>, HttpError>;

    /// Delete an agent
    ///
    /// Returns 404 if the agent does not exist.
    #[endpoint {
        method = POST,
        path = "/agent/delete",
        tags = ["agents"],
    }]
    async fn delete_agent(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<DeleteAgentRequest>,
    ) -> Result<HttpResponseOk<MutationResponse>, HttpError>;
}
