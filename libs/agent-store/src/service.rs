// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Transport seam between the store and the backend

use agent_api::{
    AgentDetailRecord, AgentKey, AgentListResponse, AgentTicketsRequest, AgentTicketsResponse,
    ListAgentsRequest, MutationResponse,
};
use agent_client::{AgentClient, RequestFailure};
use async_trait::async_trait;

/// A failed service call as seen by the store.
pub type ServiceError = RequestFailure;

/// Backend operations the store depends on.
#[async_trait]
pub trait AgentService: Send + Sync {
    /// Application id to scope requests to.
    fn app_id(&self) -> &str;

    async fn list_agents(
        &self,
        request: &ListAgentsRequest,
    ) -> Result<AgentListResponse, ServiceError>;

    async fn agent_detail(&self, agent_id: &AgentKey) -> Result<AgentDetailRecord, ServiceError>;

    async fn agent_tickets(
        &self,
        request: &AgentTicketsRequest,
    ) -> Result<AgentTicketsResponse, ServiceError>;

    async fn update_status(
        &self,
        agent_id: &AgentKey,
        status: &str,
    ) -> Result<MutationResponse, ServiceError>;

    async fn delete_agent(&self, agent_id: &AgentKey) -> Result<MutationResponse, ServiceError>;
}

#[async_trait]
impl AgentService for AgentClient {
    fn app_id(&self) -> &str {
        AgentClient::app_id(self)
    }

    async fn list_agents(
        &self,
        request: &ListAgentsRequest,
    ) -> Result<AgentListResponse, ServiceError> {
        AgentClient::list_agents(self, request).await
    }

    async fn agent_detail(&self, agent_id: &AgentKey) -> Result<AgentDetailRecord, ServiceError> {
        AgentClient::agent_detail(self, agent_id).await
    }

    async fn agent_tickets(
        &self,
        request: &AgentTicketsRequest,
    ) -> Result<AgentTicketsResponse, ServiceError> {
        AgentClient::agent_tickets(self, request).await
    }

    async fn update_status(
        &self,
        agent_id: &AgentKey,
        status: &str,
    ) -> Result<MutationResponse, ServiceError> {
        AgentClient::update_status(self, agent_id, status).await
    }

    async fn delete_agent(&self, agent_id: &AgentKey) -> Result<MutationResponse, ServiceError> {
        AgentClient::delete_agent(self, agent_id).await
    }
}
