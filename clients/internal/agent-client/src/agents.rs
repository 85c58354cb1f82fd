// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed agent-management calls on top of [`HttpClient`]

use agent_api::{
    AgentDetailRecord, AgentDetailRequest, AgentKey, AgentListResponse, AgentTicketsRequest,
    AgentTicketsResponse, DeleteAgentRequest, ListAgentsRequest, MutationResponse,
    UpdateStatusRequest,
};
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpClient, RequestOptions};
use crate::response::{ApiResponse, FailureKind, RequestFailure, ResponseBody};

const LIST_PATH: &str = "/agent/";
const DETAIL_PATH: &str = "/agent/detail/page";
const TICKETS_PATH: &str = "/tickets/agent/";
const STATUS_PATH: &str = "/agent/status";
const DELETE_PATH: &str = "/agent/delete";

/// Client for the agent-management endpoints.
#[derive(Clone, Debug)]
pub struct AgentClient {
    http: HttpClient,
    app_id: String,
}

impl AgentClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::from_http(HttpClient::new(config)?, &config.app_id))
    }

    /// Wrap an existing [`HttpClient`], sharing its cache.
    pub fn from_http(http: HttpClient, app_id: impl Into<String>) -> Self {
        Self {
            http,
            app_id: app_id.into(),
        }
    }

    /// Application id sent with detail, ticket and mutation requests.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn clear_cache(&self, pattern: Option<&str>) {
        self.http.clear_cache(pattern);
    }

    /// Fetch one page of agents. The request carries its own `app_id`.
    pub async fn list_agents(
        &self,
        request: &ListAgentsRequest,
    ) -> Result<AgentListResponse, RequestFailure> {
        debug!(page = request.page, limit = request.limit, search = %request.search, "Listing agents");
        self.post(LIST_PATH, request).await?.decode()
    }

    pub async fn agent_detail(&self, agent_id: &AgentKey) -> Result<AgentDetailRecord, RequestFailure> {
        let request = AgentDetailRequest {
            agent_id: agent_id.clone(),
            app_id: self.app_id.clone(),
        };
        self.post(DETAIL_PATH, &request).await?.decode()
    }

    /// Fetch tickets for an agent. `request.app_id` is used as given.
    pub async fn agent_tickets(
        &self,
        request: &AgentTicketsRequest,
    ) -> Result<AgentTicketsResponse, RequestFailure> {
        self.post(TICKETS_PATH, request).await?.decode()
    }

    /// Change an agent's account status.
    pub async fn update_status(
        &self,
        agent_id: &AgentKey,
        status: &str,
    ) -> Result<MutationResponse, RequestFailure> {
        let request = UpdateStatusRequest {
            app_id: self.app_id.clone(),
            agent_id: agent_id.clone(),
            status: status.to_string(),
        };
        let body = encode(&request)?;
        let response = self
            .http
            .put(STATUS_PATH, body, RequestOptions::default())
            .await;
        decode_mutation(response)
    }

    pub async fn delete_agent(&self, agent_id: &AgentKey) -> Result<MutationResponse, RequestFailure> {
        let request = DeleteAgentRequest {
            app_id: self.app_id.clone(),
            agent_id: agent_id.clone(),
        };
        decode_mutation(self.post(DELETE_PATH, &request).await?)
    }

    async fn post<T: Serialize>(&self, path: &str, request: &T) -> Result<ApiResponse, RequestFailure> {
        let body = encode(request)?;
        Ok(self.http.post(path, body, RequestOptions::default()).await)
    }
}

fn encode<T: Serialize>(request: &T) -> Result<serde_json::Value, RequestFailure> {
    serde_json::to_value(request).map_err(|e| {
        RequestFailure::new(
            FailureKind::Network,
            0,
            format!("Failed to encode request: {}", e),
        )
    })
}

/// Mutation endpoints answer with anything from a JSON acknowledgement to an
/// empty body. Any 2xx counts as success.
fn decode_mutation(response: ApiResponse) -> Result<MutationResponse, RequestFailure> {
    match response.into_result()? {
        Some(ResponseBody::Json(value)) => Ok(serde_json::from_value(value).unwrap_or_default()),
        Some(ResponseBody::Text(text)) => Ok(MutationResponse {
            success: Some(true),
            message: Some(text),
        }),
        None => Ok(MutationResponse::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_mutation_variants() {
        let acked = ApiResponse::ok(
            200,
            Some(ResponseBody::Json(json!({"success": true, "message": "updated"}))),
        );
        let resp = decode_mutation(acked).unwrap();
        assert_eq!(resp.success, Some(true));
        assert_eq!(resp.message.as_deref(), Some("updated"));

        let odd = ApiResponse::ok(200, Some(ResponseBody::Json(json!([1, 2]))));
        assert_eq!(decode_mutation(odd).unwrap(), MutationResponse::default());

        let empty = ApiResponse::ok(204, None);
        assert_eq!(decode_mutation(empty).unwrap(), MutationResponse::default());
    }

    #[test]
    fn test_decode_mutation_failure() {
        let failed = ApiResponse::failed(FailureKind::Http, 404, "HTTP 404: null");
        let err = decode_mutation(failed).unwrap_err();
        assert_eq!(err.status_code, 404);
    }
}
