// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Payload shapes and response decoding for the typed agent calls.

use agent_client::types::{AgentKey, AgentTicketsRequest, ListAgentsRequest};
use agent_client::{AgentClient, ClientConfig, FailureKind};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AgentClient {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_app_id("helpdesk");
    AgentClient::new(&config).expect("failed to build client")
}

#[tokio::test]
async fn test_list_agents_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agent/"))
        .and(body_json(json!({
            "search": "ali",
            "account_status": ["active"],
            "app_id": "helpdesk",
            "start_date": "",
            "end_date": "",
            "sort_order": "asc",
            "page": 2,
            "limit": 5,
            "ticket_page": 1,
            "ticket_limit": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "agents": [{"agent_id": 6, "name": "Alice", "email": "alice@example.com", "account_status": "active"}],
            "total_agents": 6
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListAgentsRequest {
        search: "ali".to_string(),
        account_status: vec!["active".to_string()],
        app_id: "helpdesk".to_string(),
        page: 2,
        limit: 5,
        ..Default::default()
    };

    let page = client.list_agents(&request).await.unwrap();

    assert_eq!(page.agents.len(), 1);
    assert_eq!(page.agents[0].name, "Alice");
    assert_eq!(page.total_agents, Some(6));
}

#[tokio::test]
async fn test_agent_detail_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agent/detail/page"))
        .and(body_json(json!({"agent_id": 12, "app_id": "helpdesk"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "agent_id": 12,
            "agent_name": "Bob",
            "email": "bob@example.com",
            "account_status": "active",
            "agent_rating": 4.56
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let detail = client.agent_detail(&AgentKey::Numeric(12)).await.unwrap();

    assert_eq!(detail.agent_name.as_deref(), Some("Bob"));
    assert_eq!(detail.agent_rating, Some(4.56));
}

#[tokio::test]
async fn test_agent_tickets_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tickets/agent/"))
        .and(body_json(json!({
            "search": "",
            "app_id": "helpdesk",
            "agent_id": 12,
            "user_id": 1,
            "user_role": "agent",
            "priority": [],
            "account_status": [],
            "category": [],
            "sort_by": "",
            "sort_order": "desc",
            "start_date": "",
            "end_date": "",
            "page": 1,
            "limit": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"ticket_id": 1, "title": "Printer on fire"}],
            "total": 14
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = AgentTicketsRequest::new(AgentKey::Numeric(12), client.app_id());
    let (tickets, total) = client.agent_tickets(&request).await.unwrap().into_page();

    assert_eq!(tickets.len(), 1);
    assert_eq!(total, 14);
}

#[tokio::test]
async fn test_update_status_uses_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/agent/status"))
        .and(body_json(json!({"app_id": "helpdesk", "agent_id": 3, "status": "block"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .update_status(&AgentKey::Numeric(3), "block")
        .await
        .unwrap();

    assert_eq!(resp.success, Some(true));
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agent/delete"))
        .and(body_json(json!({"app_id": "helpdesk", "agent_id": "abc"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client.delete_agent(&AgentKey::parse("abc")).await;

    assert!(resp.is_ok());
}

#[tokio::test]
async fn test_unexpected_list_shape_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agent/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"agents": "none"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .list_agents(&ListAgentsRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Rejected);
    assert_eq!(err.status_code, 200);
}

#[tokio::test]
async fn test_mutation_failure_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/agent/status"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "bad status"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .update_status(&AgentKey::Numeric(3), "sideways")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Http);
    assert_eq!(err.status_code, 422);
    assert!(err.message.starts_with("HTTP 422:"));
}
