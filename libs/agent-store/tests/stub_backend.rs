// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! End-to-end tests: store -> agent client -> HTTP -> stub server.

use agent_api::{AgentKey, AgentTicketsRequest};
use agent_client::{AgentClient, ClientConfig, FailureKind};
use agent_store::{AgentStore, Outcome, StatusKind};
use agent_stub_server::{StubContext, start};
use dropshot::ConfigLoggingLevel;
use pretty_assertions::assert_eq;

fn store_with_backend() -> AgentStore<AgentClient> {
    let context = StubContext::with_default_fixtures().expect("failed to load fixtures");
    let server = start(
        context,
        "127.0.0.1:0".parse().unwrap(),
        ConfigLoggingLevel::Error,
    )
    .expect("failed to start stub server");
    let url = format!("http://{}", server.local_addr());
    std::mem::forget(server);

    let config = ClientConfig::default().with_base_url(url);
    AgentStore::new(AgentClient::new(&config).expect("failed to build client"))
}

#[tokio::test]
async fn test_paging_through_agents() {
    let store = store_with_backend();

    assert_eq!(store.refresh().await, Outcome::Applied);
    let state = store.snapshot();
    assert_eq!(state.agents.len(), 10);
    assert_eq!(state.pagination.total, 24);
    assert_eq!(state.pagination.last_page(), 3);
    assert!(state.pagination.has_next());

    store.set_page(3);
    store.refresh().await;
    let state = store.snapshot();
    assert_eq!(state.agents.len(), 4);
    assert!(!state.pagination.has_next());
    assert!(state.pagination.has_previous());

    store.set_limit(25);
    store.refresh().await;
    let state = store.snapshot();
    assert_eq!(state.pagination.page, 1);
    assert_eq!(state.agents.len(), 24);
}

#[tokio::test]
async fn test_list_invariants_hold_for_every_page() {
    let store = store_with_backend();
    store.set_limit(7);

    for page in 1..=4 {
        store.set_page(page);
        assert_eq!(store.refresh().await, Outcome::Applied);
        let state = store.snapshot();
        assert!(state.agents.len() <= state.pagination.limit as usize);
        assert!(state.pagination.total >= state.agents.len() as u64);
    }
}

#[tokio::test]
async fn test_search_without_matches() {
    let store = store_with_backend();
    store.refresh().await;

    store.set_search("sarah");
    let outcome = store.refresh().await;

    assert_eq!(outcome, Outcome::Applied);
    let state = store.snapshot();
    assert!(state.agents.is_empty());
    assert_eq!(state.pagination.total, 0);
    assert_eq!(state.list.error, None);
}

#[tokio::test]
async fn test_status_filter() {
    let store = store_with_backend();

    store.set_status_filter(vec!["Blocked".to_string()]);
    store.refresh().await;

    let state = store.snapshot();
    assert_eq!(state.pagination.total, 4);
    assert!(
        state
            .agents
            .iter()
            .all(|a| a.status_kind() == StatusKind::Blocked)
    );
}

#[tokio::test]
async fn test_status_update_survives_refetch() {
    let store = store_with_backend();
    store.refresh().await;
    let target = store.snapshot().agents[0].id.clone();

    let outcome = store.update_agent_status(&target, "inactive").await;
    assert_eq!(outcome, Outcome::Applied);

    store.refresh().await;
    let state = store.snapshot();
    assert_eq!(state.agent(&target).unwrap().account_status, "inactive");
}

#[tokio::test]
async fn test_block_toggle_round_trip() {
    let store = store_with_backend();
    store.refresh().await;
    let target = store.snapshot().agents[1].id.clone();

    store.toggle_block(&target).await;
    store.refresh().await;
    assert_eq!(
        store.snapshot().agent(&target).unwrap().status_kind(),
        StatusKind::Blocked
    );

    store.toggle_block(&target).await;
    store.refresh().await;
    assert_eq!(
        store.snapshot().agent(&target).unwrap().status_kind(),
        StatusKind::Inactive
    );
}

#[tokio::test]
async fn test_delete_then_refetch() {
    let store = store_with_backend();
    store.refresh().await;
    let target = store.snapshot().agents[0].id.clone();

    assert_eq!(store.delete_agent(&target).await, Outcome::Applied);
    let state = store.snapshot();
    assert_eq!(state.pagination.total, 23);
    assert!(state.agent(&target).is_none());

    store.refresh().await;
    let state = store.snapshot();
    assert_eq!(state.pagination.total, 23);
    assert!(state.agent(&target).is_none());
}

#[tokio::test]
async fn test_failed_delete_is_atomic() {
    let store = store_with_backend();
    store.refresh().await;
    let before = store.snapshot();

    // Not in the backend, so the stub answers 404
    let outcome = store.delete_agent("4242").await;

    let err = outcome.error().expect("delete of unknown agent should fail");
    assert_eq!(err.kind, FailureKind::Http);
    assert_eq!(err.status_code, 404);
    let after = store.snapshot();
    assert_eq!(after.agents, before.agents);
    assert_eq!(after.pagination, before.pagination);
    assert!(after.delete_request.error.is_some());
}

#[tokio::test]
async fn test_detail_and_tickets() {
    let store = store_with_backend();

    let outcome = store.fetch_agent_detail(&AgentKey::Numeric(103)).await;
    assert_eq!(outcome, Outcome::Applied);
    let detail = store.snapshot().detail.unwrap();
    assert_eq!(detail.name, "Chen Wei");
    assert_eq!(detail.id, "103");

    let mut request = AgentTicketsRequest::new(AgentKey::Numeric(103), store.service().app_id());
    request.limit = 5;
    assert_eq!(store.fetch_agent_tickets(request).await, Outcome::Applied);
    let state = store.snapshot();
    assert_eq!(state.tickets.len(), 5);
    assert_eq!(state.tickets_total, 13);

    let missing = store.fetch_agent_detail(&AgentKey::Numeric(4242)).await;
    assert!(matches!(missing, Outcome::Failed(_)));
    assert!(store.snapshot().detail.is_none());
}
