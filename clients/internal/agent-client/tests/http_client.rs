// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Integration tests for the generic HTTP client against a mock backend.

use std::sync::Arc;
use std::time::Duration;

use agent_client::{
    ClientConfig, FailureKind, HttpClient, ManualClock, RequestOptions, ResponseBody,
    ResponseCache,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::default().with_base_url(server.uri());
    HttpClient::new(&config).expect("failed to build client")
}

#[tokio::test]
async fn test_get_is_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 45})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let first = client.get("/agent/summary", RequestOptions::default()).await;
    let second = client.get("/agent/summary", RequestOptions::default()).await;

    assert!(first.success);
    assert_eq!(second.status_code, 200);
    assert_eq!(second.data, Some(ResponseBody::Json(json!({"total": 45}))));
    assert_eq!(first.data, second.data);
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 1})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    client.get("/agent/summary", RequestOptions::default()).await;
    client.clear_cache(Some("/agent/"));
    let again = client.get("/agent/summary", RequestOptions::default()).await;

    assert!(again.success);
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 1})))
        .expect(2)
        .mount(&server)
        .await;

    let clock = ManualClock::new();
    let ttl = Duration::from_secs(300);
    let cache = ResponseCache::with_clock(ttl, Arc::new(clock.clone()));
    let config = ClientConfig::default().with_base_url(server.uri());
    let client = HttpClient::with_cache(&config, cache).unwrap();

    client.get("/agent/summary", RequestOptions::default()).await;
    clock.advance(ttl);
    client.get("/agent/summary", RequestOptions::default()).await;
    clock.advance(Duration::from_millis(1));
    client.get("/agent/summary", RequestOptions::default()).await;
}

#[tokio::test]
async fn test_post_is_never_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agent/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"agents": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    for _ in 0..2 {
        let resp = client
            .post("/agent/", json!({"page": 1}), RequestOptions::default())
            .await;
        assert!(resp.success);
    }
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn test_error_status_keeps_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agent/detail/page"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .post("/agent/detail/page", json!({"agent_id": 99}), RequestOptions::default())
        .await;

    assert!(!resp.success);
    assert_eq!(resp.status_code, 404);
    assert_eq!(resp.failure, Some(FailureKind::Http));
    assert_eq!(resp.error.as_deref(), Some(r#"HTTP 404: {"detail":"Not found"}"#));
    assert_eq!(resp.data, None);
}

#[tokio::test]
async fn test_error_status_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client.get("/broken", RequestOptions::default()).await;

    assert_eq!(resp.status_code, 500);
    assert_eq!(resp.error.as_deref(), Some("HTTP 500: null"));
    assert!(client.cache().is_empty(), "failures are not cached");
}

#[tokio::test]
async fn test_empty_success_body_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent/ping"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    for _ in 0..2 {
        let resp = client.get("/agent/ping", RequestOptions::default()).await;
        assert!(resp.success);
        assert_eq!(resp.status_code, 204);
        assert_eq!(resp.data, None);
    }
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn test_non_json_body_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client.get("/health", RequestOptions::default()).await;

    assert!(resp.success);
    assert_eq!(resp.data, Some(ResponseBody::Text("OK".to_string())));
}

#[tokio::test]
async fn test_caller_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent/summary"))
        .and(header("authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .get(
            "/agent/summary",
            RequestOptions::default().header("Authorization", "Bearer token"),
        )
        .await;

    assert!(resp.success);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(100));
    let client = HttpClient::new(&config).unwrap();

    let resp = client.get("/slow", RequestOptions::default()).await;

    assert!(!resp.success);
    assert_eq!(resp.status_code, 0);
    assert_eq!(resp.failure, Some(FailureKind::Timeout));
    assert_eq!(resp.error.as_deref(), Some("Request timeout (100ms)"));
}

#[tokio::test]
async fn test_per_request_timeout_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .get(
            "/slow",
            RequestOptions::default().timeout(Duration::from_millis(50)),
        )
        .await;

    assert_eq!(resp.failure, Some(FailureKind::Timeout));
    assert_eq!(resp.error.as_deref(), Some("Request timeout (50ms)"));
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    // Grab a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::default().with_base_url(format!("http://{}", addr));
    let client = HttpClient::new(&config).unwrap();

    let resp = client.get("/agent/summary", RequestOptions::default()).await;

    assert!(!resp.success);
    assert_eq!(resp.status_code, 0);
    assert_eq!(resp.failure, Some(FailureKind::Network));
    assert!(resp.error.is_some());
}
