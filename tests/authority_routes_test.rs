// ABOUTME: Authority API route tests
// ABOUTME: Listing, lookup, creation and the 400/404/409 error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;
mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use jhipster_sample_app::{
    config::ServerConfig, database::repositories::AuthorityRepository, routes::AuthorityDto, server,
};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_list_returns_seeded_authorities_in_order() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let body: Vec<AuthorityDto> = AxumTestRequest::get("/api/authorities")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let names: Vec<&str> = body.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["ROLE_ADMIN", "ROLE_ANONYMOUS", "ROLE_USER"]);
}

#[tokio::test]
async fn test_get_existing_authority() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let body: AuthorityDto = AxumTestRequest::get("/api/authorities/ROLE_USER")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body.name, "ROLE_USER");
}

#[tokio::test]
async fn test_get_missing_authority_is_404() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/api/authorities/ROLE_MISSING")
        .header("x-request-id", "req-404")
        .send(app)
        .await;

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Authority ROLE_MISSING not found");
    assert_eq!(body["error"]["request_id"], "req-404");
}

#[tokio::test]
async fn test_create_authority() {
    let (state, app) = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::post("/api/authorities")
        .json(&json!({ "name": "ROLE_AUDITOR" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    assert_eq!(
        response.header("location"),
        Some("/api/authorities/ROLE_AUDITOR")
    );
    let body: AuthorityDto = response.json();
    assert_eq!(body.name, "ROLE_AUDITOR");

    assert!(state.authorities.exists_by_id("ROLE_AUDITOR").await.unwrap());
    assert_eq!(state.authorities.count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_create_duplicate_is_409() {
    let (state, app) = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::post("/api/authorities")
        .json(&json!({ "name": "ROLE_ADMIN" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
    assert_eq!(state.authorities.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_create_invalid_name_is_400() {
    let (_state, app) = common::create_test_router().await.unwrap();

    for name in [String::new(), "ROLE WITH SPACE".to_owned(), "R".repeat(51)] {
        let response = AxumTestRequest::post("/api/authorities")
            .json(&json!({ "name": name }))
            .send(app.clone())
            .await;

        assert_eq!(response.status(), 400, "name {name:?} should be rejected");
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_create_malformed_body_is_400() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::post("/api/authorities")
        .raw_body("application/json", "{\"name\":")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_create_refreshes_cached_health_report() {
    let mut config = ServerConfig::for_testing();
    config.management.health_cache_ttl_secs = 60;
    let state = common::create_test_state_with(config).await.unwrap();
    let app = server::build_router(Arc::clone(&state));

    let before: serde_json::Value = AxumTestRequest::get("/management/health")
        .send(app.clone())
        .await
        .json();
    assert_eq!(before["components"]["db"]["details"]["authorities"], 3);

    AxumTestRequest::post("/api/authorities")
        .json(&json!({ "name": "ROLE_AUDITOR" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED);

    let after: serde_json::Value = AxumTestRequest::get("/management/health")
        .send(app)
        .await
        .json();
    assert_eq!(after["components"]["db"]["details"]["authorities"], 4);
}
