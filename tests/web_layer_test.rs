// ABOUTME: Web layer tests for the root page, health endpoints and info
// ABOUTME: Runs requests in-process against the fully wired router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;
mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use jhipster_sample_app::constants::{media_types, service_names};

#[tokio::test]
async fn test_root_page_is_served() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/").send(app).await;

    assert_eq!(response.status(), 200);
    assert!(response
        .header("content-type")
        .unwrap()
        .starts_with("text/html"));
    assert!(response.text().contains(service_names::DISPLAY_NAME));
}

#[tokio::test]
async fn test_health_endpoint_is_up() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/management/health").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("content-type"),
        Some(media_types::ACTUATOR_V3_JSON)
    );

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "UP");
    assert_eq!(body["components"]["db"]["status"], "UP");
    assert_eq!(body["components"]["db"]["details"]["database"], "SQLite");
    assert_eq!(body["components"]["db"]["details"]["authorities"], 3);
    assert_eq!(body["components"]["ping"]["status"], "UP");
}

#[tokio::test]
async fn test_liveness_reports_ping_only() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let body: serde_json::Value = AxumTestRequest::get("/management/health/liveness")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "UP");
    assert!(body["components"]["ping"].is_object());
    assert!(body["components"]["db"].is_null());
}

#[tokio::test]
async fn test_readiness_includes_database() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let body: serde_json::Value = AxumTestRequest::get("/management/health/readiness")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "UP");
    assert_eq!(body["components"]["db"]["status"], "UP");
}

#[tokio::test]
async fn test_info_reports_active_profile() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let body: serde_json::Value = AxumTestRequest::get("/management/info")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["app"]["name"], service_names::JHIPSTER_SAMPLE_APP);
    assert_eq!(body["app"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["activeProfiles"], serde_json::json!(["test"]));
    assert!(body["startedAt"].is_string());
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/does-not-exist").send(app).await;

    assert_eq!(response.status(), 404);
}

#[cfg(feature = "openapi")]
#[tokio::test]
async fn test_api_docs_are_served() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let body: serde_json::Value = AxumTestRequest::get("/v3/api-docs")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["components"]["schemas"]["AuthorityDto"].is_object());
}

#[cfg(not(feature = "openapi"))]
#[tokio::test]
async fn test_api_docs_disabled_by_default() {
    let (_state, app) = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/v3/api-docs").send(app).await;

    assert_eq!(response.status(), 404);
}
