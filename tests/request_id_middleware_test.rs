// ABOUTME: Integration tests for the request ID middleware
// ABOUTME: ID generation, propagation of caller supplied IDs and availability in handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Integration tests for request ID middleware
//!
//! Covers:
//! - UUID generation for each request
//! - Reuse of a caller supplied `x-request-id`
//! - Request ID availability in handlers via extensions
//! - The header on every response of the full application router

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request as HttpRequest, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use jhipster_sample_app::middleware::{request_id_middleware, RequestId};
use jhipster_sample_app::server;
use std::error::Error;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

async fn test_handler(Extension(request_id): Extension<RequestId>) -> String {
    format!("Request ID: {}", request_id.as_str())
}

fn echo_app() -> Router {
    Router::new()
        .route("/", get(test_handler))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn test_request_id_middleware_generates_id() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = echo_app().oneshot(request).await?;

    let header = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("Request ID header not present");
    assert!(
        Uuid::parse_str(header.to_str()?).is_ok(),
        "Request ID is not a valid UUID"
    );

    Ok(())
}

#[tokio::test]
async fn test_request_id_available_in_handler() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = echo_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let header = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("Request ID header not present")
        .to_str()?
        .to_owned();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body_str = String::from_utf8(body.to_vec())?;
    assert_eq!(body_str, format!("Request ID: {header}"));

    Ok(())
}

#[tokio::test]
async fn test_incoming_request_id_is_propagated() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "client-trace-42")
        .body(Body::empty())?;

    let response = echo_app().oneshot(request).await?;

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "client-trace-42"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(&body[..], b"Request ID: client-trace-42");

    Ok(())
}

#[tokio::test]
async fn test_each_request_gets_a_distinct_id() -> Result<(), Box<dyn Error>> {
    let app = echo_app();

    let first = app
        .clone()
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty())?)
        .await?;
    let second = app
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_ne!(
        first.headers().get(REQUEST_ID_HEADER),
        second.headers().get(REQUEST_ID_HEADER)
    );

    Ok(())
}

#[tokio::test]
async fn test_application_routes_carry_request_id() -> Result<(), Box<dyn Error>> {
    let state = common::create_test_state().await?;
    let app = server::build_router(Arc::clone(&state));

    for path in ["/", "/management/health", "/api/authorities"] {
        let response = app
            .clone()
            .oneshot(HttpRequest::builder().uri(path).body(Body::empty())?)
            .await?;
        assert!(
            response.headers().contains_key(REQUEST_ID_HEADER),
            "{path} has no request ID"
        );
    }

    Ok(())
}
