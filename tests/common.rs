// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases and fully wired application state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `jhipster_sample_app`

use anyhow::Result;
use axum::Router;
use jhipster_sample_app::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    server::{self, AppState},
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh, empty in-memory database with the schema applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory).await
}

/// Application state bootstrapped from the testing configuration
pub async fn create_test_state() -> Result<Arc<AppState>> {
    create_test_state_with(ServerConfig::for_testing()).await
}

/// Application state bootstrapped from a custom configuration
pub async fn create_test_state_with(config: ServerConfig) -> Result<Arc<AppState>> {
    init_test_logging();
    server::bootstrap(config).await
}

/// Router over freshly bootstrapped testing state
pub async fn create_test_router() -> Result<(Arc<AppState>, Router)> {
    let state = create_test_state().await?;
    let router = server::build_router(Arc::clone(&state));
    Ok((state, router))
}
