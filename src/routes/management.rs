// ABOUTME: Management route handlers for health, liveness, readiness and info
// ABOUTME: Answers in the actuator v3 JSON format with 503 for unhealthy reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Management endpoints
//!
//! `/management/health` runs every check (cached for the configured TTL),
//! `/liveness` only confirms the process answers and `/readiness` always
//! re-checks the database.

use crate::constants::{media_types, paths, service_names};
use crate::health::{HealthGroup, HealthResponse};
use crate::server::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Management routes handler
pub struct ManagementRoutes;

impl ManagementRoutes {
    /// Create all management routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(paths::HEALTH, get(Self::handle_health))
            .route(paths::HEALTH_LIVENESS, get(Self::handle_liveness))
            .route(paths::HEALTH_READINESS, get(Self::handle_readiness))
            .route(paths::INFO, get(Self::handle_info))
            .with_state(state)
    }

    async fn handle_health(State(state): State<Arc<AppState>>) -> Response {
        Self::health_response(state.health.check(HealthGroup::All).await)
    }

    async fn handle_liveness(State(state): State<Arc<AppState>>) -> Response {
        Self::health_response(state.health.check(HealthGroup::Liveness).await)
    }

    async fn handle_readiness(State(state): State<Arc<AppState>>) -> Response {
        Self::health_response(state.health.check(HealthGroup::Readiness).await)
    }

    async fn handle_info(State(state): State<Arc<AppState>>) -> Response {
        let body = json!({
            "app": {
                "name": state.config.service_name,
                "displayName": service_names::DISPLAY_NAME,
                "version": state.config.service_version,
            },
            "activeProfiles": [state.config.environment.profile_name()],
            "startedAt": state.health.started_at().to_rfc3339(),
            "uptimeSeconds": state.health.uptime().as_secs(),
        });

        (
            [(header::CONTENT_TYPE, media_types::ACTUATOR_V3_JSON)],
            Json(body),
        )
            .into_response()
    }

    fn health_response(report: HealthResponse) -> Response {
        let status = StatusCode::from_u16(report.status.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(header::CONTENT_TYPE, media_types::ACTUATOR_V3_JSON)],
            Json(report),
        )
            .into_response()
    }
}
