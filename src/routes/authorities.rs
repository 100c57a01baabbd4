// ABOUTME: Authority route handlers for listing, lookup and creation
// ABOUTME: Validates names, maps storage errors to 400/404/409 JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

use crate::constants::paths;
use crate::middleware::RequestId;
use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use jhipster_sample_core::errors::{AppError, AppResult};
use jhipster_sample_core::models::Authority;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Authority as exchanged over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthorityDto {
    /// Role name, e.g. `ROLE_ADMIN`
    pub name: String,
}

impl From<Authority> for AuthorityDto {
    fn from(authority: Authority) -> Self {
        Self {
            name: authority.into_name(),
        }
    }
}

/// Authority routes handler
pub struct AuthorityRoutes;

impl AuthorityRoutes {
    /// Create all authority routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(
                paths::AUTHORITIES,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                &format!("{}/:name", paths::AUTHORITIES),
                get(Self::handle_get),
            )
            .with_state(state)
    }

    async fn handle_list(
        State(state): State<Arc<AppState>>,
        Extension(request_id): Extension<RequestId>,
    ) -> Result<Json<Vec<AuthorityDto>>, AppError> {
        let authorities = state
            .authorities
            .find_all()
            .await
            .map_err(|e| e.with_request_id(request_id.as_str()))?;

        Ok(Json(authorities.into_iter().map(AuthorityDto::from).collect()))
    }

    async fn handle_get(
        State(state): State<Arc<AppState>>,
        Extension(request_id): Extension<RequestId>,
        Path(name): Path<String>,
    ) -> Result<Json<AuthorityDto>, AppError> {
        let found = state
            .authorities
            .find_by_id(&name)
            .await
            .map_err(|e| e.with_request_id(request_id.as_str()))?;

        found.map(|authority| Json(authority.into())).ok_or_else(|| {
            AppError::not_found(format!("Authority {name}")).with_request_id(request_id.as_str())
        })
    }

    async fn handle_create(
        State(state): State<Arc<AppState>>,
        Extension(request_id): Extension<RequestId>,
        body: Result<Json<AuthorityDto>, JsonRejection>,
    ) -> Result<Response, AppError> {
        Self::create(&state, body)
            .await
            .map_err(|e| e.with_request_id(request_id.as_str()))
    }

    async fn create(
        state: &AppState,
        body: Result<Json<AuthorityDto>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(dto) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let authority = Authority::new(dto.name)?;
        let created = state.authorities.create(&authority).await?;
        state.health.invalidate_cache().await;

        info!(authority = %created, "Authority created via API");

        let location = format!("{}/{}", paths::AUTHORITIES, created.name());
        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(AuthorityDto::from(created)),
        )
            .into_response())
    }
}
