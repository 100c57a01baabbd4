// ABOUTME: OpenAPI document endpoint for the sample application API
// ABOUTME: Serves the machine-readable schema at /v3/api-docs when the openapi feature is enabled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! `OpenAPI` documentation routes

use crate::constants::paths;
use crate::routes::authorities::AuthorityDto;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

/// `OpenAPI` documentation for the sample application
///
/// Path annotations require standalone functions (not impl methods), so only
/// schemas are generated.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "JHipster Sample Application API",
        description = "Authority store with actuator style management endpoints",
        license(name = "MIT OR Apache-2.0")
    ),
    tags(
        (name = "authorities", description = "Security role names")
    ),
    components(schemas(AuthorityDto))
)]
pub struct ApiDoc;

/// `OpenAPI` routes provider
pub struct OpenApiRoutes;

impl OpenApiRoutes {
    /// Create the `OpenAPI` document route
    pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
        Router::new().route(paths::API_DOCS, get(Self::handle_api_docs))
    }

    async fn handle_api_docs() -> Json<utoipa::openapi::OpenApi> {
        Json(ApiDoc::openapi())
    }
}
