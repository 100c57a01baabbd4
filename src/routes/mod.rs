// ABOUTME: Route module organization for the sample application HTTP endpoints
// ABOUTME: Each domain module defines its routes and thin handlers over shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! HTTP routes grouped by domain

/// Authority listing, lookup and creation
pub mod authorities;
/// Health and info management endpoints
pub mod management;
/// `OpenAPI` document endpoint (feature-gated)
#[cfg(feature = "openapi")]
pub mod openapi;
/// Welcome page
pub mod root;

pub use authorities::{AuthorityDto, AuthorityRoutes};
pub use management::ManagementRoutes;
#[cfg(feature = "openapi")]
pub use openapi::OpenApiRoutes;
pub use root::RootRoutes;
