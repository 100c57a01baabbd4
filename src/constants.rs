// ABOUTME: Application constants grouped by domain for the sample application server
// ABOUTME: Service names, environment defaults, HTTP paths and media types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Constants module
//!
//! Authority names live in the core crate and are re-exported here so callers
//! only need one import path.

pub use jhipster_sample_core::constants::authorities;

/// Service identity
pub mod service_names {
    /// Service name used in logs, health and info responses
    pub const JHIPSTER_SAMPLE_APP: &str = "jhipster-sample-app";

    /// Human readable application name shown on the index page
    pub const DISPLAY_NAME: &str = "JHipster Sample Application";
}

/// Default values used when the environment does not override them
pub mod defaults {
    /// Default bind host
    pub const HTTP_HOST: &str = "0.0.0.0";

    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;

    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/jhipster.db";

    /// Default time a full health report is reused before re-checking
    pub const HEALTH_CACHE_TTL_SECS: u64 = 5;

    /// Longest accepted health cache TTL
    pub const HEALTH_CACHE_TTL_MAX_SECS: u64 = 3600;

    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}

/// HTTP route paths
pub mod paths {
    /// Index page
    pub const ROOT: &str = "/";

    /// Aggregate health endpoint
    pub const HEALTH: &str = "/management/health";

    /// Liveness health group
    pub const HEALTH_LIVENESS: &str = "/management/health/liveness";

    /// Readiness health group
    pub const HEALTH_READINESS: &str = "/management/health/readiness";

    /// Application info endpoint
    pub const INFO: &str = "/management/info";

    /// Authority collection resource
    pub const AUTHORITIES: &str = "/api/authorities";

    /// `OpenAPI` document
    pub const API_DOCS: &str = "/v3/api-docs";
}

/// Media types the service produces
pub mod media_types {
    /// Actuator v3 health/info payloads
    pub const ACTUATOR_V3_JSON: &str = "application/vnd.spring-boot.actuator.v3+json";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
