// ABOUTME: Service health monitoring in the actuator v3 health format
// ABOUTME: Component checks, status aggregation, health groups and response caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Health check model and checker
//!
//! A health report is an aggregate status plus named component results:
//!
//! ```json
//! {"status":"UP","components":{"db":{"status":"UP","details":{...}},"ping":{"status":"UP"}}}
//! ```

use crate::database::{Database, BACKEND_NAME, VALIDATION_QUERY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Health status of a component or of the whole service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    /// Functioning as expected
    Up,
    /// Not functioning
    Down,
    /// Taken out of service deliberately
    OutOfService,
    /// State cannot be determined
    Unknown,
}

impl HealthStatus {
    /// Precedence when aggregating; lower wins
    const fn severity_rank(self) -> u8 {
        match self {
            Self::Down => 0,
            Self::OutOfService => 1,
            Self::Up => 2,
            Self::Unknown => 3,
        }
    }

    /// HTTP status code to answer a health request with
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Up | Self::Unknown => 200,
            Self::Down | Self::OutOfService => 503,
        }
    }

    /// Combine component statuses: `DOWN` beats `OUT_OF_SERVICE` beats `UP`
    /// beats `UNKNOWN`; no components at all is `UNKNOWN`
    pub fn aggregate(statuses: impl IntoIterator<Item = Self>) -> Self {
        statuses
            .into_iter()
            .min_by_key(|status| status.severity_rank())
            .unwrap_or(Self::Unknown)
    }
}

/// Result of one component check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentHealth {
    /// Component status
    pub status: HealthStatus,
    /// Check specific details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ComponentHealth {
    /// Healthy component without details
    #[must_use]
    pub const fn up() -> Self {
        Self {
            status: HealthStatus::Up,
            details: None,
        }
    }

    /// Failed component with an error description
    #[must_use]
    pub fn down(error: impl std::fmt::Display) -> Self {
        Self {
            status: HealthStatus::Down,
            details: Some(serde_json::json!({ "error": error.to_string() })),
        }
    }

    /// Attach details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Health report returned by the management endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    /// Aggregate status
    pub status: HealthStatus,
    /// Component results keyed by component name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, ComponentHealth>,
}

impl HealthResponse {
    /// Build a report, deriving the aggregate status from the components
    #[must_use]
    pub fn from_components(components: BTreeMap<String, ComponentHealth>) -> Self {
        let status = HealthStatus::aggregate(components.values().map(|c| c.status));
        Self { status, components }
    }
}

/// Named subsets of the component checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthGroup {
    /// Every component
    All,
    /// Is the process alive (ping only)
    Liveness,
    /// Can the service take traffic (db + ping)
    Readiness,
}

/// Component name of the database check
pub const DB_COMPONENT: &str = "db";

/// Component name of the ping check
pub const PING_COMPONENT: &str = "ping";

/// Health checker for the sample application
pub struct HealthChecker {
    /// Service start time
    start_time: Instant,
    /// Wall clock start time reported by the info endpoint
    started_at: DateTime<Utc>,
    /// Database to validate
    database: Database,
    /// Cached full report
    cached_status: RwLock<Option<(HealthResponse, Instant)>>,
    /// How long a cached full report stays valid (zero disables caching)
    cache_ttl: Duration,
}

impl HealthChecker {
    /// Create a new health checker
    #[must_use]
    pub fn new(database: Database, cache_ttl: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            database,
            cached_status: RwLock::new(None),
            cache_ttl,
        }
    }

    /// Time since the checker was created
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// When the checker was created
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Run the checks belonging to `group`
    pub async fn check(&self, group: HealthGroup) -> HealthResponse {
        match group {
            HealthGroup::All => self.full_health().await,
            HealthGroup::Liveness => {
                let mut components = BTreeMap::new();
                components.insert(PING_COMPONENT.to_owned(), Self::check_ping());
                HealthResponse::from_components(components)
            }
            HealthGroup::Readiness => self.run_all_checks().await,
        }
    }

    /// Full report, served from cache while it is fresh
    async fn full_health(&self) -> HealthResponse {
        if !self.cache_ttl.is_zero() {
            let cached = self.cached_status.read().await;
            if let Some((response, cached_at)) = cached.as_ref() {
                if cached_at.elapsed() < self.cache_ttl {
                    return response.clone();
                }
            }
        }

        let response = self.run_all_checks().await;

        if !self.cache_ttl.is_zero() {
            let mut cached = self.cached_status.write().await;
            *cached = Some((response.clone(), Instant::now()));
        }

        response
    }

    /// Drop any cached report so the next request re-runs every check
    pub async fn invalidate_cache(&self) {
        self.cached_status.write().await.take();
    }

    async fn run_all_checks(&self) -> HealthResponse {
        let mut components = BTreeMap::new();
        components.insert(DB_COMPONENT.to_owned(), self.check_database().await);
        components.insert(PING_COMPONENT.to_owned(), Self::check_ping());

        let response = HealthResponse::from_components(components);
        if response.status == HealthStatus::Up {
            debug!("Health check passed");
        } else {
            warn!(status = ?response.status, "Health check degraded");
        }
        response
    }

    /// Check database connectivity and report the authority count
    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();

        if let Err(e) = self.database.ping().await {
            warn!("Database health check failed: {}", e);
            return ComponentHealth::down(e);
        }

        let authorities = match self.database.count_authorities().await {
            Ok(count) => serde_json::json!(count),
            Err(e) => {
                warn!("Authority count unavailable: {}", e);
                serde_json::Value::Null
            }
        };

        ComponentHealth::up().with_details(serde_json::json!({
            "database": BACKEND_NAME,
            "validationQuery": VALIDATION_QUERY,
            "authorities": authorities,
            "durationMs": u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        }))
    }

    fn check_ping() -> ComponentHealth {
        ComponentHealth::up()
    }
}
