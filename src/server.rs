// ABOUTME: Application bootstrap, router assembly and HTTP serving with graceful shutdown
// ABOUTME: Owns the shared state handed to every route: database, repository, health checker, config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! # Server
//!
//! Startup is three steps:
//!
//! 1. [`bootstrap`] connects the database, seeds authorities when enabled and
//!    builds the health checker.
//! 2. [`build_router`] wires every route plus request tracing and request IDs.
//! 3. [`serve`] accepts connections until the shutdown future resolves, then
//!    drains in-flight requests.

use crate::config::ServerConfig;
use crate::database::repositories::AuthorityRepository;
use crate::database::Database;
use crate::health::HealthChecker;
use crate::middleware::request_id_middleware;
#[cfg(feature = "openapi")]
use crate::routes::OpenApiRoutes;
use crate::routes::{AuthorityRoutes, ManagementRoutes, RootRoutes};
use crate::seeding;
use anyhow::{Context, Result};
use axum::{middleware, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for every request handler
pub struct AppState {
    /// Database handle
    pub database: Database,
    /// Authority storage used by the API routes
    pub authorities: Arc<dyn AuthorityRepository>,
    /// Health checker for the management endpoints
    pub health: HealthChecker,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state over an already connected database
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let health = HealthChecker::new(database.clone(), config.management.health_cache_ttl());
        Self {
            authorities: Arc::new(database.authorities()),
            database,
            health,
            config: Arc::new(config),
        }
    }
}

/// Connect storage, seed authorities if enabled and build the shared state
///
/// # Errors
///
/// Returns an error if the database cannot be opened or seeding fails
pub async fn bootstrap(config: ServerConfig) -> Result<Arc<AppState>> {
    let database = Database::new(&config.database.url)
        .await
        .context("Failed to initialize database")?;

    if config.database.seed_authorities {
        let report = seeding::seed_authorities(&database.authorities())
            .await
            .context("Failed to seed authorities")?;
        info!(
            created = ?report.created,
            existing = report.existing.len(),
            "Authorities seeded"
        );
    } else {
        info!("Authority seeding disabled");
    }

    Ok(Arc::new(AppState::new(database, config)))
}

/// Build the application router with tracing and request ID layers
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .merge(RootRoutes::routes())
        .merge(ManagementRoutes::routes(Arc::clone(&state)))
        .merge(AuthorityRoutes::routes(state));

    #[cfg(feature = "openapi")]
    let router = router.merge(OpenApiRoutes::routes());

    router
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

/// Serve HTTP on `listener` until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if accepting connections fails
pub async fn serve<F>(state: Arc<AppState>, listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!(address = %local_addr, "HTTP server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Bind the configured address and serve until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if binding or serving fails
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let address = state.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    serve(Arc::clone(&state), listener, shutdown_signal()).await?;
    state.database.close().await;
    Ok(())
}

/// Resolve on the first SIGINT (Ctrl-C) or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Shutdown signal received (SIGINT); shutting down"),
        () = terminate => info!("Shutdown signal received (SIGTERM); shutting down"),
    }
}
