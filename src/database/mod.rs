// ABOUTME: Database connection management and schema migrations for the authority store
// ABOUTME: Wraps a sqlx SQLite pool and exposes typed query methods and repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! # Database Management
//!
//! A single [`Database`] handle owns the connection pool. Query methods are
//! grouped per table in submodules (`authorities`) and fronted by repository
//! traits in [`repositories`].

mod authorities;

/// Repository traits and their `SQLite` implementations
pub mod repositories;

use crate::config::DatabaseUrl;
use anyhow::{Context, Result};
use jhipster_sample_core::errors::AppResult;
use repositories::AuthorityRepositoryImpl;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Backend description reported by health checks
pub const BACKEND_NAME: &str = "SQLite";

/// Query used to validate connectivity
pub const VALIDATION_QUERY: &str = "SELECT 1";

/// Database manager for the authority store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect to the database and run migrations
    ///
    /// File databases are created if missing, including their parent
    /// directory. In-memory databases are pinned to a single long-lived
    /// connection so every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the connection
    /// fails, or a migration fails
    pub async fn new(url: &DatabaseUrl) -> Result<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }

        let connection_string = url.to_connection_string();
        let options = SqliteConnectOptions::from_str(&connection_string)
            .with_context(|| format!("Invalid database URL {connection_string}"))?
            .create_if_missing(true);

        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {connection_string}"))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %connection_string, "Database initialized");

        Ok(db)
    }

    /// Human readable backend description
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        BACKEND_NAME
    }

    /// Authority repository backed by this database
    #[must_use]
    pub fn authorities(&self) -> AuthorityRepositoryImpl {
        AuthorityRepositoryImpl::new(self.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_authorities()
            .await
            .context("Failed to migrate authority table")?;
        debug!("Database migrations complete");
        Ok(())
    }

    /// Execute the validation query
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query(VALIDATION_QUERY).execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
