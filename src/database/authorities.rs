// ABOUTME: Authority table schema and queries
// ABOUTME: Existence checks, insert-if-absent, strict insert, lookups and counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

use super::Database;
use anyhow::Result;
use jhipster_sample_core::errors::{AppError, AppResult};
use jhipster_sample_core::models::Authority;

impl Database {
    pub(super) async fn migrate_authorities(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS jhi_authority (
                name VARCHAR(50) NOT NULL PRIMARY KEY
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check whether an authority with this name exists
    pub async fn authority_exists(&self, name: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jhi_authority WHERE name = ?1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Insert the authority unless one with the same name exists
    ///
    /// Returns `true` when a row was inserted.
    pub async fn save_authority(&self, authority: &Authority) -> AppResult<bool> {
        let result =
            sqlx::query("INSERT INTO jhi_authority (name) VALUES (?1) ON CONFLICT(name) DO NOTHING")
                .bind(authority.name())
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Insert the authority, failing with `ResourceAlreadyExists` on a duplicate name
    pub async fn insert_authority(&self, authority: &Authority) -> AppResult<()> {
        if self.save_authority(authority).await? {
            Ok(())
        } else {
            Err(AppError::already_exists(format!("Authority {authority}")))
        }
    }

    /// Look up an authority by name
    pub async fn get_authority(&self, name: &str) -> AppResult<Option<Authority>> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT name FROM jhi_authority WHERE name = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        row.map(stored_authority).transpose()
    }

    /// List all authorities ordered by name
    pub async fn list_authorities(&self) -> AppResult<Vec<Authority>> {
        let rows: Vec<String> = sqlx::query_scalar("SELECT name FROM jhi_authority ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(stored_authority).collect()
    }

    /// Number of stored authorities
    pub async fn count_authorities(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jhi_authority")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

/// Rebuild an authority from a stored name
fn stored_authority(name: String) -> AppResult<Authority> {
    Authority::new(name).map_err(|e| AppError::database(format!("Corrupt authority row: {e}")))
}
