// ABOUTME: SQLite implementation of the authority repository
// ABOUTME: Delegates to Database query methods and logs writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

use super::AuthorityRepository;
use crate::database::Database;
use async_trait::async_trait;
use jhipster_sample_core::errors::AppResult;
use jhipster_sample_core::models::Authority;
use tracing::debug;

/// `SQLite` implementation of `AuthorityRepository`
#[derive(Clone)]
pub struct AuthorityRepositoryImpl {
    db: Database,
}

impl AuthorityRepositoryImpl {
    /// Create a new `AuthorityRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorityRepository for AuthorityRepositoryImpl {
    async fn exists_by_id(&self, name: &str) -> AppResult<bool> {
        self.db.authority_exists(name).await
    }

    async fn save(&self, authority: &Authority) -> AppResult<Authority> {
        let inserted = self.db.save_authority(authority).await?;
        debug!(authority = %authority, inserted, "Saved authority");
        Ok(authority.clone())
    }

    async fn create(&self, authority: &Authority) -> AppResult<Authority> {
        self.db.insert_authority(authority).await?;
        debug!(authority = %authority, "Created authority");
        Ok(authority.clone())
    }

    async fn find_by_id(&self, name: &str) -> AppResult<Option<Authority>> {
        self.db.get_authority(name).await
    }

    async fn find_all(&self) -> AppResult<Vec<Authority>> {
        self.db.list_authorities().await
    }

    async fn count(&self) -> AppResult<u64> {
        self.db.count_authorities().await
    }
}
