// ABOUTME: Repository traits separating storage access from business logic
// ABOUTME: Seeding and HTTP handlers depend on these traits, not on the pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Repository pattern for the authority store

mod authority_repository;

pub use authority_repository::AuthorityRepositoryImpl;

use async_trait::async_trait;
use jhipster_sample_core::errors::AppResult;
use jhipster_sample_core::models::Authority;

/// Storage operations on authorities, keyed by name
#[async_trait]
pub trait AuthorityRepository: Send + Sync {
    /// Whether an authority with this name is stored
    async fn exists_by_id(&self, name: &str) -> AppResult<bool>;

    /// Store the authority, keeping the existing row if the name is taken
    async fn save(&self, authority: &Authority) -> AppResult<Authority>;

    /// Store a new authority, failing with `ResourceAlreadyExists` on a duplicate name
    async fn create(&self, authority: &Authority) -> AppResult<Authority>;

    /// Find an authority by name
    async fn find_by_id(&self, name: &str) -> AppResult<Option<Authority>>;

    /// All authorities ordered by name
    async fn find_all(&self) -> AppResult<Vec<Authority>>;

    /// Number of stored authorities
    async fn count(&self) -> AppResult<u64>;
}
