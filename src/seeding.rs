// ABOUTME: Startup seeding of the well-known authorities
// ABOUTME: Creates ROLE_ADMIN, ROLE_USER and ROLE_ANONYMOUS when absent, never duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Authority seeding
//!
//! Seeding is a check-then-create pass over a fixed list of names. Running it
//! any number of times leaves exactly one row per name.

use crate::constants::authorities;
use crate::database::repositories::AuthorityRepository;
use jhipster_sample_core::errors::AppResult;
use jhipster_sample_core::models::Authority;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of a seeding pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Names inserted by this pass, in seeding order
    pub created: Vec<String>,
    /// Names that were already present, in seeding order
    pub existing: Vec<String>,
}

impl SeedReport {
    /// Whether this pass changed the store
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.created.is_empty()
    }

    /// Total names examined
    #[must_use]
    pub fn total(&self) -> usize {
        self.created.len() + self.existing.len()
    }
}

/// Ensure every well-known authority exists
///
/// # Errors
///
/// Returns the first storage error; authorities handled before the failure
/// stay persisted
pub async fn seed_authorities(repository: &dyn AuthorityRepository) -> AppResult<SeedReport> {
    seed_named_authorities(repository, &authorities::SEEDED).await
}

/// Ensure each of `names` exists, creating the missing ones in order
///
/// # Errors
///
/// Returns `InvalidInput` for an invalid name or the first storage error
pub async fn seed_named_authorities(
    repository: &dyn AuthorityRepository,
    names: &[&str],
) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    for &name in names {
        if repository.exists_by_id(name).await? {
            debug!(authority = name, "Authority already present");
            report.existing.push(name.to_owned());
            continue;
        }

        let authority = Authority::new(name)?;
        repository.save(&authority).await?;
        info!(authority = name, "Created authority");
        report.created.push(name.to_owned());
    }

    info!(
        created = report.created.len(),
        existing = report.existing.len(),
        "Authority seeding complete"
    );

    Ok(report)
}
