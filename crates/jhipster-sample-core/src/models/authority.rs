// ABOUTME: Authority model, a named role identified solely by its name
// ABOUTME: Validates names before they can be persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named permission grouping assigned to users for access control.
///
/// The name is the identity: two authorities with the same name are the same
/// record. Construct through [`Authority::new`] so the name is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "AuthorityRepr")]
pub struct Authority {
    name: String,
}

/// Wire form used to route deserialization through validation
#[derive(Deserialize)]
struct AuthorityRepr {
    name: String,
}

impl TryFrom<AuthorityRepr> for Authority {
    type Error = AppError;

    fn try_from(repr: AuthorityRepr) -> AppResult<Self> {
        Self::new(repr.name)
    }
}

impl Authority {
    /// Maximum length of an authority name (column width of `jhi_authority.name`)
    pub const NAME_MAX_LENGTH: usize = 50;

    /// Create an authority after validating its name
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is empty, longer than
    /// [`Self::NAME_MAX_LENGTH`], or contains whitespace
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self { name })
    }

    /// Check that `name` is acceptable as an authority name
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the first rule the name breaks
    pub fn validate_name(name: &str) -> AppResult<()> {
        if name.is_empty() {
            return Err(AppError::invalid_input("Authority name must not be empty"));
        }
        if name.chars().count() > Self::NAME_MAX_LENGTH {
            return Err(AppError::invalid_input(format!(
                "Authority name must be at most {} characters",
                Self::NAME_MAX_LENGTH
            )));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(AppError::invalid_input(
                "Authority name must not contain whitespace",
            ));
        }
        Ok(())
    }

    /// The authority name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the authority, returning its name
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
