// ABOUTME: Core types and constants for the JHipster sample application
// ABOUTME: Foundation crate with error handling, well-known authorities, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

#![deny(unsafe_code)]

//! # JHipster Sample Core
//!
//! Foundation crate shared by the server library, its binaries and tests.
//! It carries no async runtime and no database driver.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Well-known authority names
//! - **models**: The `Authority` role record

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
