// ABOUTME: Main library entry point for the JHipster sample application server
// ABOUTME: Authority store, actuator style management endpoints and the HTTP server around them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

#![deny(unsafe_code)]

//! # JHipster Sample Application
//!
//! A small web service that seeds the well-known security roles into a
//! relational store and exposes:
//!
//! - a welcome page at `/`
//! - health, liveness, readiness and info under `/management`
//! - authority listing, lookup and creation under `/api/authorities`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use jhipster_sample_app::config::ServerConfig;
//! use jhipster_sample_app::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let state = server::bootstrap(config).await?;
//!     server::run(state).await
//! }
//! ```

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// `SQLite` storage and repositories
pub mod database;

/// Health model and checker
pub mod health;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Authority seeding
pub mod seeding;

/// Bootstrap, router and serving
pub mod server;

pub use jhipster_sample_core::{errors, models};
