// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven configuration with typed values and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Configuration module
//!
//! Configuration is read from environment variables only; binaries apply
//! command-line overrides on top of [`ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};
