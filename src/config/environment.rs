// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, active profile and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Environment-based configuration management

use crate::constants::{defaults, service_names};
use jhipster_sample_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Active profile of the running application
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Profile name as reported by the info endpoint
    #[must_use]
    pub const fn profile_name(self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prod",
            Self::Testing => "test",
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// File path of the database
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for empty input or a non-`SQLite` scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config_invalid("Database URL must not be empty"));
        }
        if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            return Err(AppError::config_invalid(
                "PostgreSQL is not supported, use a sqlite: URL",
            ));
        }

        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        if path_str == ":memory:" {
            Ok(Self::Memory)
        } else if path_str.is_empty() {
            Err(AppError::config_invalid(format!(
                "Database URL {s} has no file path"
            )))
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(path_str),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/jhipster.db"),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub http_host: String,
    /// HTTP port (0 picks an ephemeral port)
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Active profile
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Management endpoint configuration
    pub management: ManagementConfig,
    /// Service name reported by health and info
    pub service_name: String,
    /// Service version (from Cargo.toml)
    pub service_version: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Seed the well-known authorities during bootstrap
    pub seed_authorities: bool,
}

/// Management (health/info) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagementConfig {
    /// How long a full health report is reused, in seconds (0 disables caching)
    pub health_cache_ttl_secs: u64,
}

impl ManagementConfig {
    /// Health cache TTL as a `Duration`
    #[must_use]
    pub const fn health_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.health_cache_ttl_secs)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is present but cannot be parsed,
    /// or if the resulting configuration fails [`ServerConfig::validate`]
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::from_str_or_default(
            &env::var("ACTIVE_PROFILE")
                .or_else(|_| env::var("ENVIRONMENT"))
                .unwrap_or_default(),
        );

        let config = Self {
            http_host: env_var_or("HTTP_HOST", defaults::HTTP_HOST),
            http_port: parse_env_var("HTTP_PORT", defaults::HTTP_PORT)?,
            log_level: LogLevel::from_str_or_default(&env_var_or(
                "LOG_LEVEL",
                defaults::LOG_LEVEL,
            )),
            environment,
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL))
                    .map_err(|e| {
                        AppError::config_invalid(format!("Invalid DATABASE_URL value: {}", e.message))
                    })?,
                seed_authorities: parse_env_var("SEED_AUTHORITIES", true)?,
            },
            management: ManagementConfig {
                health_cache_ttl_secs: parse_env_var(
                    "HEALTH_CACHE_TTL_SECS",
                    defaults::HEALTH_CACHE_TTL_SECS,
                )?,
            },
            service_name: env_var_or("SERVICE_NAME", service_names::JHIPSTER_SAMPLE_APP),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Configuration for tests: in-memory database, ephemeral port, `test` profile
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            http_host: "127.0.0.1".to_owned(),
            http_port: 0,
            log_level: LogLevel::Warn,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
                seed_authorities: true,
            },
            management: ManagementConfig {
                health_cache_ttl_secs: 0,
            },
            service_name: service_names::JHIPSTER_SAMPLE_APP.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the first invalid setting
    pub fn validate(&self) -> AppResult<()> {
        if self.http_host.trim().is_empty() {
            return Err(AppError::config_invalid("HTTP_HOST must not be empty"));
        }
        if self.http_host != "localhost" && self.http_host.parse::<IpAddr>().is_err() {
            return Err(AppError::config_invalid(format!(
                "HTTP_HOST {} is not an IP address",
                self.http_host
            )));
        }
        if self.management.health_cache_ttl_secs > defaults::HEALTH_CACHE_TTL_MAX_SECS {
            return Err(AppError::config_invalid(format!(
                "HEALTH_CACHE_TTL_SECS must be at most {}",
                defaults::HEALTH_CACHE_TTL_MAX_SECS
            )));
        }
        Ok(())
    }

    /// Address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        let host = if self.http_host == "localhost" {
            "127.0.0.1"
        } else {
            self.http_host.as_str()
        };
        if host.contains(':') {
            format!("[{host}]:{}", self.http_port)
        } else {
            format!("{host}:{}", self.http_port)
        }
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "JHipster Sample Application Configuration:\n\
             - Bind Address: {}\n\
             - Profile: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Seed Authorities: {}\n\
             - Health Cache TTL: {}s",
            self.bind_address(),
            self.environment.profile_name(),
            self.log_level,
            if self.database.url.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            if self.database.seed_authorities {
                "Enabled"
            } else {
                "Disabled"
            },
            self.management.health_cache_ttl_secs,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_var<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value {raw:?}: {e}"))),
        Err(_) => Ok(default),
    }
}
