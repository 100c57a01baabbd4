// ABOUTME: Authority seeding utility for the JHipster sample application
// ABOUTME: Creates ROLE_ADMIN, ROLE_USER and ROLE_ANONYMOUS when they are missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Authority seeder
//!
//! Usage:
//! ```bash
//! # Seed authorities (uses DATABASE_URL from environment)
//! cargo run --bin seed-authorities
//!
//! # Override database URL
//! cargo run --bin seed-authorities -- --database-url sqlite:./data/jhipster.db
//!
//! # Verbose output
//! cargo run --bin seed-authorities -- -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use jhipster_sample_app::{
    config::DatabaseUrl, constants::defaults, database::Database, logging, seeding,
};
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-authorities",
    about = "JHipster Sample Application Authority Seeder",
    long_about = "Create the well-known security roles if they do not exist yet"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    logging::init_with_level(if args.verbose { "debug" } else { "info" })?;

    info!("=== JHipster Sample Application Authority Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned());
    let url = DatabaseUrl::parse_url(&database_url).context("Invalid database URL")?;

    info!("Connecting to database: {}", url);
    let database = Database::new(&url).await?;

    let report = seeding::seed_authorities(&database.authorities()).await?;
    database.close().await;

    info!("=== Seeding Complete ===");
    info!("Created: {:?}", report.created);
    info!("Already present: {:?}", report.existing);

    Ok(())
}
