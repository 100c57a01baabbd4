// ABOUTME: Server binary for the JHipster sample application
// ABOUTME: Loads configuration, seeds authorities and serves HTTP until SIGINT or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! JHipster sample application server
//!
//! Usage:
//! ```bash
//! cargo run --bin jhipster-sample
//! cargo run --bin jhipster-sample -- --http-port 9090 --database-url sqlite::memory:
//! ```

use anyhow::Result;
use clap::Parser;
use jhipster_sample_app::{
    config::{DatabaseUrl, ServerConfig},
    logging, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "jhipster-sample")]
#[command(about = "JHipster Sample Application - authority store with management endpoints")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Skip authority seeding
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url)?;
    }
    if args.no_seed {
        config.database.seed_authorities = false;
    }
    config.validate()?;

    logging::init_for_server(&config)?;
    info!("{}", config.summary());

    let state = match server::bootstrap(config).await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to start: {:#}", e);
            return Err(e);
        }
    };

    server::run(state).await
}
