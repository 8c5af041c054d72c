// ABOUTME: Server binary running the main and admin domain listeners
// ABOUTME: Production entry point with environment configuration and structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! # Harbor Admin Bridge Server Binary
//!
//! Starts both listeners of the admin bridge: the main domain issuer and
//! the edge-gated admin domain. Also generates shared secrets for
//! deployment via `--generate-secret`.

use anyhow::Result;
use clap::Parser;
use harbor_admin_bridge::{
    config::environment::ServerConfig, context::ServerResources, logging, server::BridgeServer,
};
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "harbor-admin-bridge")]
#[command(about = "Harbor admin bridge - cross-domain admin authentication handoff")]
pub struct Args {
    /// Override main listener port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override admin listener port
    #[arg(long)]
    admin_http_port: Option<u16>,

    /// Print a fresh secret suitable for ADMIN_BRIDGE_SECRET and exit
    #[arg(long)]
    generate_secret: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Container entrypoints sometimes pass stray arguments; fall back to
    // environment-driven defaults instead of refusing to boot.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration");
            Args {
                http_port: None,
                admin_http_port: None,
                generate_secret: false,
            }
        }
    };

    if args.generate_secret {
        println!("{}", generate_bridge_secret());
        return Ok(());
    }

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply CLI overrides, then re-validate since an override can
    // reintroduce a port conflict.
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(admin_http_port) = args.admin_http_port {
        config.admin_http_port = admin_http_port;
    }
    config.validate()?;

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Harbor admin bridge");
    info!("{}", config.summary());

    // Log a fingerprint so operators can confirm both sides share the
    // same secret without the secret itself ever reaching the logs.
    if let Some(secret) = config.bridge.secret_bytes() {
        info!(
            "Bridge secret fingerprint: {}",
            logging::secret_fingerprint(secret)
        );
    }

    let resources = Arc::new(ServerResources::from_config(config));
    let server = BridgeServer::new(resources);

    if let Err(e) = server.run().await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Generate a 64 character alphanumeric shared secret
fn generate_bridge_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
