// ABOUTME: Dual-listener server assembly for the main and admin domains
// ABOUTME: Mounts issuer routes on the main listener and gated admin routes on the admin listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Server assembly
//!
//! The bridge runs two listeners that stand in for the two domains:
//!
//! - The main listener carries the token issuer plus health endpoints,
//!   with CORS for browser clients on configured origins.
//! - The admin listener carries the session bridge and the admin shell,
//!   wrapped whole in the edge gate. Every route and the fallback sit
//!   behind the gate, so an unauthenticated request cannot distinguish a
//!   real path from a missing one. No CORS layer is mounted here: admin
//!   traffic is same-origin and the cookie is `SameSite=Strict`.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    response::Response,
    Router,
};
use tracing::info;

use crate::context::ServerResources;
use crate::middleware::{
    deny_response, edge_gate_middleware, request_tracing_middleware, setup_cors,
};
use crate::routes::{AdminShellRoutes, BridgeRoutes, HealthRoutes, IssuerRoutes};

/// Admin bridge server running both domain listeners
#[derive(Clone)]
pub struct BridgeServer {
    resources: Arc<ServerResources>,
}

impl BridgeServer {
    /// Create a new bridge server with centralized resource management
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Router served on the main domain listener
    #[must_use]
    pub fn main_router(resources: &Arc<ServerResources>) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(IssuerRoutes::routes(resources.clone()))
            .layer(setup_cors(&resources.config))
            .layer(from_fn(request_tracing_middleware))
    }

    /// Router served on the admin domain listener
    ///
    /// The fallback is registered before the layers so that unmatched
    /// paths pass through the edge gate and receive the same denial as
    /// unauthorized requests to real paths.
    #[must_use]
    pub fn admin_router(resources: &Arc<ServerResources>) -> Router {
        Router::new()
            .merge(BridgeRoutes::routes(resources.clone()))
            .merge(AdminShellRoutes::routes(resources.clone()))
            .fallback(admin_fallback)
            .layer(from_fn_with_state(
                resources.clone(),
                edge_gate_middleware,
            ))
            .layer(from_fn(request_tracing_middleware))
    }

    /// Run both listeners until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if either listener fails to bind or the server
    /// terminates abnormally.
    pub async fn run(self) -> Result<()> {
        let main_router = Self::main_router(&self.resources);
        let admin_router = Self::admin_router(&self.resources);

        let http_port = self.resources.config.http_port;
        let admin_http_port = self.resources.config.admin_http_port;

        let main_listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port))
            .await
            .with_context(|| format!("Failed to bind main listener on port {http_port}"))?;
        let admin_listener = tokio::net::TcpListener::bind(("0.0.0.0", admin_http_port))
            .await
            .with_context(|| {
                format!("Failed to bind admin listener on port {admin_http_port}")
            })?;

        info!("Main listener on http://0.0.0.0:{}", http_port);
        info!("Admin listener on http://0.0.0.0:{}", admin_http_port);

        let main_serve = async {
            axum::serve(main_listener, main_router)
                .with_graceful_shutdown(shutdown_signal("main"))
                .await
                .context("Main listener terminated abnormally")
        };
        let admin_serve = async {
            axum::serve(admin_listener, admin_router)
                .with_graceful_shutdown(shutdown_signal("admin"))
                .await
                .context("Admin listener terminated abnormally")
        };

        tokio::try_join!(main_serve, admin_serve)?;

        info!("Harbor admin bridge stopped");
        Ok(())
    }
}

/// Uniform response for admin paths with no registered route
async fn admin_fallback() -> Response {
    deny_response()
}

/// Resolves when the process receives a shutdown signal
async fn shutdown_signal(listener_name: &str) {
    tokio::signal::ctrl_c().await.ok();
    info!("Shutdown signal received, stopping {} listener", listener_name);
}
