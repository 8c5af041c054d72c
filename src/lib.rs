// ABOUTME: Main library entry point for the Harbor admin bridge
// ABOUTME: Token issuance on the main domain, edge gating and session bridging on the admin domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

#![deny(unsafe_code)]

//! # Harbor Admin Bridge
//!
//! Cross-domain admin authentication for the Harbor platform. An
//! authenticated user on the main application domain proves admin identity
//! to the separate admin domain through a signed, short-lived bearer token,
//! without sharing session cookies across domains and without exposing the
//! platform's master credentials to the browser.
//!
//! ## Flow
//!
//! 1. The issuer on the main domain confirms the session user holds an
//!    admin role, then mints a three-segment HMAC-SHA256 token.
//! 2. The browser carries the token to the admin domain as a one-shot
//!    query parameter.
//! 3. The session bridge re-verifies the token, resolves the admin
//!    profile, and converts the token into a durable `HttpOnly` cookie.
//! 4. The edge gate re-validates that cookie on every subsequent request,
//!    statelessly, before any admin route runs.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use harbor_admin_bridge::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!(
//!         "Harbor admin bridge configured with ports: main={} admin={}",
//!         config.http_port, config.admin_http_port
//!     );
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crate (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Authorization oracle clients (HTTP and in-memory backends)
pub mod backend;

/// Configuration management from the process environment
pub mod config;

/// Shared resource container handed to routes and middleware
pub mod context;

/// Base64url codec, HMAC signing, and constant-time verification
pub mod crypto;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for edge gating and request tracing
pub mod middleware;

/// HTTP routes for token issuance and session bridging
pub mod routes;

/// Cookie parsing and construction helpers
pub mod security;

/// Dual-listener server assembly and startup
pub mod server;

/// Compact token minting, parsing, and verification
pub mod token;

/// Shared helpers for server-rendered HTML
pub mod utils;

// Re-exported foundation crate modules, so call sites read
// `crate::errors::AppResult` instead of reaching through harbor_core.

/// Unified error handling system with standard error codes and HTTP responses
pub use harbor_core::errors;

/// Token lifetime, carrier names, and wire-format constants
pub use harbor_core::constants;

/// Oracle data projections (session user, admin role, admin profile)
pub use harbor_core::models;
