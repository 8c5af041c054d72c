// ABOUTME: Route module organization for the Harbor admin bridge HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain with clean separation of concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Route module for the Harbor admin bridge
//!
//! Routes are split by the domain they serve: the issuer lives on the main
//! application listener, the session bridge and admin shell live on the
//! admin listener behind the edge gate. Each module contains only route
//! definitions and thin handler functions over the token and backend layers.

/// Admin shell page and authenticated session endpoint (admin domain)
pub mod admin_shell;
/// Session bridge endpoints converting a query token into a cookie (admin domain)
pub mod bridge;
/// Health check and system status routes
pub mod health;
/// Bridge token issuance (main domain)
pub mod issuer;

/// Admin shell route handlers
pub use admin_shell::AdminShellRoutes;
/// Session bridge route handlers
pub use bridge::BridgeRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Token issuance route handlers
pub use issuer::IssuerRoutes;
