// ABOUTME: HTTP middleware for admin edge gating, CORS, and request tracing
// ABOUTME: Provides stateless cookie authentication and request ID propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

pub mod cors;
pub mod edge_gate;
pub mod tracing;

// CORS configuration for the main listener
pub use cors::setup_cors;

// Admin domain edge gate
pub use edge_gate::{deny_response, edge_gate_middleware, AdminIdentity};

// Request tracing and context management
pub use tracing::request_tracing_middleware;
