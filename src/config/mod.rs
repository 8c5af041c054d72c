// ABOUTME: Configuration management module for the admin bridge
// ABOUTME: Environment-variable driven settings for both listeners and the oracle backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Configuration module for the Harbor admin bridge
//!
//! All configuration comes from the process environment, read once at
//! startup into [`environment::ServerConfig`]. The shared bridge secret is
//! carried inside the config struct and injected into the request context,
//! never looked up ambiently at verification time.

/// Environment and server configuration
pub mod environment;

// Re-export main configuration types from environment
pub use environment::{BackendMode, Environment, ServerConfig};
