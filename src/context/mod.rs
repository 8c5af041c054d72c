// ABOUTME: Centralized resource container for dependency injection across HTTP surfaces
// ABOUTME: Shares configuration and the oracle backend between routes and middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Shared server resources
//!
//! Both listeners and every route handler borrow from one [`ServerResources`]
//! instance. The oracle is held as a trait object so tests can swap in an
//! in-memory double or a deliberately failing stub.

use std::sync::Arc;

use crate::backend::{Backend, BackendProvider};
use crate::config::environment::ServerConfig;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration, shared read-only
    pub config: Arc<ServerConfig>,
    /// Identity oracle answering session, role, and profile questions
    pub oracle: Arc<dyn BackendProvider>,
}

impl ServerResources {
    /// Create resources from already-constructed parts
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, oracle: Arc<dyn BackendProvider>) -> Self {
        Self { config, oracle }
    }

    /// Create resources from configuration, selecting the oracle backend it names
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let oracle = Backend::from_config(&config.backend);
        Self {
            config: Arc::new(config),
            oracle: Arc::new(oracle),
        }
    }
}
