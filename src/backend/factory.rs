// ABOUTME: Oracle factory and provider abstraction for backend selection
// ABOUTME: Unified interface over the HTTP and in-memory oracles with runtime selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Oracle factory for creating backend providers
//!
//! Backend selection is configuration-driven: `http` talks to the managed
//! backend with service credentials, `memory` runs the seeded in-process
//! oracle for development and tests.

use async_trait::async_trait;
use tracing::info;

use super::http::HttpBackend;
use super::memory::MemoryBackend;
use super::BackendProvider;
use crate::config::environment::{BackendConfig, BackendMode};
use crate::errors::AppResult;
use crate::models::{AdminProfile, AdminRoleRecord, SessionUser};

/// Oracle instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Backend {
    /// Managed backend over HTTP
    Http(HttpBackend),
    /// Seeded in-memory oracle
    Memory(MemoryBackend),
}

impl Backend {
    /// Get a descriptive string for the current oracle backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Http(_) => "HTTP (Managed Backend)",
            Self::Memory(_) => "Memory (Development & Tests)",
        }
    }

    /// Create an oracle instance from configuration
    #[must_use]
    pub fn from_config(config: &BackendConfig) -> Self {
        match config.mode {
            BackendMode::Http => {
                info!(base_url = %config.base_url, "Initializing HTTP oracle backend");
                Self::Http(HttpBackend::new(config))
            }
            BackendMode::Memory => {
                info!("Initializing in-memory oracle backend with development seed");
                Self::Memory(MemoryBackend::with_dev_seed())
            }
        }
    }
}

// Implement BackendProvider for the enum by delegating to the appropriate
// implementation
#[async_trait]
impl BackendProvider for Backend {
    async fn current_user(&self, session_token: &str) -> AppResult<Option<SessionUser>> {
        match self {
            Self::Http(backend) => backend.current_user(session_token).await,
            Self::Memory(backend) => backend.current_user(session_token).await,
        }
    }

    async fn admin_role_by_user_id(&self, user_id: &str) -> AppResult<Option<AdminRoleRecord>> {
        match self {
            Self::Http(backend) => backend.admin_role_by_user_id(user_id).await,
            Self::Memory(backend) => backend.admin_role_by_user_id(user_id).await,
        }
    }

    async fn profile_by_user_id(&self, user_id: &str) -> AppResult<Option<AdminProfile>> {
        match self {
            Self::Http(backend) => backend.profile_by_user_id(user_id).await,
            Self::Memory(backend) => backend.profile_by_user_id(user_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_selects_memory() {
        let config = BackendConfig {
            mode: BackendMode::Memory,
            base_url: "http://localhost:9000".to_owned(),
            service_key: None,
            timeout_secs: 10,
        };
        let backend = Backend::from_config(&config);
        assert_eq!(backend.backend_info(), "Memory (Development & Tests)");
    }

    #[test]
    fn test_from_config_selects_http() {
        let config = BackendConfig {
            mode: BackendMode::Http,
            base_url: "http://localhost:9000".to_owned(),
            service_key: Some("svc-key".to_owned()),
            timeout_secs: 10,
        };
        let backend = Backend::from_config(&config);
        assert_eq!(backend.backend_info(), "HTTP (Managed Backend)");
    }
}
