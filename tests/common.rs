// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Provides seeded resources, token minting helpers, and oracle doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test fixtures for the admin bridge integration tests.
//!
//! The seeded in-memory oracle answers for two users: `user-1` (super
//! admin, session `dev-admin-session`) and `user-2` (plain member, session
//! `dev-member-session`).

use async_trait::async_trait;
use chrono::Utc;
use harbor_admin_bridge::{
    backend::{memory::MemoryBackend, BackendProvider},
    config::environment::{
        BackendConfig, BackendMode, BridgeConfig, CorsConfig, Environment, ServerConfig,
    },
    context::ServerResources,
    errors::{AppError, AppResult},
    models::{AdminProfile, AdminRoleRecord, SessionUser},
    token::{mint_token, Claims},
};
use std::sync::Arc;

/// Shared secret used by every test configuration
pub const TEST_SECRET: &str = "topsecret";

/// A valid test configuration with the memory oracle and a known secret
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 8080,
        admin_http_port: 8081,
        environment: Environment::Testing,
        bridge: BridgeConfig {
            secret: Some(TEST_SECRET.to_owned()),
            token_lifetime_secs: 300,
            admin_base_url: "http://localhost:8081".to_owned(),
        },
        backend: BackendConfig {
            mode: BackendMode::Memory,
            base_url: "http://localhost:9000".to_owned(),
            service_key: None,
            timeout_secs: 10,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

/// Resources backed by the seeded in-memory oracle
pub fn test_resources() -> Arc<ServerResources> {
    resources_with_oracle(Arc::new(MemoryBackend::with_dev_seed()))
}

/// Resources with the seeded oracle but a caller-supplied configuration
pub fn resources_with_config(config: ServerConfig) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        Arc::new(config),
        Arc::new(MemoryBackend::with_dev_seed()),
    ))
}

/// Resources with the standard test configuration but a caller-supplied oracle
pub fn resources_with_oracle(oracle: Arc<dyn BackendProvider>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(Arc::new(test_config()), oracle))
}

/// Mint a token under the test secret, expiring `lifetime_secs` from now
///
/// Pass a negative lifetime to get an already-expired token.
pub fn mint_test_token(sub: &str, lifetime_secs: i64) -> String {
    let claims = Claims::with_lifetime(sub, Utc::now().timestamp(), lifetime_secs);
    mint_token(&claims, TEST_SECRET.as_bytes()).unwrap()
}

/// Mint a token signed under a different secret than the servers use
pub fn mint_foreign_token(sub: &str) -> String {
    let claims = Claims::with_lifetime(sub, Utc::now().timestamp(), 300);
    mint_token(&claims, b"some-other-secret").unwrap()
}

/// Oracle double whose session lookup succeeds but whose role and profile
/// lookups fail in transport. Exercises the `Upstream` error paths without
/// a network.
pub struct RoleLookupFailsOracle;

#[async_trait]
impl BackendProvider for RoleLookupFailsOracle {
    async fn current_user(&self, _session_token: &str) -> AppResult<Option<SessionUser>> {
        Ok(Some(SessionUser {
            id: "user-1".to_owned(),
            email: "admin@harbor.local".to_owned(),
        }))
    }

    async fn admin_role_by_user_id(&self, _user_id: &str) -> AppResult<Option<AdminRoleRecord>> {
        Err(AppError::upstream("connection refused"))
    }

    async fn profile_by_user_id(&self, _user_id: &str) -> AppResult<Option<AdminProfile>> {
        Err(AppError::upstream("connection refused"))
    }
}
