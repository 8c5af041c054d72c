// ABOUTME: Authorization oracle abstraction for the managed backend
// ABOUTME: Narrow async trait with HTTP and in-memory implementations behind a factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! # Authorization Oracle
//!
//! The managed backend already knows who the session user is and which
//! users hold admin roles. This module consumes those facts through a
//! deliberately narrow interface: three read-only lookups, nothing else.
//! The bridge never writes to the oracle.
//!
//! Two implementations exist behind [`factory::Backend`]: an HTTP client
//! for the managed backend's REST surface and a seeded in-memory oracle
//! for development and tests.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{AdminProfile, AdminRoleRecord, SessionUser};

pub mod factory;
pub mod http;
pub mod memory;

pub use factory::Backend;

/// Core oracle abstraction trait
///
/// All oracle implementations answer the same three questions. `Ok(None)`
/// means the oracle answered "no such record"; `Err` is reserved for
/// transport or decoding failures and maps to `Upstream`.
#[async_trait]
pub trait BackendProvider: Send + Sync {
    /// Resolve the user behind a main-domain session token
    async fn current_user(&self, session_token: &str) -> AppResult<Option<SessionUser>>;

    /// Look up the admin role record for a platform user
    async fn admin_role_by_user_id(&self, user_id: &str) -> AppResult<Option<AdminRoleRecord>>;

    /// Fetch the minimal display profile for a platform user
    async fn profile_by_user_id(&self, user_id: &str) -> AppResult<Option<AdminProfile>>;
}
