// ABOUTME: Seeded in-memory oracle for development mode and tests
// ABOUTME: DashMap-backed session, role, and profile stores with a development seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! In-memory oracle backend
//!
//! Answers the three oracle questions from process-local maps. Used as the
//! development mode (no managed backend required) and as the standard test
//! double. Clones share the underlying stores, mirroring how a real client
//! handle shares its connection pool.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

use super::BackendProvider;
use crate::errors::AppResult;
use crate::models::{AdminProfile, AdminRole, AdminRoleRecord, SessionUser};

/// In-memory oracle with seeded sessions, roles, and profiles
#[derive(Clone, Default)]
pub struct MemoryBackend {
    sessions: Arc<DashMap<String, SessionUser>>,
    roles: Arc<DashMap<String, AdminRoleRecord>>,
    profiles: Arc<DashMap<String, AdminProfile>>,
}

impl MemoryBackend {
    /// Create an empty in-memory oracle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle seeded with one admin and one regular member
    ///
    /// Session tokens are fixed so a developer can drive the flow by hand:
    /// `dev-admin-session` maps to a super admin, `dev-member-session` to a
    /// user without any admin role.
    #[must_use]
    pub fn with_dev_seed() -> Self {
        let backend = Self::new();

        backend.insert_session(
            "dev-admin-session",
            SessionUser {
                id: "user-1".to_owned(),
                email: "admin@harbor.local".to_owned(),
            },
        );
        backend.grant_role(AdminRoleRecord {
            user_id: "user-1".to_owned(),
            role: AdminRole::SuperAdmin,
            created_at: Utc::now(),
        });
        backend.insert_profile(AdminProfile {
            id: "user-1".to_owned(),
            display_name: "Dev Admin".to_owned(),
            username: "dev-admin".to_owned(),
            avatar_url: None,
        });

        backend.insert_session(
            "dev-member-session",
            SessionUser {
                id: "user-2".to_owned(),
                email: "member@harbor.local".to_owned(),
            },
        );

        backend
    }

    /// Map a session token to a user
    pub fn insert_session(&self, token: impl Into<String>, user: SessionUser) {
        self.sessions.insert(token.into(), user);
    }

    /// Grant an admin role, keyed by the record's user id
    pub fn grant_role(&self, record: AdminRoleRecord) {
        self.roles.insert(record.user_id.clone(), record);
    }

    /// Store a display profile, keyed by the profile's user id
    pub fn insert_profile(&self, profile: AdminProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }
}

#[async_trait]
impl BackendProvider for MemoryBackend {
    async fn current_user(&self, session_token: &str) -> AppResult<Option<SessionUser>> {
        Ok(self.sessions.get(session_token).map(|u| u.clone()))
    }

    async fn admin_role_by_user_id(&self, user_id: &str) -> AppResult<Option<AdminRoleRecord>> {
        Ok(self.roles.get(user_id).map(|r| r.clone()))
    }

    async fn profile_by_user_id(&self, user_id: &str) -> AppResult<Option<AdminProfile>> {
        Ok(self.profiles.get(user_id).map(|p| p.clone()))
    }
}
