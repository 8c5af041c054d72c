// ABOUTME: Oracle data projections consumed by the admin bridge
// ABOUTME: SessionUser, AdminRole, AdminRoleRecord, and AdminProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! # Oracle Data Models
//!
//! Fixed-shape projections of the managed backend's answers. The bridge
//! only reads these; nothing here is ever written back to the oracle.
//! User identifiers are opaque strings assigned by the managed backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Admin role held by a platform user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full platform administration
    SuperAdmin,
    /// Content and user moderation
    Moderator,
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::Moderator => write!(f, "moderator"),
        }
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "moderator" => Ok(Self::Moderator),
            other => Err(format!("unknown admin role: {other}")),
        }
    }
}

/// Admin role record as stored in the authorization oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRoleRecord {
    /// Platform user the role belongs to
    pub user_id: String,
    /// Role held
    pub role: AdminRole,
    /// When the role was granted
    pub created_at: DateTime<Utc>,
}

/// Current session user as resolved by the oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Platform user identifier
    pub id: String,
    /// Account email
    pub email: String,
}

/// Minimal display-capable admin profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    /// Platform user identifier
    pub id: String,
    /// Display name shown in the admin shell
    pub display_name: String,
    /// Account handle
    pub username: String,
    /// Avatar image URL, if the user set one
    pub avatar_url: Option<String>,
}
