// ABOUTME: Unified error handling for the admin bridge with standard error codes
// ABOUTME: Maps each failure kind to an HTTP status and a stable wire identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! # Unified Error Handling System
//!
//! This module provides the centralized error taxonomy for the admin bridge.
//! The issuing side surfaces these codes distinctly to its (trusted,
//! first-party) caller; the verifying side at the trust boundary never
//! serializes them and collapses every failure into one uniform response.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the admin bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Session & authorization (1000-1999)
    #[serde(rename = "NOT_AUTHENTICATED")]
    NotAuthenticated = 1000,
    #[serde(rename = "NOT_ADMIN")]
    NotAdmin = 1001,

    // Token verification (2000-2999)
    #[serde(rename = "MALFORMED_TOKEN")]
    MalformedToken = 2000,
    #[serde(rename = "MALFORMED_CLAIMS")]
    MalformedClaims = 2001,
    #[serde(rename = "INVALID_SIGNATURE")]
    InvalidSignature = 2002,
    #[serde(rename = "EXPIRED")]
    Expired = 2003,
    #[serde(rename = "SUBJECT_MISSING")]
    SubjectMissing = 2004,

    // External services (5000-5999)
    #[serde(rename = "UPSTREAM_ERROR")]
    Upstream = 5000,

    // Configuration (6000-6999)
    #[serde(rename = "SERVER_MISCONFIGURED")]
    ServerMisconfigured = 6000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            // 401 Unauthorized: no session, or a token that fails verification
            Self::NotAuthenticated
            | Self::MalformedToken
            | Self::MalformedClaims
            | Self::InvalidSignature
            | Self::Expired
            | Self::SubjectMissing => 401,

            // 403 Forbidden: authenticated but not an admin
            Self::NotAdmin => 403,

            // 500 Internal Server Error
            Self::Upstream | Self::ServerMisconfigured => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::NotAuthenticated => "No authenticated session was found",
            Self::NotAdmin => "The authenticated user does not hold an admin role",
            Self::MalformedToken => "The token does not have three non-empty segments",
            Self::MalformedClaims => "The token claims could not be decoded",
            Self::InvalidSignature => "The token signature does not match",
            Self::Expired => "The token has expired",
            Self::SubjectMissing => "The token claims do not carry a subject",
            Self::Upstream => "The backend oracle call failed",
            Self::ServerMisconfigured => "The shared bridge secret is not configured",
        }
    }
}

/// Unified error type for the admin bridge
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable wire identifier for the error kind
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// No authenticated session on the main domain
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated, "Not authenticated")
    }

    /// Authenticated user holds no admin role
    pub fn not_admin() -> Self {
        Self::new(ErrorCode::NotAdmin, "Admin role required")
    }

    /// Token does not split into exactly three non-empty segments
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedToken, message)
    }

    /// Token payload failed base64 or JSON decoding
    pub fn malformed_claims(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedClaims, message)
    }

    /// Recomputed signature does not match the supplied one
    pub fn invalid_signature() -> Self {
        Self::new(ErrorCode::InvalidSignature, "Token signature mismatch")
    }

    /// Token expiry has elapsed
    pub fn expired() -> Self {
        Self::new(ErrorCode::Expired, "Token has expired")
    }

    /// Claims decoded but carry no usable subject
    pub fn subject_missing() -> Self {
        Self::new(ErrorCode::SubjectMissing, "Token claims carry no subject")
    }

    /// Oracle call failed in transport or decoding
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Upstream, message)
    }

    /// Shared secret absent from configuration
    pub fn server_misconfigured() -> Self {
        Self::new(
            ErrorCode::ServerMisconfigured,
            "Admin bridge secret is not configured",
        )
    }
}

/// Axum response integration (issuer side only; the edge gate never uses it)
#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        tracing::debug!(code = ?self.code, status = %status, "responding with error");
        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}
