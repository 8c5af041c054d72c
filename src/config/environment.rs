// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Environment-based configuration management for production deployment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};
use url::Url;

use crate::constants::{ports, token};

/// Environment type for error-detail gating and cookie policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development, // Default fallback for unrecognized values
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Oracle backend selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// Managed backend over HTTP with service credentials
    Http,
    /// Seeded in-memory oracle for development and tests
    #[default]
    Memory,
}

impl BackendMode {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "http" => Self::Http,
            _ => Self::Memory, // Default fallback for unrecognized values
        }
    }
}

impl std::fmt::Display for BackendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Main app listener port
    pub http_port: u16,
    /// Admin listener port
    pub admin_http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Bridge token settings
    pub bridge: BridgeConfig,
    /// Oracle backend settings
    pub backend: BackendConfig,
    /// CORS policy for the main listener
    pub cors: CorsConfig,
}

/// Bridge token configuration shared by the issuing and verifying sides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Shared HMAC secret. `None` means every mint and verify fails closed.
    pub secret: Option<String>,
    /// Token lifetime in seconds, applied at mint time
    pub token_lifetime_secs: i64,
    /// Base URL of the admin domain, used to build the issued bridge URL
    pub admin_base_url: String,
}

impl BridgeConfig {
    /// Shared secret as bytes, if configured
    #[must_use]
    pub fn secret_bytes(&self) -> Option<&[u8]> {
        self.secret.as_deref().map(str::as_bytes)
    }
}

/// CORS policy applied to the main listener only. The admin listener
/// serves same-origin traffic and gets no CORS layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*` for any origin
    pub allowed_origins: String,
}

/// Oracle backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend selection
    pub mode: BackendMode,
    /// Managed backend REST base URL (http mode)
    pub base_url: String,
    /// Service credential sent on oracle calls (http mode)
    pub service_key: Option<String>,
    /// Oracle client timeout in seconds
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable fails to parse or the port
    /// assignment is contradictory.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())?
                .parse()
                .context("Invalid HTTP_PORT value")?,
            admin_http_port: env_var_or(
                "ADMIN_HTTP_PORT",
                &ports::DEFAULT_ADMIN_HTTP_PORT.to_string(),
            )?
            .parse()
            .context("Invalid ADMIN_HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )?),

            bridge: BridgeConfig {
                secret: env::var("ADMIN_BRIDGE_SECRET").ok().filter(|s| !s.is_empty()),
                token_lifetime_secs: env_var_or(
                    "ADMIN_TOKEN_LIFETIME_SECS",
                    &token::DEFAULT_TOKEN_LIFETIME_SECS.to_string(),
                )?
                .parse()
                .context("Invalid ADMIN_TOKEN_LIFETIME_SECS value")?,
                admin_base_url: env_var_or("ADMIN_BASE_URL", "http://localhost:8081")?,
            },

            backend: BackendConfig {
                mode: BackendMode::from_str_or_default(&env_var_or("BACKEND_MODE", "memory")?),
                base_url: env_var_or("BACKEND_BASE_URL", "http://localhost:9000")?,
                service_key: env::var("BACKEND_SERVICE_KEY").ok().filter(|s| !s.is_empty()),
                timeout_secs: env_var_or("BACKEND_TIMEOUT_SECS", "10")?
                    .parse()
                    .context("Invalid BACKEND_TIMEOUT_SECS value")?,
            },

            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*")?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error when the two listeners are assigned the same port
    /// or the token lifetime is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == self.admin_http_port {
            return Err(anyhow::anyhow!(
                "HTTP_PORT and ADMIN_HTTP_PORT cannot be the same"
            ));
        }

        if self.bridge.token_lifetime_secs <= 0 {
            return Err(anyhow::anyhow!(
                "ADMIN_TOKEN_LIFETIME_SECS must be positive"
            ));
        }

        Url::parse(&self.bridge.admin_base_url).with_context(|| {
            format!(
                "Invalid ADMIN_BASE_URL value: {}",
                self.bridge.admin_base_url
            )
        })?;

        // Missing secret is not a startup error: both sides fail closed at
        // request time, and dev setups boot without one on purpose.
        if self.bridge.secret.is_none() {
            warn!("ADMIN_BRIDGE_SECRET is not set - token issuance and verification will refuse every request");
        }

        if self.backend.mode == BackendMode::Http && self.backend.service_key.is_none() {
            warn!("BACKEND_MODE=http but BACKEND_SERVICE_KEY is not set - oracle calls will be unauthenticated");
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Harbor Admin Bridge Configuration:\n\
             - Main Port: {}\n\
             - Admin Port: {}\n\
             - Environment: {}\n\
             - Bridge Secret: {}\n\
             - Token Lifetime: {}s\n\
             - Admin Base URL: {}\n\
             - CORS Origins: {}\n\
             - Backend: {}",
            self.http_port,
            self.admin_http_port,
            self.environment,
            if self.bridge.secret.is_some() {
                "Configured"
            } else {
                "MISSING"
            },
            self.bridge.token_lifetime_secs,
            self.bridge.admin_base_url,
            self.cors.allowed_origins,
            self.backend.mode,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_owned()))
}
