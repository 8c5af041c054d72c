// ABOUTME: HTTP oracle client for the managed backend's REST surface
// ABOUTME: Service-key authenticated lookups with timeouts and upstream error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! HTTP oracle backend
//!
//! Thin client over the managed backend's REST surface. Role and profile
//! lookups run with the service key (elevated credentials the browser never
//! sees); session resolution forwards the caller's session token as a
//! bearer credential. A 404 from the backend is a domain answer
//! (`Ok(None)`), every other failure maps to `Upstream`.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

use super::BackendProvider;
use crate::config::environment::BackendConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{AdminProfile, AdminRoleRecord, SessionUser};

/// Connection timeout for oracle calls, separate from the request timeout
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Header carrying the service credential on oracle calls
const SERVICE_KEY_HEADER: &str = "x-service-key";

/// HTTP client for the managed backend oracle
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    service_key: Option<String>,
}

impl HttpBackend {
    /// Create a new oracle client from backend configuration
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            service_key: config.service_key.clone(),
        }
    }

    /// Issue a GET that treats 404 as "no such record"
    async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
    ) -> AppResult<Option<T>> {
        let url = format!("{}{path}", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.service_key {
            request = request.header(SERVICE_KEY_HEADER, key);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!(path, error = %e, "oracle call failed");
            AppError::upstream(format!("oracle call to {path} failed")).with_source(e)
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let value = response.json::<T>().await.map_err(|e| {
                    warn!(path, error = %e, "oracle response decoding failed");
                    AppError::upstream(format!("oracle response from {path} did not decode"))
                        .with_source(e)
                })?;
                Ok(Some(value))
            }
            status => {
                warn!(path, status = %status, "oracle returned unexpected status");
                Err(AppError::upstream(format!(
                    "oracle call to {path} returned status {status}"
                )))
            }
        }
    }
}

#[async_trait]
impl BackendProvider for HttpBackend {
    async fn current_user(&self, session_token: &str) -> AppResult<Option<SessionUser>> {
        self.get_optional("/auth/session", Some(session_token)).await
    }

    async fn admin_role_by_user_id(&self, user_id: &str) -> AppResult<Option<AdminRoleRecord>> {
        let path = format!("/admin/roles/{}", urlencoding::encode(user_id));
        self.get_optional(&path, None).await
    }

    async fn profile_by_user_id(&self, user_id: &str) -> AppResult<Option<AdminProfile>> {
        let path = format!("/admin/profiles/{}", urlencoding::encode(user_id));
        self.get_optional(&path, None).await
    }
}
