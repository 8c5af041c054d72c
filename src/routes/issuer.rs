// ABOUTME: Bridge token issuance endpoint on the main application domain
// ABOUTME: Confirms admin role through the oracle, then mints a short-lived signed token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Token issuer routes
//!
//! The issuer is the only place a bridge token is born. Its caller is a
//! trusted, already-authenticated first-party client, so unlike the admin
//! domain surfaces it answers with distinct statuses per failure: 401 for no
//! session, 403 for no admin role, 500 for oracle or configuration trouble.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};
use url::Url;

use crate::constants::carriers::{MAIN_SESSION_COOKIE, TOKEN_QUERY_PARAM};
use crate::constants::routes::{BRIDGE_TOKEN, VERIFY_HTML};
use crate::context::ServerResources;
use crate::errors::{AppError, ErrorCode};
use crate::models::SessionUser;
use crate::security::cookies::get_cookie_value;
use crate::token::{mint_token, Claims};

/// Successful issuance payload
#[derive(Serialize)]
struct BridgeTokenResponse {
    /// The minted bridge token
    token: String,
    /// Token lifetime in seconds
    expires_in: i64,
    /// Admin domain entry URL carrying the token as its query parameter
    admin_url: String,
}

/// Token issuance routes, mounted on the main application listener
pub struct IssuerRoutes;

impl IssuerRoutes {
    /// Create the issuer routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(BRIDGE_TOKEN, post(Self::handle_bridge_token))
            .with_state(resources)
    }

    /// Mint a bridge token for the current session user
    ///
    /// Progression: session resolved, role confirmed, secret present, token
    /// minted. Each step exits with its own status; the secret check runs
    /// before any cryptographic operation so a missing secret surfaces as
    /// `ServerMisconfigured` rather than a signing failure.
    async fn handle_bridge_token(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
    ) -> Result<Response, AppError> {
        let user = Self::resolve_session_user(&resources, &headers).await?;

        let role = match resources.oracle.admin_role_by_user_id(&user.id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                info!(user_id = %user.id, "bridge token refused, user holds no admin role");
                return Err(AppError::not_admin());
            }
            Err(e) => {
                error!(user_id = %user.id, error = %e, "admin role lookup failed");
                return Err(Self::upstream_error(&resources, &e));
            }
        };

        let Some(secret) = resources.config.bridge.secret_bytes() else {
            error!("bridge secret not configured, cannot mint admin token");
            return Err(AppError::server_misconfigured());
        };

        let lifetime = resources.config.bridge.token_lifetime_secs;
        let claims = Claims::with_lifetime(&user.id, Utc::now().timestamp(), lifetime);
        let token = mint_token(&claims, secret)?;

        info!(
            user_id = %user.id,
            role = %role.role,
            expires_in = lifetime,
            "issued admin bridge token"
        );

        let admin_url = Self::bridge_entry_url(&resources.config.bridge.admin_base_url, &token)?;

        Ok((
            StatusCode::OK,
            Json(BridgeTokenResponse {
                token,
                expires_in: lifetime,
                admin_url,
            }),
        )
            .into_response())
    }

    /// Resolve the platform session user from the request cookies
    ///
    /// A missing cookie, an unknown session, and an oracle failure during
    /// resolution all collapse to `NotAuthenticated`: from the caller's
    /// perspective there is no usable session either way.
    async fn resolve_session_user(
        resources: &Arc<ServerResources>,
        headers: &axum::http::HeaderMap,
    ) -> Result<SessionUser, AppError> {
        let Some(session) = get_cookie_value(headers, MAIN_SESSION_COOKIE) else {
            return Err(AppError::not_authenticated());
        };

        match resources.oracle.current_user(&session).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::not_authenticated()),
            Err(e) => {
                warn!(error = %e, "session resolution failed, treating as unauthenticated");
                Err(AppError::not_authenticated())
            }
        }
    }

    /// Map an oracle failure to `UpstreamError`
    ///
    /// Detail is carried only outside production; production callers get the
    /// code without the transport noise.
    fn upstream_error(resources: &Arc<ServerResources>, source: &AppError) -> AppError {
        if resources.config.environment.is_production() {
            AppError::new(ErrorCode::Upstream, "authorization lookup failed")
        } else {
            AppError::new(
                ErrorCode::Upstream,
                format!("authorization lookup failed: {source}"),
            )
        }
    }

    /// Build the admin domain entry URL carrying the token
    fn bridge_entry_url(admin_base_url: &str, token: &str) -> Result<String, AppError> {
        let mut url = Url::parse(admin_base_url).map_err(|e| {
            error!(error = %e, "ADMIN_BASE_URL is not a valid URL");
            AppError::server_misconfigured().with_source(e)
        })?;
        url.set_path(VERIFY_HTML);
        url.query_pairs_mut().append_pair(TOKEN_QUERY_PARAM, token);
        Ok(url.into())
    }
}
