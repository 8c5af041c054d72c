// ABOUTME: Session bridge endpoints that upgrade a query token into an admin cookie
// ABOUTME: JSON and HTML entry points sharing a single verification and establishment path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Session bridge routes
//!
//! The bridge is the one-shot landing point on the admin domain. The browser
//! arrives carrying the token as the `t` query parameter; the bridge
//! re-verifies it (the edge gate deliberately waved it through), resolves
//! the admin's profile through the oracle, and answers with a `Set-Cookie`
//! that carries the original token for its remaining lifetime.
//!
//! Two entry points exist for the two confirmation styles: a JSON endpoint
//! for client-rendered flows and an HTML endpoint that strips the token from
//! the visible URL and forwards into the shell. Both call the same
//! [`BridgeRoutes::verify_and_establish`]; the verification logic exists
//! exactly once.
//!
//! Every failure, from a malformed token to an unknown subject, produces the
//! same uniform denial as the edge gate. A caller probing this endpoint
//! cannot tell a forged token from an expired one from a deleted admin.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use http::header;
use tracing::{info, warn};

use crate::constants::carriers::TOKEN_QUERY_PARAM;
use crate::constants::routes::{VERIFY_HTML, VERIFY_JSON};
use crate::context::ServerResources;
use crate::middleware::deny_response;
use crate::models::AdminProfile;
use crate::security::cookies::build_admin_cookie;
use crate::token::{token_prefix, verify_token_at};
use crate::utils::html::escape_html;

/// Result of a successful token handoff
struct EstablishedSession {
    /// Resolved admin profile for the token subject
    profile: AdminProfile,
    /// `Set-Cookie` value establishing the admin session
    cookie: String,
}

/// Session bridge routes, mounted on the admin listener
pub struct BridgeRoutes;

impl BridgeRoutes {
    /// Create the bridge routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(VERIFY_HTML, get(Self::handle_verify_html))
            .route(VERIFY_JSON, get(Self::handle_verify_json))
            .with_state(resources)
    }

    /// JSON confirmation flow for client-rendered admin frontends
    async fn handle_verify_json(
        State(resources): State<Arc<ServerResources>>,
        RawQuery(query): RawQuery,
    ) -> Response {
        let Some(token) = token_from_query(query.as_deref()) else {
            return deny_response();
        };

        match Self::verify_and_establish(&resources, &token).await {
            Some(session) => (
                StatusCode::OK,
                [(header::SET_COOKIE, session.cookie)],
                Json(serde_json::json!({
                    "success": true,
                    "admin_id": session.profile.id,
                })),
            )
                .into_response(),
            None => deny_response(),
        }
    }

    /// HTML confirmation flow for direct browser navigation
    ///
    /// The page greets the admin, replaces the token-bearing URL in history,
    /// and forwards into the shell. The token never survives in the address
    /// bar or the back stack.
    async fn handle_verify_html(
        State(resources): State<Arc<ServerResources>>,
        RawQuery(query): RawQuery,
    ) -> Response {
        let Some(token) = token_from_query(query.as_deref()) else {
            return deny_response();
        };

        match Self::verify_and_establish(&resources, &token).await {
            Some(session) => (
                StatusCode::OK,
                [(header::SET_COOKIE, session.cookie)],
                Html(confirmation_page(&session.profile.display_name)),
            )
                .into_response(),
            None => deny_response(),
        }
    }

    /// The single verification and session establishment path
    ///
    /// Ordering matches the edge gate exactly: secret presence, token
    /// verification, then the profile lookup under service credentials.
    /// `None` means deny; the caller never learns which step failed, only
    /// the logs do.
    async fn verify_and_establish(
        resources: &Arc<ServerResources>,
        token: &str,
    ) -> Option<EstablishedSession> {
        let Some(secret) = resources.config.bridge.secret_bytes() else {
            warn!("bridge secret not configured, refusing token handoff");
            return None;
        };

        let now = Utc::now().timestamp();
        let claims = match verify_token_at(token, secret, now) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(
                    error = %e,
                    token = %token_prefix(token),
                    "token handoff failed verification"
                );
                return None;
            }
        };

        let profile = match resources.oracle.profile_by_user_id(&claims.sub).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                warn!(admin_id = %claims.sub, "token subject has no admin profile");
                return None;
            }
            Err(e) => {
                warn!(admin_id = %claims.sub, error = %e, "admin profile lookup failed");
                return None;
            }
        };

        let cookie = build_admin_cookie(token, claims.exp - now);
        info!(admin_id = %profile.id, "admin session established");

        Some(EstablishedSession { profile, cookie })
    }
}

/// Extract the first bridge token from a raw query string
///
/// Parsed with the same percent-decoding the edge gate uses to detect the
/// parameter, and without a rejecting extractor in front of it: a query the
/// gate waved through always lands here, however malformed the rest of it
/// is, and resolves to the same token value.
fn token_from_query(query: Option<&str>) -> Option<String> {
    query.and_then(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .find_map(|(key, value)| (key == TOKEN_QUERY_PARAM).then(|| value.into_owned()))
    })
}

/// Render the confirmation page for the HTML flow
///
/// `history.replaceState` drops the `t` parameter from the address bar and
/// the back stack before navigation, so the one-shot token is not recoverable
/// from browser history.
fn confirmation_page(display_name: &str) -> String {
    let safe_name = escape_html(display_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Harbor Admin</title>
</head>
<body>
  <p>Signed in as {safe_name}. Opening the admin panel.</p>
  <script>
    history.replaceState(null, "", window.location.pathname);
    window.location.replace("/");
  </script>
</body>
</html>
"#
    )
}
