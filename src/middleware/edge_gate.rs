// ABOUTME: Stateless edge gate protecting every admin domain route
// ABOUTME: Verifies the admin cookie per request and denies with a uniform 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Admin edge gate
//!
//! Runs in front of the whole admin router. Every request is checked against
//! the `admin_token` cookie using the shared verification path; there is no
//! session store to consult and nothing to replicate across instances.
//!
//! Two request classes pass through unchecked: static asset requests, which
//! the asset layer answers, and requests carrying the token handoff query
//! parameter, which the session bridge verifies itself. Everything else
//! either carries a valid cookie or receives [`deny_response`].
//!
//! The denial is a bare 404, not a 401 or 403. An unauthenticated probe
//! learns nothing: not whether the host is an admin panel, not whether its
//! token was expired or forged or merely absent.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{header, StatusCode};
use tracing::{debug, warn};

use crate::constants::assets::STATIC_PREFIX;
use crate::constants::carriers::{ADMIN_TOKEN_COOKIE, TOKEN_QUERY_PARAM};
use crate::context::ServerResources;
use crate::security::cookies::get_cookie_value;
use crate::token::{token_prefix, verify_token};

/// Verified admin identity, inserted into request extensions by the gate
///
/// Handlers behind the gate read this instead of re-parsing the cookie.
/// Handlers reachable through a gate bypass must treat its absence as a
/// denial, never as an invariant violation.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    /// Verified token subject
    pub admin_id: String,
    /// Token expiry, epoch seconds
    pub expires_at: i64,
}

/// Uniform denial response for the admin domain
///
/// Byte-identical for every failure class: missing cookie, malformed token,
/// bad signature, expired token, unknown admin. Status, headers, and body
/// must never vary with the reason.
#[must_use]
pub fn deny_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, "text/plain"),
            (header::CONTENT_LENGTH, "0"),
        ],
        Body::empty(),
    )
        .into_response()
}

/// Edge gate middleware for the admin router
///
/// Check order: static bypass, token handoff bypass, secret presence,
/// cookie verification. A missing bridge secret denies every request rather
/// than letting one through unverified.
pub async fn edge_gate_middleware(
    State(resources): State<Arc<ServerResources>>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();

    if is_static_asset(path) {
        return next.run(req).await;
    }

    if has_token_param(req.uri().query()) {
        return next.run(req).await;
    }

    let Some(secret) = resources.config.bridge.secret_bytes() else {
        warn!("bridge secret not configured, denying admin request");
        return deny_response();
    };

    let Some(token) = get_cookie_value(req.headers(), ADMIN_TOKEN_COOKIE) else {
        debug!(path = %path, "admin request without session cookie");
        return deny_response();
    };

    match verify_token(&token, secret) {
        Ok(claims) => {
            req.extensions_mut().insert(AdminIdentity {
                admin_id: claims.sub,
                expires_at: claims.exp,
            });
            next.run(req).await
        }
        Err(e) => {
            warn!(
                error = %e,
                token = %token_prefix(&token),
                "admin cookie failed verification"
            );
            deny_response()
        }
    }
}

/// Static asset requests skip authentication
///
/// Anything under the asset prefix, plus any path whose final segment has a
/// file extension. The asset layer serves these; they never reach admin
/// handlers.
fn is_static_asset(path: &str) -> bool {
    if path.starts_with(STATIC_PREFIX) {
        return true;
    }
    path.rsplit('/').next().is_some_and(|seg| seg.contains('.'))
}

/// Token handoff requests skip the gate
///
/// The session bridge endpoint verifies the carried token itself; gating it
/// here would reject the very request that establishes the cookie.
fn has_token_param(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        url::form_urlencoded::parse(q.as_bytes()).any(|(key, _)| key == TOKEN_QUERY_PARAM)
    })
}
