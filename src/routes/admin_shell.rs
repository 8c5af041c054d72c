// ABOUTME: Admin application shell page and authenticated session endpoint
// ABOUTME: Serves the admin landing page and the session projection behind the edge gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Admin shell routes
//!
//! Everything here sits behind the edge gate; handlers read the verified
//! identity the gate placed in request extensions instead of re-parsing the
//! cookie. A handler reached through one of the gate's bypass paths (for
//! example `/?t=...`) finds no identity and answers with the same uniform
//! denial the gate uses.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use tracing::{error, warn};

use crate::constants::routes::ADMIN_SESSION;
use crate::context::ServerResources;
use crate::errors::AppError;
use crate::middleware::{deny_response, AdminIdentity};

/// Static admin shell document
///
/// The shell carries no admin data of its own; the session script fills in
/// the signed-in identity from the session endpoint after load.
const SHELL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Harbor Admin</title>
</head>
<body>
  <header>
    <h1>Harbor Admin</h1>
    <p id="whoami">Loading session.</p>
  </header>
  <main>
    <nav>
      <ul>
        <li><a href="/reports">Reports</a></li>
        <li><a href="/members">Members</a></li>
        <li><a href="/moderation">Moderation queue</a></li>
      </ul>
    </nav>
  </main>
  <script>
    fetch("/api/admin/session")
      .then((res) => {
        if (!res.ok) throw new Error("no session");
        return res.json();
      })
      .then((session) => {
        document.getElementById("whoami").textContent =
          "Signed in as " + session.display_name;
      })
      .catch(() => {
        document.getElementById("whoami").textContent = "Session unavailable.";
      });
  </script>
</body>
</html>
"#;

/// Session projection returned to the admin frontend
#[derive(Serialize)]
struct AdminSessionResponse {
    /// Verified token subject
    admin_id: String,
    /// Admin account username
    username: String,
    /// Display name for the shell header
    display_name: String,
    /// Avatar URL, when the profile has one
    avatar_url: Option<String>,
    /// Session expiry, epoch seconds
    expires_at: i64,
}

/// Admin shell routes, mounted on the admin listener behind the edge gate
pub struct AdminShellRoutes;

impl AdminShellRoutes {
    /// Create the admin shell routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_shell))
            .route(ADMIN_SESSION, get(Self::handle_session))
            .with_state(resources)
    }

    /// Serve the admin shell page
    async fn handle_shell(identity: Option<Extension<AdminIdentity>>) -> Response {
        if identity.is_none() {
            return deny_response();
        }
        Html(SHELL_PAGE).into_response()
    }

    /// Return the current admin session projection
    ///
    /// The caller is already past the gate, so oracle transport failures
    /// surface as a real 500 here rather than hiding behind the uniform
    /// denial. An identity whose profile has vanished still denies: a valid
    /// token for an unknown admin must stay indistinguishable from an
    /// invalid token.
    async fn handle_session(
        State(resources): State<Arc<ServerResources>>,
        identity: Option<Extension<AdminIdentity>>,
    ) -> Result<Response, AppError> {
        let Some(Extension(identity)) = identity else {
            return Ok(deny_response());
        };

        let profile = match resources.oracle.profile_by_user_id(&identity.admin_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                warn!(admin_id = %identity.admin_id, "session admin has no profile");
                return Ok(deny_response());
            }
            Err(e) => {
                error!(admin_id = %identity.admin_id, error = %e, "admin profile lookup failed");
                return Err(AppError::upstream("profile lookup failed"));
            }
        };

        Ok((
            StatusCode::OK,
            Json(AdminSessionResponse {
                admin_id: profile.id,
                username: profile.username,
                display_name: profile.display_name,
                avatar_url: profile.avatar_url,
                expires_at: identity.expires_at,
            }),
        )
            .into_response())
    }
}
