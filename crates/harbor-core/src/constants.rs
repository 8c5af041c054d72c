// ABOUTME: Constants for the admin bridge token format and transport carriers
// ABOUTME: Pure data constants shared by the issuing and verifying sides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Constants module
//!
//! Wire-format and carrier constants shared by both listeners. The token
//! lifetime and carrier names are part of the cross-domain contract and
//! must stay identical on the issuing and verifying sides.

/// Token format and lifetime
pub mod token {
    /// Fixed token lifetime in seconds, applied at mint time.
    /// Never derived from client input.
    pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 300;

    /// Fixed token header, serialized once at mint time.
    /// Verification compares segments, not this literal, so the header is
    /// informational on the verify side.
    pub const TOKEN_HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;
}

/// Transport carriers on each domain
pub mod carriers {
    /// Cookie holding the token on the admin domain
    pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

    /// Query parameter carrying the one-shot token into the admin domain
    pub const TOKEN_QUERY_PARAM: &str = "t";

    /// Session cookie of the main domain, forwarded to the oracle
    pub const MAIN_SESSION_COOKIE: &str = "harbor_session";
}

/// Route paths on the two listeners
pub mod routes {
    /// Issuer endpoint (main listener)
    pub const BRIDGE_TOKEN: &str = "/api/admin/bridge-token";

    /// HTML session bridge endpoint (admin listener)
    pub const VERIFY_HTML: &str = "/admin-auth/verify";

    /// JSON session bridge endpoint (admin listener)
    pub const VERIFY_JSON: &str = "/api/admin-auth/verify";

    /// Authenticated admin session projection (admin listener)
    pub const ADMIN_SESSION: &str = "/api/admin/session";

    /// Health check endpoint (main listener)
    pub const HEALTH: &str = "/health";

    /// Readiness endpoint (main listener)
    pub const READY: &str = "/ready";
}

/// Network ports
pub mod ports {
    /// Default main app listener port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;

    /// Default admin listener port
    pub const DEFAULT_ADMIN_HTTP_PORT: u16 = 8081;
}

/// Static asset handling on the admin domain
pub mod assets {
    /// Path prefix the edge gate passes through unchecked
    pub const STATIC_PREFIX: &str = "/assets/";
}
