// ABOUTME: Cookie header parsing and admin session cookie construction
// ABOUTME: Single source of the admin_token cookie attribute set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Cookie helpers
//!
//! The admin session cookie is always written with the same locked attribute
//! set: `HttpOnly` keeps it away from page scripts, `Secure` keeps it off
//! plaintext transports, `Path=/` scopes it to the whole admin host, and
//! `SameSite=Strict` keeps cross-site navigations from carrying it.

use http::HeaderMap;

use crate::constants::carriers::ADMIN_TOKEN_COOKIE;

/// Extract a named cookie value from request headers
///
/// Returns `None` when the `Cookie` header is absent, unreadable, or does not
/// carry the named cookie.
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(http::header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| parse_cookie_header(header, name))
}

/// Extract a named cookie value from a raw `Cookie` header string
#[must_use]
pub fn parse_cookie_header(cookie_header: &str, name: &str) -> Option<String> {
    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(rest) = cookie.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value.to_owned());
            }
        }
    }
    None
}

/// Build the `Set-Cookie` value that establishes an admin session
///
/// `max_age_secs` is the remaining token lifetime. Values at or below zero
/// clamp to `Max-Age=0` so an already-expired token can never produce a
/// cookie that outlives it.
#[must_use]
pub fn build_admin_cookie(token: &str, max_age_secs: i64) -> String {
    let max_age = max_age_secs.max(0);
    format!(
        "{ADMIN_TOKEN_COOKIE}={token}; HttpOnly; Secure; Path=/; SameSite=Strict; Max-Age={max_age}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::COOKIE;

    #[test]
    fn test_parse_single_cookie() {
        assert_eq!(
            parse_cookie_header("admin_token=abc.def.ghi", "admin_token"),
            Some("abc.def.ghi".to_owned())
        );
    }

    #[test]
    fn test_parse_among_multiple_cookies() {
        let header = "theme=dark; admin_token=tok123; lang=en";
        assert_eq!(
            parse_cookie_header(header, "admin_token"),
            Some("tok123".to_owned())
        );
    }

    #[test]
    fn test_parse_rejects_name_prefix_match() {
        // admin_token_old must not satisfy a lookup for admin_token
        let header = "admin_token_old=stale";
        assert_eq!(parse_cookie_header(header, "admin_token"), None);
    }

    #[test]
    fn test_parse_missing_cookie() {
        assert_eq!(parse_cookie_header("theme=dark", "admin_token"), None);
    }

    #[test]
    fn test_parse_empty_value() {
        assert_eq!(
            parse_cookie_header("admin_token=", "admin_token"),
            Some(String::new())
        );
    }

    #[test]
    fn test_get_cookie_value_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "admin_token=tok456; other=1".parse().unwrap());
        assert_eq!(
            get_cookie_value(&headers, "admin_token"),
            Some("tok456".to_owned())
        );
    }

    #[test]
    fn test_get_cookie_value_no_header() {
        let headers = HeaderMap::new();
        assert_eq!(get_cookie_value(&headers, "admin_token"), None);
    }

    #[test]
    fn test_build_admin_cookie_attributes() {
        let cookie = build_admin_cookie("abc.def.ghi", 300);
        assert_eq!(
            cookie,
            "admin_token=abc.def.ghi; HttpOnly; Secure; Path=/; SameSite=Strict; Max-Age=300"
        );
    }

    #[test]
    fn test_build_admin_cookie_clamps_negative_max_age() {
        let cookie = build_admin_cookie("tok", -42);
        assert!(cookie.ends_with("Max-Age=0"));
    }
}
