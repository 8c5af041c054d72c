// ABOUTME: Compact token minting, parsing, and verification for the admin bridge
// ABOUTME: Single verification path shared by the edge gate and the session bridge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! # Bridge Token Codec
//!
//! The bridge token is three dot-separated base64url segments: a fixed
//! header, a claims payload, and an HMAC-SHA256 signature over
//! `header_b64.payload_b64`. Claims are a fixed-shape record; payloads
//! missing required fields or carrying wrong types are rejected at decode,
//! never coerced.
//!
//! Every consumer verifies through [`verify_token_at`]. The platform this
//! bridge replaced had three near-duplicate verification paths with subtly
//! different expiry handling; keeping a single path here is a deliberate
//! structural constraint, not a convenience.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::token::TOKEN_HEADER_JSON;
use crate::crypto::{base64url, signature};
use crate::errors::{AppError, AppResult};

/// Claims carried by a bridge token
///
/// `iat` and `exp` are integer Unix epoch seconds, never milliseconds.
/// Comparisons against "now" use whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin user identifier (token subject)
    pub sub: String,
    /// Issued-at, epoch seconds
    pub iat: i64,
    /// Expiry, epoch seconds
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject issued at `now` with a fixed lifetime
    #[must_use]
    pub fn with_lifetime(sub: impl Into<String>, now: i64, lifetime_secs: i64) -> Self {
        Self {
            sub: sub.into(),
            iat: now,
            exp: now + lifetime_secs,
        }
    }
}

/// Raw segments of a compact token
#[derive(Debug, Clone)]
pub struct TokenParts {
    /// First segment (header), base64url
    pub header_b64: String,
    /// Second segment (claims payload), base64url
    pub payload_b64: String,
    /// Third segment (signature), base64url
    pub signature_b64: String,
}

impl TokenParts {
    /// The exact string the signature covers
    #[must_use]
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }
}

/// Mint a signed token for the given claims
///
/// The header is the fixed `{"alg":"HS256","typ":"JWT"}` literal; the
/// signature covers the exact `header_b64.payload_b64` string.
///
/// # Errors
///
/// Returns `MalformedClaims` if the claims fail to serialize.
pub fn mint_token(claims: &Claims, secret: &[u8]) -> AppResult<String> {
    let header_b64 = base64url::encode(TOKEN_HEADER_JSON);
    let payload_json = serde_json::to_string(claims)
        .map_err(|e| AppError::malformed_claims("claims serialization failed").with_source(e))?;
    let payload_b64 = base64url::encode(payload_json);

    let signing_input = format!("{header_b64}.{payload_b64}");
    let sig = signature::sign_message(&signing_input, secret);

    Ok(format!("{signing_input}.{}", base64url::encode(sig)))
}

/// Split a token into its three segments
///
/// # Errors
///
/// Returns `MalformedToken` unless splitting on `.` yields exactly three
/// non-empty segments.
pub fn parse_token(token: &str) -> AppResult<TokenParts> {
    let segments: Vec<&str> = token.split('.').collect();

    if segments.len() != 3 {
        return Err(AppError::malformed_token(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }
    if segments.iter().any(|s| s.is_empty()) {
        return Err(AppError::malformed_token("empty token segment"));
    }

    Ok(TokenParts {
        header_b64: segments[0].to_owned(),
        payload_b64: segments[1].to_owned(),
        signature_b64: segments[2].to_owned(),
    })
}

/// Decode and strictly validate the claims segment
///
/// # Errors
///
/// Returns `MalformedClaims` on base64 failure, JSON failure, missing
/// required fields, or wrong field types (a non-numeric `exp` lands here,
/// not in expiry handling).
pub fn decode_claims(payload_b64: &str) -> AppResult<Claims> {
    let bytes = base64url::decode(payload_b64)
        .map_err(|e| AppError::malformed_claims("payload is not valid base64url").with_source(e))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::malformed_claims("claims are not a valid claim set").with_source(e))
}

/// Verify a token against the shared secret at an explicit point in time
///
/// This is the one verification path in the system; the edge gate, the
/// session bridge, and the admin session endpoint all call it. `now` is
/// epoch seconds so expiry is checkable at simulated times.
///
/// Check order: segment parse, signature, claims decode, subject, expiry.
/// The signature runs before claims decode so an attacker never gets
/// claim-level parse feedback on an unsigned payload.
///
/// # Errors
///
/// `MalformedToken`, `InvalidSignature`, `MalformedClaims`,
/// `SubjectMissing`, or `Expired`, per check.
pub fn verify_token_at(token: &str, secret: &[u8], now: i64) -> AppResult<Claims> {
    let parts = parse_token(token)?;

    if !signature::verify_signature(&parts.signing_input(), &parts.signature_b64, secret) {
        return Err(AppError::invalid_signature());
    }

    let claims = decode_claims(&parts.payload_b64)?;

    if claims.sub.is_empty() {
        return Err(AppError::subject_missing());
    }

    // A token expiring exactly now is already dead.
    if claims.exp <= now {
        return Err(AppError::expired());
    }

    Ok(claims)
}

/// Verify a token against the shared secret at the current wall-clock time
///
/// # Errors
///
/// Same as [`verify_token_at`].
pub fn verify_token(token: &str, secret: &[u8]) -> AppResult<Claims> {
    verify_token_at(token, secret, Utc::now().timestamp())
}

/// Shorten a token to a loggable prefix
///
/// Log lines carry at most the first eight characters of a rejected token.
/// Full token values never reach the logs.
#[must_use]
pub fn token_prefix(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    if token.chars().count() > 8 {
        format!("{prefix}\u{2026}")
    } else {
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    const SECRET: &[u8] = b"topsecret";

    fn mint(sub: &str, iat: i64, exp: i64) -> String {
        let claims = Claims {
            sub: sub.to_owned(),
            iat,
            exp,
        };
        mint_token(&claims, SECRET).unwrap()
    }

    #[test]
    fn test_mint_and_verify_round_trip() {
        let token = mint("user-42", 1_700_000_000, 1_700_000_300);
        let claims = verify_token_at(&token, SECRET, 1_700_000_100).unwrap();

        assert_eq!(claims.sub, "user-42");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_300);
    }

    #[test]
    fn test_header_segment_is_fixed() {
        let token = mint("user-42", 0, 10);
        let parts = parse_token(&token).unwrap();
        let header = base64url::decode(&parts.header_b64).unwrap();
        assert_eq!(header, TOKEN_HEADER_JSON.as_bytes());
    }

    #[test]
    fn test_parse_rejects_wrong_segment_counts() {
        for input in ["", "one", "one.two", "one.two.three.four"] {
            let err = parse_token(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::MalformedToken, "input {input:?}");
        }
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        for input in ["a..c", ".b.c", "a.b."] {
            let err = parse_token(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::MalformedToken, "input {input:?}");
        }
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = mint("user-42", 1_700_000_000, 1_700_000_300);
        let err = verify_token_at(&token, b"othersecret", 1_700_000_100).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSignature);
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let token = mint("user-42", 1_700_000_000, 1_700_000_300);
        let parts = parse_token(&token).unwrap();

        // Reissue the payload with a different subject under the original
        // signature.
        let forged_payload =
            base64url::encode(r#"{"sub":"user-1","iat":1700000000,"exp":1700000300}"#);
        let forged = format!(
            "{}.{}.{}",
            parts.header_b64, forged_payload, parts.signature_b64
        );

        let err = verify_token_at(&forged, SECRET, 1_700_000_100).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSignature);
    }

    #[test]
    fn test_expiry_boundary() {
        let now = 1_700_000_000;

        let expired = mint("user-42", now - 300, now - 1);
        assert_eq!(
            verify_token_at(&expired, SECRET, now).unwrap_err().code,
            ErrorCode::Expired
        );

        let alive = mint("user-42", now - 299, now + 1);
        assert!(verify_token_at(&alive, SECRET, now).is_ok());

        // exp == now is already dead
        let boundary = mint("user-42", now - 300, now);
        assert_eq!(
            verify_token_at(&boundary, SECRET, now).unwrap_err().code,
            ErrorCode::Expired
        );
    }

    #[test]
    fn test_malformed_exp_is_a_claims_error() {
        // Present-but-non-numeric exp fails at claims decode, it is not
        // treated as expired.
        let payload = base64url::encode(r#"{"sub":"user-42","iat":1700000000,"exp":"soon"}"#);
        let header = base64url::encode(TOKEN_HEADER_JSON);
        let signing_input = format!("{header}.{payload}");
        let sig = base64url::encode(signature::sign_message(&signing_input, SECRET));

        let err = verify_token_at(&format!("{signing_input}.{sig}"), SECRET, 1_700_000_100)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedClaims);
    }

    #[test]
    fn test_missing_exp_is_a_claims_error() {
        let payload = base64url::encode(r#"{"sub":"user-42","iat":1700000000}"#);
        let header = base64url::encode(TOKEN_HEADER_JSON);
        let signing_input = format!("{header}.{payload}");
        let sig = base64url::encode(signature::sign_message(&signing_input, SECRET));

        let err = verify_token_at(&format!("{signing_input}.{sig}"), SECRET, 1_700_000_100)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedClaims);
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let token = mint("", 1_700_000_000, 1_700_000_300);
        let err = verify_token_at(&token, SECRET, 1_700_000_100).unwrap_err();
        assert_eq!(err.code, ErrorCode::SubjectMissing);
    }

    #[test]
    fn test_claims_with_lifetime() {
        let claims = Claims::with_lifetime("user-7", 1_700_000_000, 300);
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_300);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_signature_check_precedes_claims_decode() {
        // Garbage payload under a wrong signature reports the signature,
        // not the payload.
        let header = base64url::encode(TOKEN_HEADER_JSON);
        let payload = base64url::encode("not json at all");
        let token = format!("{header}.{payload}.AAAA");

        let err = verify_token_at(&token, SECRET, 1_700_000_100).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSignature);
    }

    #[test]
    fn test_token_prefix_truncates() {
        assert_eq!(token_prefix("eyJhbGciOiJIUzI1NiJ9"), "eyJhbGci\u{2026}");
        assert_eq!(token_prefix("short"), "short");
        assert_eq!(token_prefix(""), "");
    }
}
