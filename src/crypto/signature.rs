// ABOUTME: HMAC-SHA256 signing and constant-time signature verification
// ABOUTME: Fail-closed comparison that never panics on malformed or mis-sized input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! HMAC-SHA256 signing and verification.
//!
//! A symmetric MAC is sufficient here: both the issuing and verifying
//! parties are first-party servers provisioned with the same secret, and no
//! third party ever verifies without it.
//!
//! ## Security
//!
//! Signature comparison must not leak how far a forged signature matches.
//! The comparison runs through `subtle::ConstantTimeEq` after an explicit
//! length check; length is not secret (valid HMAC-SHA256 tags are always
//! 32 bytes) and the primitive requires equal-length buffers.

use ring::hmac;

use crate::crypto::base64url;

/// Compute the HMAC-SHA256 signature of a message
///
/// # Arguments
/// * `message` - Signing input, hashed as UTF-8 bytes
/// * `secret` - Shared secret key bytes
///
/// # Returns
/// The 32-byte signature.
#[must_use]
pub fn sign_message(message: &str, secret: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret);
    let tag = hmac::sign(&key, message.as_bytes());
    tag.as_ref().to_vec()
}

/// Verify a base64url-encoded signature against a recomputed one
///
/// Every irregularity fails closed: undecodable base64, a length mismatch,
/// or a byte mismatch all return `false`, and nothing in this path panics.
///
/// # Arguments
/// * `message` - Signing input the signature claims to cover
/// * `signature_b64` - Supplied signature, base64url
/// * `secret` - Shared secret key bytes
#[must_use]
pub fn verify_signature(message: &str, signature_b64: &str, secret: &[u8]) -> bool {
    let Ok(supplied) = base64url::decode(signature_b64) else {
        return false;
    };

    let expected = sign_message(message, secret);

    // Equal lengths are a precondition of the constant-time primitive.
    if supplied.len() != expected.len() {
        return false;
    }

    subtle::ConstantTimeEq::ct_eq(supplied.as_slice(), expected.as_slice()).into()
}
