// ABOUTME: Cryptography module for the admin bridge token path
// ABOUTME: Base64url codec plus HMAC-SHA256 signing and constant-time verification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Cryptographic primitives for the token path.
//!
//! Everything in this module is pure computation: no I/O, no clock reads,
//! no shared state. The token module composes these into mint and verify
//! operations.

/// Base64url encoding and decoding with padding normalization
pub mod base64url;

/// HMAC-SHA256 signing and constant-time signature verification
pub mod signature;
