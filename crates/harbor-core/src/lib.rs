// ABOUTME: Core types and constants for the Harbor admin bridge
// ABOUTME: Foundation crate with error handling, oracle models, and token constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

#![deny(unsafe_code)]

//! # Harbor Core
//!
//! Foundation crate providing shared types and constants for the Harbor admin
//! authentication bridge. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Token lifetime, carrier names, and wire-format constants
//! - **models**: Oracle projections (session user, admin role, admin profile)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Token lifetime, carrier names, and wire-format constants
pub mod constants;

/// Oracle data projections (`SessionUser`, `AdminRoleRecord`, `AdminProfile`)
pub mod models;
