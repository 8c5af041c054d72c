// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the Axum request harness used across route tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
