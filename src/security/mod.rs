// ABOUTME: Security utilities for the admin bridge HTTP surfaces
// ABOUTME: Cookie parsing and attribute-locked cookie construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Security helpers shared by the middleware and route layers.

pub mod cookies;
