// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains shared helpers for server-rendered HTML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

/// HTML escaping for server-rendered pages
pub mod html;
