// ABOUTME: Constants module grouping application-wide values by domain
// ABOUTME: Currently holds the well-known security authority names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

//! Constants module

/// Well-known security authority (role) names
pub mod authorities;
