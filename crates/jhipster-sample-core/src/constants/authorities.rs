// ABOUTME: Well-known authority names used for role-based access control
// ABOUTME: These are the roles seeded into storage at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

/// Administrator role
pub const ADMIN: &str = "ROLE_ADMIN";

/// Regular authenticated user role
pub const USER: &str = "ROLE_USER";

/// Role given to unauthenticated callers
pub const ANONYMOUS: &str = "ROLE_ANONYMOUS";

/// Authorities that must exist before the application serves requests, in seeding order
pub const SEEDED: [&str; 3] = [ADMIN, USER, ANONYMOUS];
