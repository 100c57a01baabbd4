// ABOUTME: Core data models shared by storage, seeding and HTTP layers
// ABOUTME: Re-exports the Authority role record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 JHipster Sample Application contributors

/// Authority (role) record
pub mod authority;

pub use authority::Authority;
