// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared fixtures for the registry submitter integration tests.

#![allow(dead_code)]

pub mod generators;
pub mod transport;
