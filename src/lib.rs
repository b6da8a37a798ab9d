// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry Submitter
//!
//! This crate submits signed documents to a remote registry while keeping
//! the outbound request rate under a fixed cap:
//!
//! - Fixed-window permit limiter shared by every caller
//! - Permits held as guards and released on every exit path
//! - Throttling reported as a result value, never as an error
//! - JSON encoding and an HTTP transport behind swappable traits

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod limiter;
pub mod metrics;
pub mod model;
pub mod serializer;
pub mod submitter;
pub mod transport;

pub use config::Config;
pub use limiter::{Permit, RateLimiter};
pub use model::{Document, SubmissionRequest, SubmissionResult};
pub use submitter::DocumentSubmitter;
