// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the registry submitter.
//!
//! Throttling is deliberately absent here: a denied permit is reported as
//! [`SubmissionResult::Throttled`](crate::model::SubmissionResult::Throttled).

use thiserror::Error;

/// Invalid construction-time settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_permits must be positive, got {0}")]
    InvalidMaxPermits(u32),

    #[error("rate window must be at least 1ms, got {0:?}")]
    InvalidWindow(std::time::Duration),

    #[error("Invalid registry destination {url}: {reason}")]
    InvalidDestination { url: String, reason: String },

    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidEnv {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Faults raised by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Registry responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unsupported destination scheme: {0}")]
    UnsupportedScheme(String),
}

/// Fatal submission errors. These indicate a programming or configuration
/// fault and are never retried.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SubmitError>;
