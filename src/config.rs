// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the registry submitter.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Configuration for the registry submission gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:8080)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Outbound rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Remote registry endpoint
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Outbound rate limit: at most `max_permits` submissions per window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Window length in milliseconds (default: 1000)
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,

    /// Permits granted per window (default: 10)
    #[serde(default = "default_max_permits")]
    pub max_permits: u32,
}

/// Registry endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Document creation endpoint
    #[serde(default = "default_registry_url")]
    pub url: String,

    /// Per-request timeout in milliseconds (default: 30000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Metrics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Enable Prometheus metrics endpoint (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Metrics endpoint path (default: /metrics)
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

// Default value functions
fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_window_ms() -> u64 {
    1000
}

fn default_max_permits() -> u32 {
    10
}

fn default_registry_url() -> String {
    "https://ismp.crpt.ru/api/v3/lk/documents/create".to_string()
}

fn default_timeout_ms() -> u64 {
    30000
}

fn default_true() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            rate_limit: RateLimitConfig::default(),
            registry: RegistryConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            max_permits: default_max_permits(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_metrics_path(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set but unparsable ones are
    /// an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            rate_limit: RateLimitConfig {
                window_ms: parse_var(&lookup, "RATE_WINDOW_MS", defaults.rate_limit.window_ms)?,
                max_permits: parse_var(
                    &lookup,
                    "RATE_MAX_PERMITS",
                    defaults.rate_limit.max_permits,
                )?,
            },
            registry: RegistryConfig {
                url: lookup("REGISTRY_URL").unwrap_or(defaults.registry.url),
                timeout_ms: parse_var(
                    &lookup,
                    "REQUEST_TIMEOUT_MS",
                    defaults.registry.timeout_ms,
                )?,
            },
            metrics: MetricsConfig {
                enabled: parse_var(&lookup, "METRICS_ENABLED", defaults.metrics.enabled)?,
                ..defaults.metrics
            },
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnv {
                key,
                reason: e.to_string(),
                value,
            }),
    }
}

impl RateLimitConfig {
    /// Get the rate window duration
    pub fn window_duration(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl RegistryConfig {
    /// Get the request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
