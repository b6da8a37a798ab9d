// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry Submitter Service
//!
//! HTTP front for the rate-limited registry submitter. Clients post
//! `{"document": ..., "signature": ...}` to `/documents`; the service
//! forwards it to the registry while a permit is available and answers
//! 429 with `Retry-After` otherwise.
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! - `BIND_ADDR`: Server bind address (default: 0.0.0.0:8080)
//! - `REGISTRY_URL`: Document creation endpoint
//! - `RATE_WINDOW_MS`: Rate window in milliseconds (default: 1000)
//! - `RATE_MAX_PERMITS`: Submissions per window (default: 10)
//! - `REQUEST_TIMEOUT_MS`: Registry request timeout (default: 30000)
//! - `METRICS_ENABLED`: Serve Prometheus metrics (default: true)

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use registry_submitter::{
    config::Config,
    handlers::{router, AppState},
    limiter::RateLimiter,
    metrics::SubmissionMetrics,
    submitter::DocumentSubmitter,
    transport::{parse_destination, HttpTransport},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        registry_url = %config.registry.url,
        window_ms = config.rate_limit.window_ms,
        max_permits = config.rate_limit.max_permits,
        "Starting registry submitter"
    );

    // One limiter for the whole process
    let limiter = Arc::new(RateLimiter::from_config(&config.rate_limit)?);
    let transport = Arc::new(HttpTransport::from_config(&config.registry)?);
    let destination = parse_destination(&config.registry.url)?;

    let metrics = if config.metrics.enabled {
        Some(SubmissionMetrics::new()?)
    } else {
        None
    };

    let state = Arc::new(AppState {
        submitter: DocumentSubmitter::new(limiter, transport, destination),
        metrics,
    });

    let app = router(state, &config.metrics.path);

    // Start server
    let addr: SocketAddr = config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
