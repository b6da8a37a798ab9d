// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTTP handlers for the registry submission gateway.
//!
//! Callers post a document and signature; the gateway forwards it to the
//! registry if a permit is available and answers 429 otherwise.

use crate::metrics::SubmissionMetrics;
use crate::model::{SubmissionRequest, SubmissionResult};
use crate::submitter::DocumentSubmitter;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Shared application state.
pub struct AppState {
    pub submitter: DocumentSubmitter,
    pub metrics: Option<SubmissionMetrics>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Submission response body.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitResponse {
    Accepted { response: String },
    Throttled { retry_after_secs: u64 },
    TransportFailed { detail: String },
}

/// Build the gateway router. `metrics_path` is only routed when metrics
/// are enabled.
pub fn router(state: Arc<AppState>, metrics_path: &str) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/documents", post(submit));

    if state.metrics.is_some() {
        app = app.route(metrics_path, get(metrics));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "registry-submitter",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Forward one document to the registry.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmissionRequest>,
) -> Response {
    debug!(doc_id = %req.document.doc_id, "Processing submission");
    let started = Instant::now();

    let result = match state.submitter.submit_request(&req).await {
        Ok(result) => result,
        Err(err) => {
            error!(doc_id = %req.document.doc_id, error = %err, "Submission aborted");
            if let Some(metrics) = &state.metrics {
                metrics.observe_error();
            }
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                    code: "SUBMISSION_ERROR",
                }),
            )
                .into_response();
        }
    };

    if let Some(metrics) = &state.metrics {
        metrics.observe(&result, started.elapsed());
    }

    match result {
        SubmissionResult::Accepted { response_body } => (
            StatusCode::OK,
            Json(SubmitResponse::Accepted {
                response: response_body,
            }),
        )
            .into_response(),
        SubmissionResult::Throttled => {
            // Round up so a client never retries before the window resets.
            let retry = state.submitter.limiter().time_until_reset();
            let retry_secs = retry.as_secs() + u64::from(retry.subsec_nanos() > 0);
            info!(doc_id = %req.document.doc_id, retry_after_secs = retry_secs, "Submission throttled");
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_secs.to_string())],
                Json(SubmitResponse::Throttled {
                    retry_after_secs: retry_secs,
                }),
            )
                .into_response()
        }
        SubmissionResult::TransportFailed { detail } => (
            StatusCode::BAD_GATEWAY,
            Json(SubmitResponse::TransportFailed { detail }),
        )
            .into_response(),
    }
}

/// Prometheus scrape endpoint.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    let Some(metrics) = &state.metrics else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match metrics.render() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: err.to_string(),
                code: "METRICS_ERROR",
            }),
        )
            .into_response(),
    }
}
