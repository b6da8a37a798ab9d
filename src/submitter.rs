// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rate-limited document submission.
//!
//! Each call takes a permit, encodes the document, posts it and reports
//! the outcome. The permit is held as a guard, so it is released on every
//! exit path including a panicking transport.

use crate::error::{Result, SubmitError};
use crate::limiter::RateLimiter;
use crate::model::{Document, SubmissionRequest, SubmissionResult};
use crate::serializer::{DocumentSerializer, JsonSerializer};
use crate::transport::Transport;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Submits documents to one registry destination through a shared limiter.
pub struct DocumentSubmitter {
    limiter: Arc<RateLimiter>,
    serializer: Box<dyn DocumentSerializer>,
    transport: Arc<dyn Transport>,
    destination: Url,
}

impl DocumentSubmitter {
    /// Create a submitter using JSON encoding.
    ///
    /// `limiter` should be the process-wide instance; a limiter per
    /// submitter would not bound the total request rate.
    pub fn new(limiter: Arc<RateLimiter>, transport: Arc<dyn Transport>, destination: Url) -> Self {
        Self::with_serializer(limiter, transport, destination, JsonSerializer)
    }

    pub fn with_serializer(
        limiter: Arc<RateLimiter>,
        transport: Arc<dyn Transport>,
        destination: Url,
        serializer: impl DocumentSerializer + 'static,
    ) -> Self {
        Self {
            limiter,
            serializer: Box::new(serializer),
            transport,
            destination,
        }
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    pub fn destination(&self) -> &Url {
        &self.destination
    }

    /// Submit `document` signed with `signature`.
    ///
    /// Throttling and transport faults are returned as [`SubmissionResult`]
    /// values. Only an encoding fault is an error.
    pub async fn submit(&self, document: &Document, signature: &str) -> Result<SubmissionResult> {
        let Some(_permit) = self.limiter.try_permit() else {
            debug!(doc_id = %document.doc_id, "Submission throttled");
            return Ok(SubmissionResult::Throttled);
        };

        let payload = self
            .serializer
            .serialize(document)
            .map_err(SubmitError::Serialization)?;

        let result = match self
            .transport
            .post(&self.destination, signature, payload)
            .await
        {
            Ok(response_body) => {
                info!(
                    doc_id = %document.doc_id,
                    destination = %self.destination,
                    "Document accepted"
                );
                SubmissionResult::Accepted { response_body }
            }
            Err(err) => {
                warn!(
                    doc_id = %document.doc_id,
                    destination = %self.destination,
                    error = %err,
                    "Document submission failed"
                );
                SubmissionResult::TransportFailed {
                    detail: err.to_string(),
                }
            }
        };

        Ok(result)
    }

    /// Submit a prepared [`SubmissionRequest`].
    pub async fn submit_request(&self, request: &SubmissionRequest) -> Result<SubmissionResult> {
        self.submit(&request.document, &request.signature).await
    }
}
