// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Prometheus metrics for submission outcomes.

use crate::model::SubmissionResult;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::time::Duration;

/// Submission counters registered on a private registry.
#[derive(Clone)]
pub struct SubmissionMetrics {
    registry: Registry,
    submissions: IntCounterVec,
    duration: HistogramVec,
}

impl SubmissionMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let submissions = IntCounterVec::new(
            Opts::new(
                "registry_submissions_total",
                "Document submissions by outcome",
            ),
            &["outcome"],
        )?;
        let duration = HistogramVec::new(
            HistogramOpts::new(
                "registry_submission_duration_seconds",
                "Time spent per submission attempt",
            ),
            &["outcome"],
        )?;

        registry.register(Box::new(submissions.clone()))?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            registry,
            submissions,
            duration,
        })
    }

    /// Record one finished submission.
    pub fn observe(&self, result: &SubmissionResult, elapsed: Duration) {
        let outcome = result.outcome();
        self.submissions.with_label_values(&[outcome]).inc();
        self.duration
            .with_label_values(&[outcome])
            .observe(elapsed.as_secs_f64());
    }

    /// Count a fatal submission error.
    pub fn observe_error(&self) {
        self.submissions.with_label_values(&["error"]).inc();
    }

    /// Total submissions recorded with `outcome`.
    pub fn count(&self, outcome: &str) -> u64 {
        self.submissions.with_label_values(&[outcome]).get()
    }

    /// Render all metrics in the Prometheus text format.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_outcome() {
        let metrics = SubmissionMetrics::new().unwrap();

        metrics.observe(&SubmissionResult::Throttled, Duration::ZERO);
        metrics.observe(&SubmissionResult::Throttled, Duration::ZERO);
        metrics.observe(
            &SubmissionResult::Accepted {
                response_body: "ok".into(),
            },
            Duration::from_millis(20),
        );

        assert_eq!(metrics.count("throttled"), 2);
        assert_eq!(metrics.count("accepted"), 1);
        assert_eq!(metrics.count("transport_failed"), 0);

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"registry_submissions_total{outcome="throttled"} 2"#));
        assert!(text.contains("registry_submission_duration_seconds"));
    }
}
