// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Transport doubles.

use async_trait::async_trait;
use registry_submitter::error::TransportError;
use registry_submitter::transport::Transport;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// How a [`StubTransport`] answers.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Reply with this body
    Respond(String),
    /// Fail with this HTTP status
    Status(u16),
    /// Panic inside the call
    Panic,
}

/// Counts calls and answers according to its [`Behavior`].
#[derive(Debug)]
pub struct StubTransport {
    behavior: Behavior,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubTransport {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Self::with_delay(behavior, Duration::ZERO)
    }

    /// Hold every call in flight for `delay` before answering.
    pub fn with_delay(behavior: Behavior, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post(
        &self,
        _destination: &Url,
        _signature: &str,
        _payload: String,
    ) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.behavior {
            Behavior::Respond(body) => Ok(body.clone()),
            Behavior::Status(status) => Err(TransportError::Status {
                status: *status,
                body: "registry error".to_string(),
            }),
            Behavior::Panic => panic!("transport exploded"),
        }
    }
}

pub fn destination() -> Url {
    Url::parse("https://registry.example.com/api/v3/lk/documents/create").expect("valid test url")
}
