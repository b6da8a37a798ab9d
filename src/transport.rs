// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Outbound transport to the registry.

use crate::config::RegistryConfig;
use crate::error::{ConfigError, TransportError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Header carrying the document signature.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Sends one encoded document per call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `payload` as `application/json` to `destination`, returning the
    /// raw response body.
    async fn post(
        &self,
        destination: &Url,
        signature: &str,
        payload: String,
    ) -> Result<String, TransportError>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self { client })
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, ConfigError> {
        Self::new(config.timeout())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        destination: &Url,
        signature: &str,
        payload: String,
    ) -> Result<String, TransportError> {
        if !matches!(destination.scheme(), "http" | "https") {
            return Err(TransportError::UnsupportedScheme(
                destination.scheme().to_string(),
            ));
        }

        debug!(%destination, bytes = payload.len(), "Posting document");
        let response = self
            .client
            .post(destination.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

/// Parse and check a registry destination URL.
pub fn parse_destination(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidDestination {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidDestination {
            url: raw.to_string(),
            reason: "expected an http(s) URL with a host".to_string(),
        });
    }
    Ok(url)
}
