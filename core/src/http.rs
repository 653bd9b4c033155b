//! Transport seam between the client and the network.
//!
//! # Design
//! `Transport` is the single injection point for all I/O: one non-retried
//! GET per call, no timeout beyond the client default, no caching. The
//! production implementation wraps `reqwest`; tests substitute doubles with
//! canned responses and call counters. Responses travel as plain data with
//! a binary body so both JSON payloads and image bytes ride the same seam.

use async_trait::async_trait;
use reqwest::Url;
use std::fmt;

/// An HTTP response reduced to what classification needs.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// A failure below HTTP: DNS, connection, TLS, or an aborted body read.
#[derive(Debug, Clone)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Capability to perform a single GET.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// Production transport over a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .to_vec();
        Ok(HttpResponse { status, body })
    }
}
