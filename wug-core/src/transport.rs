//! HTTP collaborator used by the client.
//!
//! The client only needs "GET a URL, hand back status and body". Pooling,
//! timeouts and TLS belong to the transport.

use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;

use crate::error::TransportError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .timeout(timeout)
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self { http })
    }

    /// Wrap an already configured client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(Box::new(e)))?;

        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .map_err(|e| TransportError::Request(Box::new(e)))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
