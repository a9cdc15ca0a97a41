use bytes::Bytes;
use reqwest::blocking::Client;
use reqwest::header;
use thiserror::Error;

use crate::config::ClientConfig;

pub const JSON: &str = "application/json";

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Cannot connect to the engine at {endpoint}: {reason}")]
    Connect {
        endpoint: String,
        path: String,
        reason: String,
    },
    #[error("Request to {path} timed out")]
    Timeout { path: String },
    #[error("Request to {path} failed: {reason}")]
    Request { path: String, reason: String },
    #[error("Failed to create HTTP client: {0}")]
    Setup(String),
}

/// The one capability the command layer needs from the network.
pub trait Transport: Send + Sync {
    fn get(&self, path: &str, accept: &str) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, path: &str, accept: &str) -> Result<RawResponse, TransportError> {
        (**self).get(path, accept)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, path: &str, accept: &str) -> Result<RawResponse, TransportError> {
        (**self).get(path, accept)
    }
}

/// Blocking HTTP transport. The underlying client pools connections and is
/// safe to share between threads.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        // The daemon is always addressed directly.
        let client = Client::builder()
            .timeout(config.timeout)
            .no_proxy()
            .user_agent(concat!("dusage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, e: reqwest::Error, path: &str) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout { path: path.to_string() }
        } else if e.is_connect() {
            TransportError::Connect {
                endpoint: self.endpoint.clone(),
                path: path.to_string(),
                reason: e.to_string(),
            }
        } else {
            TransportError::Request {
                path: path.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, accept: &str) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.endpoint, path);
        let resp = self
            .client
            .get(&url)
            .header(header::ACCEPT, accept)
            .send()
            .map_err(|e| self.classify(e, path))?;

        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(|e| self.classify(e, path))?;
        Ok(RawResponse { status, body })
    }
}
