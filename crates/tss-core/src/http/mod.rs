//! HTTP transport used by the redirect resolver.
//!
//! A transport performs exactly one request and never follows redirects:
//! hop counting and the HEAD→GET fallback live in the resolver, which needs
//! to see every redirect response individually.

mod curl_transport;
mod parse;

pub use curl_transport::CurlTransport;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Request method. HEAD is the lightweight probe, GET the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Head,
    Get,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Head => write!(f, "HEAD"),
            Method::Get => write!(f, "GET"),
        }
    }
}

/// Per-request settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Bound on connect and on the whole request.
    pub timeout: Duration,
    /// Sent as `User-Agent`.
    pub user_agent: String,
}

/// Status and redirect target of a single response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u32,
    /// Raw `Location` header value, if the server sent one.
    pub location: Option<String>,
}

/// Transport-level failure (no HTTP status was obtained).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Network(String),
}

/// Performs one HTTP request without following redirects and without a body.
pub trait Transport: Send + Sync {
    fn request(
        &self,
        method: Method,
        url: &str,
        opts: &RequestOptions,
    ) -> Result<ProbeResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn request(
        &self,
        method: Method,
        url: &str,
        opts: &RequestOptions,
    ) -> Result<ProbeResponse, TransportError> {
        (**self).request(method, url, opts)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn request(
        &self,
        method: Method,
        url: &str,
        opts: &RequestOptions,
    ) -> Result<ProbeResponse, TransportError> {
        (**self).request(method, url, opts)
    }
}
