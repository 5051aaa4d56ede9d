//! A single hop: HEAD probe with GET fallback.

use url::Url;

use crate::error::ExpansionError;
use crate::http::{Method, RequestOptions, Transport, TransportError};

/// What one hop found out about the current URL.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Hop {
    /// 3xx with a target; the target (absolute) is the next URL.
    Redirect(String),
    /// 2xx: the current URL is the destination.
    Done,
}

/// Probe failure. `MethodNotAllowed` never leaves this module.
enum ProbeError {
    MethodNotAllowed,
    Failed(ExpansionError),
}

/// Probe `url` with HEAD; if the server answers 405, repeat with GET.
pub(super) fn step<T: Transport>(
    transport: &T,
    url: &str,
    opts: &RequestOptions,
) -> Result<Hop, ExpansionError> {
    // Status 0: nothing was requested.
    if !is_web_url(url) {
        return Err(ExpansionError::InvalidResponse {
            url: url.to_string(),
            status: 0,
        });
    }

    match probe(transport, Method::Head, url, opts) {
        Ok(hop) => Ok(hop),
        Err(ProbeError::Failed(e)) => Err(e),
        Err(ProbeError::MethodNotAllowed) => {
            tracing::debug!("HEAD {} rejected with 405, falling back to GET", url);
            match probe(transport, Method::Get, url, opts) {
                Ok(hop) => Ok(hop),
                Err(ProbeError::Failed(e)) => Err(e),
                Err(ProbeError::MethodNotAllowed) => Err(ExpansionError::InvalidResponse {
                    url: url.to_string(),
                    status: 405,
                }),
            }
        }
    }
}

fn probe<T: Transport>(
    transport: &T,
    method: Method,
    url: &str,
    opts: &RequestOptions,
) -> Result<Hop, ProbeError> {
    let response = transport
        .request(method, url, opts)
        .map_err(|e| ProbeError::Failed(transport_failure(url, e)))?;

    match response.status {
        300..=399 => match response.location {
            Some(location) => {
                let target = absolute_target(url, &location);
                if !is_web_url(&target) {
                    tracing::warn!("{} redirected to non-HTTP target {}", url, target);
                    return Err(ProbeError::Failed(ExpansionError::InvalidResponse {
                        url: url.to_string(),
                        status: response.status,
                    }));
                }
                Ok(Hop::Redirect(target))
            }
            None => Err(ProbeError::Failed(ExpansionError::NoRedirect {
                url: url.to_string(),
            })),
        },
        200..=299 => Ok(Hop::Done),
        405 => Err(ProbeError::MethodNotAllowed),
        status => Err(ProbeError::Failed(ExpansionError::InvalidResponse {
            url: url.to_string(),
            status,
        })),
    }
}

fn transport_failure(url: &str, e: TransportError) -> ExpansionError {
    match e {
        TransportError::Timeout => ExpansionError::Timeout {
            url: url.to_string(),
        },
        TransportError::Network(cause) => ExpansionError::NetworkFailure {
            url: url.to_string(),
            cause,
        },
    }
}

/// Only `http` and `https` URLs are ever handed to the transport.
fn is_web_url(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Absolute `Location` values are used verbatim; relative ones are joined
/// onto the URL that produced them.
fn absolute_target(base: &str, location: &str) -> String {
    if Url::parse(location).is_ok() {
        return location.to_string();
    }
    Url::parse(base)
        .and_then(|b| b.join(location))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| location.to_string())
}
