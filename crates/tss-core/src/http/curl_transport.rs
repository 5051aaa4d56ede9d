//! libcurl-backed transport.

use std::str;
use std::sync::{Arc, Mutex, MutexGuard};

use curl::easy::Easy;
use once_cell::sync::OnceCell;

use super::parse::location_from_headers;
use super::{Method, ProbeResponse, RequestOptions, Transport, TransportError};

/// Idle handles kept for connection reuse.
const MAX_IDLE_HANDLES: usize = 8;

static SHARED: OnceCell<Arc<CurlTransport>> = OnceCell::new();

/// Transport over the curl crate. Redirects are never followed.
///
/// Keeps a small pool of idle `Easy` handles so that sequential and
/// concurrent requests reuse libcurl's connection cache. Safe to share
/// between threads.
#[derive(Default)]
pub struct CurlTransport {
    idle: Mutex<Vec<Easy>>,
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide transport, built on first use.
    pub fn shared() -> Arc<CurlTransport> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(CurlTransport::new())))
    }

    fn idle(&self) -> MutexGuard<'_, Vec<Easy>> {
        self.idle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn checkout(&self) -> Easy {
        self.idle().pop().unwrap_or_else(Easy::new)
    }

    fn checkin(&self, mut easy: Easy) {
        easy.reset();
        let mut idle = self.idle();
        if idle.len() < MAX_IDLE_HANDLES {
            idle.push(easy);
        }
    }

    fn perform(
        easy: &mut Easy,
        method: Method,
        url: &str,
        opts: &RequestOptions,
    ) -> Result<ProbeResponse, curl::Error> {
        let mut headers: Vec<String> = Vec::new();

        easy.url(url)?;
        match method {
            Method::Head => easy.nobody(true)?,
            Method::Get => easy.get(true)?,
        }
        easy.follow_location(false)?;
        easy.connect_timeout(opts.timeout)?;
        easy.timeout(opts.timeout)?;
        easy.useragent(&opts.user_agent)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            // Body is never needed; drain it.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(ProbeResponse {
            status,
            location: location_from_headers(&headers),
        })
    }
}

impl Transport for CurlTransport {
    fn request(
        &self,
        method: Method,
        url: &str,
        opts: &RequestOptions,
    ) -> Result<ProbeResponse, TransportError> {
        let mut easy = self.checkout();
        let result = Self::perform(&mut easy, method, url, opts);
        self.checkin(easy);
        result.map_err(|e| classify_curl_error(&e))
    }
}

/// Map a curl error onto the transport error kinds.
fn classify_curl_error(e: &curl::Error) -> TransportError {
    if e.is_operation_timedout() {
        return TransportError::Timeout;
    }
    TransportError::Network(e.to_string())
}
