//! Shortlink resolution: follow HTTP redirects to the final destination.
//!
//! The orchestrator only depends on [`ShortlinkResolver`]; the production
//! implementation is [`RedirectResolver`], which drives a [`Transport`]
//! hop by hop (HEAD first, GET when HEAD is rejected with 405) and retries
//! transient failures with exponential backoff.

mod probe;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ExpansionError, Outcome};
use crate::http::{RequestOptions, Transport};
use crate::retry::{self, RetryPolicy, Sleeper, ThreadSleeper};

use probe::Hop;

pub const DEFAULT_USER_AGENT: &str = "TikTok-Share-Sanitizer/1.0";

/// Resolver parameters (`[resolver]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of redirects followed before giving up.
    pub max_redirects: u32,
    /// Per-request timeout in seconds (minimum 1).
    pub timeout_secs: u64,
    /// Retries of the whole resolution on timeout or network failure.
    pub max_retries: u32,
    /// Identifying `User-Agent` value.
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_redirects: 5,
            timeout_secs: 3,
            max_retries: 3,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Timeout is at least one second; curl reads zero as "no timeout".
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::with_max_retries(self.max_retries)
    }
}

/// Turns a shortlink into the URL it finally points at.
pub trait ShortlinkResolver {
    fn resolve(&self, url: &str) -> Outcome<String, ExpansionError>;
}

/// Manual redirect follower over an injected transport.
pub struct RedirectResolver<T, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    config: ResolverConfig,
}

impl<T: Transport> RedirectResolver<T> {
    pub fn new(transport: T, config: ResolverConfig) -> Self {
        Self::with_sleeper(transport, config, ThreadSleeper)
    }
}

impl<T: Transport, S: Sleeper> RedirectResolver<T, S> {
    /// Like `new` but with a custom backoff sleeper (tests inject a no-op).
    pub fn with_sleeper(transport: T, config: ResolverConfig, sleeper: S) -> Self {
        Self {
            transport,
            sleeper,
            config,
        }
    }

    /// One resolution attempt: at most `max_redirects` hops.
    fn follow(&self, url: &str, opts: &RequestOptions) -> Outcome<String, ExpansionError> {
        let mut current = url.to_string();
        let mut hops = 0u32;

        while hops < self.config.max_redirects {
            match probe::step(&self.transport, &current, opts)? {
                Hop::Done => return Ok(current),
                Hop::Redirect(target) => {
                    tracing::debug!(hop = hops + 1, from = %current, to = %target, "following redirect");
                    current = target;
                    hops += 1;
                }
            }
        }

        Err(ExpansionError::TooManyRedirects {
            url: url.to_string(),
            limit: self.config.max_redirects,
        })
    }
}

impl<T: Transport, S: Sleeper> ShortlinkResolver for RedirectResolver<T, S> {
    fn resolve(&self, url: &str) -> Outcome<String, ExpansionError> {
        let opts = self.config.request_options();
        let policy = self.config.retry_policy();

        let result = retry::run_with_retry(&policy, &self.sleeper, retry::classify, || {
            self.follow(url, &opts).map_err(|e| {
                tracing::warn!("resolution attempt for {} failed: {}", url, e);
                e
            })
        });

        if let Ok(resolved) = &result {
            tracing::info!("resolved {} -> {}", url, resolved);
        }
        result
    }
}

impl<R: ShortlinkResolver + ?Sized> ShortlinkResolver for &R {
    fn resolve(&self, url: &str) -> Outcome<String, ExpansionError> {
        (**self).resolve(url)
    }
}
