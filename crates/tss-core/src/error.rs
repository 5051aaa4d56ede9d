//! Error taxonomy for the sanitization pipeline.
//!
//! Two independent families: [`NormalizationError`] (canonicalizer) and
//! [`ExpansionError`] (redirect resolver). Each variant maps to exactly one
//! short user-facing string; the long diagnostic is the `Display` output.

use thiserror::Error;

/// Outcome of a fallible pipeline stage.
pub type Outcome<T, E> = Result<T, E>;

pub const EMPTY_URL_MESSAGE: &str = "Share failed: empty URL";

pub const ERROR_INVALID_FORMAT: &str = "Invalid URL format";
pub const ERROR_INVALID_URL: &str = "Invalid URL";
pub const ERROR_NOT_TIKTOK: &str = "Not a TikTok URL";
pub const ERROR_INVALID_PATH: &str = "Invalid TikTok video URL";
pub const ERROR_NETWORK: &str = "Network error";
pub const ERROR_TIMEOUT: &str = "Request timeout";
pub const ERROR_TOO_MANY_REDIRECTS: &str = "Too many redirects";
pub const ERROR_NO_REDIRECT: &str = "Failed to expand short link";
pub const ERROR_SERVER: &str = "Server error";
/// Fallback for any error that is not part of the sanitizer taxonomy.
pub const ERROR_UNKNOWN: &str = "Error sanitizing URL";

/// Canonicalizer failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("Invalid URL format: {url}{}", cause_suffix(.cause))]
    InvalidFormat { url: String, cause: Option<String> },

    #[error("URL has no host: {url}")]
    NoHost { url: String },

    #[error("Not a TikTok URL: {url} (host: {host})")]
    NotTikTok { url: String, host: String },

    /// `detail` is the offending path or a description of what is wrong with it.
    #[error("URL does not contain valid @user/video/id format: {url} ({detail})")]
    InvalidPath { url: String, detail: String },
}

fn cause_suffix(cause: &Option<String>) -> String {
    cause.as_deref().map(|c| format!(" ({c})")).unwrap_or_default()
}

impl NormalizationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NormalizationError::InvalidFormat { .. } => ERROR_INVALID_FORMAT,
            NormalizationError::NoHost { .. } => ERROR_INVALID_URL,
            NormalizationError::NotTikTok { .. } => ERROR_NOT_TIKTOK,
            NormalizationError::InvalidPath { .. } => ERROR_INVALID_PATH,
        }
    }
}

/// Shortlink expansion failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("Network error expanding {url}: {cause}")]
    NetworkFailure { url: String, cause: String },

    #[error("Timeout expanding {url}")]
    Timeout { url: String },

    #[error("Too many redirects expanding {url} (max: {limit})")]
    TooManyRedirects { url: String, limit: u32 },

    #[error("Short link did not redirect: {url}")]
    NoRedirect { url: String },

    #[error("Invalid response expanding {url}: HTTP {status}")]
    InvalidResponse { url: String, status: u32 },
}

impl ExpansionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ExpansionError::NetworkFailure { .. } => ERROR_NETWORK,
            ExpansionError::Timeout { .. } => ERROR_TIMEOUT,
            ExpansionError::TooManyRedirects { .. } => ERROR_TOO_MANY_REDIRECTS,
            ExpansionError::NoRedirect { .. } => ERROR_NO_REDIRECT,
            ExpansionError::InvalidResponse { .. } => ERROR_SERVER,
        }
    }
}

/// Any failure of the sanitization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanitizerError {
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error(transparent)]
    Expansion(#[from] ExpansionError),
}

impl SanitizerError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SanitizerError::Normalization(e) => e.user_message(),
            SanitizerError::Expansion(e) => e.user_message(),
        }
    }
}

/// Maps an arbitrary error to its user-facing string.
///
/// Errors outside the sanitizer taxonomy get [`ERROR_UNKNOWN`].
pub fn user_message_for(err: &(dyn std::error::Error + 'static)) -> &'static str {
    if let Some(e) = err.downcast_ref::<SanitizerError>() {
        return e.user_message();
    }
    if let Some(e) = err.downcast_ref::<NormalizationError>() {
        return e.user_message();
    }
    if let Some(e) = err.downcast_ref::<ExpansionError>() {
        return e.user_message();
    }
    ERROR_UNKNOWN
}
