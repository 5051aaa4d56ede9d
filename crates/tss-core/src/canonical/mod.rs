//! TikTok share URL canonicalization.
//!
//! Rewrites any accepted TikTok video URL into
//! `https://www.tiktok.com/@<username>/video/<id>`: query, fragment and
//! trailing slash are dropped and the host is forced to the canonical one.
//! Deliberately narrow: one host family, one path shape.

mod host;
mod path;

pub use host::{is_shortlink_host, is_tiktok_host, CANONICAL_HOST, SHORTLINK_HOSTS};
pub use path::{extract_video, VideoRef};

use url::Url;

use crate::error::{NormalizationError, Outcome};

/// Canonicalizes `url`, short-circuiting on the first failed check.
pub fn normalize(url: &str) -> Outcome<String, NormalizationError> {
    let trimmed = url.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    let parsed = Url::parse(trimmed).map_err(|e| NormalizationError::InvalidFormat {
        url: url.to_string(),
        cause: Some(e.to_string()),
    })?;

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| NormalizationError::NoHost {
            url: url.to_string(),
        })?;

    if !is_tiktok_host(&host) {
        return Err(NormalizationError::NotTikTok {
            url: url.to_string(),
            host,
        });
    }

    let video = extract_video(parsed.path()).map_err(|detail| NormalizationError::InvalidPath {
        url: url.to_string(),
        detail,
    })?;

    Ok(video.canonical_url())
}

/// True when `url` is on one of the shortlink hosts. Unparseable input is
/// not a shortlink.
pub fn is_shortlink(url: &str) -> bool {
    Url::parse(url.trim())
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .map(|h| is_shortlink_host(&h))
        .unwrap_or(false)
}
