//! `/@<username>/video/<digits>` extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use super::host::CANONICAL_HOST;

static VIDEO_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/@([^/]+)/video/(\d+)").expect("video path pattern is valid"));

/// A validated video reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    pub username: String,
    pub video_id: String,
}

impl VideoRef {
    /// `https://www.tiktok.com/@<username>/video/<id>`
    pub fn canonical_url(&self) -> String {
        format!("https://{}/@{}/video/{}", CANONICAL_HOST, self.username, self.video_id)
    }
}

/// Decodes `raw_path` and extracts the first video reference in it.
///
/// Path decoding only: `+` is a literal plus, not a space.
///
/// On failure returns the detail for `InvalidPath`.
pub fn extract_video(raw_path: &str) -> Result<VideoRef, String> {
    let decoded = urlencoding::decode(raw_path)
        .map_err(|_| format!("Undecodable path: {raw_path}"))?;

    let caps = VIDEO_PATH
        .captures(&decoded)
        .ok_or_else(|| raw_path.to_string())?;
    let username = &caps[1];
    let video_id = &caps[2];

    if username.trim().is_empty() {
        return Err(format!("Empty username in path: {raw_path}"));
    }
    if video_id.is_empty() {
        return Err(format!("Empty video ID in path: {raw_path}"));
    }
    // `\d` is Unicode-aware; only ASCII digits are real IDs.
    if !video_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("Invalid video ID format: {video_id}"));
    }
    // These would be reinterpreted when the canonical URL is parsed again.
    if username
        .chars()
        .any(|c| matches!(c, '?' | '#' | '%' | '\\') || c.is_control())
    {
        return Err(format!("Invalid username: {username}"));
    }

    Ok(VideoRef {
        username: username.to_string(),
        video_id: video_id.to_string(),
    })
}
