//! `tss expand <url>` – resolver only.

use anyhow::Result;
use std::process::ExitCode;
use tss_core::http::CurlTransport;
use tss_core::{RedirectResolver, ShortlinkResolver};

use super::load_config;

pub fn run_expand(url: &str) -> Result<ExitCode> {
    let cfg = load_config(None)?;
    let resolver = RedirectResolver::new(CurlTransport::shared(), cfg.resolver);
    match resolver.resolve(url.trim()) {
        Ok(resolved) => {
            println!("{}", resolved);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!("expand failed: {}", e);
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
