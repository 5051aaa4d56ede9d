//! CLI command handlers, one file per command.

mod config;
mod expand;
mod normalize;
mod sanitize;

pub use config::run_config;
pub use expand::run_expand;
pub use normalize::run_normalize;
pub use sanitize::{run_sanitize, SanitizeArgs};

use anyhow::Result;
use std::path::Path;
use tss_core::config::{self as core_config, TssConfig};

/// Config from `--config` when given, otherwise the XDG file (created on first run).
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<TssConfig> {
    let cfg = match explicit {
        Some(path) => core_config::load_from(path)?,
        None => core_config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}
