//! `tss config` – show where the config lives and what is in effect.

use anyhow::Result;
use tss_core::config;

use super::load_config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = load_config(None)?;
    println!("# {}", path.display());
    print!("{}", config::render(&cfg)?);
    Ok(())
}
