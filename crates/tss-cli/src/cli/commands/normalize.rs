//! `tss normalize <url>` – canonicalizer only, no network.

use std::process::ExitCode;
use tss_core::canonical;

pub fn run_normalize(url: &str) -> ExitCode {
    match canonical::normalize(url) {
        Ok(clean) => {
            println!("{}", clean);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("normalize failed: {}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
