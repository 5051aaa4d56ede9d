//! `tss sanitize [URL]` – the full pipeline, printing the shareable text.

use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use tss_core::http::CurlTransport;
use tss_core::sanitize::LogNotifier;
use tss_core::{Notifier, RedirectResolver, Sanitizer, Settings};

use super::load_config;

#[derive(Debug, Default)]
pub struct SanitizeArgs {
    pub url: Option<String>,
    pub append_message: bool,
    pub disabled: bool,
    pub config: Option<PathBuf>,
}

/// Shows user-facing errors on stderr and records them in the log.
pub(crate) struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        LogNotifier.notify(message);
        eprintln!("{}", message);
    }
}

/// Command-line flags can only switch features on top of the configured settings.
pub(crate) fn effective_settings(base: Settings, args: &SanitizeArgs) -> Settings {
    Settings {
        enabled: base.enabled && !args.disabled,
        append_message: base.append_message || args.append_message,
    }
}

fn read_first_line(input: impl BufRead) -> Result<Option<String>> {
    match input.lines().next() {
        Some(line) => Ok(Some(line.context("read URL from stdin")?)),
        None => Ok(None),
    }
}

pub fn run_sanitize(args: SanitizeArgs) -> Result<ExitCode> {
    let cfg = load_config(args.config.as_deref())?;
    let settings = effective_settings(cfg.settings, &args);

    let raw = match &args.url {
        Some(url) => Some(url.clone()),
        None => read_first_line(std::io::stdin().lock())?,
    };

    let resolver = RedirectResolver::new(CurlTransport::shared(), cfg.resolver);
    let sanitizer = Sanitizer::new(&resolver, &StderrNotifier);

    // On abort the notifier has already printed the reason.
    match sanitizer.sanitize(raw.as_deref(), &settings).into_output() {
        Some(text) => {
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
