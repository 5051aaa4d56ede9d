//! CLI for the TSS share link sanitizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_config, run_expand, run_normalize, run_sanitize, SanitizeArgs};

/// Top-level CLI for the TSS share link sanitizer.
#[derive(Debug, Parser)]
#[command(name = "tss")]
#[command(about = "TSS: strip tracking from TikTok share links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Expand (if needed) and canonicalize a share URL.
    Sanitize {
        /// Share URL. Read from the first line of stdin when omitted.
        url: Option<String>,

        /// Append the privacy note after the sanitized URL.
        #[arg(long)]
        append_message: bool,

        /// Pass the URL through untouched.
        #[arg(long)]
        disabled: bool,

        /// Read configuration from this file instead of the XDG location.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Follow a shortlink's redirects and print the final URL.
    Expand {
        /// Shortlink (or any HTTP/HTTPS URL).
        url: String,
    },

    /// Canonicalize a full video URL without any network access.
    Normalize {
        /// Full TikTok video URL.
        url: String,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Sanitize {
                url,
                append_message,
                disabled,
                config,
            } => run_sanitize(SanitizeArgs {
                url,
                append_message,
                disabled,
                config,
            }),
            CliCommand::Expand { url } => run_expand(&url),
            CliCommand::Normalize { url } => Ok(run_normalize(&url)),
            CliCommand::Config => {
                run_config()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests;
