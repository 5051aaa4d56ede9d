//! Sanitization pipeline: shortlink check, resolve, canonicalize, suffix.
//!
//! Fail-closed: any resolver or canonicalizer error aborts with no output,
//! and the user-facing message goes to the caller's [`Notifier`]. The only
//! case where the input is returned untouched is the disabled setting.

use crate::canonical;
use crate::error::{SanitizerError, EMPTY_URL_MESSAGE};
use crate::resolver::ShortlinkResolver;
use crate::settings::SettingsProvider;

/// Where user-facing error strings are shown (toast, stderr, ...).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str) {}
}

/// Emits messages as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("share sanitizer: {}", message);
    }
}

/// Why a sanitization produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    EmptyUrl,
    Failed(SanitizerError),
}

impl AbortReason {
    pub fn user_message(&self) -> &'static str {
        match self {
            AbortReason::EmptyUrl => EMPTY_URL_MESSAGE,
            AbortReason::Failed(e) => e.user_message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizeOutcome {
    /// Canonical URL, suffixed when the settings ask for it.
    Sanitized(String),
    /// Sanitizer disabled; the original input verbatim.
    Passthrough(String),
    Aborted(AbortReason),
}

impl SanitizeOutcome {
    /// The string to hand on (e.g. to the clipboard); `None` on abort.
    pub fn into_output(self) -> Option<String> {
        match self {
            SanitizeOutcome::Sanitized(s) | SanitizeOutcome::Passthrough(s) => Some(s),
            SanitizeOutcome::Aborted(_) => None,
        }
    }
}

/// Orchestrates one sanitization over injected collaborators.
pub struct Sanitizer<'a> {
    resolver: &'a dyn ShortlinkResolver,
    notifier: &'a dyn Notifier,
}

impl<'a> Sanitizer<'a> {
    pub fn new(resolver: &'a dyn ShortlinkResolver, notifier: &'a dyn Notifier) -> Self {
        Self { resolver, notifier }
    }

    pub fn sanitize(&self, raw: Option<&str>, settings: &dyn SettingsProvider) -> SanitizeOutcome {
        let raw = match raw {
            Some(s) if !s.trim().is_empty() => s,
            _ => return self.abort(AbortReason::EmptyUrl),
        };

        if !settings.is_enabled() {
            tracing::debug!("sanitizer disabled, passing URL through");
            return SanitizeOutcome::Passthrough(raw.to_string());
        }

        match self.run(raw) {
            Ok(clean) => {
                if settings.should_append_message() {
                    SanitizeOutcome::Sanitized(clean + settings.privacy_message())
                } else {
                    SanitizeOutcome::Sanitized(clean)
                }
            }
            Err(e) => {
                tracing::warn!("sanitization of {} failed: {}", raw, e);
                self.abort(AbortReason::Failed(e))
            }
        }
    }

    fn run(&self, raw: &str) -> Result<String, SanitizerError> {
        let expanded = if canonical::is_shortlink(raw) {
            self.resolver.resolve(raw.trim())?
        } else {
            raw.to_string()
        };
        Ok(canonical::normalize(&expanded)?)
    }

    fn abort(&self, reason: AbortReason) -> SanitizeOutcome {
        self.notifier.notify(reason.user_message());
        SanitizeOutcome::Aborted(reason)
    }
}
