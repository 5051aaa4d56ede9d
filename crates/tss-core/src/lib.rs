pub mod config;
pub mod logging;

pub mod canonical;
pub mod error;
pub mod http;
pub mod resolver;
pub mod retry;
pub mod sanitize;
pub mod settings;

pub use error::{ExpansionError, NormalizationError, Outcome, SanitizerError};
pub use resolver::{RedirectResolver, ResolverConfig, ShortlinkResolver};
pub use sanitize::{AbortReason, Notifier, SanitizeOutcome, Sanitizer};
pub use settings::{Settings, SettingsProvider};
