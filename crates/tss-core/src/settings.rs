//! User settings consumed by the orchestrator.

use serde::{Deserialize, Serialize};

/// Suffix appended to sanitized URLs when `append_message` is on.
pub const PRIVACY_MESSAGE: &str = "\n\nSanitized: tracking removed";

/// Read-only view of the two sanitizer toggles.
pub trait SettingsProvider {
    /// Master toggle; when off, input passes through untouched.
    fn is_enabled(&self) -> bool;

    fn should_append_message(&self) -> bool;

    fn privacy_message(&self) -> &str {
        PRIVACY_MESSAGE
    }
}

/// Plain settings values (`[settings]` section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub enabled: bool,
    pub append_message: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            append_message: false,
        }
    }
}

impl SettingsProvider for Settings {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn should_append_message(&self) -> bool {
        self.append_message
    }
}
