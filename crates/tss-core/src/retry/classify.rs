//! Classify expansion errors into retry policy error kinds.

use crate::error::ExpansionError;
use crate::retry::policy::ErrorKind;

/// Only transport-level failures are transient; every other outcome is
/// an answer from the server and is returned as is.
pub fn classify(e: &ExpansionError) -> ErrorKind {
    match e {
        ExpansionError::Timeout { .. } => ErrorKind::Timeout,
        ExpansionError::NetworkFailure { .. } => ErrorKind::Connection,
        ExpansionError::TooManyRedirects { .. }
        | ExpansionError::NoRedirect { .. }
        | ExpansionError::InvalidResponse { .. } => ErrorKind::Other,
    }
}
