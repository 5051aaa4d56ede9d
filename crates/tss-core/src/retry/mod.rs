//! Retry and backoff policy.
//!
//! Classifies expansion failures (timeouts, connection failures) and decides
//! on exponential backoff so the resolver can retry a whole resolution
//! attempt without knowing the schedule. The delay itself goes through a
//! [`Sleeper`] so tests can run the schedule without waiting.

mod classify;
mod policy;
mod run;
mod sleep;

pub use classify::classify;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
pub use sleep::{Sleeper, ThreadSleeper};
