//! crates/logging/src/error.rs
//! Error types for logger tree configuration.

use thiserror::Error;

/// Errors raised while building or reconfiguring the logger tree.
///
/// These are programmer errors detected synchronously at the call that
/// triggers them; they are never retried or queued.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum LoggerError {
    /// A child logger was requested with an empty name.
    #[error("child logger name must not be empty")]
    EmptyChildName,
}
