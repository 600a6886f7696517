//! crates/logging/src/target.rs
//! The capability contract every output sink must satisfy.

use std::fmt;
use std::sync::Arc;

use crate::logger::Logger;
use crate::severity::Severity;

/// Shared-ownership handle to a target.
///
/// A logger and all of its descendants may hold the same handle; the
/// target is dropped when the last holder releases it.
pub type TargetHandle = Arc<dyn Target>;

/// An output sink for log messages.
///
/// A target receives each message as a bracketed call sequence:
/// [`start_message`](Self::start_message), zero or more
/// [`put`](Self::put) calls, then [`end_message`](Self::end_message).
/// The sequence is driven by a [`MessageSentry`](crate::MessageSentry),
/// which guarantees the bracket is balanced on every exit path.
///
/// # Locking
///
/// A target that is shared between threads acquires its lock in
/// `start_message` and releases it in `end_message`, so one full message
/// is atomic with respect to other writers: concurrent messages
/// interleave at message granularity, never at value granularity.
/// Ordering between independent messages is first-come-first-served on
/// lock acquisition.
///
/// # Errors
///
/// The protocol has no error channel; a target that can fail (a closed
/// stream, a full disk) surfaces that through its own reporting
/// convention.
pub trait Target: Send + Sync {
    /// Begins a message from `source` at `severity`.
    ///
    /// May block on lock acquisition and may emit a prefix (canonical
    /// logger name, level name, timestamp) to the sink.
    fn start_message(&self, source: &Logger, severity: Severity);

    /// Appends one value's textual representation to the open message.
    fn put(&self, source: &Logger, value: &dyn fmt::Display);

    /// Finalizes the open message, flushing it to the sink and releasing
    /// any lock acquired in [`start_message`](Self::start_message).
    fn end_message(&self, source: &Logger);
}

/// Line-end marker value.
///
/// Routed through the ordinary [`Target::put`] path; renders as a single
/// newline on text sinks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Endl;

impl fmt::Display for Endl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")
    }
}
