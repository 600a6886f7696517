//! crates/logging-sink/src/tracing_bridge.rs
//! Bridge target re-emitting completed messages as tracing events.
//!
//! This lets a logger tree feed an application that already collects
//! diagnostics through the `tracing` ecosystem: each completed message
//! becomes one event carrying the source logger's canonical name in a
//! `scope` field, with the severity mapped onto the nearest tracing
//! level.

use std::fmt::{self, Write as _};

use parking_lot::Mutex;

use logging::{Logger, Severity, Target};

use crate::lock::{MessageLock, NullLock};

/// Per-message scratch state, guarded as one unit.
struct BridgeState {
    severity: Severity,
    scope: String,
    buffer: String,
}

/// Target forwarding each message to the active tracing subscriber.
///
/// Values appended to a message accumulate in a scratch buffer; when the
/// message ends, one event is emitted at the mapped level
/// (trace → `TRACE`, debug → `DEBUG`, info → `INFO`, warning → `WARN`,
/// error and fatal → `ERROR`, the latter flagged with `fatal = true`).
pub struct TracingTarget<L = NullLock> {
    lock: L,
    state: Mutex<BridgeState>,
}

impl TracingTarget<NullLock> {
    /// Creates an unsynchronized bridge target.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lock(NullLock)
    }
}

impl<L: MessageLock> TracingTarget<L> {
    /// Creates a bridge target serialized by the given message lock.
    pub fn with_lock(lock: L) -> Self {
        Self {
            lock,
            state: Mutex::new(BridgeState {
                severity: Severity::Info,
                scope: String::new(),
                buffer: String::new(),
            }),
        }
    }
}

impl Default for TracingTarget<NullLock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for TracingTarget<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingTarget").finish_non_exhaustive()
    }
}

fn emit(severity: Severity, scope: &str, message: &str) {
    match severity {
        Severity::Trace => tracing::trace!(scope, "{message}"),
        Severity::Debug => tracing::debug!(scope, "{message}"),
        Severity::Info => tracing::info!(scope, "{message}"),
        Severity::Warning => tracing::warn!(scope, "{message}"),
        Severity::Error => tracing::error!(scope, "{message}"),
        Severity::Fatal => tracing::error!(scope, fatal = true, "{message}"),
    }
}

impl<L: MessageLock> Target for TracingTarget<L> {
    fn start_message(&self, source: &Logger, severity: Severity) {
        self.lock.acquire();
        let mut state = self.state.lock();
        state.severity = severity;
        state.scope = source.canonical_name();
        state.buffer.clear();
    }

    fn put(&self, _source: &Logger, value: &dyn fmt::Display) {
        let mut state = self.state.lock();
        let _ = write!(state.buffer, "{value}");
    }

    fn end_message(&self, _source: &Logger) {
        {
            let state = self.state.lock();
            emit(state.severity, &state.scope, &state.buffer);
        }
        self.lock.release();
    }
}
