//! crates/logging-sink/src/stream.rs
//! Reference target writing formatted messages to an `io::Write` stream.

use std::fmt;
use std::io::Write;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

use logging::{Logger, Severity, Target};

use crate::line_mode::LineMode;
use crate::lock::{MessageLock, MutexLock, NullLock};

/// Which timestamp prefix, if any, a [`StreamTarget`] emits before the
/// logger name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TimestampMode {
    /// No timestamp prefix (the default).
    #[default]
    None,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// Wall-clock time, `HH:MM:SS`.
    Time,
    /// Date and time, `YYYY-MM-DD HH:MM:SS`.
    DateTime,
}

impl TimestampMode {
    fn render(self, now: &DateTime<Local>) -> Option<String> {
        match self {
            Self::None => None,
            Self::Date => Some(now.format("%Y-%m-%d").to_string()),
            Self::Time => Some(now.format("%H:%M:%S").to_string()),
            Self::DateTime => Some(now.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

/// Target wrapping a writable stream.
///
/// Each message is prefixed with an optional timestamp, the source
/// logger's canonical name in parentheses (omitted when the canonical
/// name is empty), and the severity name in brackets:
///
/// ```text
/// (db::pool) [WARNING] connection limit reached
/// ```
///
/// The message lock `L` scopes one full message: with [`MutexLock`]
/// several threads can share the target and their messages come out as
/// contiguous blocks. Sink I/O failures have no reporting channel here
/// and are discarded; wrap a fallible writer if failures must surface.
pub struct StreamTarget<W, L = NullLock> {
    stream: Mutex<W>,
    lock: L,
    line_mode: LineMode,
    timestamp_mode: TimestampMode,
}

impl<W: Write> StreamTarget<W> {
    /// Creates an unsynchronized target over `stream`.
    pub fn new(stream: W) -> Self {
        Self::with_parts(stream, NullLock, LineMode::default(), TimestampMode::default())
    }
}

impl<W: Write> StreamTarget<W, MutexLock> {
    /// Creates a target over `stream` whose messages are serialized by a
    /// real mutex, for targets shared between threads.
    pub fn synchronized(stream: W) -> Self {
        Self::with_parts(
            stream,
            MutexLock::new(),
            LineMode::default(),
            TimestampMode::default(),
        )
    }
}

impl<W: Write, L: MessageLock> StreamTarget<W, L> {
    /// Creates a target from explicit parts.
    pub fn with_parts(
        stream: W,
        lock: L,
        line_mode: LineMode,
        timestamp_mode: TimestampMode,
    ) -> Self {
        Self {
            stream: Mutex::new(stream),
            lock,
            line_mode,
            timestamp_mode,
        }
    }

    /// Replaces the [`LineMode`] used for subsequent messages.
    #[must_use]
    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Replaces the [`TimestampMode`] used for subsequent messages.
    #[must_use]
    pub fn with_timestamp_mode(mut self, timestamp_mode: TimestampMode) -> Self {
        self.timestamp_mode = timestamp_mode;
        self
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Returns the current [`TimestampMode`].
    #[must_use]
    pub const fn timestamp_mode(&self) -> TimestampMode {
        self.timestamp_mode
    }

    /// Mutably borrows the underlying stream.
    pub fn get_mut(&mut self) -> &mut W {
        self.stream.get_mut()
    }

    /// Consumes the target and returns the wrapped stream.
    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

impl<W, L> fmt::Debug for StreamTarget<W, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamTarget")
            .field("line_mode", &self.line_mode)
            .field("timestamp_mode", &self.timestamp_mode)
            .finish_non_exhaustive()
    }
}

impl<W: Write + Send, L: MessageLock> Target for StreamTarget<W, L> {
    fn start_message(&self, source: &Logger, severity: Severity) {
        self.lock.acquire();
        let mut stream = self.stream.lock();
        if let Some(stamp) = self.timestamp_mode.render(&Local::now()) {
            let _ = write!(stream, "{stamp} ");
        }
        let name = source.canonical_name();
        if !name.is_empty() {
            let _ = write!(stream, "({name}) ");
        }
        let _ = write!(stream, "[{severity}] ");
    }

    fn put(&self, _source: &Logger, value: &dyn fmt::Display) {
        let _ = write!(self.stream.lock(), "{value}");
    }

    fn end_message(&self, _source: &Logger) {
        {
            let mut stream = self.stream.lock();
            if self.line_mode.append_newline() {
                let _ = stream.write_all(b"\n");
            }
            let _ = stream.flush();
        }
        self.lock.release();
    }
}
