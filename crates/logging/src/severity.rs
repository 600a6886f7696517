//! crates/logging/src/severity.rs
//! Severity vocabulary shared by loggers, sentries, and targets.

use std::fmt;

/// Ordered severity of a single message.
///
/// The six values form one ordered scale; a message is emitted when its
/// severity is at least the logger's threshold (inclusive `>=`). The two
/// lowest values are the trace levels, eligible for compile-time removal
/// via the `trace` cargo feature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Finest-grained diagnostic output.
    Trace = 0,
    /// Diagnostic output for development builds.
    Debug = 1,
    /// Normal operational messages.
    Info = 2,
    /// Something unexpected that the program can tolerate.
    Warning = 3,
    /// An operation failed.
    Error = 4,
    /// The program cannot continue.
    Fatal = 5,
}

impl Severity {
    /// Returns the display name, `"TRACE"` through `"FATAL"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns `true` for the trace levels ([`Trace`](Self::Trace) and
    /// [`Debug`](Self::Debug)), which the `trace` feature can compile out.
    #[must_use]
    pub const fn is_trace(self) -> bool {
        matches!(self, Self::Trace | Self::Debug)
    }

    /// Parses a display name back into a severity.
    ///
    /// Recognised names are case-insensitive. Returns `None` for
    /// unrecognised names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "TRACE" => Some(Self::Trace),
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "FATAL" => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Maps a verbosity count (as counted from repeated `-v` flags) to a
    /// threshold: `0` keeps the default, each extra step lowers it.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        match level {
            0 => Self::Info,
            1 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity vocabulary for trace statements.
///
/// Trace statements enter the tree through [`Logger::trace`] and are the
/// only statements subject to compile-time elision.
///
/// [`Logger::trace`]: crate::Logger::trace
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceLevel {
    /// Finest-grained diagnostic output.
    Trace,
    /// Diagnostic output for development builds.
    Debug,
}

impl TraceLevel {
    /// Returns the display name, `"TRACE"` or `"DEBUG"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
        }
    }
}

impl From<TraceLevel> for Severity {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::Trace => Self::Trace,
            TraceLevel::Debug => Self::Debug,
        }
    }
}

impl fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity vocabulary for log statements.
///
/// Log statements enter the tree through [`Logger::log`] and are never
/// compiled out; only the runtime threshold filters them.
///
/// [`Logger::log`]: crate::Logger::log
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// Normal operational messages.
    Info,
    /// Something unexpected that the program can tolerate.
    Warning,
    /// An operation failed.
    Error,
    /// The program cannot continue.
    Fatal,
}

impl LogLevel {
    /// Returns the display name, `"INFO"` through `"FATAL"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl From<LogLevel> for Severity {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
