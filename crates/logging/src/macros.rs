//! crates/logging/src/macros.rs
//! Convenience macros wrapping the sentry protocol.
//!
//! Each macro opens a sentry, streams a single formatted value into it,
//! and drops the sentry at the end of the statement. Formatting is
//! driven by the target, so a disabled message never formats its
//! arguments.

/// Emit an informational message.
///
/// # Example
/// ```ignore
/// info_log!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info_log {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = $logger
            .log($crate::LogLevel::Info)
            .put(::core::format_args!($($arg)*));
    }};
}

/// Emit a warning message.
///
/// # Example
/// ```ignore
/// warning_log!(logger, "retrying after {} failures", attempts);
/// ```
#[macro_export]
macro_rules! warning_log {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = $logger
            .log($crate::LogLevel::Warning)
            .put(::core::format_args!($($arg)*));
    }};
}

/// Emit an error message.
///
/// # Example
/// ```ignore
/// error_log!(logger, "connect failed: {}", err);
/// ```
#[macro_export]
macro_rules! error_log {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = $logger
            .log($crate::LogLevel::Error)
            .put(::core::format_args!($($arg)*));
    }};
}

/// Emit a fatal message.
///
/// # Example
/// ```ignore
/// fatal_log!(logger, "unrecoverable state: {}", detail);
/// ```
#[macro_export]
macro_rules! fatal_log {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = $logger
            .log($crate::LogLevel::Fatal)
            .put(::core::format_args!($($arg)*));
    }};
}

/// Emit a trace-level message; compiled out with the `trace` feature.
///
/// # Example
/// ```ignore
/// trace_log!(logger, "poll returned {} events", n);
/// ```
#[macro_export]
macro_rules! trace_log {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = $logger
            .trace($crate::TraceLevel::Trace)
            .put(::core::format_args!($($arg)*));
    }};
}

/// Emit a debug-level message; compiled out with the `trace` feature.
///
/// # Example
/// ```ignore
/// debug_log!(logger, "cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = $logger
            .trace($crate::TraceLevel::Debug)
            .put(::core::format_args!($($arg)*));
    }};
}
