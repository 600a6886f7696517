#![deny(unsafe_code)]

//! Demonstration binary wiring a logger tree to the standard streams.
//!
//! Shows level filtering, child loggers with independent thresholds,
//! subtree propagation, compile-time trace elision, and runtime target
//! switching through a multi-target dispatcher.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use logging::{LogConfig, LogLevel, Logger, Severity, TargetHandle, TraceLevel};
use logging_sink::{MultiTarget, StreamTarget, TimestampMode};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("logtree: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stdout_target: TargetHandle = Arc::new(StreamTarget::synchronized(io::stdout()));
    let root = Logger::named_root(stdout_target, "demo");

    // Emit DEBUG and higher.
    LogConfig::from_verbose_level(1).apply(&root);

    root.trace(TraceLevel::Debug)
        .put("visible only in builds with tracing compiled in");
    root.log(LogLevel::Info).put("this should be visible");

    // A child with its own, stricter threshold.
    let child = root.child("child")?;
    child.set_level(Severity::Error);
    child
        .log(LogLevel::Info)
        .put("this message should never be visible");
    child.log(LogLevel::Error).put("this should be");

    if root.is_enabled(TraceLevel::Debug) {
        root.log(LogLevel::Info)
            .put("tracing is compiled in and passes the threshold");
    } else {
        root.log(LogLevel::Info)
            .put("trace statements are compiled out or filtered");
    }

    // Redirect the child to stderr, timestamped, while the root stays
    // on stdout.
    let stderr_target: TargetHandle = Arc::new(
        StreamTarget::synchronized(io::stderr()).with_timestamp_mode(TimestampMode::Time),
    );
    child.set_target(stderr_target);
    child.set_level(Severity::Info);

    root.log(LogLevel::Info).put("this should be on stdout");
    child.log(LogLevel::Info).put("and this on stderr");

    // The same tree can hang off a switchable dispatcher instead.
    let multi = Arc::new(MultiTarget::new([
        Arc::new(StreamTarget::synchronized(io::stdout())) as TargetHandle,
        Arc::new(StreamTarget::synchronized(io::stderr())) as TargetHandle,
    ])?);
    root.set_target(Arc::clone(&multi) as TargetHandle);

    root.log(LogLevel::Info).put("dispatched to stdout");
    multi.set_active(1)?;
    root.log(LogLevel::Info).put("dispatched to stderr");

    if let Err(error) = multi.set_active(2) {
        multi.set_active(0)?;
        root.log(LogLevel::Warning)
            .put("rejected switch: ")
            .put(error);
    }

    Ok(())
}
