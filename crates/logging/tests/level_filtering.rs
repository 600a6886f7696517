//! Integration tests for severity filtering.
//!
//! These tests verify that a logger emits a message exactly when the
//! message severity is at or above the configured threshold, for every
//! combination of threshold and severity.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use logging::{LogLevel, Logger, Severity, Target, TargetHandle};
#[cfg(feature = "trace")]
use logging::TraceLevel;

#[derive(Default)]
struct CountingTarget {
    starts: AtomicUsize,
    ends: AtomicUsize,
}

impl CountingTarget {
    fn messages(&self) -> usize {
        let starts = self.starts.load(Ordering::SeqCst);
        let ends = self.ends.load(Ordering::SeqCst);
        assert_eq!(starts, ends, "unbalanced start/end");
        starts
    }
}

impl Target for CountingTarget {
    fn start_message(&self, _source: &Logger, _severity: Severity) {
        self.starts.fetch_add(1, Ordering::SeqCst);
    }

    fn put(&self, _source: &Logger, _value: &dyn fmt::Display) {}

    fn end_message(&self, _source: &Logger) {
        self.ends.fetch_add(1, Ordering::SeqCst);
    }
}

const ALL_THRESHOLDS: [Severity; 6] = [
    Severity::Trace,
    Severity::Debug,
    Severity::Info,
    Severity::Warning,
    Severity::Error,
    Severity::Fatal,
];

const LOG_LEVELS: [LogLevel; 4] = [
    LogLevel::Info,
    LogLevel::Warning,
    LogLevel::Error,
    LogLevel::Fatal,
];

// ============================================================================
// Threshold Comparison Tests
// ============================================================================

/// Verifies the inclusive `>=` comparison over the full matrix of
/// thresholds and log levels.
#[test]
fn log_levels_emit_iff_at_or_above_the_threshold() {
    for threshold in ALL_THRESHOLDS {
        for level in LOG_LEVELS {
            let target = Arc::new(CountingTarget::default());
            let root = Logger::root(Arc::clone(&target) as TargetHandle);
            root.set_level(threshold);

            root.log(level).put("probe");

            let expected = usize::from(Severity::from(level) >= threshold);
            assert_eq!(
                target.messages(),
                expected,
                "level {level:?} against threshold {threshold:?}"
            );
            assert_eq!(root.is_enabled(level), expected == 1);
        }
    }
}

/// A threshold of WARNING swallows INFO but passes ERROR, with exactly
/// one start/end pair per emitted message.
#[test]
fn warning_threshold_filters_info_and_passes_error() {
    let target = Arc::new(CountingTarget::default());
    let root = Logger::root(Arc::clone(&target) as TargetHandle);
    root.set_level(Severity::Warning);

    root.log(LogLevel::Info).put("dropped");
    assert_eq!(target.messages(), 0);

    root.log(LogLevel::Error).put("kept");
    assert_eq!(target.messages(), 1);
}

/// Trace levels obey the same inclusive comparison when compiled in.
#[cfg(feature = "trace")]
#[test]
fn trace_levels_follow_the_threshold_when_compiled_in() {
    for threshold in ALL_THRESHOLDS {
        for level in [TraceLevel::Trace, TraceLevel::Debug] {
            let target = Arc::new(CountingTarget::default());
            let root = Logger::root(Arc::clone(&target) as TargetHandle);
            root.set_level(threshold);

            root.trace(level).put("probe");

            let expected = usize::from(Severity::from(level) >= threshold);
            assert_eq!(
                target.messages(),
                expected,
                "trace level {level:?} against threshold {threshold:?}"
            );
        }
    }
}

// ============================================================================
// Filtering Through the Tree
// ============================================================================

/// A child's own threshold filters independently of the parent's.
#[test]
fn child_threshold_filters_independently() {
    let target = Arc::new(CountingTarget::default());
    let root = Logger::root(Arc::clone(&target) as TargetHandle);
    let child = root.child("quiet").expect("child");
    child.set_level(Severity::Error);

    root.log(LogLevel::Info).put("from root");
    child.log(LogLevel::Info).put("suppressed");
    child.log(LogLevel::Fatal).put("from child");

    assert_eq!(target.messages(), 2);
}
