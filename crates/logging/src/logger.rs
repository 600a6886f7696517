//! crates/logging/src/logger.rs
//! The logger tree: named nodes sharing targets and severity thresholds.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::error::LoggerError;
use crate::sentry::MessageSentry;
#[cfg(not(feature = "trace"))]
use crate::sentry::NoopSentry;
use crate::severity::{LogLevel, Severity, TraceLevel};
use crate::target::TargetHandle;

/// Separator joining the segments of a canonical logger name.
pub const CANONICAL_SEPARATOR: &str = "::";

/// Mutable per-node configuration, guarded as one unit so that a sentry
/// snapshots a consistent (threshold, target) pair.
struct LoggerState {
    threshold: Severity,
    target: TargetHandle,
    children: BTreeMap<String, Arc<Logger>>,
}

/// A named node in the logger tree.
///
/// Every logger owns a severity threshold and a shared [`TargetHandle`];
/// children are created lazily through [`child`](Logger::child) and
/// inherit the parent's target and threshold once, at creation time.
/// After creation a child evolves independently until the parent's
/// configuration is propagated again with [`set_level`](Logger::set_level)
/// or [`set_target`](Logger::set_target), which overwrite the whole
/// subtree.
///
/// Loggers are handed out as `Arc<Logger>`: children are owned by their
/// parent, while the parent link is a non-owning [`Weak`] used only for
/// name lookups. Message emission through a shared logger is safe from
/// any number of threads; tree reconfiguration is internally locked as
/// well, though it is expected to happen on a single configuration
/// thread.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use std::sync::{Arc, Mutex};
/// use logging::{LogLevel, Logger, Severity, Target, TargetHandle};
///
/// // A minimal collecting target.
/// #[derive(Default)]
/// struct Collect(Mutex<String>);
///
/// impl Target for Collect {
///     fn start_message(&self, _source: &Logger, severity: Severity) {
///         let mut out = self.0.lock().unwrap();
///         out.push_str(&format!("[{severity}] "));
///     }
///     fn put(&self, _source: &Logger, value: &dyn fmt::Display) {
///         self.0.lock().unwrap().push_str(&value.to_string());
///     }
///     fn end_message(&self, _source: &Logger) {
///         self.0.lock().unwrap().push('\n');
///     }
/// }
///
/// let target = Arc::new(Collect::default());
/// let root = Logger::root(Arc::clone(&target) as TargetHandle);
///
/// root.log(LogLevel::Warning).put("disk almost full: ").put(97).put("%");
/// root.set_level(Severity::Error);
/// root.log(LogLevel::Info).put("filtered out");
///
/// assert_eq!(*target.0.lock().unwrap(), "[WARNING] disk almost full: 97%\n");
/// ```
pub struct Logger {
    name: String,
    parent: Weak<Logger>,
    state: RwLock<LoggerState>,
}

impl Logger {
    /// Creates an unnamed root logger with the default [`Severity::Info`]
    /// threshold.
    #[must_use]
    pub fn root(target: TargetHandle) -> Arc<Self> {
        Self::named_root(target, "")
    }

    /// Creates a named root logger with the default [`Severity::Info`]
    /// threshold.
    ///
    /// Only the root may carry an empty name.
    #[must_use]
    pub fn named_root(target: TargetHandle, name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parent: Weak::new(),
            state: RwLock::new(LoggerState {
                threshold: Severity::default(),
                target,
                children: BTreeMap::new(),
            }),
        })
    }

    /// Returns the node's own name (not the canonical name).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent logger, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Arc<Self>> {
        self.parent.upgrade()
    }

    /// Returns the full ancestor-chain name joined with
    /// [`CANONICAL_SEPARATOR`], omitting an empty root segment.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        self.canonical_name_with(CANONICAL_SEPARATOR)
    }

    /// Returns the canonical name joined with a caller-chosen separator.
    #[must_use]
    pub fn canonical_name_with(&self, separator: &str) -> String {
        match self.parent.upgrade() {
            Some(parent) if !parent.name().is_empty() => {
                let mut joined = parent.canonical_name_with(separator);
                joined.push_str(separator);
                joined.push_str(&self.name);
                joined
            }
            _ => self.name.clone(),
        }
    }

    /// Returns the current severity threshold.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        self.state.read().threshold
    }

    /// Returns the currently configured target.
    #[must_use]
    pub fn target(&self) -> TargetHandle {
        Arc::clone(&self.state.read().target)
    }

    /// Sets this node's threshold and recursively overwrites the
    /// threshold of every existing descendant.
    ///
    /// Descendants configured independently beforehand lose that
    /// configuration; the whole subtree is reset to `severity`.
    pub fn set_level(&self, severity: Severity) {
        let children: Vec<Arc<Self>> = {
            let mut state = self.state.write();
            state.threshold = severity;
            state.children.values().cloned().collect()
        };
        for child in children {
            child.set_level(severity);
        }
    }

    /// Replaces this node's target and recursively propagates the new
    /// target to every existing descendant, with the same
    /// overwrite-the-subtree semantics as [`set_level`](Self::set_level).
    pub fn set_target(&self, target: TargetHandle) {
        let children: Vec<Arc<Self>> = {
            let mut state = self.state.write();
            state.target = Arc::clone(&target);
            state.children.values().cloned().collect()
        };
        for child in children {
            child.set_target(Arc::clone(&target));
        }
    }

    /// Returns the child with the given name, creating it on first use.
    ///
    /// Creation is lazy and idempotent: the first call snapshots the
    /// parent's current target and threshold into the new child, and
    /// every later call with the same name returns that same node.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::EmptyChildName`] when `name` is empty.
    pub fn child(self: &Arc<Self>, name: &str) -> Result<Arc<Self>, LoggerError> {
        if name.is_empty() {
            return Err(LoggerError::EmptyChildName);
        }
        let mut state = self.state.write();
        if let Some(existing) = state.children.get(name) {
            return Ok(Arc::clone(existing));
        }
        let child = Arc::new(Self {
            name: name.to_owned(),
            parent: Arc::downgrade(self),
            state: RwLock::new(LoggerState {
                threshold: state.threshold,
                target: Arc::clone(&state.target),
                children: BTreeMap::new(),
            }),
        });
        state.children.insert(name.to_owned(), Arc::clone(&child));
        Ok(child)
    }

    /// Returns `true` when a message at `severity` would be emitted.
    ///
    /// Use this to skip expensive message construction. Trace levels
    /// additionally require the `trace` feature; with the feature off
    /// this returns `false` for them regardless of the threshold.
    pub fn is_enabled(&self, severity: impl Into<Severity>) -> bool {
        let severity = severity.into();
        if severity.is_trace() && !cfg!(feature = "trace") {
            return false;
        }
        severity >= self.state.read().threshold
    }

    /// Starts a log message, returning the sentry that brackets it.
    ///
    /// Log statements are never compiled out; the sentry is enabled iff
    /// `level` is at least the threshold.
    pub fn log(&self, level: LogLevel) -> MessageSentry<'_> {
        self.sentry(level.into())
    }

    /// Starts a trace message, returning the sentry that brackets it.
    ///
    /// With the `trace` feature enabled this behaves like
    /// [`log`](Self::log); the build with the feature disabled replaces
    /// this method with one returning a [`NoopSentry`] shell.
    #[cfg(feature = "trace")]
    pub fn trace(&self, level: TraceLevel) -> MessageSentry<'_> {
        self.sentry(level.into())
    }

    /// Starts a trace message.
    ///
    /// This build has the `trace` feature disabled: the returned
    /// [`NoopSentry`] holds no references, performs no target calls, and
    /// never formats appended values.
    #[cfg(not(feature = "trace"))]
    #[allow(clippy::unused_self, clippy::missing_const_for_fn)]
    pub fn trace(&self, _level: TraceLevel) -> NoopSentry {
        NoopSentry
    }

    fn sentry(&self, severity: Severity) -> MessageSentry<'_> {
        let target = {
            let state = self.state.read();
            (severity >= state.threshold).then(|| Arc::clone(&state.target))
        };
        MessageSentry::begin(self, target, severity)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold())
            .finish_non_exhaustive()
    }
}
