//! crates/logging-sink/src/multi.rs
//! Pseudo-target dispatching to one of several pre-wired sub-targets.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

use logging::{Logger, Severity, Target, TargetHandle};

/// Errors raised while configuring a [`MultiTarget`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MultiTargetError {
    /// Construction was attempted with no sub-targets, leaving nothing
    /// to dispatch to.
    #[error("a multi-target needs at least one sub-target")]
    NoTargets,

    /// Activation was attempted with an index outside the configured
    /// sub-target list.
    #[error("target index {index} out of range; {count} sub-targets configured")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of configured sub-targets.
        count: usize,
    },
}

/// Target wrapping an ordered list of sub-targets, exactly one of which
/// is active at a time.
///
/// Every [`Target`] operation is forwarded verbatim to the active
/// sub-target, so a logger tree's output can be redirected between
/// pre-wired sinks (console, file, syslog) without rebuilding the tree.
/// [`set_active`](Self::set_active) takes effect per forwarded call;
/// switch between messages, not while one is in flight, to keep a
/// message's start/end bracket on a single sub-target.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{LogLevel, Logger, TargetHandle};
/// use logging_sink::{MultiTarget, StreamTarget};
///
/// let targets: Vec<TargetHandle> = vec![
///     Arc::new(StreamTarget::new(std::io::stdout())),
///     Arc::new(StreamTarget::new(std::io::stderr())),
/// ];
/// let multi = Arc::new(MultiTarget::new(targets)?);
/// let root = Logger::root(Arc::clone(&multi) as TargetHandle);
///
/// root.log(LogLevel::Info).put("to stdout");
/// multi.set_active(1)?;
/// root.log(LogLevel::Info).put("to stderr");
///
/// assert!(multi.set_active(2).is_err());
/// # Ok::<(), logging_sink::MultiTargetError>(())
/// ```
pub struct MultiTarget {
    targets: Vec<TargetHandle>,
    active: AtomicUsize,
}

impl MultiTarget {
    /// Creates a dispatcher over the given sub-targets with index 0
    /// active.
    ///
    /// # Errors
    ///
    /// Returns [`MultiTargetError::NoTargets`] when the list is empty.
    pub fn new(targets: impl IntoIterator<Item = TargetHandle>) -> Result<Self, MultiTargetError> {
        let targets: Vec<TargetHandle> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(MultiTargetError::NoTargets);
        }
        Ok(Self {
            targets,
            active: AtomicUsize::new(0),
        })
    }

    /// Selects the sub-target that receives subsequent operations.
    ///
    /// # Errors
    ///
    /// Returns [`MultiTargetError::IndexOutOfRange`] when `index` does
    /// not name a configured sub-target; the active selection is left
    /// unchanged.
    pub fn set_active(&self, index: usize) -> Result<(), MultiTargetError> {
        if index >= self.targets.len() {
            return Err(MultiTargetError::IndexOutOfRange {
                index,
                count: self.targets.len(),
            });
        }
        self.active.store(index, Ordering::Release);
        Ok(())
    }

    /// Returns the index of the active sub-target.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Returns the number of configured sub-targets.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    fn active_target(&self) -> &TargetHandle {
        // `active` only ever holds an index validated by `set_active`
        // (or the initial 0, covered by the non-empty construction).
        &self.targets[self.active_index()]
    }
}

impl fmt::Debug for MultiTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiTarget")
            .field("target_count", &self.target_count())
            .field("active_index", &self.active_index())
            .finish_non_exhaustive()
    }
}

impl Target for MultiTarget {
    fn start_message(&self, source: &Logger, severity: Severity) {
        self.active_target().start_message(source, severity);
    }

    fn put(&self, source: &Logger, value: &dyn fmt::Display) {
        self.active_target().put(source, value);
    }

    fn end_message(&self, source: &Logger) {
        self.active_target().end_message(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct CountingTarget {
        messages: AtomicUsize,
    }

    impl Target for CountingTarget {
        fn start_message(&self, _source: &Logger, _severity: Severity) {}
        fn put(&self, _source: &Logger, _value: &dyn fmt::Display) {}
        fn end_message(&self, _source: &Logger) {
            self.messages.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn pair() -> (Arc<CountingTarget>, Arc<CountingTarget>, MultiTarget) {
        let first = Arc::new(CountingTarget::default());
        let second = Arc::new(CountingTarget::default());
        let multi = MultiTarget::new([
            Arc::clone(&first) as TargetHandle,
            Arc::clone(&second) as TargetHandle,
        ])
        .expect("two targets");
        (first, second, multi)
    }

    #[test]
    fn empty_target_list_is_rejected() {
        assert_eq!(
            MultiTarget::new(Vec::<TargetHandle>::new()).err(),
            Some(MultiTargetError::NoTargets)
        );
    }

    #[test]
    fn first_target_is_active_initially() {
        let (_, _, multi) = pair();
        assert_eq!(multi.active_index(), 0);
        assert_eq!(multi.target_count(), 2);
    }

    #[test]
    fn out_of_range_activation_fails_and_keeps_the_selection() {
        let (_, _, multi) = pair();
        assert_eq!(
            multi.set_active(2),
            Err(MultiTargetError::IndexOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(multi.active_index(), 0);
    }

    #[test]
    fn operations_route_to_the_active_sub_target_only() {
        let (first, second, multi) = pair();
        let multi = Arc::new(multi);
        let root = Logger::root(Arc::clone(&multi) as TargetHandle);

        root.log(logging::LogLevel::Info).put("a");
        assert_eq!(first.messages.load(Ordering::SeqCst), 1);
        assert_eq!(second.messages.load(Ordering::SeqCst), 0);

        multi.set_active(1).expect("valid index");
        root.log(logging::LogLevel::Info).put("b");
        assert_eq!(first.messages.load(Ordering::SeqCst), 1);
        assert_eq!(second.messages.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn error_messages_name_the_offending_index() {
        let error = MultiTargetError::IndexOutOfRange { index: 7, count: 3 };
        assert_eq!(
            error.to_string(),
            "target index 7 out of range; 3 sub-targets configured"
        );
    }
}
