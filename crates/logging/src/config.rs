//! crates/logging/src/config.rs
//! Declarative configuration applied to a logger subtree.

use crate::logger::Logger;
use crate::severity::Severity;

/// Configuration for a logger subtree.
///
/// A config is a plain value so it can be parsed from flags or a
/// configuration file (enable the `serde` feature for derive support)
/// and applied to a tree in one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Minimum severity that will be emitted.
    pub threshold: Severity,
}

impl LogConfig {
    /// Creates a config with the given threshold.
    #[must_use]
    pub const fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Creates a config from a verbosity count (repeated `-v` flags):
    /// `0` → [`Severity::Info`], `1` → [`Severity::Debug`], anything
    /// higher → [`Severity::Trace`].
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self::new(Severity::from_verbose_level(level))
    }

    /// Applies the config to `logger`, overwriting the threshold of the
    /// whole subtree below it (the [`Logger::set_level`] semantics).
    pub fn apply(&self, logger: &Logger) {
        logger.set_level(self.threshold);
    }
}
