#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the core of a hierarchical, level-filtered logging
//! system: a tree of named [`Logger`] nodes that share and override
//! severity thresholds, stream formatted messages through pluggable
//! [`Target`] sinks, and allow the lowest-severity statements to be
//! removed entirely at compile time in release builds.
//!
//! # Design
//!
//! A log statement is bracketed by a [`MessageSentry`]: the logger
//! compares the statement's severity against its threshold, constructs a
//! sentry bound to the shared target, the caller chains
//! [`put`](MessageSentry::put) calls into it, and dropping the sentry
//! ends the message. Targets see each message as a balanced
//! `start_message` / `put`* / `end_message` sequence and hold their lock
//! for the whole span, so concurrent messages never interleave within a
//! message.
//!
//! Trace statements ([`Logger::trace`]) go through a sentry kind chosen
//! at compile time by the `trace` cargo feature: with the feature off,
//! they produce a [`NoopSentry`] that holds no references and performs
//! no formatting, so release builds pay nothing for them.
//!
//! # Invariants
//!
//! - A message is emitted iff its severity is `>=` the logger's
//!   threshold (the threshold is inclusive).
//! - `end_message` is called exactly once per `start_message`, on every
//!   exit path, including zero appends and unwinds.
//! - A child logger is created at most once per name and snapshots the
//!   parent's target and threshold at creation time only.
//! - [`Logger::set_level`] and [`Logger::set_target`] overwrite the
//!   configuration of every existing descendant.
//!
//! # Errors
//!
//! Tree configuration errors ([`LoggerError`]) are programmer errors
//! surfaced synchronously by the failing call. The sentry/target layer
//! has no error channel; fallible sinks report through their own
//! conventions.
//!
//! # Examples
//!
//! ```
//! use std::fmt;
//! use std::sync::{Arc, Mutex};
//! use logging::{LogLevel, Logger, Severity, Target, TargetHandle};
//!
//! #[derive(Default)]
//! struct Collect(Mutex<Vec<String>>);
//!
//! impl Target for Collect {
//!     fn start_message(&self, source: &Logger, severity: Severity) {
//!         self.0.lock().unwrap().push(format!("{}:{severity}:", source.canonical_name()));
//!     }
//!     fn put(&self, _source: &Logger, value: &dyn fmt::Display) {
//!         self.0.lock().unwrap().last_mut().unwrap().push_str(&value.to_string());
//!     }
//!     fn end_message(&self, _source: &Logger) {}
//! }
//!
//! let target = Arc::new(Collect::default());
//! let root = Logger::root(Arc::clone(&target) as TargetHandle);
//! let db = root.child("db")?;
//! db.set_level(Severity::Warning);
//!
//! db.log(LogLevel::Info).put("not emitted");
//! db.log(LogLevel::Error).put("pool exhausted after ").put(3).put(" retries");
//!
//! let messages = target.0.lock().unwrap();
//! assert_eq!(messages.as_slice(), ["db:ERROR:pool exhausted after 3 retries"]);
//! # Ok::<(), logging::LoggerError>(())
//! ```
//!
//! # See also
//!
//! - The `logging-sink` crate for the reference stream, syslog, and
//!   multi-target sinks and the lock implementations they share.

mod config;
mod error;
mod logger;
mod macros;
mod sentry;
mod severity;
mod target;

pub use config::LogConfig;
pub use error::LoggerError;
pub use logger::{CANONICAL_SEPARATOR, Logger};
pub use sentry::{MessageSentry, NoopSentry};
pub use severity::{LogLevel, Severity, TraceLevel};
pub use target::{Endl, Target, TargetHandle};
