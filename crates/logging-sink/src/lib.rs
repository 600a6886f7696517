#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the reference [`Target`](logging::Target)
//! implementations for the `logging` logger tree: a [`StreamTarget`]
//! writing formatted messages to any [`std::io::Write`] stream, a
//! [`SyslogTarget`] submitting each message as one syslog(3) record
//! (unix only), and a [`MultiTarget`] switching a logger's output
//! between several pre-wired sinks at runtime. The lock capability the
//! targets share ([`MessageLock`], with [`NullLock`] and [`MutexLock`])
//! lives here too.
//!
//! # Design
//!
//! Every target sees a message as the balanced call sequence
//! `start_message` / `put`* / `end_message` driven by a message sentry.
//! A target acquires its message lock in `start_message` and releases it
//! in `end_message`, so a whole message is atomic with respect to other
//! threads sharing the target; under [`NullLock`] that span costs
//! nothing and multi-threaded callers accept value-level interleaving.
//!
//! # Errors
//!
//! Configuration errors ([`MultiTargetError`]) surface synchronously at
//! the failing call. Sink I/O failures have no reporting channel in the
//! reference targets and are discarded.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{LogLevel, Logger, Severity, TargetHandle};
//! use logging_sink::StreamTarget;
//!
//! let target = Arc::new(StreamTarget::synchronized(std::io::stderr()));
//! let root = Logger::named_root(target as TargetHandle, "app");
//! root.set_level(Severity::Warning);
//!
//! root.log(LogLevel::Warning).put("disk usage at ").put(97).put("%");
//! ```
//!
//! # Features
//!
//! - `tracing` — enables `TracingTarget`, which re-emits completed
//!   messages as `tracing` events.

mod line_mode;
mod lock;
mod multi;
mod stream;
#[cfg(unix)]
mod syslog;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use line_mode::LineMode;
pub use lock::{MessageLock, MutexLock, NullLock};
pub use multi::{MultiTarget, MultiTargetError};
pub use stream::{StreamTarget, TimestampMode};
#[cfg(unix)]
pub use syslog::{SyslogFacility, SyslogTarget};
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingTarget;
