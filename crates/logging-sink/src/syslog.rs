//! crates/logging-sink/src/syslog.rs
//! Reference target emitting each message as one syslog(3) call.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling
//! in a dedicated syslog crate, keeping the dependency graph minimal.
//! Values appended to a message are buffered in memory and submitted as
//! a single syslog record when the message ends.

#![allow(unsafe_code)]

use std::collections::HashMap;
use std::ffi::CString;
use std::fmt::{self, Write as _};

use parking_lot::Mutex;

use logging::{Logger, Severity, Target};

use crate::lock::{MessageLock, MutexLock, NullLock};

/// Syslog facility codes matching the POSIX syslog(3) constants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// User-level messages (LOG_USER), the default.
    User = libc::LOG_USER,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Security/authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Clock daemon (LOG_CRON).
    Cron = libc::LOG_CRON,
    /// Line printer subsystem (LOG_LPR).
    Lpr = libc::LOG_LPR,
    /// Mail system (LOG_MAIL).
    Mail = libc::LOG_MAIL,
    /// Network news subsystem (LOG_NEWS).
    News = libc::LOG_NEWS,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = libc::LOG_SYSLOG,
    /// UUCP subsystem (LOG_UUCP).
    Uucp = libc::LOG_UUCP,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    /// Parses a facility name into the corresponding constant.
    ///
    /// Names are case-insensitive. Returns `None` for unrecognised
    /// names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "auth" => Some(Self::Auth),
            "cron" => Some(Self::Cron),
            "lpr" => Some(Self::Lpr),
            "mail" => Some(Self::Mail),
            "news" => Some(Self::News),
            "syslog" => Some(Self::Syslog),
            "uucp" => Some(Self::Uucp),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    /// Returns the lowercase facility name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Cron => "cron",
            Self::Lpr => "lpr",
            Self::Mail => "mail",
            Self::News => "news",
            Self::Syslog => "syslog",
            Self::Uucp => "uucp",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl Default for SyslogFacility {
    fn default() -> Self {
        Self::User
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ident used when a canonical logger name cannot become a C string.
const FALLBACK_IDENT: &str = "logtree";

/// Maps a message severity to the syslog priority it is submitted with.
const fn priority_for(severity: Severity) -> libc::c_int {
    match severity {
        Severity::Trace | Severity::Debug => libc::LOG_DEBUG,
        Severity::Info => libc::LOG_INFO,
        Severity::Warning => libc::LOG_WARNING,
        Severity::Error => libc::LOG_ERR,
        Severity::Fatal => libc::LOG_EMERG,
    }
}

/// Per-message scratch state, guarded as one unit.
struct SyslogState {
    buffer: String,
    severity: Severity,
    // Cached openlog idents, keyed by logger identity. Logger instances
    // are Arc-stable, so the address is a usable key, and the CString
    // heap allocation stays put for the life of the cache entry (the
    // ident pointer must stay valid from openlog until the syslog call).
    idents: HashMap<usize, CString>,
}

/// Target routing each message to syslog(3).
///
/// `start_message` opens the log handle under the source logger's
/// canonical name, `put` values accumulate in a scratch buffer prefixed
/// with the level name, and `end_message` submits the buffer as a single
/// record with the severity mapped to its platform priority
/// (trace/debug → `LOG_DEBUG`, info → `LOG_INFO`, warning →
/// `LOG_WARNING`, error → `LOG_ERR`, fatal → `LOG_EMERG`).
pub struct SyslogTarget<L = NullLock> {
    option: libc::c_int,
    facility: SyslogFacility,
    lock: L,
    state: Mutex<SyslogState>,
}

impl SyslogTarget<NullLock> {
    /// Creates an unsynchronized target with the `LOG_CONS` option and
    /// the default [`SyslogFacility::User`] facility.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(SyslogFacility::default(), libc::LOG_CONS, NullLock)
    }

    /// Creates an unsynchronized target for the given facility.
    #[must_use]
    pub fn with_facility(facility: SyslogFacility) -> Self {
        Self::with_parts(facility, libc::LOG_CONS, NullLock)
    }
}

impl SyslogTarget<MutexLock> {
    /// Creates a target whose messages are serialized by a real mutex.
    #[must_use]
    pub fn synchronized(facility: SyslogFacility) -> Self {
        Self::with_parts(facility, libc::LOG_CONS, MutexLock::new())
    }
}

impl<L: MessageLock> SyslogTarget<L> {
    /// Creates a target from explicit parts. `option` is passed to
    /// `openlog(3)` verbatim (for example `libc::LOG_CONS |
    /// libc::LOG_PID`).
    pub fn with_parts(facility: SyslogFacility, option: libc::c_int, lock: L) -> Self {
        Self {
            option,
            facility,
            lock,
            state: Mutex::new(SyslogState {
                buffer: String::new(),
                severity: Severity::Info,
                idents: HashMap::new(),
            }),
        }
    }

    /// Returns the configured facility.
    #[must_use]
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }
}

impl Default for SyslogTarget<NullLock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for SyslogTarget<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyslogTarget")
            .field("facility", &self.facility)
            .field("option", &self.option)
            .finish_non_exhaustive()
    }
}

impl<L: MessageLock> Target for SyslogTarget<L> {
    fn start_message(&self, source: &Logger, severity: Severity) {
        self.lock.acquire();
        let mut state = self.state.lock();
        let key = std::ptr::from_ref::<Logger>(source) as usize;
        let ident = state
            .idents
            .entry(key)
            .or_insert_with(|| {
                CString::new(source.canonical_name()).unwrap_or_else(|_| {
                    CString::new(FALLBACK_IDENT).expect("fallback ident contains no NUL bytes")
                })
            })
            .as_ptr();

        // SAFETY: `ident` points into a CString owned by the ident cache,
        // which lives as long as the target; openlog(3) stores the
        // pointer, and the cache never drops entries.
        unsafe {
            libc::openlog(ident, self.option, self.facility as libc::c_int);
        }

        state.severity = severity;
        let _ = write!(state.buffer, "[{severity}] ");
    }

    fn put(&self, _source: &Logger, value: &dyn fmt::Display) {
        let mut state = self.state.lock();
        let _ = write!(state.buffer, "{value}");
    }

    fn end_message(&self, _source: &Logger) {
        {
            let mut state = self.state.lock();
            let priority = priority_for(state.severity);
            if let Ok(record) = CString::new(state.buffer.as_str()) {
                // syslog(3) interprets `%` as a format specifier; passing
                // the record through `%s` avoids format-string injection.
                //
                // SAFETY: both strings are valid NUL-terminated C strings
                // and openlog has been called in start_message.
                unsafe {
                    libc::syslog(priority, c"%s".as_ptr(), record.as_ptr());
                }
            }
            state.buffer.clear();
        }
        self.lock.release();
    }
}

impl<L> Drop for SyslogTarget<L> {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions; it simply closes any
        // descriptor openlog may have opened.
        unsafe {
            libc::closelog();
        }
    }
}
