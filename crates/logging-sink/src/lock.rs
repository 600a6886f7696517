//! crates/logging-sink/src/lock.rs
//! Lock capability shared by the reference targets.
//!
//! A target acquires its lock in `start_message` and releases it in
//! `end_message`, so the lock must be holdable across method calls
//! rather than scoped to a single guard. [`NullLock`] is the default for
//! single-threaded use; [`MutexLock`] provides real mutual exclusion.

use parking_lot::lock_api::RawMutex as _;
use parking_lot::RawMutex;

/// Blocking lock protecting one full message span on a shared target.
pub trait MessageLock: Send + Sync {
    /// Acquires the lock, blocking until it is free.
    fn acquire(&self);

    /// Releases the lock acquired by the matching
    /// [`acquire`](Self::acquire).
    fn release(&self);
}

/// Lock implementation doing no locking at all.
///
/// Use this where only a single thread emits through the target and the
/// cost of a real mutex is unwanted. Messages from multiple threads may
/// interleave at value granularity under this lock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullLock;

impl MessageLock for NullLock {
    fn acquire(&self) {}

    fn release(&self) {}
}

/// Mutual-exclusion lock over a raw parking_lot mutex.
///
/// A raw mutex is required here: the lock is taken in `start_message`
/// and given back in `end_message`, and no scoped guard can span that
/// call boundary.
pub struct MutexLock {
    raw: RawMutex,
}

impl std::fmt::Debug for MutexLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutexLock").finish_non_exhaustive()
    }
}

impl MutexLock {
    /// Creates an unlocked lock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: <RawMutex as parking_lot::lock_api::RawMutex>::INIT,
        }
    }
}

impl Default for MutexLock {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLock for MutexLock {
    fn acquire(&self) {
        self.raw.lock();
    }

    fn release(&self) {
        // SAFETY: the target protocol only calls `release` from an
        // `end_message` whose matching `start_message` acquired this
        // lock, on the thread that is synchronously emitting the
        // message, so the mutex is held here.
        #[allow(unsafe_code)]
        unsafe {
            self.raw.unlock();
        }
    }
}
