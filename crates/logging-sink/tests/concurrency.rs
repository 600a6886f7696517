//! Integration tests for message atomicity under concurrent writers.
//!
//! With a real message lock, a target shared by several threads must
//! emit every message as one contiguous block: fragments of two
//! messages never interleave, because the lock is held from
//! `start_message` to `end_message`.

use std::io;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use logging::{LogLevel, Logger, TargetHandle};
use logging_sink::StreamTarget;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf-8 output")
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const WRITERS: usize = 4;
const MESSAGES_PER_WRITER: usize = 50;
const VALUES_PER_MESSAGE: usize = 8;

/// Messages from concurrently logging threads come out as contiguous
/// lines, each built entirely from one thread's fragments.
#[test]
fn locked_target_keeps_messages_contiguous() {
    let buf = SharedBuf::default();
    let target: TargetHandle = Arc::new(StreamTarget::synchronized(buf.clone()));
    let root = Logger::root(target);

    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let root = Arc::clone(&root);
            scope.spawn(move || {
                let tag = char::from(b'a' + u8::try_from(writer).expect("small id"));
                for _ in 0..MESSAGES_PER_WRITER {
                    let mut sentry = root.log(LogLevel::Info);
                    for _ in 0..VALUES_PER_MESSAGE {
                        sentry = sentry.put(tag);
                        // Invite the scheduler to interleave mid-message.
                        thread::yield_now();
                    }
                }
            });
        }
    });

    let output = buf.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), WRITERS * MESSAGES_PER_WRITER);

    for line in lines {
        let body = line.strip_prefix("[INFO] ").expect("level prefix intact");
        assert_eq!(body.len(), VALUES_PER_MESSAGE, "fragmented line: {line:?}");
        let first = body.chars().next().expect("non-empty body");
        assert!(
            body.chars().all(|c| c == first),
            "interleaved fragments: {line:?}"
        );
    }
}

/// Distinct loggers sharing one locked target still serialize per
/// message.
#[test]
fn sibling_loggers_share_the_lock() {
    let buf = SharedBuf::default();
    let target: TargetHandle = Arc::new(StreamTarget::synchronized(buf.clone()));
    let root = Logger::root(target);
    let left = root.child("left").expect("child");
    let right = root.child("right").expect("child");

    thread::scope(|scope| {
        for logger in [left, right] {
            scope.spawn(move || {
                for round in 0..MESSAGES_PER_WRITER {
                    logger
                        .log(LogLevel::Info)
                        .put("round ")
                        .put(round)
                        .put(" from ")
                        .put(logger.name());
                    thread::yield_now();
                }
            });
        }
    });

    let output = buf.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2 * MESSAGES_PER_WRITER);

    for line in &lines {
        let valid = (line.starts_with("(left) [INFO] round ") && line.ends_with(" from left"))
            || (line.starts_with("(right) [INFO] round ") && line.ends_with(" from right"));
        assert!(valid, "malformed line: {line:?}");
    }
}
