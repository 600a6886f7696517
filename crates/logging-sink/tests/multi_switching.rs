//! Integration tests for runtime target switching.
//!
//! A `MultiTarget` lets one logger tree swap between pre-wired sinks
//! without being rebuilt; activation is index-checked and routing is
//! exclusive to the active sub-target.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use logging::{LogLevel, Logger, TargetHandle};
use logging_sink::{MultiTarget, MultiTargetError, StreamTarget};

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

fn wired_multi() -> (SharedBuf, SharedBuf, Arc<MultiTarget>, Arc<Logger>) {
    let first = SharedBuf::default();
    let second = SharedBuf::default();
    let multi = Arc::new(
        MultiTarget::new([
            Arc::new(StreamTarget::new(first.clone())) as TargetHandle,
            Arc::new(StreamTarget::new(second.clone())) as TargetHandle,
        ])
        .expect("two sub-targets"),
    );
    let root = Logger::root(Arc::clone(&multi) as TargetHandle);
    (first, second, multi, root)
}

/// Messages go only to the active sub-target, before and after a switch.
#[test]
fn switching_redirects_subsequent_messages() {
    let (first, second, multi, root) = wired_multi();

    root.log(LogLevel::Info).put("to the console");
    multi.set_active(1).expect("index 1 exists");
    root.log(LogLevel::Info).put("to the file");

    assert_eq!(first.contents(), "[INFO] to the console\n");
    assert_eq!(second.contents(), "[INFO] to the file\n");
}

/// Switching back reuses the original sub-target.
#[test]
fn switching_back_restores_the_original_route() {
    let (first, second, multi, root) = wired_multi();

    multi.set_active(1).expect("index 1 exists");
    root.log(LogLevel::Warning).put("away");
    multi.set_active(0).expect("index 0 exists");
    root.log(LogLevel::Warning).put("back");

    assert_eq!(first.contents(), "[WARNING] back\n");
    assert_eq!(second.contents(), "[WARNING] away\n");
}

/// Activation with an out-of-range index fails and routes nothing.
#[test]
fn out_of_range_activation_fails_without_side_effects() {
    let (first, second, multi, root) = wired_multi();

    assert_eq!(
        multi.set_active(2),
        Err(MultiTargetError::IndexOutOfRange { index: 2, count: 2 })
    );
    assert_eq!(multi.active_index(), 0);

    root.log(LogLevel::Error).put("still routed to index 0");

    assert_eq!(first.contents(), "[ERROR] still routed to index 0\n");
    assert!(second.contents().is_empty());
}

/// The whole logger tree follows the switch, since the tree shares the
/// dispatcher as its one target.
#[test]
fn subtree_follows_the_dispatcher() {
    let (first, second, multi, root) = wired_multi();
    let child = root.child("worker").expect("child");

    multi.set_active(1).expect("index 1 exists");
    child.log(LogLevel::Info).put("rerouted");

    assert!(first.contents().is_empty());
    assert_eq!(second.contents(), "(worker) [INFO] rerouted\n");
}
