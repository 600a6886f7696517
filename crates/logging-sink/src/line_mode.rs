//! crates/logging-sink/src/line_mode.rs
//! Newline handling for line-oriented targets.

/// Controls whether a stream target terminates each message with a
/// newline when the message ends.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each message (the default, so
    /// every message lands on its own line).
    #[default]
    WithNewline,
    /// Emit the message exactly as appended; callers terminate lines
    /// themselves, for example with [`logging::Endl`].
    WithoutNewline,
}

impl LineMode {
    pub(crate) const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}
