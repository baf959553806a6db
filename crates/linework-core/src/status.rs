//! Status publication capability.
//!
//! An explicit sink handed to whatever drives the click-handler loop,
//! replacing a global status broadcaster.

/// Receiver for one-line status prompts.
pub trait StatusSink {
    /// Publish a new status message.
    fn publish(&mut self, message: &str);
}

/// Sink that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStatusSink;

impl StatusSink for NullStatusSink {
    fn publish(&mut self, _message: &str) {}
}

/// Sink retaining the most recent message, for status-bar wiring and tests.
#[derive(Debug, Default, Clone)]
pub struct LatestStatus {
    latest: Option<String>,
}

impl LatestStatus {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published message, if any.
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }
}

impl StatusSink for LatestStatus {
    fn publish(&mut self, message: &str) {
        self.latest = Some(message.to_owned());
    }
}
