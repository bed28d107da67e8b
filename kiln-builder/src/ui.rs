//! Concrete `Ui` implementations for the builder
//!
//! These connect step output to wherever the embedder wants it:
//! `BufferedUi` collects entries for later draining (log streaming, test
//! assertions), `TracingUi` forwards to the tracing subscriber for
//! embedders with no interactive output.

use std::sync::{Arc, Mutex};

use kiln_core::domain::log::{LogEntry, LogLevel, Ui};

/// Buffered messaging sink
///
/// Appends every message as a `LogEntry` to a shared buffer. `say` and
/// `message` land at info level, `error` at error level.
pub struct BufferedUi {
    buffer: Arc<Mutex<Vec<LogEntry>>>,
}

impl BufferedUi {
    /// Creates a buffered sink with its own empty buffer
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a buffered sink writing into an existing shared buffer
    pub fn with_buffer(buffer: Arc<Mutex<Vec<LogEntry>>>) -> Self {
        Self { buffer }
    }

    /// Drains all buffered entries
    pub fn drain(&self) -> Vec<LogEntry> {
        let mut buffer = self.buffer.lock().unwrap();
        buffer.drain(..).collect()
    }

    /// Snapshot of buffered entries without draining
    pub fn entries(&self) -> Vec<LogEntry> {
        self.buffer.lock().unwrap().clone()
    }

    fn push(&self, level: LogLevel, message: &str) {
        let entry = LogEntry {
            timestamp: chrono::Utc::now(),
            level,
            message: message.to_string(),
        };
        self.buffer.lock().unwrap().push(entry);
    }
}

impl Default for BufferedUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for BufferedUi {
    fn say(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn message(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

/// Messaging sink that forwards to `tracing`
pub struct TracingUi;

impl Ui for TracingUi {
    fn say(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn message(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
