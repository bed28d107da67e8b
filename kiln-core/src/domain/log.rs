//! Build log domain types and the user-facing messaging contract

use serde::{Deserialize, Serialize};

/// A log entry from build execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// User-facing messaging sink for build output
///
/// Steps report progress through this trait rather than printing directly,
/// so the embedder decides where build output lands (terminal, buffer, log
/// stream). Three severities:
/// - `say`: progress ("Creating a temporary firewall rule...")
/// - `message`: detail or confirmation ("Firewall rule has been created!")
/// - `error`: failure detail, including manual-remediation instructions for
///   cleanup failures
///
/// No structured output format is required; messages are plain text.
pub trait Ui: Send + Sync {
    fn say(&self, message: &str);
    fn message(&self, message: &str);
    fn error(&self, message: &str);
}
