//! Per-request logging sink

use std::fmt;
use std::sync::Mutex;

/// Severity of a logged import message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Receives diagnostics for one import request.
///
/// The editor shows these to the user next to the created assets, so they are
/// kept separate from the process-wide `tracing` output.
pub trait ImportLogger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Forwards import messages to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl ImportLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "ingot", "{}", message),
            LogLevel::Info => tracing::info!(target: "ingot", "{}", message),
            LogLevel::Warning => tracing::warn!(target: "ingot", "{}", message),
            LogLevel::Error => tracing::error!(target: "ingot", "{}", message),
        }
    }
}

/// Collects messages in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.lock().clone()
    }

    /// Messages logged at exactly `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// True if a message at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.lock()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    pub fn has_errors(&self) -> bool {
        self.lock().iter().any(|(l, _)| *l == LogLevel::Error)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(LogLevel, String)>> {
        // A poisoned log is still readable
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ImportLogger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        tracing::trace!(target: "ingot", %level, "{}", message);
        self.lock().push((level, message.to_string()));
    }
}
