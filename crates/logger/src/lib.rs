//! Logging infrastructure for klava.
//!
//! A small thread-safe logger with an in-memory ring of recent entries and
//! optional append-to-file output. Because klava is embedded as a library,
//! logging before `init()` is a silent no-op rather than a panic: the host
//! decides whether it wants logs at all.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Maximum number of entries kept in memory.
const MAX_ENTRIES: usize = 256;

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    /// Message level
    pub level: LogLevel,
    /// Message text
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Global logger state
#[derive(Debug)]
struct Logger {
    /// Recent entries, oldest first
    entries: VecDeque<LogEntry>,
    /// Minimum level to record
    min_level: LogLevel,
    /// Append target; in-memory only when unset
    file_path: Option<PathBuf>,
}

impl Logger {
    fn new(file_path: Option<PathBuf>, min_level: LogLevel) -> Self {
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(file, "=== klava session ===");
            }
        }

        Self {
            entries: VecDeque::new(),
            min_level,
            file_path,
        }
    }

    fn add_entry(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();
        self.entries.push_back(LogEntry {
            timestamp: timestamp.clone(),
            level,
            message: message.clone(),
        });
        while self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }

        if let Some(path) = &self.file_path {
            // Recreated on write if the file was deleted
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(file, "[{}] {}: {}", timestamp, level.as_str(), message);
            }
        }
    }
}

/// Global logger instance that persists for the host lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn with_logger(f: impl FnOnce(&mut Logger)) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut logger) = logger.lock() {
            f(&mut logger);
        }
    }
}

/// Initialize the global logger.
///
/// Call once at host startup; subsequent calls are ignored. Until then,
/// every logging function is a no-op.
pub fn init(file_path: Option<PathBuf>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level)));
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    let message = message.into();
    with_logger(|logger| logger.add_entry(LogLevel::Debug, message));
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    let message = message.into();
    with_logger(|logger| logger.add_entry(LogLevel::Info, message));
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    let message = message.into();
    with_logger(|logger| logger.add_entry(LogLevel::Warn, message));
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    let message = message.into();
    with_logger(|logger| logger.add_entry(LogLevel::Error, message));
}

/// Recent log entries, oldest first.
pub fn entries() -> Vec<LogEntry> {
    match LOGGER.get() {
        Some(logger) => match logger.lock() {
            Ok(logger) => logger.entries.iter().cloned().collect(),
            Err(_) => Vec::new(),
        },
        None => Vec::new(),
    }
}
