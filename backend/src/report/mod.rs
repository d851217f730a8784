//! Leveled diagnostics for the command line.
//!
//! Row rejections and the final summary are rendered here, never inside the
//! transcoder. Output goes to stderr so stdout stays free for documents.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::transform::{ConvertSummary, Transcoded};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, three spaces per level.
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// The line as printed.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "✅",
            LogLevel::Warning => "⚠️ ",
            LogLevel::Error => "❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global reporter, writing to stderr.
pub static REPORTER: Lazy<Reporter> = Lazy::new(|| Reporter::new(Box::new(io::stderr())));

/// Writes rendered log entries to a sink.
pub struct Reporter {
    sink: Mutex<Box<dyn Write + Send>>,
    quiet: AtomicBool,
}

impl Reporter {
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
            quiet: AtomicBool::new(false),
        }
    }

    /// When quiet, only errors are written.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    pub fn log(&self, entry: LogEntry) {
        if self.quiet.load(Ordering::Relaxed) && entry.level != LogLevel::Error {
            return;
        }
        // A broken stderr is not worth failing a conversion over.
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", entry.render());
        }
    }

    /// One warning per rejected row, then a note about skipped rows.
    pub fn transcoded(&self, result: &Transcoded) {
        for rejected in &result.rejected {
            self.log(LogEntry::warning(rejected.diagnostic()));
        }
        if result.skipped > 0 {
            self.log(LogEntry::info(format!(
                "Skipped {} blank or repeated-header rows",
                result.skipped
            )));
        }
    }

    /// Final confirmation for a file conversion.
    pub fn summary(&self, summary: &ConvertSummary) {
        self.log(LogEntry::success(summary.message()));
        if !summary.transcoded.is_clean() {
            self.log(
                LogEntry::warning(format!("{} rows rejected", summary.transcoded.rejected.len()))
                    .with_indent(1),
            );
        }
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    REPORTER.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    REPORTER.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    REPORTER.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    REPORTER.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    REPORTER.log(LogEntry::info(msg).with_indent(indent));
}
