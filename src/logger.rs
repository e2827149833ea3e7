//! Log sinks handed explicitly to the writer.
//!
//! The writer never reaches for global state to report skipped steps; it is
//! given a `&dyn Logger`. The console sink forwards to the `log` facade (set
//! up by `main` with `env_logger`), the file sink appends to a timestamped
//! file, and the null and memory sinks exist for tests and quiet runs.

use crate::constants::LOG_FILE_SUFFIX;
use crate::error::Result;
use log::{Level, LevelFilter};
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Receiver for progress and warning messages.
pub trait Logger {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Available log sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerKind {
    Console,
    File,
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Formats a record the way both sinks print it: `[LEVEL] - message`.
pub fn format_record(level: Level, message: &str) -> String {
    format!("[{}] - {}", level_label(level), message)
}

/// Forwards messages to the `log` facade.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warning(&self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Appends messages to `<timestamp>_logfile.txt`.
#[derive(Debug)]
pub struct FileLogger {
    level: LevelFilter,
    path: PathBuf,
    file: Mutex<File>,
}

impl FileLogger {
    /// Opens a fresh log file inside `dir`, named after the current local time.
    pub fn new<P: AsRef<Path>>(dir: P, level: LevelFilter) -> Result<Self> {
        let stamp = chrono::Local::now().format("%Y-%m-%dT%H%M%S%.6f");
        let path = dir.as_ref().join(format!("{stamp}{LOG_FILE_SUFFIX}"));
        Self::with_path(path, level)
    }

    /// Opens (or appends to) the log file at `path`.
    pub fn with_path<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { level, path, file: Mutex::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, level: Level, message: &str) {
        if level > self.level {
            return;
        }
        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(e) = writeln!(file, "{}", format_record(level, message)) {
            log::debug!("Failed to write to {}: {e}", self.path.display());
        }
    }
}

impl Logger for FileLogger {
    fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.write(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Keeps every record in memory so callers can inspect what was reported.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    /// Messages logged at warning level, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.messages_at(Level::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages_at(Level::Error)
    }

    fn messages_at(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.records.borrow_mut().push((Level::Info, message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.records.borrow_mut().push((Level::Warn, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.records.borrow_mut().push((Level::Error, message.to_string()));
    }
}

/// Builds the requested sink.
///
/// `log_dir` is only used by the file sink.
pub fn logger_factory<P: AsRef<Path>>(
    kind: LoggerKind,
    level: LevelFilter,
    log_dir: P,
) -> Result<Box<dyn Logger>> {
    if level == LevelFilter::Off {
        return Ok(Box::new(NullLogger));
    }
    Ok(match kind {
        LoggerKind::Console => Box::new(ConsoleLogger),
        LoggerKind::File => Box::new(FileLogger::new(log_dir, level)?),
    })
}
