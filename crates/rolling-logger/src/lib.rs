//! Rolling Console Logger
//!
//! `log` backend for browser applications. Every record is written to the
//! devtools console (stderr on native targets) and the most recent lines are
//! kept in a bounded buffer so the UI can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Console logger with a circular buffer of formatted lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::new()),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut buf) = self.buffer.lock() else {
            return;
        };
        while buf.len() >= self.capacity {
            buf.pop_front();
        }
        buf.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&time, record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Format a single log line: `12:00:00.000 [INFO] target: message`
pub fn format_line(time: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} [{}] {}: {}", time, level, target, message)
}

/// Install the global logger. Calling it twice returns the error from `log`.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Recent lines of the global logger (empty before `init`)
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}
