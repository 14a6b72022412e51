//! Rolling Logger
//!
//! A `log` backend for browser apps. Each record is written to the browser
//! console (stderr off the browser) and kept in a fixed-size circular buffer
//! so recent lines can be inspected from the UI.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            capacity: capacity.max(1),
            level,
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Format a record as `[HH:MM:SS.mmm] LEVEL target: message`
    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }

    /// Append a line, dropping the oldest once the buffer is full
    pub fn push_line(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
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
        let line = self.format(record);
        emit(record.level(), &format!("[{}] {}", self.app_name, line));
        self.push_line(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(
    app_name: &str,
    capacity: usize,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}
