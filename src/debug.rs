//! Debug logging utilities
//!
//! Writes to `zellij-theme-debug.log` in debug builds once [`init`] has been
//! called. In release builds every call here is a no-op.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::color::Rgb;

/// Debug log file name, relative to the working directory
pub const DEBUG_LOG_FILE: &str = "zellij-theme-debug.log";

static DEBUG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Initialize debug logging (only in debug builds)
#[cfg(debug_assertions)]
pub fn init() {
    let Ok(mut file_guard) = DEBUG_FILE.lock() else {
        return;
    };
    if file_guard.is_none() {
        if let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG_FILE)
        {
            *file_guard = Some(file);
            drop(file_guard);
            log("=== Theme generation started ===");
        }
    }
}

#[cfg(not(debug_assertions))]
pub fn init() {}

/// Log a message to the debug log (only in debug builds)
#[cfg(debug_assertions)]
pub fn log(message: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, message);

    if let Ok(mut file_guard) = DEBUG_FILE.lock() {
        if let Some(ref mut file) = *file_guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

#[cfg(not(debug_assertions))]
pub fn log(_message: &str) {}

/// Log a message with a category prefix
#[cfg(debug_assertions)]
pub fn log_category(category: &str, message: &str) {
    log(&format!("[{}] {}", category, message));
}

#[cfg(not(debug_assertions))]
pub fn log_category(_category: &str, _message: &str) {}

/// Log one resolved component slot
#[cfg(debug_assertions)]
pub fn log_resolve(component: &str, slot: &str, rgb: Rgb) {
    log(&format!("[RESOLVE] {}.{} -> {}", component, slot, rgb));
}

#[cfg(not(debug_assertions))]
pub fn log_resolve(_component: &str, _slot: &str, _rgb: Rgb) {}

/// Log a file the run reads or writes
#[cfg(debug_assertions)]
pub fn log_path(label: &str, path: &Path) {
    log(&format!("[PATH] {} {}", label, path.display()));
}

#[cfg(not(debug_assertions))]
pub fn log_path(_label: &str, _path: &Path) {}

/// Macro for convenient debug logging
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debug::log(&format!($($arg)*))
    };
}
