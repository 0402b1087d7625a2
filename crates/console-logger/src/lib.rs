//! Console Logger
//!
//! A `log` backend that forwards records to the browser devtools console.
//! Each level maps to the matching `console.*` method so the browser's own
//! level filter keeps working.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Logger writing to `window.console`
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Render one console line: `LEVEL target: message`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} {}: {}", level, short_target(target), message)
}

/// Strip the crate path down to the last module name
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_pads_level() {
        let line = format_line(Level::Info, "task_manager_ui::workflow::list", "[TaskList] loaded 3 tasks");
        assert_eq!(line, "INFO  list: [TaskList] loaded 3 tasks");
    }

    #[test]
    fn test_format_line_plain_target() {
        let line = format_line(Level::Error, "app", "boom");
        assert_eq!(line, "ERROR app: boom");
    }
}
