//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::debug_1(&line),
            Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Route slider logs to the console. `level` is one of
/// `off|error|warn|info|debug|trace`; defaults to `info`.
///
/// Calling it again only changes the level.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) -> Result<(), JsError> {
    let filter = match level.as_deref() {
        None => LevelFilter::Info,
        Some(s) => s
            .parse::<LevelFilter>()
            .map_err(|_| JsError::new(&format!("unknown log level '{s}'")))?,
    };
    // A second call finds the logger already installed.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
    Ok(())
}
