use wasm_bindgen::JsValue;

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Browser console sink for the domain logger.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let line = format!(
            "[{}] {} {}: {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );

        match entry.level {
            LogLevel::Error => web_sys::console::error_1(&JsValue::from_str(&line)),
            LogLevel::Warn => web_sys::console::warn_1(&JsValue::from_str(&line)),
            _ => web_sys::console::log_1(&JsValue::from_str(&line)),
        }
    }
}

/// Wall clock through the JS Date API.
pub struct BrowserTimeProvider;

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}",
            date.get_utc_hours(),
            date.get_utc_minutes(),
            date.get_utc_seconds()
        )
    }
}
