//! Console diagnostics
//!
//! wasm32: routed to the browser console through web-sys.
//! Native: written to stderr so tests and native hosts keep the output.
//!
//! Usage:
//! ```rust
//! use grainfall_engine::console_log;
//!
//! let width = 64;
//! console_log!("grid ready: {} columns", width);
//! ```

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

/// Emit one line at `level`. Prefer the `console_*!` macros.
pub fn emit(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let line = wasm_bindgen::JsValue::from_str(&format!("[grainfall {}] {}", level.tag(), message));
        match level {
            Level::Info => web_sys::console::log_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Error => web_sys::console::error_1(&line),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[grainfall {}] {}", level.tag(), message);
    }
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::console::emit(
            $crate::core::utils::console::Level::Info,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::console::emit(
            $crate::core::utils::console::Level::Warn,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::utils::console::emit(
            $crate::core::utils::console::Level::Error,
            &format!($($arg)*),
        )
    };
}
