//! Route `tracing` output from the core crate to the browser console.

use std::io;
use std::str::FromStr;

use tracing::Level;
use wasm_bindgen::prelude::*;

/// Enable diagnostic logging to the browser console.
///
/// # Arguments
///
/// * `level` - One of `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`
///
/// # Errors
///
/// Returns an error for an unknown level or if logging was already enabled.
///
/// # Example (TypeScript)
///
/// ```typescript
/// enable_logging("debug");
/// const size = select_optimal_size(sizes, 90, 1080, 2400);
/// // console: DEBUG viewfinder_core::select: selected size ...
/// ```
#[wasm_bindgen]
pub fn enable_logging(level: &str) -> Result<(), JsValue> {
    let level = parse_level(level).map_err(|e| JsValue::from_str(&e))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(ConsoleWriter::default)
        .without_time()
        .try_init()
        .map_err(|e| JsValue::from_str(&format!("Failed to enable logging: {}", e)))
}

fn parse_level(level: &str) -> Result<Level, String> {
    Level::from_str(level.trim()).map_err(|_| format!("Unknown log level: {:?}", level))
}

/// Buffers one formatted event and hands it to `console.log` on flush.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn take_message(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let message = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        Some(message)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(message) = self.take_message() {
            web_sys::console::log_1(&JsValue::from_str(&message));
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_enable_logging_rejects_unknown_level() {
        assert!(enable_logging("loud").is_err());
    }

    #[wasm_bindgen_test]
    fn test_enable_logging_once() {
        // A second global subscriber is refused
        let _ = enable_logging("debug");
        assert!(enable_logging("debug").is_err());
    }
}
