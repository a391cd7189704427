//! Output channel for `Print` nodes.
//!
//! Output can be directed to different destinations:
//! - stdout (default)
//! - a buffer, for callers and tests that inspect what was printed
//! - nowhere, when output should be discarded

use std::sync::Arc;

use parking_lot::Mutex;

/// Print handler that writes to stdout.
#[derive(Debug, Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Print handler that captures output to a buffer.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create an empty buffer handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print handler dispatch.
#[derive(Debug)]
pub enum PrintHandlerImpl {
    /// Writes to stdout.
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Clear captured output.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_println_appends_newline() {
        let handler = BufferPrintHandler::new();
        handler.println("> 5");
        assert_eq!(handler.get_output(), "> 5\n");
    }

    #[test]
    fn test_buffer_println_accumulates_lines() {
        let handler = BufferPrintHandler::new();
        handler.println("> 1");
        handler.println("> 2");
        assert_eq!(handler.get_output(), "> 1\n> 2\n");
    }

    #[test]
    fn test_buffer_clear() {
        let handler = buffer_handler();
        handler.println("> 1");
        assert!(!handler.get_output().is_empty());
        handler.clear();
        assert!(handler.get_output().is_empty());
    }

    #[test]
    fn test_silent_discards() {
        let handler = silent_handler();
        handler.println("> 1");
        handler.println("> 2");
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn test_stdout_does_not_capture() {
        let handler = stdout_handler();
        assert_eq!(handler.get_output(), "");
        handler.clear();
    }

    #[test]
    fn test_shared_buffer_sees_writes_through_clone() {
        let handler = buffer_handler();
        let other = Arc::clone(&handler);
        other.println("> 7");
        assert_eq!(handler.get_output(), "> 7\n");
    }
}
