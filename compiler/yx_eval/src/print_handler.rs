//! Output sinks for the `display` builtin.
//!
//! `display(expr)` is the only I/O the evaluator performs. Where the line
//! goes is decided by the session's print handler:
//! - `Stdout`: the process's standard output (default)
//! - `Buffer`: captured in memory for hosts and tests
//! - `Silent`: discarded

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use yx_ir::format_number;

/// Prefix written before every displayed value.
pub const DISPLAY_PREFIX: &str = "= ";

/// Format the line `display` writes for `value`, without the newline.
pub fn display_line(value: f64) -> String {
    format!("{DISPLAY_PREFIX}{}", format_number(value))
}

/// Writes lines to the process's standard output.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Write one newline-terminated line.
    ///
    /// A closed or failing stdout does not abort evaluation; the failure is
    /// logged and the line is dropped.
    pub fn println(&self, msg: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(error) = writeln!(stdout, "{msg}") {
            tracing::warn!(%error, "failed to write display output");
        }
    }
}

/// Collects `display` lines in memory so a host can read them back.
#[derive(Default)]
pub struct BufferPrintHandler {
    lines: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `msg` as one newline-terminated line.
    pub fn println(&self, msg: &str) {
        let mut lines = self.lines.lock();
        lines.push_str(msg);
        lines.push('\n');
    }

    /// All lines recorded since creation or the last `clear`.
    pub fn get_output(&self) -> String {
        self.lines.lock().clone()
    }

    /// Forget the recorded lines.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

/// The configured output sink.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    /// Write one line.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Write the `display` line for `value`.
    pub fn display(&self, value: f64) {
        if !matches!(self, Self::Silent) {
            self.println(&display_line(value));
        }
    }

    /// Captured output. Empty for sinks that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Drop captured output. No-op for sinks that do not capture.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between the environment and the host.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// A capturing handler; keep a clone to read the output back.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
