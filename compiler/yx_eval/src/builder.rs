//! `EnvironmentBuilder` for configuring an evaluation session.

use crate::print_handler::{buffer_handler, silent_handler, stdout_handler, SharedPrintHandler};
use crate::Environment;

/// Where `display` output goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// The process's standard output.
    #[default]
    Stdout,
    /// An in-memory buffer the host reads back.
    Capture,
    /// Nowhere.
    Silent,
}

impl OutputMode {
    /// Create a fresh print handler for this mode.
    pub fn handler(self) -> SharedPrintHandler {
        match self {
            Self::Stdout => stdout_handler(),
            Self::Capture => buffer_handler(),
            Self::Silent => silent_handler(),
        }
    }

    /// Whether `display` output can be read back.
    #[inline]
    pub fn captures(self) -> bool {
        matches!(self, Self::Capture)
    }
}

/// Builder for `Environment` instances.
///
/// ```text
/// let mut env = EnvironmentBuilder::new()
///     .output(OutputMode::Capture)
///     .variable("limit", 10.0)
///     .counters(true)
///     .build();
/// ```
#[derive(Default)]
pub struct EnvironmentBuilder {
    output: OutputMode,
    print_handler: Option<SharedPrintHandler>,
    variables: Vec<(String, f64)>,
    counters: bool,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output mode. Ignored when an explicit handler is given.
    #[must_use]
    pub fn output(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    /// Use `handler` for `display` output, overriding the output mode.
    ///
    /// Pass a clone of a handler the host keeps to read captured output.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Pre-seed a variable. Later seeds of the same name win.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: f64) -> Self {
        self.variables.push((name.into(), value));
        self
    }

    /// Enable call and output counters.
    #[must_use]
    pub fn counters(mut self, enabled: bool) -> Self {
        self.counters = enabled;
        self
    }

    pub fn build(self) -> Environment {
        let handler = self
            .print_handler
            .unwrap_or_else(|| self.output.handler());
        let mut env = Environment::with_print_handler(handler);
        for (name, value) in &self.variables {
            env.set_variable(name, *value);
        }
        if self.counters {
            env.enable_counters();
        }
        env
    }
}
